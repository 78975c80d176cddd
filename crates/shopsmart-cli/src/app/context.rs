//! Application context for the ShopSmart CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::io::IsTerminal;

use dialoguer::Confirm;
use once_cell::unsync::OnceCell;
use tracing::debug;

use shopsmart_core::storage::FileStore;
use shopsmart_core::{ListStore, Preview, ShoppingList, SuggestionMatcher};

use crate::cli::Cli;
use crate::config::{load_config, resolve_config_path, ShopConfig};
use crate::errors::CliError;
use crate::ui::{badge, print, Badge, OutputRequest, Terminal, UiContext};

use super::resolver::resolve_store_dir;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<ShopConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&ShopConfig> {
        self.config
            .get_or_try_init(|| load_config(&resolve_config_path()?))
    }

    /// Build the UI context for a command's output flags.
    pub fn ui_context(&self, request: OutputRequest) -> UiContext {
        UiContext::new(&Terminal::detect(), request, self.cli.no_color, self.cli.ascii)
    }

    /// Open the list store and load the saved list.
    pub fn open_list(&self) -> anyhow::Result<(ListStore<FileStore>, ShoppingList)> {
        let dir = resolve_store_dir(self.cli.store.as_deref(), self.config()?)?;
        debug!(dir = %dir.display(), "Opening list store");
        let mut store = ListStore::new(FileStore::new(dir));
        let list = store.load();
        Ok((store, list))
    }

    /// Suggestion matcher honoring the configured limit.
    pub fn matcher(&self, limit_override: Option<usize>) -> anyhow::Result<SuggestionMatcher> {
        let matcher = SuggestionMatcher::default();
        let limit = limit_override.or(self.config()?.suggestions.limit);
        Ok(match limit {
            Some(limit) => matcher.with_limit(limit),
            None => matcher,
        })
    }

    /// Print queued storage warnings to stderr.
    pub fn report_warnings(&self, store: &mut ListStore<FileStore>, ui: &UiContext) {
        for warning in store.take_warnings() {
            eprintln!("{}", badge(ui, Badge::Warn, &warning.to_string()));
        }
    }

    /// Ask the user to confirm a previewed operation.
    ///
    /// `--yes` skips the prompt. Without a terminal the prompt cannot be
    /// shown, so `--yes` becomes mandatory.
    pub fn confirm(&self, preview: &Preview, yes: bool, ui: &UiContext) -> anyhow::Result<bool> {
        if yes {
            return Ok(true);
        }
        if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
            return Err(CliError::invalid_input_with_hint(
                format!("{} requires confirmation", preview.title),
                "Hint: Re-run with --yes to confirm without a prompt.",
            )
            .into());
        }
        print(ui, &preview.title);
        Confirm::new()
            .with_prompt(preview.message.clone())
            .default(false)
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
    }
}
