use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use shopsmart_core::VERSION;

/// ShopSmart - a shopping list that lives in your terminal
#[derive(Parser)]
#[command(name = "shopsmart")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the saved list
    #[arg(short, long, global = true, env = "SHOPSMART_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Item name (multiple words are joined with spaces)
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub name: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `quick` command
#[derive(Args)]
pub struct QuickArgs {
    /// One of the quick-add items (omit to list them)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Layout, even when stdout is not a terminal
    #[arg(long, value_name = "FORMAT", value_enum)]
    pub format: Option<ListFormat>,
}

/// Layouts accepted by `list --format`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Checkbox table with headers
    Table,
    /// One `ID [ ] NAME` line per item
    Plain,
}

/// Arguments for commands that target one item
#[derive(Args)]
pub struct ItemArgs {
    /// Item ID (as shown by `shopsmart list`)
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `clear` command
#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `share` command
#[derive(Args)]
pub struct ShareArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `suggest` command
#[derive(Args)]
pub struct SuggestArgs {
    /// Text typed so far
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of suggestions
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `template list`
#[derive(Args)]
pub struct TemplateListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `template load`
#[derive(Args)]
pub struct TemplateLoadArgs {
    /// Template key (essentials, produce, bbq, breakfast, snacks, healthy)
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateSubcommand,
}

#[derive(Subcommand)]
pub enum TemplateSubcommand {
    /// List the available templates
    List(TemplateListArgs),

    /// Replace the list with a template
    Load(TemplateLoadArgs),
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an item to the top of the list
    Add(AddArgs),

    /// Add one of the common staples
    Quick(QuickArgs),

    /// Show the list (unchecked items first)
    #[command(alias = "ls")]
    List(ListArgs),

    /// Check or uncheck an item
    Toggle(ItemArgs),

    /// Remove an item
    #[command(alias = "rm")]
    Delete(ItemArgs),

    /// Remove every checked item
    Clear(ClearArgs),

    /// Print the unchecked items as shareable text
    Share(ShareArgs),

    /// Suggest item names for partial input
    Suggest(SuggestArgs),

    /// Work with list templates
    Template(TemplateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
