//! ShopSmart CLI - a shopping list that lives in your terminal
//!
//! Thin command-line shell over `shopsmart-core`. Every command loads the
//! saved list, applies one change through `ListStore`, and renders the
//! result in json, plain or pretty form.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod ui;

use clap::Parser;

use app::AppContext;
use cli::{Cli, Commands, TemplateSubcommand};
use ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    let config_level = ctx
        .config()
        .ok()
        .and_then(|config| config.logging.level.clone());
    logging::init(cli.verbose, config_level.as_deref());

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(ui::OutputRequest::default());
        let (code, hint) = errors::classify(&e);
        tracing::debug!(code, error = %e, "Command failed");
        print_error(&ui_ctx, &e.to_string(), hint.as_deref());
        std::process::exit(code);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Add(args)) => commands::items::handle_add(ctx, args),
        Some(Commands::Quick(args)) => commands::items::handle_quick(ctx, args),
        Some(Commands::List(args)) => commands::list::handle_list(ctx, args),
        Some(Commands::Toggle(args)) => commands::items::handle_toggle(ctx, args),
        Some(Commands::Delete(args)) => commands::items::handle_delete(ctx, args),
        Some(Commands::Clear(args)) => commands::clear::handle_clear(ctx, args),
        Some(Commands::Share(args)) => commands::share::handle_share(ctx, args),
        Some(Commands::Suggest(args)) => commands::suggest::handle_suggest(ctx, args),
        Some(Commands::Template(args)) => match &args.command {
            TemplateSubcommand::List(args) => commands::templates::handle_list(ctx, args),
            TemplateSubcommand::Load(args) => commands::templates::handle_load(ctx, args),
        },
        Some(Commands::Completions(args)) => commands::misc::handle_completions(args),
        None => {
            if !cli.quiet {
                print_quickstart();
            }
            Ok(())
        }
    }
}

fn print_quickstart() {
    println!("ShopSmart - a shopping list that lives in your terminal");
    println!();
    println!("Quick start:");
    println!("  shopsmart add Milk              Add an item");
    println!("  shopsmart list                  Show your list");
    println!("  shopsmart toggle <ID>           Check an item off");
    println!("  shopsmart template load bbq     Start from a template");
    println!("  shopsmart share                 Copy-ready list text");
    println!();
    println!("Run `shopsmart --help` for all commands.");
}
