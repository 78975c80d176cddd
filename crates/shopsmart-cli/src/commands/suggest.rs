use crate::app::AppContext;
use crate::cli::SuggestArgs;
use crate::output::print_json;
use crate::ui::theme::{styled, styles};
use crate::ui::{blank_line, hint, print, OutputRequest};

pub fn handle_suggest(ctx: &AppContext, args: &SuggestArgs) -> anyhow::Result<()> {
    let matcher = ctx.matcher(args.limit)?;
    let suggestions = matcher.suggest(&args.query);

    let (mut store, list) = ctx.open_list()?;
    let ui_ctx = ctx.ui_context(OutputRequest::json(args.json));
    ctx.report_warnings(&mut store, &ui_ctx);

    if ui_ctx.mode.is_json() {
        let entries: Vec<serde_json::Value> = suggestions
            .iter()
            .map(|name| {
                serde_json::json!({
                    "name": name,
                    "on_list": list.find_by_name(name).is_some(),
                })
            })
            .collect();
        return print_json(&serde_json::json!(entries));
    }

    if !ui_ctx.mode.is_pretty() {
        for name in &suggestions {
            println!("{}", name);
        }
        return Ok(());
    }

    if suggestions.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, &format!("No suggestions for '{}'", args.query.trim()));
        }
        return Ok(());
    }

    let bulb = if ui_ctx.unicode { "\u{1F4A1} " } else { "" };
    print(&ui_ctx, &format!("{}{} suggestions", bulb, suggestions.len()));
    for name in &suggestions {
        if list.find_by_name(name).is_some() {
            let note = styled("(on list)", styles::dim(), ui_ctx.color);
            println!("  {} {}", name, note);
        } else {
            println!("  {}", name);
        }
    }
    if let Some(first) = suggestions.iter().find(|name| list.find_by_name(name).is_none()) {
        blank_line(&ui_ctx);
        print(&ui_ctx, &hint(&ui_ctx, &format!("shopsmart add \"{}\"", first)));
    }
    Ok(())
}
