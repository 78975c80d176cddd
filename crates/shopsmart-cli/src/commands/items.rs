//! Single-item commands: add, quick, toggle, delete.

use shopsmart_core::suggest::QUICK_ADD_ITEMS;
use shopsmart_core::{ItemId, ShoppingList};

use crate::app::AppContext;
use crate::cli::{AddArgs, ItemArgs, QuickArgs};
use crate::errors::CliError;
use crate::output::{item_json, print_json};
use crate::ui::format::count_label;
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, hint, print, Badge, OutputMode, OutputRequest, UiContext};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    add_named(ctx, &args.name.join(" "), args.json)
}

pub fn handle_quick(ctx: &AppContext, args: &QuickArgs) -> anyhow::Result<()> {
    let Some(wanted) = args.name.as_deref() else {
        let ui_ctx = ctx.ui_context(OutputRequest::json(args.json));
        if ui_ctx.mode.is_json() {
            return print_json(&serde_json::json!(QUICK_ADD_ITEMS));
        }
        for name in QUICK_ADD_ITEMS {
            println!("{}", name);
        }
        return Ok(());
    };

    let name = QUICK_ADD_ITEMS
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(wanted.trim()))
        .ok_or_else(|| {
            CliError::invalid_input_with_hint(
                format!("'{}' is not a quick-add item", wanted.trim()),
                format!("Hint: Quick-add items: {}", QUICK_ADD_ITEMS.join(", ")),
            )
        })?;
    add_named(ctx, name, args.json)
}

fn add_named(ctx: &AppContext, name: &str, json: bool) -> anyhow::Result<()> {
    let (mut store, list) = ctx.open_list()?;
    let (list, outcome) = store.add(list, name);
    let ui_ctx = ctx.ui_context(OutputRequest::json(json));
    ctx.report_warnings(&mut store, &ui_ctx);

    let id = outcome.into_result().map_err(CliError::from)?;
    let item = list
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Item {} missing after add", id))?;

    if ui_ctx.mode.is_json() {
        return print_json(&serde_json::json!({
            "status": "added",
            "item": item_json(item),
            "unchecked": list.unchecked_count(),
        }));
    }
    if ctx.quiet() {
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, &format!("Added '{}'", item.name)));
            let context = format!(
                "ID: {}  \u{00B7}  {} to buy",
                item.id,
                count_label(list.unchecked_count())
            );
            println!("{}", styled(&context, styles::dim(), ui_ctx.color));
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("id={}", item.id);
            println!("name={}", item.name);
        }
    }
    Ok(())
}

fn require_item(list: &ShoppingList, id: ItemId) -> anyhow::Result<()> {
    if list.contains(id) {
        Ok(())
    } else {
        Err(CliError::not_found(
            format!("Item {} not found", id),
            "Hint: Run `shopsmart list` to see item IDs.",
        )
        .into())
    }
}

pub fn handle_toggle(ctx: &AppContext, args: &ItemArgs) -> anyhow::Result<()> {
    let (mut store, list) = ctx.open_list()?;
    let ui_ctx = ctx.ui_context(OutputRequest::json(args.json));
    ctx.report_warnings(&mut store, &ui_ctx);
    require_item(&list, args.id)?;

    let list = store.toggle(list, args.id);
    ctx.report_warnings(&mut store, &ui_ctx);

    let item = list
        .get(args.id)
        .ok_or_else(|| anyhow::anyhow!("Item {} missing after toggle", args.id))?;
    let verb = if item.checked { "Checked" } else { "Unchecked" };

    if ui_ctx.mode.is_json() {
        return print_json(&serde_json::json!({
            "status": verb.to_lowercase(),
            "item": item_json(item),
            "unchecked": list.unchecked_count(),
        }));
    }
    if !ctx.quiet() {
        report(&ui_ctx, &format!("{} '{}'", verb, item.name), &[
            ("id", item.id.to_string()),
            ("checked", item.checked.to_string()),
        ]);
    }
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &ItemArgs) -> anyhow::Result<()> {
    let (mut store, list) = ctx.open_list()?;
    let ui_ctx = ctx.ui_context(OutputRequest::json(args.json));
    ctx.report_warnings(&mut store, &ui_ctx);
    require_item(&list, args.id)?;
    let name = list
        .get(args.id)
        .map(|item| item.name.clone())
        .unwrap_or_default();

    let list = store.delete(list, args.id);
    ctx.report_warnings(&mut store, &ui_ctx);

    if ui_ctx.mode.is_json() {
        return print_json(&serde_json::json!({
            "status": "deleted",
            "id": args.id,
            "name": name,
            "remaining": list.len(),
        }));
    }
    if !ctx.quiet() {
        report(&ui_ctx, &format!("Deleted '{}'", name), &[
            ("id", args.id.to_string()),
            ("remaining", list.len().to_string()),
        ]);
        if list.is_empty() && ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &hint(&ui_ctx, "shopsmart template list"));
        }
    }
    Ok(())
}

/// Badge in pretty mode, `status=ok` plus key=value lines otherwise.
fn report(ui_ctx: &UiContext, title: &str, fields: &[(&str, String)]) {
    if ui_ctx.mode.is_pretty() {
        print(ui_ctx, &badge(ui_ctx, Badge::Ok, title));
    } else {
        println!("status=ok");
        for (key, value) in fields {
            println!("{}={}", key, value);
        }
    }
}
