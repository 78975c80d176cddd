use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{list_json, print_json};
use crate::ui::format::{format_added, truncate};
use crate::ui::theme::{styled, styles, CART, CHECKED, UNCHECKED};
use crate::ui::{blank_line, header, hint, print, table, Column, OutputRequest};

const NAME_WIDTH: usize = 40;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let (mut store, list) = ctx.open_list()?;
    let ui_ctx = ctx.ui_context(OutputRequest::list(args.json, args.format));
    ctx.report_warnings(&mut store, &ui_ctx);

    let visible = store.visible_order(&list);

    if ui_ctx.mode.is_json() {
        return print_json(&list_json(&visible));
    }

    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "list", Some(visible.unchecked_count())));
        blank_line(&ui_ctx);

        if visible.is_empty() {
            let cart = CART.get(ui_ctx.unicode);
            print(&ui_ctx, format!("{} Your cart is empty", cart).trim());
            print(
                &ui_ctx,
                &hint(
                    &ui_ctx,
                    "Add items or choose a template: shopsmart add <NAME>  \u{00B7}  shopsmart template list",
                ),
            );
            return Ok(());
        }

        let rows: Vec<Vec<String>> = visible
            .items()
            .iter()
            .map(|item| {
                let (mark, name) = if item.checked {
                    (
                        CHECKED.get(ui_ctx.unicode).to_string(),
                        styled(&truncate(&item.name, NAME_WIDTH), styles::done(), ui_ctx.color),
                    )
                } else {
                    (
                        UNCHECKED.get(ui_ctx.unicode).to_string(),
                        truncate(&item.name, NAME_WIDTH),
                    )
                };
                vec![mark, item.id.to_string(), name, format_added(item.id, true)]
            })
            .collect();
        let columns = [
            Column::text(""),
            Column::number("ID"),
            Column::text("ITEM"),
            Column::text("ADDED"),
        ];
        println!("{}", table(&ui_ctx, &columns, &rows));

        if visible.checked_count() > 0 {
            blank_line(&ui_ctx);
            print(&ui_ctx, &hint(&ui_ctx, "shopsmart clear  \u{00B7}  shopsmart share"));
        }
        return Ok(());
    }

    // Plain: one line per item, scripts split on the first two spaces
    for item in visible.items() {
        let mark = if item.checked {
            CHECKED.ascii
        } else {
            UNCHECKED.ascii
        };
        println!("{} {} {}", item.id, mark, item.name);
    }
    Ok(())
}
