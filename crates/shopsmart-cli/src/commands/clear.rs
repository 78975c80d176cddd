use shopsmart_core::{CommitOutcome, PendingOperation};

use crate::app::AppContext;
use crate::cli::ClearArgs;
use crate::output::print_json;
use crate::ui::{badge, print, Badge, OutputRequest};

pub fn handle_clear(ctx: &AppContext, args: &ClearArgs) -> anyhow::Result<()> {
    let (mut store, list) = ctx.open_list()?;
    let ui_ctx = ctx.ui_context(OutputRequest::json(args.json));
    ctx.report_warnings(&mut store, &ui_ctx);

    let operation = PendingOperation::ClearChecked;
    let preview = operation.preview(&list);

    if !preview.actionable {
        if ui_ctx.mode.is_json() {
            return print_json(&serde_json::json!({
                "status": "nothing_to_clear",
                "preview": preview,
            }));
        }
        if !ctx.quiet() {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Info, &preview.message));
        }
        return Ok(());
    }

    if !ctx.confirm(&preview, args.yes, &ui_ctx)? {
        if ui_ctx.mode.is_json() {
            return print_json(&serde_json::json!({
                "status": "cancelled",
                "preview": preview,
            }));
        }
        if !ctx.quiet() {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled"));
        }
        return Ok(());
    }

    let (list, outcome) = store.commit(list, &operation);
    ctx.report_warnings(&mut store, &ui_ctx);

    let cleared = match outcome {
        CommitOutcome::Cleared(count) => count,
        _ => 0,
    };

    if ui_ctx.mode.is_json() {
        return print_json(&serde_json::json!({
            "status": "cleared",
            "cleared": cleared,
            "remaining": list.len(),
        }));
    }
    if !ctx.quiet() {
        if ui_ctx.mode.is_pretty() {
            print(
                &ui_ctx,
                &badge(&ui_ctx, Badge::Ok, &format!("Cleared {} checked items", cleared)),
            );
        } else {
            println!("status=ok");
            println!("cleared={}", cleared);
            println!("remaining={}", list.len());
        }
    }
    Ok(())
}
