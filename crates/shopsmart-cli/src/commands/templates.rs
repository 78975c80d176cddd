use shopsmart_core::{CartError, CommitOutcome, PendingOperation, Template};

use crate::app::AppContext;
use crate::cli::{TemplateListArgs, TemplateLoadArgs};
use crate::errors::CliError;
use crate::output::print_json;
use crate::ui::format::count_label;
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, blank_line, header, hint, print, table, Badge, Column, OutputRequest};

pub fn handle_list(ctx: &AppContext, args: &TemplateListArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(OutputRequest::json(args.json));

    if ui_ctx.mode.is_json() {
        let templates: Vec<serde_json::Value> = Template::ALL
            .iter()
            .map(|t| {
                serde_json::json!({
                    "key": t.key(),
                    "name": t.display_name(),
                    "emoji": t.emoji(),
                    "count": t.len(),
                    "items": t.items(),
                })
            })
            .collect();
        return print_json(&serde_json::json!(templates));
    }

    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "templates", None));
        blank_line(&ui_ctx);
        let rows: Vec<Vec<String>> = Template::ALL
            .iter()
            .map(|t| {
                let name = if ui_ctx.unicode {
                    format!("{} {}", t.emoji(), t.display_name())
                } else {
                    t.display_name().to_string()
                };
                vec![t.key().to_string(), name, t.len().to_string()]
            })
            .collect();
        let columns = [Column::text("KEY"), Column::text("NAME"), Column::number("SIZE")];
        println!("{}", table(&ui_ctx, &columns, &rows));
        blank_line(&ui_ctx);
        print(&ui_ctx, &hint(&ui_ctx, "shopsmart template load <KEY>"));
    } else {
        for t in Template::ALL {
            println!("{} {} {}", t.key(), t.len(), t.display_name());
        }
    }
    Ok(())
}

pub fn handle_load(ctx: &AppContext, args: &TemplateLoadArgs) -> anyhow::Result<()> {
    let template: Template = args.template.parse().map_err(CliError::from)?;
    let (mut store, list) = ctx.open_list()?;
    let ui_ctx = ctx.ui_context(OutputRequest::json(args.json));
    ctx.report_warnings(&mut store, &ui_ctx);

    let operation = PendingOperation::LoadTemplate(template);
    let preview = operation.preview(&list);

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
    let loaded = match outcome {
        CommitOutcome::TemplateLoaded { loaded, .. } => loaded,
        CommitOutcome::IdsExhausted => return Err(CliError::from(CartError::IdsExhausted).into()),
        _ => list.len(),
    };

    if ui_ctx.mode.is_json() {
        return print_json(&serde_json::json!({
            "status": "loaded",
            "template": template.key(),
            "loaded": loaded,
            "replaced": preview.removes,
        }));
    }
    if ctx.quiet() {
        return Ok(());
    }
    if ui_ctx.mode.is_pretty() {
        print(
            &ui_ctx,
            &badge(
                &ui_ctx,
                Badge::Ok,
                &format!("Loaded {} template", template.display_name()),
            ),
        );
        let context = format!(
            "{}  \u{00B7}  replaced {}",
            count_label(loaded),
            count_label(preview.removes)
        );
        println!("{}", styled(&context, styles::dim(), ui_ctx.color));
    } else {
        println!("status=ok");
        println!("template={}", template.key());
        println!("loaded={}", loaded);
    }
    Ok(())
}
