use shopsmart_core::share::try_share_text;
use shopsmart_core::CartError;

use crate::app::AppContext;
use crate::cli::ShareArgs;
use crate::errors::CliError;
use crate::output::print_json;
use crate::ui::{badge, print, Badge, OutputRequest};

pub fn handle_share(ctx: &AppContext, args: &ShareArgs) -> anyhow::Result<()> {
    let (mut store, list) = ctx.open_list()?;
    let ui_ctx = ctx.ui_context(OutputRequest::json(args.json));
    ctx.report_warnings(&mut store, &ui_ctx);

    match try_share_text(&list) {
        Ok(text) => {
            if ui_ctx.mode.is_json() {
                return print_json(&serde_json::json!({
                    "status": "ok",
                    "count": list.unchecked_count(),
                    "text": text,
                }));
            }
            println!("{}", text);
        }
        Err(CartError::NothingToShare) => {
            if ui_ctx.mode.is_json() {
                return print_json(&serde_json::json!({ "status": "nothing_to_share" }));
            }
            if !ctx.quiet() {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "No items to share!"));
            }
        }
        Err(err) => return Err(CliError::from(err).into()),
    }
    Ok(())
}
