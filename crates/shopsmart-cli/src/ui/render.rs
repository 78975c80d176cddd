//! Line and table rendering for command output.

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use super::context::UiContext;
use super::format::count_label;
use super::theme::{styled, styles, Badge, CART};

/// Title line for a command, with an optional item count.
///
/// Pretty: `🛒 ShopSmart · list (3 items)`. Plain: `shopsmart list`.
/// JSON output has no title.
pub fn header(ctx: &UiContext, command: &str, count: Option<usize>) -> String {
    if ctx.mode.is_json() {
        return String::new();
    }
    if !ctx.mode.is_pretty() {
        return format!("shopsmart {}", command);
    }

    let brand = styled("ShopSmart", styles::bold(), ctx.color);
    let mut line = match CART.get(ctx.unicode) {
        "" => brand,
        cart => format!("{} {}", cart, brand),
    };
    line.push_str(&format!(" \u{00B7} {}", command));
    if let Some(count) = count {
        line.push_str(&format!(" ({})", count_label(count)));
    }
    line
}

/// Status badge followed by `message`.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let mark = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        mark
    } else {
        format!("{} {}", mark, message)
    }
}

/// Suggested next command. Plain output uses `hint=` so scripts can skip it.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// One table column.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub numeric: bool,
}

impl Column {
    pub const fn text(title: &'static str) -> Self {
        Self {
            title,
            numeric: false,
        }
    }

    /// Right-aligned, for ids and counts.
    pub const fn number(title: &'static str) -> Self {
        Self {
            title,
            numeric: true,
        }
    }
}

/// Borderless table in pretty mode; space-joined rows without titles otherwise.
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut out = Table::new();
    out.load_preset(comfy_table::presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX));
    out.set_header(columns.iter().map(|column| {
        let cell = Cell::new(column.title);
        if ctx.color {
            cell.add_attribute(Attribute::Dim)
        } else {
            cell
        }
    }));
    for row in rows {
        out.add_row(row);
    }
    for (idx, column) in columns.iter().enumerate() {
        if let Some(col) = out.column_mut(idx) {
            col.set_padding((0, 2));
            if column.numeric {
                col.set_cell_alignment(CellAlignment::Right);
            }
        }
    }
    out.to_string()
}

/// Print unless the command is emitting JSON.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Spacer between sections of pretty output.
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Error text for stderr. Hints arrive as "Hint: ..." and are re-keyed
/// as `hint=` in plain output.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    if ctx.mode.is_pretty() {
        let mut text = badge(ctx, Badge::Err, message);
        if let Some(h) = error_hint {
            text.push('\n');
            text.push_str(&styled(h, styles::dim(), ctx.color));
        }
        return text;
    }

    let mut text = format!("error={}", message);
    if let Some(h) = error_hint {
        text.push_str("\nhint=");
        text.push_str(h.strip_prefix("Hint: ").unwrap_or(h));
    }
    text
}

pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn ui(mode: OutputMode) -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode,
        }
    }

    #[test]
    fn test_header_counts_items() {
        let pretty = ui(OutputMode::Pretty);
        assert_eq!(header(&pretty, "list", Some(1)), "ShopSmart \u{00B7} list (1 item)");
        assert_eq!(header(&pretty, "templates", None), "ShopSmart \u{00B7} templates");
        assert_eq!(header(&ui(OutputMode::Plain), "list", Some(3)), "shopsmart list");
        assert!(header(&ui(OutputMode::Json), "list", Some(3)).is_empty());
    }

    #[test]
    fn test_header_shows_cart_with_unicode() {
        let pretty = UiContext {
            unicode: true,
            ..ui(OutputMode::Pretty)
        };
        assert!(header(&pretty, "list", Some(2)).starts_with("\u{1F6D2} ShopSmart"));
    }

    #[test]
    fn test_badge_and_hint_plain() {
        let plain = ui(OutputMode::Plain);
        assert_eq!(badge(&plain, Badge::Ok, "Added 'Milk'"), "[OK] Added 'Milk'");
        assert_eq!(hint(&plain, "shopsmart list"), "hint=shopsmart list");
    }

    #[test]
    fn test_plain_table_is_rows_only() {
        let rows = vec![
            vec!["1".to_string(), "Milk".to_string()],
            vec!["2".to_string(), "Eggs".to_string()],
        ];
        let out = table(&ui(OutputMode::Plain), &[Column::number("ID"), Column::text("ITEM")], &rows);
        assert_eq!(out, "1 Milk\n2 Eggs");
    }

    #[test]
    fn test_pretty_table_right_aligns_numbers() {
        let rows = vec![
            vec!["7".to_string(), "Milk".to_string()],
            vec!["1234".to_string(), "Eggs".to_string()],
        ];
        let out = table(&ui(OutputMode::Pretty), &[Column::number("ID"), Column::text("ITEM")], &rows);
        assert!(out.contains("ITEM"));
        let milk_line = out.lines().find(|line| line.contains("Milk")).unwrap();
        assert!(milk_line.starts_with(' '));
        assert!(milk_line.trim_start().starts_with('7'));
    }

    #[test]
    fn test_error_message_plain_rekeys_hint() {
        let msg = error_message(&ui(OutputMode::Plain), "boom", Some("Hint: try again"));
        assert_eq!(msg, "error=boom\nhint=try again");
    }
}
