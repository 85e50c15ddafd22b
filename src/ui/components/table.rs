//! Item table component renderer.
//!
//! Renders the column headings and one line per visible item. A row whose
//! item is open for editing is drawn as an inline editor instead of a static
//! row.

use crate::app::modes::Field;
use crate::app::state::NAME_COLUMN_WIDTH;
use crate::ui::helpers::{self, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, EditorInfo};

/// Gap between the name column and the quantity column.
const COLUMN_GAP: usize = 2;

/// Width of the quantity input inside an editor row.
const QUANTITY_INPUT_WIDTH: usize = 6;

/// Renders the `ITEM` / `QUANTITY` column headings and returns the next row.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("  {:<width$}{}", "ITEM", "QUANTITY", width = NAME_COLUMN_WIDTH + COLUMN_GAP);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all visible rows starting at `row` and returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = match &item.editor {
            Some(editor) => render_editor_row(current_row, item, editor, theme, cols),
            None => render_item_row(current_row, item, theme, cols),
        };
    }
    current_row
}

/// Base style of a row; also printed again after inputs reset the colors.
fn row_style(is_selected: bool, fg: &str, theme: &Theme) -> String {
    if is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(fg)
    }
}

/// Renders a static row.
///
/// ```text
/// ▸ NAME (padded to the name column)  Qty: N [padding to fill line]
/// ```
fn render_item_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base = row_style(item.is_selected, &theme.colors.text_normal, theme);
    print!("{base}");
    print!("{}", if item.is_selected { "\u{25b8} " } else { "  " });

    print!("{}", item.name);
    let name_len = display_width(&item.name);
    print!("{}", " ".repeat((NAME_COLUMN_WIDTH + COLUMN_GAP).saturating_sub(name_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.quantity_fg));
    }
    print!("{}", item.quantity);

    let line_len = 2 + NAME_COLUMN_WIDTH.max(name_len) + COLUMN_GAP + display_width(&item.quantity);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders an inline editor row.
///
/// ```text
/// ✎ Name: [Milk█          ]  Qty: [5     ]  Enter: save
/// ```
///
/// The focused input is highlighted. With no focus (the user left the editor
/// to navigate) both inputs show the item's saved values.
fn render_editor_row(row: usize, item: &DisplayItem, editor: &EditorInfo, theme: &Theme, cols: usize) -> usize {
    const NAME_LABEL: &str = "Name: ";
    const QTY_LABEL: &str = "Qty: ";
    const HINT: &str = "  Enter: save";

    position_cursor(row, 1);

    let base = row_style(item.is_selected, &theme.colors.editor_row_fg, theme);
    let name_input_width = NAME_COLUMN_WIDTH.saturating_sub(display_width(NAME_LABEL) + 2);

    print!("{base}");
    print!("\u{270e} {NAME_LABEL}");
    helpers::render_input(&editor.name, name_input_width, editor.focus == Some(Field::Name), theme, &base);
    print!("{}", " ".repeat(COLUMN_GAP));
    print!("{QTY_LABEL}");
    helpers::render_input(
        &editor.quantity,
        QUANTITY_INPUT_WIDTH,
        editor.focus == Some(Field::Quantity),
        theme,
        &base,
    );

    let mut line_len = 2 + NAME_COLUMN_WIDTH + COLUMN_GAP + display_width(QTY_LABEL) + QUANTITY_INPUT_WIDTH + 2;
    if editor.focus.is_some() && cols >= line_len + HINT.len() {
        print!("{}", Theme::dim());
        print!("{HINT}");
        print!("{}", Theme::reset());
        print!("{base}");
        line_len += HINT.len();
    }
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
