//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with item count and total quantity
//! - [`footer`]: Keybinding hints
//! - [`dialog`]: "Add Shopping Item" box
//! - [`table`]: Item rows, including inline editor rows
//! - [`empty`]: Empty list message
//!
//! # Layout
//!
//! [`render_list_mode`] draws every screen; the dialog box and the empty
//! state are slotted into the body when present.

mod dialog;
mod empty;
mod footer;
mod header;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use dialog::render_dialog;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Add dialog - 6 lines, only while open]
/// [Table Headers]            or  [Empty state]
/// [Table Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_list_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(dialog) = &vm.dialog {
        current_row = render_dialog(current_row, dialog, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme);
        render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
