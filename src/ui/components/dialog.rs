//! Add dialog component renderer.
//!
//! Renders the "Add Shopping Item" box with its two inputs and a status line
//! that shows either the last validation error or the dialog's keys.

use crate::app::modes::Field;
use crate::app::state::DIALOG_ROWS;
use crate::ui::helpers::{self, display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DialogInfo;

/// Horizontal margin for the dialog box (spaces on left and right).
const DIALOG_MARGIN: usize = 5;

/// Field labels are padded to this width so the inputs line up.
const LABEL_WIDTH: usize = 11;

/// Renders the dialog box at `row` and returns the row after it.
///
/// ```text
/// [margin] ┌──────────────────────────────┐
/// [margin] │ Add Shopping Item            │
/// [margin] │ Name:      [Milk█          ] │
/// [margin] │ Quantity:  [               ] │
/// [margin] │ Enter: add  Esc: cancel      │
/// [margin] └──────────────────────────────┘
/// ```
pub fn render_dialog(row: usize, dialog: &DialogInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(DIALOG_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let input_width = inner_width.saturating_sub(LABEL_WIDTH + 4);
    let border = Theme::fg(&theme.colors.dialog_border);
    let text = Theme::fg(&theme.colors.text_normal);

    position_cursor(row, 1);
    print!("{}", " ".repeat(DIALOG_MARGIN));
    print!("{border}\u{250c}{}\u{2510}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());

    let title = truncate(&format!(" {}", dialog.title), inner_width);
    open_line(row + 1, &border);
    print!("{}{text}{title}", Theme::bold());
    close_line(&border, inner_width, display_width(&title));

    let fields = [
        (Field::Name, "Name:", &dialog.name),
        (Field::Quantity, "Quantity:", &dialog.quantity),
    ];
    for (offset, (field, label, value)) in fields.into_iter().enumerate() {
        open_line(row + 2 + offset, &border);
        print!("{text} {label:<width$}", width = LABEL_WIDTH - 1);
        helpers::render_input(value, input_width, dialog.focus == field, theme, &text);
        close_line(&border, inner_width, LABEL_WIDTH + input_width + 2);
    }

    open_line(row + 4, &border);
    let status = match &dialog.error {
        Some(error) => {
            print!("{}", Theme::fg(&theme.colors.error_fg));
            truncate(&format!(" {error}"), inner_width)
        }
        None => {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            truncate(" Enter: add  Esc: cancel", inner_width)
        }
    };
    print!("{status}");
    close_line(&border, inner_width, display_width(&status));

    position_cursor(row + 5, 1);
    print!("{}", " ".repeat(DIALOG_MARGIN));
    print!("{border}\u{2514}{}\u{2518}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());

    row + DIALOG_ROWS
}

fn open_line(row: usize, border: &str) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(DIALOG_MARGIN));
    print!("{border}\u{2502}{}", Theme::reset());
}

/// Pads the line to the box edge and draws the right border.
fn close_line(border: &str, inner_width: usize, used: usize) {
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{border}\u{2502}{}", Theme::reset());
}
