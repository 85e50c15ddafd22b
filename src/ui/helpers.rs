//! Shared rendering utilities.
//!
//! Cursor positioning and width handling used by every component. Widths are
//! counted in characters, never bytes, so multi-byte names do not split.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use shoplist::ui::helpers::truncate;
///
/// assert_eq!(truncate("Milk", 10), "Milk");
/// assert_eq!(truncate("Sparkling water", 10), "Sparkli...");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Number of characters in `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Prints `text` centered in a line of `cols` characters.
///
/// Left padding gets the smaller half when the space does not divide evenly.
/// Text wider than the line is truncated.
pub fn print_centered(text: &str, cols: usize) {
    let text = truncate(text, cols);
    let text_len = display_width(&text);
    let padding = cols.saturating_sub(text_len) / 2;

    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
}

/// Renders a text input as `[value]`, with a cursor block when focused.
///
/// Focused inputs use the editor highlight colors; `restore` is printed
/// afterwards to return to the surrounding style.
pub fn render_input(value: &str, width: usize, focused: bool, theme: &Theme, restore: &str) {
    let shown = truncate(value, width.saturating_sub(1));
    let pad = width.saturating_sub(display_width(&shown) + usize::from(focused));

    print!("[");
    if focused {
        print!("{}", Theme::fg(&theme.colors.editor_focus_fg));
        print!("{}", Theme::bg(&theme.colors.editor_focus_bg));
        print!("{shown}\u{2588}");
    } else {
        print!("{shown}");
    }
    print!("{}", " ".repeat(pad));
    print!("{}", Theme::reset());
    print!("{restore}");
    print!("]");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Crème fraîche", 8), "Crème...");
        assert_eq!(truncate("abc", 2), "ab");
        assert_eq!(truncate("", 5), "");
    }

    #[test]
    fn display_width_ignores_byte_length() {
        assert_eq!(display_width("Jalapeño"), 8);
    }
}
