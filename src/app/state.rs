//! Application state management and view model computation.
//!
//! [`AppState`] is the view side of the plugin. It owns the single mutable
//! slot holding the current [`ListState`] snapshot, plus everything that only
//! matters for display: the cursor, the input mode, and the text typed into
//! the add dialog or the inline editor.
//!
//! # Snapshot Replacement
//!
//! The list is never edited in place. The handler asks the current snapshot
//! for a transition and hands the result to [`AppState::replace_list`], which
//! swaps it in and reports whether anything changed. That flag is what the
//! plugin returns to Zellij to request a re-render.
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns state into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel): windowing around the
//! cursor, per-row display text, editor rows, dialog contents and the
//! header/footer strings.
//!
//! # Example
//!
//! ```rust
//! use shoplist::app::AppState;
//! use shoplist::ui::Theme;
//!
//! let state = AppState::new(Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::modes::{Field, InputMode};
use crate::domain::{ListState, ShoppingItem};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DialogInfo, DisplayItem, EditorInfo, EmptyState, FooterInfo, HeaderInfo, UIViewModel,
};

/// Width reserved for the item name column.
pub const NAME_COLUMN_WIDTH: usize = 32;

/// Rows used by header, borders, table headings and footer.
const LIST_CHROME_ROWS: usize = 6;

/// Extra rows taken by the add dialog box.
pub const DIALOG_ROWS: usize = 6;

/// In-progress text of the add dialog or the inline editor.
///
/// Drafts live only in the view. The list model sees them once, when the
/// user submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub quantity: String,
}

impl Draft {
    /// Seeds an editor draft from an item's current values.
    #[must_use]
    pub fn from_item(item: &ShoppingItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }

    /// Returns the text buffer behind `field`.
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Quantity => &mut self.quantity,
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current list snapshot. Replaced whole by [`Self::replace_list`].
    pub list: ListState,

    /// Zero-based cursor position within `list.items()`.
    ///
    /// Clamped after every snapshot replacement; wraps during navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Text typed into the add dialog.
    pub add_draft: Draft,

    /// Validation message shown in the add dialog after a rejected submit.
    pub add_error: Option<String>,

    /// Text typed into the inline editor of the item being edited.
    pub edit_draft: Draft,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a state with an empty list in normal mode.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            list: ListState::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            add_draft: Draft::default(),
            add_error: None,
            edit_draft: Draft::default(),
            theme,
        }
    }

    /// Moves the cursor down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.list.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.list.len();
    }

    /// Moves the cursor up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.list.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.list.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the item under the cursor, if the list is not empty.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ShoppingItem> {
        self.list.items().get(self.selected_index)
    }

    /// Swaps in a new list snapshot.
    ///
    /// Returns `true` if the snapshot differs from the current one, meaning
    /// the view must re-render. The cursor is clamped to the new length.
    pub fn replace_list(&mut self, next: ListState) -> bool {
        if next == self.list {
            return false;
        }

        tracing::debug!(
            old_len = self.list.len(),
            new_len = next.len(),
            "list snapshot replaced"
        );
        self.list = next;
        self.clamp_selection();
        true
    }

    fn clamp_selection(&mut self) {
        self.selected_index = if self.list.is_empty() {
            0
        } else {
            self.selected_index.min(self.list.len() - 1)
        };
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Subtract UI chrome (and the dialog box, if open) from `rows`
    /// 2. Center the window on the cursor
    /// 3. Pull the window back when it runs past the end of the list
    /// 4. Report the cursor relative to the window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let header = self.compute_header();
        let footer = self.compute_footer();
        let dialog = self.compute_dialog();

        if self.list.is_empty() {
            return UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header,
                footer,
                empty_state: Some(EmptyState {
                    message: "Your shopping list is empty".to_string(),
                    subtitle: "Press 'a' to add an item".to_string(),
                }),
                dialog,
            };
        }

        let items = self.list.items();
        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(items.len());

        if visible_end - visible_start < available_rows && items.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                self.compute_display_item(item, visible_start + relative_idx, cols)
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header,
            footer,
            empty_state: None,
            dialog,
        }
    }

    fn compute_display_item(&self, item: &ShoppingItem, absolute_idx: usize, cols: usize) -> DisplayItem {
        let name_width = NAME_COLUMN_WIDTH.min(cols.saturating_sub(12)).max(4);

        let editor = item.is_editing.then(|| match self.input_mode {
            InputMode::Editor(field) => EditorInfo {
                name: self.edit_draft.name.clone(),
                quantity: self.edit_draft.quantity.clone(),
                focus: Some(field),
            },
            _ => EditorInfo {
                name: item.name.clone(),
                quantity: item.quantity.to_string(),
                focus: None,
            },
        });

        DisplayItem {
            name: truncate(&item.name, name_width),
            quantity: item.quantity_label(),
            is_selected: absolute_idx == self.selected_index,
            editor,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.list.len();
        let total: u64 = self.list.items().iter().map(|item| u64::from(item.quantity)).sum();
        let noun = if count == 1 { "item" } else { "items" };

        HeaderInfo {
            title: format!(" Shopping List ({count} {noun}, {total} total) "),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::AddDialog(_) => "Tab: switch field  Enter: add  Esc: cancel",
            InputMode::Editor(_) => "Tab: switch field  Enter: save  Esc: leave editor",
            InputMode::Normal if self.list.is_empty() => "a: add item  q: quit",
            InputMode::Normal => "j/k: navigate  a: add  e/Enter: edit  d: delete  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_dialog(&self) -> Option<DialogInfo> {
        match self.input_mode {
            InputMode::AddDialog(focus) => Some(DialogInfo {
                title: "Add Shopping Item".to_string(),
                name: self.add_draft.name.clone(),
                quantity: self.add_draft.quantity.clone(),
                focus,
                error: self.add_error.clone(),
            }),
            _ => None,
        }
    }

    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::AddDialog(_) => total_rows.saturating_sub(LIST_CHROME_ROWS + DIALOG_ROWS),
            InputMode::Normal | InputMode::Editor(_) => total_rows.saturating_sub(LIST_CHROME_ROWS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(names: &[&str]) -> AppState {
        let mut state = AppState::new(Theme::default());
        let mut list = ListState::new();
        for name in names {
            list = list.add(name, "1").unwrap();
        }
        state.replace_list(list);
        state
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state_with(&["a", "b", "c"]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn replace_list_reports_change_and_clamps() {
        let mut state = state_with(&["a", "b", "c"]);
        state.selected_index = 2;

        let same = state.list.clone();
        assert!(!state.replace_list(same));

        let last = state.list.items()[2].id;
        let shorter = state.list.delete(last);
        assert!(state.replace_list(shorter));
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn viewmodel_windows_around_cursor() {
        let names: Vec<String> = (0..50).map(|i| format!("item {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = state_with(&refs);
        state.selected_index = 49;

        let vm = state.compute_viewmodel(16, 80);
        assert_eq!(vm.display_items.len(), 10);
        assert_eq!(vm.display_items.last().unwrap().name, "item 49");
        assert_eq!(vm.selected_index, 9);
        assert!(vm.display_items[9].is_selected);
    }

    #[test]
    fn header_counts_items_and_quantities() {
        let mut state = AppState::new(Theme::default());
        let list = ListState::new().add("Milk", "2").unwrap().add("Eggs", "12").unwrap();
        state.replace_list(list);

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, " Shopping List (2 items, 14 total) ");
    }

    #[test]
    fn draft_field_mut_targets_field() {
        let mut draft = Draft::default();
        draft.field_mut(Field::Name).push('x');
        draft.field_mut(Field::Quantity).push('3');
        assert_eq!(draft, Draft { name: "x".into(), quantity: "3".into() });
    }

    #[test]
    fn editor_row_shows_draft_while_focused() {
        let mut state = state_with(&["Milk"]);
        let id = state.list.items()[0].id;
        let next = state.list.begin_edit(id);
        state.replace_list(next);
        state.input_mode = InputMode::Editor(Field::Quantity);
        state.edit_draft = Draft { name: "Oat milk".into(), quantity: "4".into() };

        let editor = state.compute_viewmodel(24, 80).display_items[0].editor.clone().unwrap();
        assert_eq!(editor.name, "Oat milk");
        assert_eq!(editor.quantity, "4");
        assert_eq!(editor.focus, Some(Field::Quantity));

        state.input_mode = InputMode::Normal;
        let editor = state.compute_viewmodel(24, 80).display_items[0].editor.clone().unwrap();
        assert_eq!((editor.name.as_str(), editor.quantity.as_str(), editor.focus), ("Milk", "1", None));
    }

    #[test]
    fn dialog_carries_draft_and_error() {
        let mut state = AppState::new(Theme::default());
        state.input_mode = InputMode::AddDialog(Field::Name);
        state.add_draft.name = "Jam".into();
        state.add_error = Some("Item name must not be empty".into());

        let vm = state.compute_viewmodel(24, 80);
        let dialog = vm.dialog.unwrap();
        assert_eq!(dialog.name, "Jam");
        assert_eq!(dialog.focus, Field::Name);
        assert!(dialog.error.is_some());
        assert!(vm.empty_state.is_some());
    }
}
