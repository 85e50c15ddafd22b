//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place user intents reach the list model. Each
//! intent becomes one call on the current [`ListState`](crate::domain::ListState)
//! snapshot, and the result replaces that snapshot in [`AppState`].
//!
//! # Architecture
//!
//! 1. The plugin shim maps a key press to an [`Event`]
//! 2. [`handle_event`] matches on the event and the input mode
//! 3. List transitions go through `AppState::replace_list`
//! 4. The render flag and any [`Action`]s are returned to the shim
//!
//! # Intent Mapping
//!
//! | Intent | Event | Model call |
//! |---|---|---|
//! | submit add dialog | `Submit` in `AddDialog` | `add` |
//! | edit icon | `EditSelected`, or `Submit` in `Normal` | `begin_edit` |
//! | save editor | `Submit` in `Editor` | `commit_edit` |
//! | delete icon | `DeleteSelected` | `delete` |
//!
//! # Example
//!
//! ```rust
//! use shoplist::app::{handle_event, AppState, Event};
//! use shoplist::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! for event in [Event::OpenAddDialog, Event::Char('T'), Event::Char('e'), Event::Char('a'),
//!               Event::NextField, Event::Char('2'), Event::Submit] {
//!     handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.list.items()[0].name, "Tea");
//! # Ok::<(), shoplist::ShopListError>(())
//! ```

use super::modes::{Field, InputMode};
use super::state::Draft;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input.
///
/// Key mapping happens in the plugin shim; by the time an event arrives here
/// it already names the intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down by one position (wraps to top).
    KeyDown,
    /// Moves the cursor up by one position (wraps to bottom).
    KeyUp,
    /// Closes the plugin pane.
    CloseFocus,
    /// Opens the add dialog with empty fields.
    OpenAddDialog,
    /// Enter: submit the dialog, save the editor, or edit the selected row.
    Submit,
    /// Opens the inline editor on the selected row.
    EditSelected,
    /// Deletes the selected row.
    DeleteSelected,
    /// Moves focus to the other text field.
    NextField,
    /// Appends a character to the focused field.
    Char(char),
    /// Removes the last character of the focused field.
    Backspace,
    /// Cancels the add dialog or leaves the inline editor.
    Escape,
}

/// Processes an event, updates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `true` whenever the list
/// snapshot or anything visible changed.
///
/// # Errors
///
/// Validation errors from the add dialog are absorbed into the dialog's error
/// line. Any other error from the model is returned.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, mode = ?state.input_mode).entered();

    match (event, state.input_mode) {
        (Event::KeyDown, InputMode::Normal) => {
            state.move_selection_down();
            Ok((!state.list.is_empty(), vec![]))
        }
        (Event::KeyUp, InputMode::Normal) => {
            state.move_selection_up();
            Ok((!state.list.is_empty(), vec![]))
        }
        (Event::CloseFocus, InputMode::Normal) => Ok((false, vec![Action::CloseFocus])),
        (Event::OpenAddDialog, InputMode::Normal) => {
            tracing::debug!("opening add dialog");
            state.add_draft = Draft::default();
            state.add_error = None;
            state.input_mode = InputMode::AddDialog(Field::Name);
            Ok((true, vec![]))
        }
        (Event::Submit, InputMode::AddDialog(_)) => submit_add_dialog(state),
        (Event::Submit, InputMode::Editor(_)) => {
            save_edit(state);
            Ok((true, vec![]))
        }
        (Event::Submit | Event::EditSelected, InputMode::Normal) => Ok((begin_edit_selected(state), vec![])),
        (Event::DeleteSelected, InputMode::Normal) => {
            let Some(id) = state.selected_item().map(|item| item.id) else {
                tracing::debug!("no item selected to delete");
                return Ok((false, vec![]));
            };
            let next = state.list.delete(id);
            Ok((state.replace_list(next), vec![]))
        }
        (Event::NextField, InputMode::AddDialog(field)) => {
            state.input_mode = InputMode::AddDialog(field.next());
            Ok((true, vec![]))
        }
        (Event::NextField, InputMode::Editor(field)) => {
            state.input_mode = InputMode::Editor(field.next());
            Ok((true, vec![]))
        }
        (Event::Char(c), InputMode::AddDialog(field)) => {
            state.add_draft.field_mut(field).push(*c);
            Ok((true, vec![]))
        }
        (Event::Char(c), InputMode::Editor(field)) => {
            state.edit_draft.field_mut(field).push(*c);
            Ok((true, vec![]))
        }
        (Event::Backspace, InputMode::AddDialog(field)) => {
            Ok((state.add_draft.field_mut(field).pop().is_some(), vec![]))
        }
        (Event::Backspace, InputMode::Editor(field)) => {
            Ok((state.edit_draft.field_mut(field).pop().is_some(), vec![]))
        }
        (Event::Escape, InputMode::AddDialog(_)) => {
            tracing::debug!("add dialog dismissed");
            state.input_mode = InputMode::Normal;
            state.add_draft = Draft::default();
            state.add_error = None;
            Ok((true, vec![]))
        }
        (Event::Escape, InputMode::Editor(_)) => {
            tracing::debug!("leaving inline editor, unsaved text dropped");
            state.input_mode = InputMode::Normal;
            state.edit_draft = Draft::default();
            Ok((true, vec![]))
        }
        (event, mode) => {
            tracing::trace!(event = ?event, mode = ?mode, "event ignored in current mode");
            Ok((false, vec![]))
        }
    }
}

/// Runs the add dialog's text through `ListState::add`.
///
/// On success the new item is selected and the dialog closes. On a
/// validation failure the dialog stays open with the message.
fn submit_add_dialog(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    match state.list.add(&state.add_draft.name, &state.add_draft.quantity) {
        Ok(next) => {
            state.replace_list(next);
            state.selected_index = state.list.len().saturating_sub(1);
            state.input_mode = InputMode::Normal;
            state.add_draft = Draft::default();
            state.add_error = None;
            Ok((true, vec![]))
        }
        Err(e) if e.is_validation() => {
            tracing::debug!(error = %e, "add rejected, keeping dialog open");
            state.add_error = Some(e.to_string());
            Ok((true, vec![]))
        }
        Err(e) => Err(e),
    }
}

/// Opens the editor on the selected row and seeds the draft from it.
///
/// Any other row that was open in the editor is closed, and its unsaved text
/// is dropped.
fn begin_edit_selected(state: &mut AppState) -> bool {
    let Some(id) = state.selected_item().map(|item| item.id) else {
        tracing::debug!("no item selected to edit");
        return false;
    };

    let next = state.list.begin_edit(id);
    state.replace_list(next);

    if let Some(item) = state.list.get(id) {
        state.edit_draft = Draft::from_item(item);
    }
    state.input_mode = InputMode::Editor(Field::Name);
    true
}

/// Commits the editor draft to the row currently flagged as editing.
fn save_edit(state: &mut AppState) {
    if let Some(id) = state.list.editing().map(|item| item.id) {
        let next = state
            .list
            .commit_edit(id, &state.edit_draft.name, &state.edit_draft.quantity);
        state.replace_list(next);
    } else {
        tracing::debug!("save requested with no open editor");
    }

    state.input_mode = InputMode::Normal;
    state.edit_draft = Draft::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn add_item(state: &mut AppState, name: &str, quantity: &str) {
        handle_event(state, &Event::OpenAddDialog).unwrap();
        type_text(state, name);
        handle_event(state, &Event::NextField).unwrap();
        type_text(state, quantity);
        handle_event(state, &Event::Submit).unwrap();
    }

    #[test]
    fn submit_with_invalid_quantity_keeps_dialog_open() {
        let mut state = AppState::new(Theme::default());
        add_item(&mut state, "Milk", "zero");

        assert!(matches!(state.input_mode, InputMode::AddDialog(_)));
        assert!(state.list.is_empty());
        assert!(state.add_error.as_deref().is_some_and(|e| e.contains("zero")));
        assert_eq!(state.add_draft.name, "Milk");
    }

    #[test]
    fn successful_submit_closes_dialog_and_selects_new_item() {
        let mut state = AppState::new(Theme::default());
        add_item(&mut state, "Bread", "1");
        add_item(&mut state, "Milk", "2");

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.selected_index, 1);
        assert_eq!(state.selected_item().unwrap().name, "Milk");
        assert_eq!(state.add_draft, Draft::default());
    }

    #[test]
    fn escape_cancels_dialog_without_adding() {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::OpenAddDialog).unwrap();
        type_text(&mut state, "Jam");
        handle_event(&mut state, &Event::Escape).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.list.is_empty());
    }

    #[test]
    fn editor_is_seeded_from_item() {
        let mut state = AppState::new(Theme::default());
        add_item(&mut state, "Milk", "2");
        handle_event(&mut state, &Event::EditSelected).unwrap();

        assert_eq!(state.input_mode, InputMode::Editor(Field::Name));
        assert_eq!(state.edit_draft, Draft { name: "Milk".into(), quantity: "2".into() });
        assert!(state.list.items()[0].is_editing);
    }

    #[test]
    fn save_commits_draft_with_fallback() {
        let mut state = AppState::new(Theme::default());
        add_item(&mut state, "Eggs", "6");
        handle_event(&mut state, &Event::Submit).unwrap();
        handle_event(&mut state, &Event::NextField).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        type_text(&mut state, "a dozen");
        handle_event(&mut state, &Event::Submit).unwrap();

        let item = &state.list.items()[0];
        assert_eq!(item.quantity, 1);
        assert!(!item.is_editing);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn switching_editor_discards_previous_draft() {
        let mut state = AppState::new(Theme::default());
        add_item(&mut state, "Bread", "1");
        add_item(&mut state, "Milk", "2");

        state.selected_index = 0;
        handle_event(&mut state, &Event::EditSelected).unwrap();
        type_text(&mut state, " rolls");
        handle_event(&mut state, &Event::Escape).unwrap();

        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::EditSelected).unwrap();
        handle_event(&mut state, &Event::Submit).unwrap();

        assert_eq!(state.list.items()[0].name, "Bread");
        assert!(state.list.items().iter().all(|item| !item.is_editing));
    }

    #[test]
    fn delete_clamps_cursor() {
        let mut state = AppState::new(Theme::default());
        add_item(&mut state, "Bread", "1");
        add_item(&mut state, "Milk", "2");

        let (render, _) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert!(render);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_item().unwrap().name, "Bread");
    }

    #[test]
    fn keys_outside_their_mode_are_ignored() {
        let mut state = AppState::new(Theme::default());
        assert_eq!(handle_event(&mut state, &Event::Char('x')).unwrap(), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::DeleteSelected).unwrap(), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::EditSelected).unwrap(), (false, vec![]));

        handle_event(&mut state, &Event::OpenAddDialog).unwrap();
        assert_eq!(handle_event(&mut state, &Event::CloseFocus).unwrap(), (false, vec![]));
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = AppState::new(Theme::default());
        assert_eq!(
            handle_event(&mut state, &Event::CloseFocus).unwrap(),
            (false, vec![Action::CloseFocus])
        );
    }
}
