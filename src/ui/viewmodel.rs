//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags, no logic.
//!
//! # Example
//!
//! ```rust
//! use shoplist::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         name: "Milk".to_string(),
//!         quantity: "Qty: 2".to_string(),
//!         is_selected: true,
//!         editor: None,
//!     }],
//!     selected_index: 0,
//!     header: HeaderInfo { title: " Shopping List (1 item, 2 total) ".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//!     dialog: None,
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

use crate::app::modes::Field;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows visible in the current window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// Set when the list has no items.
    pub empty_state: Option<EmptyState>,

    /// Set while the add dialog is open.
    pub dialog: Option<DialogInfo>,
}

/// Display information for a single shopping item row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Item name, truncated to the name column.
    pub name: String,

    /// Quantity label, e.g. `"Qty: 3"`.
    pub quantity: String,

    pub is_selected: bool,

    /// Present when this row is drawn as an inline editor.
    pub editor: Option<EditorInfo>,
}

/// Contents of an inline editor row.
#[derive(Debug, Clone)]
pub struct EditorInfo {
    pub name: String,
    pub quantity: String,

    /// Field with the cursor, or `None` when the editor is open but the user
    /// has stepped back to list navigation.
    pub focus: Option<Field>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Message shown in place of the table when the list is empty.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Contents of the "Add Shopping Item" dialog.
#[derive(Debug, Clone)]
pub struct DialogInfo {
    pub title: String,
    pub name: String,
    pub quantity: String,
    pub focus: Field,

    /// Validation message from the last rejected submit.
    pub error: Option<String>,
}
