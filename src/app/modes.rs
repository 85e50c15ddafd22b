//! Input mode state types for the application.
//!
//! The input mode decides which keybindings are active and where typed
//! characters go.
//!
//! # State Machine
//!
//! ```text
//!            a                    Enter (valid) / Esc
//! Normal ─────────→ AddDialog ─────────────────────→ Normal
//!   │  ↑
//!   │  └──────── Enter (save) / Esc ─────────┐
//!   └── e / Enter ──────────────────→ Editor ┘
//! ```
//!
//! Both text modes carry a [`Field`] telling which input has focus.
//!
//! # Example
//!
//! ```rust
//! use shoplist::app::modes::{Field, InputMode};
//!
//! let mode = InputMode::AddDialog(Field::Name);
//! assert!(mode.is_text_entry());
//! assert_eq!(Field::Name.next(), Field::Quantity);
//! ```

/// Text input within the add dialog or the inline editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Quantity,
}

impl Field {
    /// Returns the other field (Tab cycles between the two).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Quantity,
            Self::Quantity => Self::Name,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// List navigation and commands.
    ///
    /// Keybindings: j/k (navigate), a (add), e or Enter (edit), d (delete),
    /// q (quit).
    Normal,

    /// The "Add Shopping Item" dialog is open.
    ///
    /// Characters go to the focused field; Enter submits, Esc cancels.
    AddDialog(Field),

    /// The selected row is open in the inline editor.
    ///
    /// Characters go to the focused field; Enter saves.
    Editor(Field),
}

impl InputMode {
    /// Returns `true` while keystrokes are being captured as text.
    #[must_use]
    pub const fn is_text_entry(self) -> bool {
        !matches!(self, Self::Normal)
    }
}
