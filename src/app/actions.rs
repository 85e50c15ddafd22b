//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It returns a
//! `Vec<Action>` next to its render flag, and the plugin shim in `main.rs`
//! turns each action into host API calls.
//!
//! The shopping list keeps everything in memory, so the only effect left is
//! closing the pane.

/// Commands to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user presses `q` in normal mode.
    CloseFocus,
}
