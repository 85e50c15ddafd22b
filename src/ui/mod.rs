//! User interface rendering layer with component-based architecture.
//!
//! Turns view models into ANSI-styled output inside the plugin pane.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Header, table, dialog, empty state and footer renderers
//! - [`helpers`]: Cursor positioning, truncation, text inputs
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{DialogInfo, DisplayItem, EditorInfo, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
