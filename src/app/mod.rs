//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain layer. It is the
//! "view" half of the unidirectional flow: it owns the current list snapshot
//! and forwards user intents to the list model.
//!
//! # Architecture
//!
//! ```text
//! Key → Event → handle_event → ListState transition → replace snapshot → render
//!                     │
//!                     └────→ Actions → Zellij host calls
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and intent-to-model mapping
//! - [`modes`]: Input mode and field focus types
//! - [`state`]: View state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use shoplist::app::{AppState, Event, handle_event};
//! use shoplist::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::OpenAddDialog)?;
//! assert!(should_render);
//! # Ok::<(), shoplist::ShopListError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Field, InputMode};
pub use state::{AppState, Draft};
