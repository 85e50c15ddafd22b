//! Domain layer for the shopping list plugin.
//!
//! Holds the list model and its rules, independent of Zellij and of the
//! terminal view.
//!
//! # Organization
//!
//! - [`error`]: Error type and result alias
//! - [`item`]: Shopping item model and quantity parsing
//! - [`list`]: List snapshot and its pure transitions
//!
//! # Examples
//!
//! ```
//! use shoplist::domain::{ListState, Result};
//!
//! fn weekly_basics() -> Result<ListState> {
//!     ListState::new().add("Bread", "1")?.add("Coffee", "2")
//! }
//!
//! assert_eq!(weekly_basics().unwrap().len(), 2);
//! ```

pub mod error;
pub mod item;
pub mod list;

pub use error::{Result, ShopListError};
pub use item::{parse_quantity, ItemId, ShoppingItem};
pub use list::{ListState, FALLBACK_QUANTITY};
