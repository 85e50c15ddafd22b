//! Error types for the shopping list plugin.
//!
//! [`ShopListError`] covers the two failure families the plugin knows about:
//! user input rejected by the list model, and theme loading problems. The
//! [`Result`] alias is used throughout the crate.

use thiserror::Error;

/// The main error type for shopping list operations.
///
/// Validation variants are produced by [`ListState::add`](crate::domain::ListState::add)
/// and are expected in normal use: the view keeps its entry dialog open and
/// shows the message. The remaining variants come from theme loading, which
/// falls back to the default theme when it fails.
///
/// # Examples
///
/// ```
/// use shoplist::domain::{ListState, ShopListError};
///
/// let err = ListState::new().add("   ", "2").unwrap_err();
/// assert!(matches!(err, ShopListError::EmptyName));
/// assert!(err.is_validation());
/// ```
#[derive(Debug, Error)]
pub enum ShopListError {
    /// The item name was empty or whitespace only.
    #[error("Item name must not be empty")]
    EmptyName,

    /// The quantity text was not a whole number of at least 1.
    ///
    /// Carries the text as the user typed it.
    #[error("Quantity must be a whole number of at least 1 (got '{0}')")]
    InvalidQuantity(String),

    /// The id counter reached `u64::MAX`; no further item can be added.
    #[error("No item ids left to assign")]
    IdsExhausted,

    /// Theme TOML could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem read failed (custom theme files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShopListError {
    /// Returns `true` for failures the user can fix by correcting their input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyName | Self::InvalidQuantity(_))
    }
}

/// A specialized `Result` type for shopping list operations.
pub type Result<T> = std::result::Result<T, ShopListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_variants_are_flagged() {
        assert!(ShopListError::EmptyName.is_validation());
        assert!(ShopListError::InvalidQuantity("abc".into()).is_validation());
        assert!(!ShopListError::Theme("bad".into()).is_validation());
        assert!(!ShopListError::IdsExhausted.is_validation());
    }

    #[test]
    fn invalid_quantity_message_quotes_input() {
        let err = ShopListError::InvalidQuantity("-4".into());
        assert_eq!(
            err.to_string(),
            "Quantity must be a whole number of at least 1 (got '-4')"
        );
    }
}
