//! Shopping item domain model.
//!
//! A [`ShoppingItem`] is one row of the list: a label, a positive count, and
//! a flag telling the view whether to draw the row as an inline editor.

use std::fmt;
use std::num::NonZeroU32;

/// Identifier of an item within one list.
///
/// Ids come from the list's monotonic counter and are never reused, even
/// after the item they named has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry of the shopping list.
///
/// Fields are public for reading; items are only created and changed through
/// [`ListState`](crate::domain::ListState) transitions so the list invariants
/// hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    /// Always at least 1.
    pub quantity: u32,
    /// Set on at most one item of a list.
    pub is_editing: bool,
}

impl ShoppingItem {
    pub(crate) const fn new(id: ItemId, name: String, quantity: u32) -> Self {
        Self {
            id,
            name,
            quantity,
            is_editing: false,
        }
    }

    /// Returns the quantity as shown next to the name, e.g. `"Qty: 3"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoplist::domain::ListState;
    ///
    /// let list = ListState::new().add("Milk", "3").unwrap();
    /// assert_eq!(list.items()[0].quantity_label(), "Qty: 3");
    /// ```
    #[must_use]
    pub fn quantity_label(&self) -> String {
        format!("Qty: {}", self.quantity)
    }
}

/// Parses user-entered quantity text.
///
/// Surrounding whitespace is ignored. Returns `None` unless the text is a
/// whole number of at least 1 that fits in a `u32`.
///
/// # Examples
///
/// ```
/// use shoplist::domain::parse_quantity;
///
/// assert_eq!(parse_quantity(" 12 "), Some(12));
/// assert_eq!(parse_quantity("0"), None);
/// assert_eq!(parse_quantity("-1"), None);
/// assert_eq!(parse_quantity("two"), None);
/// ```
#[must_use]
pub fn parse_quantity(text: &str) -> Option<u32> {
    text.trim().parse::<NonZeroU32>().ok().map(NonZeroU32::get)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quantity_accepts_positive_integers() {
        assert_eq!(parse_quantity("1"), Some(1));
        assert_eq!(parse_quantity("\t42\n"), Some(42));
        assert_eq!(parse_quantity("+7"), Some(7));
    }

    #[test]
    fn parse_quantity_rejects_everything_else() {
        for text in ["", "   ", "0", "-3", "1.5", "abc", "99999999999"] {
            assert_eq!(parse_quantity(text), None, "input {text:?}");
        }
    }

    #[test]
    fn item_id_displays_with_hash() {
        assert_eq!(ItemId(7).to_string(), "#7");
    }
}
