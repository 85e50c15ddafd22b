//! Shopping list snapshot and its state transitions.
//!
//! [`ListState`] is an immutable value: every transition borrows the current
//! snapshot and returns a new one. The view owns the only mutable slot and
//! swaps in whatever a transition returns, so a transition is either applied
//! whole or, on rejection, not at all.
//!
//! # Transitions
//!
//! | Operation | Bad input | Unknown id |
//! |---|---|---|
//! | [`add`](ListState::add) | rejected with a validation error | n/a |
//! | [`begin_edit`](ListState::begin_edit) | n/a | no-op |
//! | [`commit_edit`](ListState::commit_edit) | quantity falls back to 1 | no-op |
//! | [`delete`](ListState::delete) | n/a | no-op |
//!
//! `add` and `commit_edit` treat bad input differently on purpose: the entry
//! dialog can stay open for correction, the inline editor cannot.
//!
//! # Example
//!
//! ```
//! use shoplist::domain::ListState;
//!
//! let list = ListState::new()
//!     .add("Bread", "1")?
//!     .add("Milk", "2")?;
//! let milk = list.items()[1].id;
//!
//! let list = list.begin_edit(milk).commit_edit(milk, "Milk", "5");
//! assert_eq!(list.get(milk).map(|item| item.quantity), Some(5));
//! # Ok::<(), shoplist::ShopListError>(())
//! ```

use super::error::{Result, ShopListError};
use super::item::{parse_quantity, ItemId, ShoppingItem};

/// Quantity stored when an edited quantity cannot be parsed.
pub const FALLBACK_QUANTITY: u32 = 1;

/// One snapshot of the shopping list.
///
/// Holds the items in display order and the id counter. The counter only
/// moves forward, so ids stay unique across deletions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    items: Vec<ShoppingItem>,
    next_id: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    /// Creates an empty list whose first item will get id `#1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the display index of an item.
    #[must_use]
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Returns the item currently open in the inline editor, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.is_editing)
    }

    /// The id the next successful [`add`](Self::add) will assign.
    #[must_use]
    pub const fn next_id(&self) -> ItemId {
        ItemId(self.next_id)
    }

    /// Appends a new item built from the entry dialog's text.
    ///
    /// The name is trimmed and must not be empty. The quantity text must be a
    /// whole number of at least 1.
    ///
    /// # Errors
    ///
    /// - [`ShopListError::EmptyName`] if `name` is blank
    /// - [`ShopListError::InvalidQuantity`] if `quantity` does not parse to a
    ///   positive integer
    /// - [`ShopListError::IdsExhausted`] if the id counter has no value left
    ///
    /// On error `self` is untouched and nothing should replace it.
    pub fn add(&self, name: &str, quantity: &str) -> Result<Self> {
        let _span = tracing::debug_span!("list_add", items = self.items.len()).entered();

        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("rejected add: empty name");
            return Err(ShopListError::EmptyName);
        }

        let Some(quantity) = parse_quantity(quantity) else {
            tracing::debug!(quantity_text = %quantity, "rejected add: invalid quantity");
            return Err(ShopListError::InvalidQuantity(quantity.to_string()));
        };

        let id = self.next_id();
        let Some(following) = self.next_id.checked_add(1) else {
            tracing::warn!(item_id = %id, "rejected add: id counter exhausted");
            return Err(ShopListError::IdsExhausted);
        };

        let mut next = self.clone();
        next.items.push(ShoppingItem::new(id, name.to_string(), quantity));
        next.next_id = following;

        tracing::debug!(item_id = %id, name = %name, quantity, "item added");
        Ok(next)
    }

    /// Opens the inline editor on `id` and closes it everywhere else.
    ///
    /// Switching from one item to another drops the unsaved edit of the first,
    /// since edit text only lives in the view until it is committed.
    #[must_use]
    pub fn begin_edit(&self, id: ItemId) -> Self {
        if self.get(id).is_none() {
            tracing::debug!(item_id = %id, "begin_edit on unknown item ignored");
            return self.clone();
        }

        let mut next = self.clone();
        for item in &mut next.items {
            item.is_editing = item.id == id;
        }

        tracing::debug!(item_id = %id, "editor opened");
        next
    }

    /// Saves the inline editor's text into `id` and closes the editor.
    ///
    /// The name is stored as given. Quantity text that is not a positive
    /// integer is stored as [`FALLBACK_QUANTITY`].
    #[must_use]
    pub fn commit_edit(&self, id: ItemId, name: &str, quantity: &str) -> Self {
        let Some(index) = self.position(id) else {
            tracing::debug!(item_id = %id, "commit_edit on unknown item ignored");
            return self.clone();
        };

        let quantity = parse_quantity(quantity).unwrap_or_else(|| {
            tracing::debug!(item_id = %id, quantity_text = %quantity, "unparseable quantity, using fallback");
            FALLBACK_QUANTITY
        });

        let mut next = self.clone();
        let item = &mut next.items[index];
        item.name = name.to_string();
        item.quantity = quantity;
        item.is_editing = false;

        tracing::debug!(item_id = %id, quantity, "edit committed");
        next
    }

    /// Removes `id`, keeping the order of everything else.
    #[must_use]
    pub fn delete(&self, id: ItemId) -> Self {
        let mut next = self.clone();
        next.items.retain(|item| item.id != id);

        if next.items.len() == self.items.len() {
            tracing::debug!(item_id = %id, "delete on unknown item ignored");
        } else {
            tracing::debug!(item_id = %id, remaining = next.items.len(), "item deleted");
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &ListState) -> Vec<ItemId> {
        list.items().iter().map(|item| item.id).collect()
    }

    fn names(list: &ListState) -> Vec<&str> {
        list.items().iter().map(|item| item.name.as_str()).collect()
    }

    fn three_items() -> ListState {
        ListState::new()
            .add("Bread", "1")
            .and_then(|l| l.add("Milk", "2"))
            .and_then(|l| l.add("Eggs", "12"))
            .unwrap()
    }

    #[test]
    fn add_rejects_blank_name() {
        let list = ListState::new();
        assert!(matches!(list.add("", "3"), Err(ShopListError::EmptyName)));
        assert!(matches!(list.add("  \t", "3"), Err(ShopListError::EmptyName)));
        assert!(list.is_empty());
    }

    #[test]
    fn add_rejects_bad_quantity() {
        let list = ListState::new();
        for text in ["0", "abc", "", "-2"] {
            let err = list.add("Milk", text).unwrap_err();
            assert!(matches!(err, ShopListError::InvalidQuantity(ref t) if t == text));
        }
        assert!(list.is_empty());
        assert_eq!(list.next_id(), ItemId(1));
    }

    #[test]
    fn add_appends_item_not_in_edit_mode() {
        let list = ListState::new().add("Milk", "2").unwrap();

        assert_eq!(list.len(), 1);
        let item = &list.items()[0];
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 2);
        assert!(!item.is_editing);
        assert_eq!(item.id, ItemId(1));
    }

    #[test]
    fn add_trims_name() {
        let list = ListState::new().add("  Apples ", " 4 ").unwrap();
        assert_eq!(list.items()[0].name, "Apples");
        assert_eq!(list.items()[0].quantity, 4);
    }

    #[test]
    fn add_leaves_receiver_untouched() {
        let before = ListState::new().add("Bread", "1").unwrap();
        let after = before.add("Milk", "2").unwrap();
        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let list = ListState::new().add("A", "1").unwrap();
        let first = list.items()[0].id;
        let list = list.delete(first).add("B", "1").unwrap();

        assert_ne!(list.items()[0].id, first);
        assert!(list.items()[0].id > first);
    }

    #[test]
    fn begin_edit_keeps_single_editor() {
        let list = three_items();
        let [a, b, c] = [ids(&list)[0], ids(&list)[1], ids(&list)[2]];

        let list = list.begin_edit(a).begin_edit(c).begin_edit(b);
        let editing: Vec<_> = list.items().iter().filter(|i| i.is_editing).collect();
        assert_eq!(editing.len(), 1);
        assert_eq!(editing[0].id, b);
    }

    #[test]
    fn begin_edit_unknown_id_is_noop() {
        let list = three_items().begin_edit(ItemId(2));
        assert_eq!(list.begin_edit(ItemId(99)), list);
    }

    #[test]
    fn commit_edit_falls_back_to_one() {
        let list = three_items();
        let id = ids(&list)[2];
        let list = list.begin_edit(id).commit_edit(id, "Eggs", "not-a-number");

        let item = list.get(id).unwrap();
        assert_eq!(item.quantity, FALLBACK_QUANTITY);
        assert!(!item.is_editing);
    }

    #[test]
    fn commit_edit_zero_falls_back_to_one() {
        let list = three_items();
        let id = ids(&list)[0];
        let list = list.commit_edit(id, "Bread", "0");
        assert_eq!(list.get(id).unwrap().quantity, 1);
    }

    #[test]
    fn commit_edit_applies_name_unvalidated() {
        let list = three_items();
        let id = ids(&list)[1];
        let list = list.begin_edit(id).commit_edit(id, "", "3");
        assert_eq!(list.get(id).unwrap().name, "");
        assert_eq!(list.get(id).unwrap().quantity, 3);
    }

    #[test]
    fn commit_edit_only_touches_target() {
        let list = three_items();
        let id = ids(&list)[1];
        let next = list.commit_edit(id, "Oat milk", "6");

        assert_eq!(names(&next), ["Bread", "Oat milk", "Eggs"]);
        assert_eq!(next.items()[0], list.items()[0]);
        assert_eq!(next.items()[2], list.items()[2]);
    }

    #[test]
    fn commit_edit_unknown_id_is_noop() {
        let list = three_items();
        assert_eq!(list.commit_edit(ItemId(42), "X", "9"), list);
    }

    #[test]
    fn delete_is_idempotent() {
        let list = three_items();
        let id = ids(&list)[0];
        let once = list.delete(id);
        assert_eq!(once.delete(id), once);
        assert_eq!(list.delete(ItemId(100)), list);
    }

    #[test]
    fn delete_preserves_order() {
        let list = three_items();
        let middle = ids(&list)[1];
        assert_eq!(names(&list.delete(middle)), ["Bread", "Eggs"]);
    }

    #[test]
    fn add_edit_delete_walkthrough() {
        let list = ListState::new().add("Bread", "1").unwrap().add("Milk", "2").unwrap();
        let [bread, milk] = [ids(&list)[0], ids(&list)[1]];

        let list = list.begin_edit(milk).commit_edit(milk, "Milk", "5").delete(bread);

        assert_eq!(list.len(), 1);
        let item = &list.items()[0];
        assert_eq!((item.name.as_str(), item.quantity, item.is_editing), ("Milk", 5, false));
    }

    #[test]
    fn ids_stay_distinct_across_many_adds() {
        let mut list = ListState::new();
        let mut seen = Vec::new();
        for round in 0..10 {
            list = list.add(&format!("item {round}"), "1").unwrap();
            let newest = list.items().last().unwrap().id;
            assert!(!seen.contains(&newest));
            seen.push(newest);
            if round % 3 == 0 {
                list = list.delete(newest);
            }
        }
    }

    #[test]
    fn add_refuses_to_wrap_id_counter() {
        let list = ListState {
            items: Vec::new(),
            next_id: u64::MAX,
        };

        let err = list.add("Milk", "1").unwrap_err();
        assert!(matches!(err, ShopListError::IdsExhausted));
        assert!(!err.is_validation());
        assert!(list.is_empty());
        assert_eq!(list.next_id(), ItemId(u64::MAX));
    }
}
