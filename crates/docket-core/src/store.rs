//! The in-memory item store.

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::item::Item;

/// Ordered, append-only collection of [`Item`]s for the process lifetime.
///
/// The sequence lives entirely in memory: it starts empty, grows only
/// through [`append`](ItemStore::append), and is lost on process exit.
/// Insertion order is the only identity an item has; operations address
/// items by zero-based position.
///
/// The HTTP layer serves requests concurrently, so the sequence sits behind
/// a lock. Lock sections are short and never held across await points.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Appends an item and returns a snapshot of the full sequence.
    ///
    /// The whole list, not just the created item, is the create operation's
    /// response shape.
    pub fn append(&self, item: Item) -> Vec<Item> {
        let mut items = self.items.write();
        items.push(item);
        items.clone()
    }

    /// Returns the first `limit` items in insertion order.
    ///
    /// A `limit` of zero or less yields an empty list; a `limit` beyond the
    /// current length yields the whole sequence.
    #[must_use]
    pub fn list(&self, limit: i64) -> Vec<Item> {
        let items = self.items.read();
        // Negative limits clamp to zero; limits past usize::MAX (32-bit
        // targets) clamp to the full length.
        let take = usize::try_from(limit.max(0))
            .unwrap_or(usize::MAX)
            .min(items.len());
        items[..take].to_vec()
    }

    /// Returns the item at zero-based position `item_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ItemNotFound`] when `item_id` falls outside
    /// `[0, len)`. Negative positions are never valid.
    pub fn get(&self, item_id: i64) -> Result<Item> {
        let items = self.items.read();
        usize::try_from(item_id)
            .ok()
            .and_then(|idx| items.get(idx).cloned())
            .ok_or_else(|| Error::item_not_found(item_id))
    }

    /// Returns the number of items stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}
