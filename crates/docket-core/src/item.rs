//! The to-do item domain type.

use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// `text` is deliberately optional: the wire format accepts an item without
/// text, and a missing value stays distinct from an empty string. It
/// serializes as JSON `null` when absent. An item carries no identifier;
/// its identity is its position in the store's sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Descriptive text, `null` when never provided.
    #[serde(default)]
    pub text: Option<String>,

    /// Completion flag.
    #[serde(default)]
    pub is_done: bool,
}

impl Item {
    /// Creates a new, not-yet-done item with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            is_done: false,
        }
    }

    /// Marks the item as done.
    #[must_use]
    pub fn done(mut self) -> Self {
        self.is_done = true;
        self
    }
}
