//! Minimal item stack value stored in inventory slots.

use std::fmt;

/// The item key used by empty stacks.
pub const AIR: &str = "minecraft:air";

/// A stack of items occupying one slot.
///
/// The inventory core treats stacks as opaque values: the only thing it relies on is
/// equality, which decides whether a write actually changed a slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemStack {
    item: &'static str,
    count: i32,
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

impl ItemStack {
    /// Creates a stack of `count` items of the given kind.
    ///
    /// A non-positive count or the air key produces an empty stack.
    #[must_use]
    pub fn new(item: &'static str, count: i32) -> Self {
        if count <= 0 || item == AIR {
            return Self::empty();
        }
        Self { item, count }
    }

    /// Creates an empty stack.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            item: AIR,
            count: 0,
        }
    }

    /// Returns true if this stack holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count <= 0 || self.item == AIR
    }

    /// Returns the item key.
    #[must_use]
    pub fn item(&self) -> &'static str {
        self.item
    }

    /// Returns the number of items in the stack.
    #[must_use]
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Returns a copy of this stack with a different count.
    #[must_use]
    pub fn copy_with_count(&self, count: i32) -> Self {
        Self::new(self.item, count)
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            write!(f, "{} x{}", self.item, self.count)
        }
    }
}
