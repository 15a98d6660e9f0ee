//! Container trait for item storage.

use std::mem;

use crate::item_stack::ItemStack;

use super::InventoryError;

/// A trait for objects that store items in a fixed number of slots.
///
/// Storage is only readable from outside; [`Container::set_item`] is the single write path
/// and every provided mutator goes through it, so observers hear about each changed slot.
///
/// ```compile_fail
/// use satchel_core::{ItemStack, inventory::{Container, SimpleContainer}};
///
/// let mut container = SimpleContainer::new(1);
/// container.items()[0] = ItemStack::new("minecraft:stone", 1);
/// ```
pub trait Container: Send + Sync {
    /// Returns the slot storage.
    fn items(&self) -> &[ItemStack];

    /// Sets the item in the given slot.
    ///
    /// Fails without touching anything when `slot` is out of range. Writing the value a slot
    /// already holds is a no-op and notifies nobody.
    fn set_item(&mut self, slot: usize, item: ItemStack) -> Result<(), InventoryError>;

    /// Returns the number of slots in this container.
    fn size(&self) -> usize {
        self.items().len()
    }

    /// Returns `slot` if it addresses a slot of this container.
    fn check_slot(&self, slot: usize) -> Result<usize, InventoryError> {
        if slot < self.size() {
            Ok(slot)
        } else {
            Err(InventoryError::OutOfRange {
                slot,
                size: self.size(),
            })
        }
    }

    /// Gets the item in the given slot.
    fn get_item(&self, slot: usize) -> Result<&ItemStack, InventoryError> {
        let slot = self.check_slot(slot)?;
        Ok(&self.items()[slot])
    }

    /// Empties the given slot.
    fn clear(&mut self, slot: usize) -> Result<(), InventoryError> {
        self.set_item(slot, ItemStack::empty())
    }

    /// Empties every slot, notifying once per slot that held something.
    fn clear_all(&mut self) -> Result<(), InventoryError> {
        for slot in 0..self.size() {
            if !self.items()[slot].is_empty() {
                self.set_item(slot, ItemStack::empty())?;
            }
        }
        Ok(())
    }

    /// Replaces the whole content, slot by slot.
    ///
    /// Slots past the end of `items` are emptied. Fails without touching anything if
    /// `items` holds more stacks than the container has slots.
    fn set_contents(&mut self, items: Vec<ItemStack>) -> Result<(), InventoryError> {
        if items.len() > self.size() {
            return Err(InventoryError::OutOfRange {
                slot: self.size(),
                size: self.size(),
            });
        }
        let mut items = items.into_iter();
        for slot in 0..self.size() {
            self.set_item(slot, items.next().unwrap_or_default())?;
        }
        Ok(())
    }

    /// Swaps the content of two slots.
    fn swap_slots(&mut self, slot_a: usize, slot_b: usize) -> Result<(), InventoryError> {
        let slot_a = self.check_slot(slot_a)?;
        let slot_b = self.check_slot(slot_b)?;
        let item_a = self.items()[slot_a].clone();
        let item_b = self.items()[slot_b].clone();
        self.set_item(slot_a, item_b)?;
        self.set_item(slot_b, item_a)
    }

    /// Returns true if all slots are empty.
    fn is_empty(&self) -> bool {
        self.items().iter().all(ItemStack::is_empty)
    }

    /// Finds the first empty slot.
    fn first_empty(&self) -> Option<usize> {
        self.items().iter().position(ItemStack::is_empty)
    }
}

/// Writes `item` into `items[slot]`.
///
/// Returns the previous stack when the slot actually changed, `None` when it already held
/// an equal stack.
pub(crate) fn replace_slot(
    items: &mut [ItemStack],
    slot: usize,
    item: ItemStack,
) -> Result<Option<ItemStack>, InventoryError> {
    let size = items.len();
    let Some(current) = items.get_mut(slot) else {
        return Err(InventoryError::OutOfRange { slot, size });
    };
    if *current == item {
        return Ok(None);
    }
    Ok(Some(mem::replace(current, item)))
}
