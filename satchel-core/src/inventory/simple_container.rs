//! A simple container implementation backed by a Vec.

use std::sync::Arc;

use crate::item_stack::ItemStack;

use super::{Container, ContainerListener, InventoryError, ListenerSet, container::replace_slot};

/// A container that stores items in a fixed-size vector and reports changes to its
/// listeners only.
#[derive(Debug)]
pub struct SimpleContainer {
    items: Vec<ItemStack>,
    listeners: ListenerSet,
    changed: bool,
}

impl SimpleContainer {
    /// Creates a new container with the given number of slots.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            items: vec![ItemStack::empty(); size],
            listeners: ListenerSet::new(),
            changed: false,
        }
    }

    /// Registers a listener. Returns false if it was already registered.
    pub fn add_listener(&mut self, listener: Arc<dyn ContainerListener>) -> bool {
        self.listeners.add(listener)
    }

    /// Unregisters a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, listener: &Arc<dyn ContainerListener>) -> bool {
        self.listeners.remove(listener)
    }

    /// Returns the registered listeners.
    #[must_use]
    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    /// Returns whether the container has been modified since the last check.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Clears the changed flag.
    pub fn clear_changed(&mut self) {
        self.changed = false;
    }

    fn on_slot_change(&mut self, slot: usize, previous: ItemStack) {
        self.changed = true;
        self.listeners.notify(&*self, slot, &previous);
    }
}

impl Container for SimpleContainer {
    fn items(&self) -> &[ItemStack] {
        &self.items
    }

    fn set_item(&mut self, slot: usize, item: ItemStack) -> Result<(), InventoryError> {
        if let Some(previous) = replace_slot(&mut self.items, slot, item)? {
            self.on_slot_change(slot, previous);
        }
        Ok(())
    }
}
