//! In-process observers of container mutations.

use std::{fmt, sync::Arc};

use crate::item_stack::ItemStack;

use super::Container;

/// Receives a callback for every slot whose content changed.
///
/// Listeners only get a shared reference to the container, so they cannot start another
/// mutation while the current one is still being announced.
pub trait ContainerListener: Send + Sync {
    /// Called after `slot` changed; `previous` is what the slot held before.
    fn on_slot_change(&self, container: &dyn Container, slot: usize, previous: &ItemStack);
}

impl<F> ContainerListener for F
where
    F: Fn(&dyn Container, usize, &ItemStack) + Send + Sync,
{
    fn on_slot_change(&self, container: &dyn Container, slot: usize, previous: &ItemStack) {
        self(container, slot, previous);
    }
}

/// The listeners registered on one container, in registration order.
#[derive(Clone, Default)]
pub struct ListenerSet {
    listeners: Vec<Arc<dyn ContainerListener>>,
}

impl ListenerSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. Returns false if that exact listener is already registered.
    pub fn add(&mut self, listener: Arc<dyn ContainerListener>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Unregisters a listener. Returns false if it was not registered.
    pub fn remove(&mut self, listener: &Arc<dyn ContainerListener>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !Arc::ptr_eq(l, listener));
        self.listeners.len() != before
    }

    /// Returns whether the listener is registered.
    #[must_use]
    pub fn contains(&self, listener: &Arc<dyn ContainerListener>) -> bool {
        self.listeners.iter().any(|l| Arc::ptr_eq(l, listener))
    }

    /// Unregisters every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Iterates the listeners in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ContainerListener>> {
        self.listeners.iter()
    }

    /// Calls every listener, in registration order.
    pub fn notify(&self, container: &dyn Container, slot: usize, previous: &ItemStack) {
        for listener in &self.listeners {
            listener.on_slot_change(container, slot, previous);
        }
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.listeners.len())
            .finish()
    }
}
