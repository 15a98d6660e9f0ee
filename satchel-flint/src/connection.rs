//! A connection that records what the server pushed to it.

use std::{
    mem,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use parking_lot::Mutex;
use satchel_core::{ItemStack, entity::Entity, inventory::Container, player::NetworkConnection};

/// An update received by a [`FlintConnection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlintEvent {
    /// The client was told which hotbar slot it holds.
    SelectedHotbarSlot(usize),
    /// The content of an inventory slot was sent.
    SetSlot {
        /// The slot index.
        slot: usize,
        /// The stack the slot held when it was sent.
        item: ItemStack,
    },
    /// Another entity's held item changed.
    Equipment {
        /// The entity whose equipment changed.
        holder: i32,
        /// What it now holds.
        main_hand: ItemStack,
    },
}

/// Test connection that records events for assertions.
#[derive(Debug, Default)]
pub struct FlintConnection {
    closed: AtomicBool,
    events: Mutex<Vec<FlintEvent>>,
}

impl FlintConnection {
    /// Creates an open connection.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Reopens a closed connection.
    pub fn reconnect(&self) {
        self.closed.store(false, Ordering::Release);
    }

    /// Returns everything received so far.
    #[must_use]
    pub fn events(&self) -> Vec<FlintEvent> {
        self.events.lock().clone()
    }

    /// Returns and forgets everything received so far.
    pub fn take_events(&self) -> Vec<FlintEvent> {
        mem::take(&mut *self.events.lock())
    }

    /// Slot indices received through slot syncs, in order.
    #[must_use]
    pub fn synced_slots(&self) -> Vec<usize> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                FlintEvent::SetSlot { slot, .. } => Some(*slot),
                _ => None,
            })
            .collect()
    }

    /// Number of equipment changes received for the given holder.
    #[must_use]
    pub fn equipment_changes_for(&self, holder: i32) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, FlintEvent::Equipment { holder: h, .. } if *h == holder))
            .count()
    }
}

impl NetworkConnection for FlintConnection {
    fn closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    fn sync_selected_hotbar_slot(&self, slot: usize) {
        self.events.lock().push(FlintEvent::SelectedHotbarSlot(slot));
    }

    fn sync_slot(&self, inventory: &dyn Container, slot: usize) {
        match inventory.get_item(slot) {
            Ok(item) => self.events.lock().push(FlintEvent::SetSlot {
                slot,
                item: item.clone(),
            }),
            Err(err) => log::warn!("Ignoring slot sync: {err}"),
        }
    }

    fn on_equipment_change(&self, holder: &dyn Entity, main_hand: &ItemStack) {
        self.events.lock().push(FlintEvent::Equipment {
            holder: holder.entity_id(),
            main_hand: main_hand.clone(),
        });
    }
}
