//! Slot change fan-out for player inventories.
//!
//! Every change of a [`PlayerInventory`] slot is announced by running an ordered list of
//! [`FanoutStage`]s. The standard pipeline is:
//!
//! 1. [`NotifyListeners`]: local listeners, in registration order.
//! 2. [`SyncViewerSlots`]: a slot sync to every viewer of the holder with a live connection.
//! 3. [`HeldSlotEquipment`]: when the changed slot is the held one, an equipment change to
//!    the same viewers.
//!
//! Stages don't return errors and don't see each other; a viewer without a live connection
//! is skipped without affecting the rest of the pipeline.

use std::{fmt, sync::Arc};

use log::trace;

use crate::{entity::Entity, item_stack::ItemStack, player::NetworkConnection};

use super::PlayerInventory;

/// One announced slot change.
pub struct SlotChange<'a> {
    /// The inventory that changed, already holding the new value.
    pub inventory: &'a PlayerInventory,
    /// The holder, if it is still alive.
    pub holder: Option<Arc<dyn Entity>>,
    /// The slot that changed.
    pub slot: usize,
    /// What the slot held before.
    pub previous: &'a ItemStack,
}

/// A step of the slot change pipeline.
pub trait FanoutStage: Send + Sync {
    /// A short name used in debug output.
    fn name(&self) -> &'static str;

    /// Announces the change to this stage's observers.
    fn dispatch(&self, change: &SlotChange<'_>);
}

/// Calls the inventory's registered listeners.
pub struct NotifyListeners;

impl FanoutStage for NotifyListeners {
    fn name(&self) -> &'static str {
        "listeners"
    }

    fn dispatch(&self, change: &SlotChange<'_>) {
        change
            .inventory
            .listeners()
            .notify(change.inventory, change.slot, change.previous);
    }
}

/// Pushes the changed slot to every connected viewer of the holder.
pub struct SyncViewerSlots;

impl FanoutStage for SyncViewerSlots {
    fn name(&self) -> &'static str {
        "viewer-slots"
    }

    fn dispatch(&self, change: &SlotChange<'_>) {
        let Some(holder) = &change.holder else {
            return;
        };
        for_each_connected_viewer(holder.as_ref(), |connection| {
            connection.sync_slot(change.inventory, change.slot);
        });
    }
}

/// Announces an equipment change when the held slot's content changed.
pub struct HeldSlotEquipment;

impl FanoutStage for HeldSlotEquipment {
    fn name(&self) -> &'static str {
        "held-equipment"
    }

    fn dispatch(&self, change: &SlotChange<'_>) {
        if change.slot != change.inventory.held_index() {
            return;
        }
        if let Some(holder) = &change.holder {
            broadcast_equipment_change(holder.as_ref(), change.inventory.item_in_hand());
        }
    }
}

/// The ordered stages run for every slot change.
pub struct ObserverFanout {
    stages: Vec<Box<dyn FanoutStage>>,
}

impl Default for ObserverFanout {
    fn default() -> Self {
        Self::standard()
    }
}

impl ObserverFanout {
    /// A pipeline without stages.
    #[must_use]
    pub fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    /// Listeners, then viewer slot syncs, then the held slot equipment change.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            stages: vec![
                Box::new(NotifyListeners),
                Box::new(SyncViewerSlots),
                Box::new(HeldSlotEquipment),
            ],
        }
    }

    /// Appends a stage that runs after the existing ones.
    pub fn push_stage(&mut self, stage: Box<dyn FanoutStage>) {
        self.stages.push(stage);
    }

    /// Names of the stages, in run order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|stage| stage.name())
    }

    /// Runs every stage for one change.
    pub fn dispatch(&self, change: &SlotChange<'_>) {
        for stage in &self.stages {
            stage.dispatch(change);
        }
    }
}

impl fmt::Debug for ObserverFanout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}

/// Calls `push` with the live connection of every viewer of `holder`.
pub fn for_each_connected_viewer(
    holder: &dyn Entity,
    mut push: impl FnMut(&dyn NetworkConnection),
) {
    for viewer in holder.viewers() {
        match viewer.live_connection() {
            Some(connection) => push(connection.as_ref()),
            None => trace!(
                "Viewer {} of entity {} has no live connection, skipping",
                viewer.entity_id(),
                holder.entity_id()
            ),
        }
    }
}

/// Tells every connected viewer of `holder` that it now holds `main_hand`.
pub fn broadcast_equipment_change(holder: &dyn Entity, main_hand: &ItemStack) {
    for_each_connected_viewer(holder, |connection| {
        connection.on_equipment_change(holder, main_hand);
    });
}
