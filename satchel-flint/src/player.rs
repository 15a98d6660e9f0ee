//! Test player implementation for satchel.

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, MutexGuard};
use satchel_core::{
    entity::{Entity, ViewerSet},
    inventory::{InventoryError, NotifyTargets, PlayerInventory},
    player::NetworkConnection,
};
use uuid::Uuid;

use crate::FlintConnection;

/// A holder entity that keeps everything in memory.
pub struct TestPlayer {
    entity_id: i32,
    uuid: Uuid,
    /// The player's connection, if it has one.
    connection: Option<Arc<FlintConnection>>,
    /// Players that can currently see this one.
    seen_by: ViewerSet,
    inventory: Mutex<PlayerInventory>,
}

impl TestPlayer {
    /// Creates a player with an empty default inventory.
    #[must_use]
    pub fn new(entity_id: i32, connection: Option<Arc<FlintConnection>>) -> Arc<Self> {
        let uuid = Uuid::new_v4();
        Arc::new_cyclic(|me: &Weak<Self>| {
            let holder: Weak<dyn Entity> = me.clone();
            Self {
                entity_id,
                uuid,
                connection,
                seen_by: ViewerSet::new(uuid),
                inventory: Mutex::new(PlayerInventory::new(holder)),
            }
        })
    }

    /// Creates a player with a fresh open connection.
    #[must_use]
    pub fn connected(entity_id: i32) -> Arc<Self> {
        Self::new(entity_id, Some(FlintConnection::new()))
    }

    /// Returns the recording connection, if the player has one.
    #[must_use]
    pub fn flint_connection(&self) -> Option<&Arc<FlintConnection>> {
        self.connection.as_ref()
    }

    /// Locks the player's inventory.
    #[must_use]
    pub fn inventory(&self) -> MutexGuard<'_, PlayerInventory> {
        self.inventory.lock()
    }

    /// Makes this player visible to `viewer`.
    pub fn start_seen_by(&self, viewer: Arc<TestPlayer>) -> bool {
        let viewer_id = viewer.entity_id;
        let added = self.seen_by.add(viewer);
        if added {
            log::debug!("Player {} is now seen by {viewer_id}", self.entity_id);
        }
        added
    }

    /// Hides this player from the viewer with the given UUID.
    pub fn stop_seen_by(&self, viewer: Uuid) -> bool {
        self.seen_by.remove(viewer).is_some()
    }

    /// Applies a hotbar selection reported by this player's own client.
    pub fn handle_set_carried_item(&self, slot: usize) -> Result<(), InventoryError> {
        self.inventory().set_held_index(slot, NotifyTargets::ViewersOnly)
    }
}

impl Entity for TestPlayer {
    fn entity_id(&self) -> i32 {
        self.entity_id
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn viewers(&self) -> Vec<Arc<dyn Entity>> {
        self.seen_by.snapshot()
    }

    fn connection(&self) -> Option<Arc<dyn NetworkConnection>> {
        self.connection
            .clone()
            .map(|connection| connection as Arc<dyn NetworkConnection>)
    }
}
