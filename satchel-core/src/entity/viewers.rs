//! The set of entities that can currently see a holder.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use uuid::Uuid;

use super::Entity;

/// Viewers of one entity, keyed by UUID.
///
/// Owned by the observed entity, which hands out snapshots through [`Entity::viewers`].
pub struct ViewerSet {
    /// The entity being observed.
    owner: Uuid,
    /// Entities that can currently see the owner.
    seen_by: RwLock<FxHashMap<Uuid, Arc<dyn Entity>>>,
}

impl ViewerSet {
    /// Creates an empty set for the entity with the given UUID.
    #[must_use]
    pub fn new(owner: Uuid) -> Self {
        Self {
            owner,
            seen_by: RwLock::new(FxHashMap::default()),
        }
    }

    /// Adds a viewer. Returns false if it was already present or is the owner itself.
    pub fn add(&self, viewer: Arc<dyn Entity>) -> bool {
        let uuid = viewer.uuid();
        // Don't track self
        if uuid == self.owner {
            return false;
        }

        let mut seen_by = self.seen_by.write();
        if seen_by.contains_key(&uuid) {
            return false;
        }
        seen_by.insert(uuid, viewer);
        true
    }

    /// Removes a viewer, returning it if it was present.
    pub fn remove(&self, uuid: Uuid) -> Option<Arc<dyn Entity>> {
        self.seen_by.write().remove(&uuid)
    }

    /// Returns whether the entity is currently a viewer.
    #[must_use]
    pub fn contains(&self, uuid: Uuid) -> bool {
        self.seen_by.read().contains_key(&uuid)
    }

    /// Returns a snapshot of the current viewers.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<dyn Entity>> {
        self.seen_by.read().values().cloned().collect()
    }

    /// Returns the number of viewers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen_by.read().len()
    }

    /// Returns true if nobody is watching.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen_by.read().is_empty()
    }

    /// Removes every viewer.
    pub fn clear(&self) {
        self.seen_by.write().clear();
    }
}
