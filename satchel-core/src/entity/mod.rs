//! Entities that hold inventories or watch those that do.

mod viewers;

pub use viewers::ViewerSet;

use std::sync::Arc;

use uuid::Uuid;

use crate::player::NetworkConnection;

/// Core entity trait that holders and viewers implement.
pub trait Entity: Send + Sync {
    /// Get the entity's unique ID
    fn entity_id(&self) -> i32;

    /// Get the entity's UUID
    fn uuid(&self) -> Uuid;

    /// Entities currently observing this one.
    ///
    /// Read at notification time; the result is a snapshot.
    fn viewers(&self) -> Vec<Arc<dyn Entity>> {
        Vec::new()
    }

    /// The entity's remote connection, if it has one.
    fn connection(&self) -> Option<Arc<dyn NetworkConnection>> {
        None
    }

    /// The entity's connection, only if it is currently open.
    fn live_connection(&self) -> Option<Arc<dyn NetworkConnection>> {
        self.connection().filter(|connection| connection.is_connected())
    }
}
