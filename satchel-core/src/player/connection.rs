//! This module contains the `NetworkConnection` trait that abstracts network connections.
//!
//! The trait is object-safe so that real network sessions and test connections (like the
//! recording `FlintConnection`) can both sit behind `dyn NetworkConnection`.

use crate::{entity::Entity, inventory::Container, item_stack::ItemStack};

/// An object-safe trait for the inventory updates a connection can push.
///
/// Every push is fire-and-forget: implementations queue or write the update and return
/// immediately. Callers check [`NetworkConnection::is_connected`] first and never retry.
pub trait NetworkConnection: Send + Sync {
    /// Returns whether the connection is closed.
    fn closed(&self) -> bool;

    /// Returns whether updates pushed now can reach the client.
    fn is_connected(&self) -> bool {
        !self.closed()
    }

    /// Closes the connection.
    fn close(&self);

    /// Tells the client which hotbar slot its player is holding.
    fn sync_selected_hotbar_slot(&self, slot: usize);

    /// Sends the current content of `slot` in `inventory`.
    fn sync_slot(&self, inventory: &dyn Container, slot: usize);

    /// Tells the client that `holder` is now holding something else.
    ///
    /// The held stack is passed along so implementations never need to lock the holder's
    /// inventory, which is still borrowed while this runs.
    fn on_equipment_change(&self, holder: &dyn Entity, main_hand: &ItemStack);
}
