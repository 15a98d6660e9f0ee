//! This module contains the inventory system.

mod container;
mod error;
pub mod fanout;
mod held_slot;
mod listener;
mod player_inventory;
mod simple_container;

pub use container::Container;
pub use error::InventoryError;
pub use fanout::{FanoutStage, ObserverFanout, SlotChange};
pub use held_slot::{HeldSlot, NotifyTargets};
pub use listener::{ContainerListener, ListenerSet};
pub use player_inventory::{HOTBAR_SIZE, INVENTORY_SIZE, PlayerInventory};
pub use simple_container::SimpleContainer;
