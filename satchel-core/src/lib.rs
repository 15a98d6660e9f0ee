//! # Satchel Core
//!
//! Player inventories for the server: slot storage with change hooks, hotbar selection,
//! and the fan-out that keeps listeners, viewers and the holder's own client in sync with
//! every mutation.
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    missing_docs,
    clippy::unwrap_used
)]
#![allow(
    clippy::single_call_fn,
    clippy::multiple_inherent_impl,
    clippy::shadow_unrelated,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata
)]

pub mod config;
pub mod entity;
pub mod inventory;
pub mod item_stack;
pub mod player;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, InventoryConfig};
pub use item_stack::ItemStack;
