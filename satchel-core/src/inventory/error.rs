//! Errors raised by inventory operations.

use thiserror::Error;

/// A rejected inventory operation.
///
/// Both variants are raised before any slot or selection state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// The slot index is outside the container.
    #[error("slot {slot} is out of range (container has {size} slots)")]
    OutOfRange {
        /// The rejected index.
        slot: usize,
        /// The container capacity.
        size: usize,
    },
    /// The index is not part of the hotbar.
    #[error("{slot} is not a valid hotbar slot index (expected 0 - {})", .hotbar_size.saturating_sub(1))]
    InvalidSlot {
        /// The rejected index.
        slot: usize,
        /// The number of hotbar slots.
        hotbar_size: usize,
    },
}
