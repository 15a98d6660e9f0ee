//! Hotbar selection tracking.

use std::mem;

use super::InventoryError;

/// Who should hear about a held-slot change.
///
/// Changes that came from the holder's own client use [`NotifyTargets::ViewersOnly`] so the
/// selection is not echoed back to the connection that reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyTargets {
    /// Nobody is notified.
    None,
    /// Only the holder's viewers receive an equipment change.
    ViewersOnly,
    /// The holder's connection is resynced and the viewers receive an equipment change.
    #[default]
    All,
}

impl NotifyTargets {
    /// Returns whether the holder's own connection receives a selection sync.
    #[must_use]
    pub const fn syncs_holder(self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns whether viewers of the holder receive an equipment change.
    #[must_use]
    pub const fn notifies_viewers(self) -> bool {
        matches!(self, Self::ViewersOnly | Self::All)
    }
}

/// The selected hotbar slot.
///
/// The index is always inside `0..hotbar_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldSlot {
    index: usize,
    hotbar_size: usize,
}

impl HeldSlot {
    /// Creates a tracker holding slot 0.
    ///
    /// `hotbar_size` must be at least 1.
    #[must_use]
    pub const fn new(hotbar_size: usize) -> Self {
        Self {
            index: 0,
            hotbar_size,
        }
    }

    /// Returns the currently held index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of hotbar slots.
    #[must_use]
    pub const fn hotbar_size(&self) -> usize {
        self.hotbar_size
    }

    /// Returns whether `slot` is a hotbar slot.
    #[must_use]
    pub const fn is_hotbar_slot(&self, slot: usize) -> bool {
        slot < self.hotbar_size
    }

    /// Returns `slot` if it is a hotbar slot.
    pub fn check(&self, slot: usize) -> Result<usize, InventoryError> {
        if self.is_hotbar_slot(slot) {
            Ok(slot)
        } else {
            Err(InventoryError::InvalidSlot {
                slot,
                hotbar_size: self.hotbar_size,
            })
        }
    }

    /// Selects `slot`, returning the previously held index.
    pub fn select(&mut self, slot: usize) -> Result<usize, InventoryError> {
        let slot = self.check(slot)?;
        Ok(mem::replace(&mut self.index, slot))
    }
}
