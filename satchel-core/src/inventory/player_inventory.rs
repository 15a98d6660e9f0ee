//! Player inventory implementation.

use std::sync::{Arc, Weak};

use log::{debug, warn};

use crate::{
    config::{ConfigError, InventoryConfig},
    entity::Entity,
    item_stack::ItemStack,
};

use super::{
    Container, ContainerListener, HeldSlot, InventoryError, ListenerSet, NotifyTargets,
    ObserverFanout,
    container::replace_slot,
    fanout::{self, SlotChange},
};

/// The number of main inventory slots.
pub const INVENTORY_SIZE: usize = 36;
/// The number of hotbar slots.
pub const HOTBAR_SIZE: usize = 9;

/// The player's inventory.
///
/// Contains 36 main slots by default, where the first 9 are the hotbar. Every slot change
/// runs the inventory's [`ObserverFanout`], and every held slot change notifies the
/// holder's viewers.
#[derive(Debug)]
pub struct PlayerInventory {
    /// The main inventory slots.
    items: Vec<ItemStack>,
    /// The currently selected hotbar slot.
    held: HeldSlot,
    /// The entity owning this inventory.
    holder: Weak<dyn Entity>,
    /// Local observers of slot changes.
    listeners: ListenerSet,
    /// Stages run for every slot change.
    fanout: ObserverFanout,
    /// Tracks whether the inventory has been modified.
    times_changed: u32,
}

impl PlayerInventory {
    /// Creates an empty inventory with the default player layout.
    #[must_use]
    pub fn new(holder: Weak<dyn Entity>) -> Self {
        Self::build(holder, InventoryConfig::PLAYER)
    }

    /// Creates an empty inventory laid out according to `config`.
    pub fn with_config(
        holder: Weak<dyn Entity>,
        config: InventoryConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(holder, config))
    }

    fn build(holder: Weak<dyn Entity>, config: InventoryConfig) -> Self {
        Self {
            items: vec![ItemStack::empty(); config.capacity],
            held: HeldSlot::new(config.hotbar_size),
            holder,
            listeners: ListenerSet::new(),
            fanout: ObserverFanout::standard(),
            times_changed: 0,
        }
    }

    /// Returns the entity owning this inventory, if it is still alive.
    #[must_use]
    pub fn holder(&self) -> Option<Arc<dyn Entity>> {
        self.holder.upgrade()
    }

    /// Returns the number of hotbar slots.
    #[must_use]
    pub fn hotbar_size(&self) -> usize {
        self.held.hotbar_size()
    }

    /// Returns whether the given slot is a hotbar slot.
    #[must_use]
    pub fn is_hotbar_slot(&self, slot: usize) -> bool {
        self.held.is_hotbar_slot(slot)
    }

    /// Returns the item in the given hotbar slot.
    pub fn hotbar_slot_item(&self, slot: usize) -> Result<&ItemStack, InventoryError> {
        let slot = self.held.check(slot)?;
        self.get_item(slot)
    }

    /// Returns the currently selected hotbar slot.
    #[must_use]
    pub fn held_index(&self) -> usize {
        self.held.index()
    }

    /// Selects a hotbar slot.
    ///
    /// `targets` decides who hears about it: selections reported by the holder's own
    /// client should use [`NotifyTargets::ViewersOnly`] so they are not echoed back.
    pub fn set_held_index(
        &mut self,
        slot: usize,
        targets: NotifyTargets,
    ) -> Result<(), InventoryError> {
        let previous = self.held.select(slot)?;
        debug!("Held slot changed from {previous} to {slot} ({targets:?})");

        if targets == NotifyTargets::None {
            return Ok(());
        }
        let Some(holder) = self.holder() else {
            warn!("Held slot changed on an inventory whose holder is gone");
            return Ok(());
        };

        if targets.syncs_holder() {
            if let Some(connection) = holder.live_connection() {
                connection.sync_selected_hotbar_slot(slot);
            }
        }
        if targets.notifies_viewers() {
            fanout::broadcast_equipment_change(holder.as_ref(), self.item_in_hand());
        }
        Ok(())
    }

    /// Returns the currently held item.
    #[must_use]
    pub fn item_in_hand(&self) -> &ItemStack {
        // The held index is always a hotbar slot, and the hotbar never exceeds capacity.
        &self.items[self.held.index()]
    }

    /// Replaces the currently held item, notifying like any other slot write.
    pub fn set_item_in_hand(&mut self, item: ItemStack) -> Result<(), InventoryError> {
        self.set_item(self.held.index(), item)
    }

    /// Registers a listener. Returns false if it was already registered.
    pub fn add_listener(&mut self, listener: Arc<dyn ContainerListener>) -> bool {
        self.listeners.add(listener)
    }

    /// Unregisters a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, listener: &Arc<dyn ContainerListener>) -> bool {
        self.listeners.remove(listener)
    }

    /// Unregisters every listener.
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Returns the registered listeners.
    #[must_use]
    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    /// Returns the slot change pipeline, for adding stages.
    pub fn fanout_mut(&mut self) -> &mut ObserverFanout {
        &mut self.fanout
    }

    /// Returns the number of times the inventory has been modified.
    #[must_use]
    pub fn times_changed(&self) -> u32 {
        self.times_changed
    }

    fn on_slot_change(&mut self, slot: usize, previous: ItemStack) {
        self.times_changed = self.times_changed.wrapping_add(1);

        let inventory = &*self;
        let change = SlotChange {
            inventory,
            holder: inventory.holder(),
            slot,
            previous: &previous,
        };
        inventory.fanout.dispatch(&change);
    }
}

impl Container for PlayerInventory {
    fn items(&self) -> &[ItemStack] {
        &self.items
    }

    fn set_item(&mut self, slot: usize, item: ItemStack) -> Result<(), InventoryError> {
        if let Some(previous) = replace_slot(&mut self.items, slot, item)? {
            self.on_slot_change(slot, previous);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Weak};

    use parking_lot::Mutex;

    use super::*;
    use crate::{
        player::NetworkConnection,
        test_support::{Pushed, RecordingListener, TestConnection, TestEntity},
    };

    fn sword() -> ItemStack {
        ItemStack::new("minecraft:iron_sword", 1)
    }

    fn inventory_of(holder: &Arc<TestEntity>) -> PlayerInventory {
        PlayerInventory::new(Arc::downgrade(holder) as Weak<dyn Entity>)
    }

    #[test]
    fn test_default_layout() {
        let holder = TestEntity::new(1, None);
        let inventory = inventory_of(&holder);
        assert_eq!(inventory.size(), INVENTORY_SIZE);
        assert_eq!(inventory.hotbar_size(), HOTBAR_SIZE);
        assert_eq!(inventory.held_index(), 0);
        assert!(inventory.is_empty());
        assert_eq!(inventory.holder().map(|h| h.entity_id()), Some(1));
    }

    #[test]
    fn test_set_held_index_accepts_whole_hotbar() {
        let holder = TestEntity::new(1, None);
        let mut inventory = inventory_of(&holder);
        for slot in 0..HOTBAR_SIZE {
            inventory.set_held_index(slot, NotifyTargets::All).unwrap();
            assert_eq!(inventory.held_index(), slot);
        }
    }

    #[test]
    fn test_set_held_index_rejects_outside_hotbar() {
        let connection = TestConnection::new();
        let holder = TestEntity::new(1, Some(connection.clone()));
        let mut inventory = inventory_of(&holder);
        inventory.set_held_index(2, NotifyTargets::None).unwrap();

        for slot in [9, 10, 35, 36, usize::MAX] {
            assert_eq!(
                inventory.set_held_index(slot, NotifyTargets::All),
                Err(InventoryError::InvalidSlot {
                    slot,
                    hotbar_size: HOTBAR_SIZE
                })
            );
            assert_eq!(inventory.held_index(), 2);
        }
        assert!(connection.pushed().is_empty());
    }

    #[test]
    fn test_hotbar_slot_item_bounds() {
        let holder = TestEntity::new(1, None);
        let mut inventory = inventory_of(&holder);
        inventory.set_item(8, sword()).unwrap();

        assert_eq!(inventory.hotbar_slot_item(8).unwrap(), &sword());
        assert_eq!(
            inventory.hotbar_slot_item(9),
            Err(InventoryError::InvalidSlot {
                slot: 9,
                hotbar_size: HOTBAR_SIZE
            })
        );
        assert!(inventory.get_item(9).is_ok());
        assert_eq!(
            inventory.get_item(36),
            Err(InventoryError::OutOfRange {
                slot: 36,
                size: INVENTORY_SIZE
            })
        );
    }

    #[test]
    fn test_set_item_in_hand_notifies_listener_once() {
        let holder = TestEntity::new(1, None);
        let mut inventory = inventory_of(&holder);
        let listener = Arc::new(RecordingListener::default());
        inventory.add_listener(listener.clone());

        inventory.set_item_in_hand(sword()).unwrap();

        assert_eq!(inventory.get_item(0).unwrap(), &sword());
        assert_eq!(inventory.item_in_hand(), &sword());
        assert_eq!(listener.calls(), vec![(0, ItemStack::empty())]);
        assert_eq!(inventory.times_changed(), 1);
    }

    #[test]
    fn test_rewriting_same_value_is_silent() {
        let viewer_connection = TestConnection::new();
        let holder = TestEntity::new(1, None);
        holder.add_viewer(TestEntity::new(2, Some(viewer_connection.clone())));
        let mut inventory = inventory_of(&holder);
        inventory.set_item(0, sword()).unwrap();

        let listener = Arc::new(RecordingListener::default());
        inventory.add_listener(listener.clone());
        viewer_connection.take_pushed();

        inventory.set_item(0, sword()).unwrap();
        inventory.set_item(4, ItemStack::empty()).unwrap();

        assert!(listener.calls().is_empty());
        assert!(viewer_connection.pushed().is_empty());
        assert_eq!(inventory.times_changed(), 1);
    }

    #[test]
    fn test_listener_gets_previous_value() {
        let holder = TestEntity::new(1, None);
        let mut inventory = inventory_of(&holder);
        let listener = Arc::new(RecordingListener::default());
        inventory.add_listener(listener.clone());

        inventory.set_item(12, sword()).unwrap();
        inventory
            .set_item(12, ItemStack::new("minecraft:bread", 3))
            .unwrap();

        assert_eq!(
            listener.calls(),
            vec![(12, ItemStack::empty()), (12, sword())]
        );
    }

    #[test]
    fn test_listeners_run_in_order_before_viewer_sync() {
        let viewer_connection = TestConnection::new();
        let holder = TestEntity::new(1, None);
        holder.add_viewer(TestEntity::new(2, Some(viewer_connection.clone())));
        let mut inventory = inventory_of(&holder);

        let log = Arc::new(Mutex::new(Vec::new()));
        for name in ["a", "b", "c"] {
            let log = log.clone();
            let viewer_connection = viewer_connection.clone();
            inventory.add_listener(Arc::new(
                move |_: &dyn Container, slot: usize, _: &ItemStack| {
                    log.lock()
                        .push((name, slot, viewer_connection.pushed().len()));
                },
            ));
        }

        inventory.set_item(7, sword()).unwrap();

        assert_eq!(*log.lock(), vec![("a", 7, 0), ("b", 7, 0), ("c", 7, 0)]);
        assert_eq!(
            viewer_connection.pushed(),
            vec![Pushed::Slot {
                slot: 7,
                item: sword()
            }]
        );
    }

    #[test]
    fn test_only_held_slot_changes_equipment() {
        let viewer_connection = TestConnection::new();
        let holder = TestEntity::new(1, None);
        holder.add_viewer(TestEntity::new(2, Some(viewer_connection.clone())));
        let mut inventory = inventory_of(&holder);
        inventory.set_held_index(3, NotifyTargets::None).unwrap();

        inventory.set_item(4, sword()).unwrap();
        assert_eq!(
            viewer_connection.take_pushed(),
            vec![Pushed::Slot {
                slot: 4,
                item: sword()
            }]
        );

        inventory.set_item(3, sword()).unwrap();
        assert_eq!(
            viewer_connection.take_pushed(),
            vec![
                Pushed::Slot {
                    slot: 3,
                    item: sword()
                },
                Pushed::Equipment {
                    holder: 1,
                    main_hand: sword()
                },
            ]
        );
    }

    #[test]
    fn test_held_index_sync_targets() {
        let own = TestConnection::new();
        let viewer_connection = TestConnection::new();
        let holder = TestEntity::new(1, Some(own.clone()));
        holder.add_viewer(TestEntity::new(2, Some(viewer_connection.clone())));
        let mut inventory = inventory_of(&holder);

        inventory.set_held_index(5, NotifyTargets::All).unwrap();
        assert_eq!(own.take_pushed(), vec![Pushed::SelectedSlot(5)]);
        assert_eq!(viewer_connection.take_pushed().len(), 1);

        inventory.set_held_index(6, NotifyTargets::ViewersOnly).unwrap();
        assert!(own.take_pushed().is_empty());
        assert_eq!(
            viewer_connection.take_pushed(),
            vec![Pushed::Equipment {
                holder: 1,
                main_hand: ItemStack::empty()
            }]
        );

        inventory.set_held_index(7, NotifyTargets::None).unwrap();
        assert!(own.take_pushed().is_empty());
        assert!(viewer_connection.take_pushed().is_empty());
    }

    #[test]
    fn test_closed_holder_connection_is_not_synced() {
        let own = TestConnection::new();
        own.close();
        let holder = TestEntity::new(1, Some(own.clone()));
        let mut inventory = inventory_of(&holder);

        inventory.set_held_index(1, NotifyTargets::All).unwrap();
        assert!(own.pushed().is_empty());
        assert_eq!(inventory.held_index(), 1);
    }

    #[test]
    fn test_dropped_holder_still_updates_state() {
        let holder = TestEntity::new(1, None);
        let mut inventory = inventory_of(&holder);
        let listener = Arc::new(RecordingListener::default());
        inventory.add_listener(listener.clone());
        drop(holder);

        inventory.set_held_index(4, NotifyTargets::All).unwrap();
        inventory.set_item(4, sword()).unwrap();

        assert!(inventory.holder().is_none());
        assert_eq!(inventory.item_in_hand(), &sword());
        assert_eq!(listener.calls().len(), 1);
    }

    #[test]
    fn test_with_config_layout() {
        let holder = TestEntity::new(1, None);
        let weak = Arc::downgrade(&holder) as Weak<dyn Entity>;
        let inventory = PlayerInventory::with_config(
            weak.clone(),
            InventoryConfig {
                capacity: 4,
                hotbar_size: 2,
            },
        )
        .unwrap();
        assert_eq!(inventory.size(), 4);
        assert!(!inventory.is_hotbar_slot(2));

        assert!(
            PlayerInventory::with_config(
                weak,
                InventoryConfig {
                    capacity: 4,
                    hotbar_size: 5,
                },
            )
            .is_err()
        );
    }
}
