//! Recording entities and connections for unit tests.

use std::{mem, sync::Arc};

use parking_lot::Mutex;
use uuid::Uuid;

use crate::{
    entity::{Entity, ViewerSet},
    inventory::{Container, ContainerListener},
    item_stack::ItemStack,
    player::NetworkConnection,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pushed {
    SelectedSlot(usize),
    Slot { slot: usize, item: ItemStack },
    Equipment { holder: i32, main_hand: ItemStack },
}

#[derive(Default)]
pub struct TestConnection {
    closed: Mutex<bool>,
    pushed: Mutex<Vec<Pushed>>,
}

impl TestConnection {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn pushed(&self) -> Vec<Pushed> {
        self.pushed.lock().clone()
    }

    pub fn take_pushed(&self) -> Vec<Pushed> {
        mem::take(&mut *self.pushed.lock())
    }
}

impl NetworkConnection for TestConnection {
    fn closed(&self) -> bool {
        *self.closed.lock()
    }

    fn close(&self) {
        *self.closed.lock() = true;
    }

    fn sync_selected_hotbar_slot(&self, slot: usize) {
        self.pushed.lock().push(Pushed::SelectedSlot(slot));
    }

    fn sync_slot(&self, inventory: &dyn Container, slot: usize) {
        let item = inventory.items()[slot].clone();
        self.pushed.lock().push(Pushed::Slot { slot, item });
    }

    fn on_equipment_change(&self, holder: &dyn Entity, main_hand: &ItemStack) {
        self.pushed.lock().push(Pushed::Equipment {
            holder: holder.entity_id(),
            main_hand: main_hand.clone(),
        });
    }
}

pub struct TestEntity {
    id: i32,
    uuid: Uuid,
    connection: Option<Arc<TestConnection>>,
    viewers: ViewerSet,
}

impl TestEntity {
    pub fn new(id: i32, connection: Option<Arc<TestConnection>>) -> Arc<Self> {
        let uuid = Uuid::new_v4();
        Arc::new(Self {
            id,
            uuid,
            connection,
            viewers: ViewerSet::new(uuid),
        })
    }

    pub fn add_viewer(&self, viewer: Arc<TestEntity>) {
        self.viewers.add(viewer);
    }
}

impl Entity for TestEntity {
    fn entity_id(&self) -> i32 {
        self.id
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn viewers(&self) -> Vec<Arc<dyn Entity>> {
        self.viewers.snapshot()
    }

    fn connection(&self) -> Option<Arc<dyn NetworkConnection>> {
        self.connection
            .clone()
            .map(|connection| connection as Arc<dyn NetworkConnection>)
    }
}

#[derive(Default)]
pub struct RecordingListener {
    calls: Mutex<Vec<(usize, ItemStack)>>,
}

impl RecordingListener {
    pub fn calls(&self) -> Vec<(usize, ItemStack)> {
        self.calls.lock().clone()
    }
}

impl ContainerListener for RecordingListener {
    fn on_slot_change(&self, _container: &dyn Container, slot: usize, previous: &ItemStack) {
        self.calls.lock().push((slot, previous.clone()));
    }
}
