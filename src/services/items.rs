use crate::models::{Item, ItemCreate};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-memory item registry keyed by auto-increment id. No persistence;
/// contents live for the process lifetime.
pub struct ItemStore {
    inner: Mutex<ItemStoreInner>,
}

struct ItemStoreInner {
    items: BTreeMap<i64, Item>,
    next_id: i64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ItemStoreInner {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn create(&self, data: ItemCreate) -> Item {
        let mut inner = self.inner.lock().unwrap();
        let item = Item {
            id: inner.next_id,
            title: data.title,
            content: data.content,
        };
        inner.items.insert(item.id, item.clone());
        inner.next_id += 1;
        item
    }

    pub fn list(&self) -> Vec<Item> {
        self.inner.lock().unwrap().items.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<Item> {
        self.inner.lock().unwrap().items.get(&id).cloned()
    }

    pub fn delete(&self, id: i64) -> bool {
        self.inner.lock().unwrap().items.remove(&id).is_some()
    }
}
