//! In-memory store client for testing.

use crate::error::StoreResult;
use crate::item::{Item, ItemId};
use crate::store::ItemStore;
use parking_lot::RwLock;

/// An in-memory item store.
///
/// Holds the collection in process memory with no persistence. Suitable
/// for:
/// - Unit and integration tests
/// - Throwaway servers that do not need their list to survive a restart
///
/// # Thread Safety
///
/// `MemoryStore` is thread-safe and can be shared across threads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given items.
    ///
    /// Useful for seeding fixtures in tests.
    #[must_use]
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

impl ItemStore for MemoryStore {
    fn find_all(&self) -> StoreResult<Vec<Item>> {
        Ok(self.items.read().clone())
    }

    fn insert(&self, text: &str) -> StoreResult<Item> {
        let item = Item::new(text);
        self.items.write().push(item.clone());
        Ok(item)
    }

    fn update(&self, id: ItemId, text: &str) -> StoreResult<bool> {
        let mut items = self.items.write();
        match items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = text.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: ItemId) -> StoreResult<bool> {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn memory_new_is_empty() {
        let store = MemoryStore::new();
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn memory_insert_assigns_unique_ids() {
        let store = MemoryStore::new();
        let a = store.insert("first").unwrap();
        let b = store.insert("second").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn memory_find_all_preserves_insert_order() {
        let store = MemoryStore::new();
        store.insert("first").unwrap();
        store.insert("second").unwrap();
        store.insert("third").unwrap();

        let texts: Vec<String> = store
            .find_all()
            .unwrap()
            .into_iter()
            .map(|item| item.text)
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn memory_update_overwrites_text_and_keeps_id() {
        let store = MemoryStore::new();
        let item = store.insert("by milk").unwrap();

        let matched = store.update(item.id, "buy milk").unwrap();
        assert!(matched);

        let items = store.find_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, item.id);
        assert_eq!(items[0].text, "buy milk");
    }

    #[test]
    fn memory_update_unknown_id_is_noop() {
        let store = MemoryStore::new();
        store.insert("keep me").unwrap();

        let matched = store.update(ItemId::new(), "changed").unwrap();
        assert!(!matched);
        assert_eq!(store.find_all().unwrap()[0].text, "keep me");
    }

    #[test]
    fn memory_delete_removes_matching_item() {
        let store = MemoryStore::new();
        let a = store.insert("gone").unwrap();
        let b = store.insert("stays").unwrap();

        let matched = store.delete(a.id).unwrap();
        assert!(matched);

        let items = store.find_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, b.id);
    }

    #[test]
    fn memory_delete_unknown_id_is_noop() {
        let store = MemoryStore::new();
        store.insert("keep me").unwrap();

        let matched = store.delete(ItemId::new()).unwrap();
        assert!(!matched);
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn memory_with_items_seeds_collection() {
        let seed = vec![Item::new("one"), Item::new("two")];
        let store = MemoryStore::with_items(seed.clone());
        assert_eq!(store.find_all().unwrap(), seed);
    }

    #[test]
    fn memory_stores_empty_text() {
        let store = MemoryStore::new();
        let item = store.insert("").unwrap();
        assert_eq!(item.text, "");
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn memory_concurrent_inserts_all_land() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();

        for n in 0..4 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for i in 0..25 {
                    store.insert(&format!("item {n}-{i}")).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.find_all().unwrap().len(), 100);
    }
}
