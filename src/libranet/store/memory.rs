use super::ItemStore;
use crate::error::{LibraError, Result};
use crate::model::{ItemId, LibraryItem};
use std::collections::HashMap;

/// In-memory catalogue. Keeps items in insertion order and indexes them by id.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: Vec<LibraryItem>,
    positions: HashMap<ItemId, usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalogue from `items`. Duplicate ids are rejected.
    pub fn from_items(items: impl IntoIterator<Item = LibraryItem>) -> Result<Self> {
        let mut store = Self::new();
        for item in items {
            store.insert(item)?;
        }
        Ok(store)
    }

    fn insert(&mut self, item: LibraryItem) -> Result<()> {
        let id = item.id();
        if self.positions.contains_key(&id) {
            return Err(LibraError::Config(format!("Duplicate item id: {}", id)));
        }
        self.positions.insert(id, self.items.len());
        self.items.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemStore for InMemoryStore {
    fn get_item(&self, id: ItemId) -> Result<&LibraryItem> {
        self.positions
            .get(&id)
            .and_then(|&pos| self.items.get(pos))
            .ok_or(LibraError::NotFound(id))
    }

    fn get_item_mut(&mut self, id: ItemId) -> Result<&mut LibraryItem> {
        match self.positions.get(&id) {
            Some(&pos) => self.items.get_mut(pos).ok_or(LibraError::NotFound(id)),
            None => Err(LibraError::NotFound(id)),
        }
    }

    fn list_items(&self) -> Vec<&LibraryItem> {
        self.items.iter().collect()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::ledger::FineLedger;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub ledger: FineLedger,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                ledger: FineLedger::new(),
            }
        }

        /// The standard three-item catalogue (1 = book, 2 = audiobook, 3 = magazine).
        pub fn seeded() -> Self {
            Self {
                store: crate::seed::seed_catalogue().unwrap(),
                ledger: FineLedger::new(),
            }
        }

        pub fn with_item(mut self, item: LibraryItem) -> Self {
            self.store.insert(item).unwrap();
            self
        }

        pub fn with_borrowed_item(mut self, mut item: LibraryItem) -> Self {
            item.borrow().unwrap();
            self.store.insert(item).unwrap();
            self
        }

        pub fn with_fine(mut self, id: u32, amount: f64) -> Self {
            self.ledger.add(ItemId(id), amount);
            self
        }
    }
}
