//! The fixed catalogue every session starts with.

use crate::error::Result;
use crate::model::LibraryItem;
use crate::store::memory::InMemoryStore;

pub fn seed_items() -> Vec<LibraryItem> {
    vec![
        LibraryItem::book(1, "Java Basics", "John Doe", 300),
        LibraryItem::audiobook(2, "Learn DSA", "Alice Smith", 120.0),
        LibraryItem::emagazine(3, "Tech Today", "Editorial Board", 45),
    ]
}

pub fn seed_catalogue() -> Result<InMemoryStore> {
    InMemoryStore::from_items(seed_items())
}
