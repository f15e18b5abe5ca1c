use crate::error::Result;
use crate::model::{ItemId, LibraryItem};

pub mod ledger;
pub mod memory;

/// Abstract interface for the catalogue.
///
/// The catalogue is populated once and then only read or mutated in place: items are
/// never added or removed while the shell is running, so there is no insert/delete here.
pub trait ItemStore {
    /// Get an item by id
    fn get_item(&self, id: ItemId) -> Result<&LibraryItem>;

    /// Get an item by id for mutation (borrow/return)
    fn get_item_mut(&mut self, id: ItemId) -> Result<&mut LibraryItem>;

    /// All items, in the order they were added
    fn list_items(&self) -> Vec<&LibraryItem>;
}
