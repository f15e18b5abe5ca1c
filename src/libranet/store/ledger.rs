use crate::model::ItemId;
use std::collections::HashMap;

/// Accumulated fines per item.
///
/// Ids with no entry read as zero. Every return adds to the entry, so fines from
/// successive loans of the same item pile up; entries are never reset or removed.
#[derive(Debug, Default, Clone)]
pub struct FineLedger {
    entries: HashMap<ItemId, f64>,
}

impl FineLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fine_for(&self, id: ItemId) -> f64 {
        self.entries.get(&id).copied().unwrap_or(0.0)
    }

    /// Adds `amount` to the entry for `id` and returns the new total for that item.
    pub fn add(&mut self, id: ItemId, amount: f64) -> f64 {
        let entry = self.entries.entry(id).or_insert(0.0);
        *entry += amount;
        *entry
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
