//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for catalogue operations, whatever UI drives it.
//!
//! It owns the catalogue and the fine ledger for the lifetime of a session, dispatches to
//! `commands/*.rs`, and returns `Result<CmdResult>`. It does no I/O and no formatting.
//!
//! `LibraApi<S: ItemStore>` is generic over the catalogue backend so tests can build a
//! store with whatever items they need.

use crate::commands;
use crate::error::Result;
use crate::model::{ItemId, LibraryItem};
use crate::seed::seed_catalogue;
use crate::store::ledger::FineLedger;
use crate::store::memory::InMemoryStore;
use crate::store::ItemStore;

pub struct LibraApi<S: ItemStore> {
    store: S,
    ledger: FineLedger,
}

impl LibraApi<InMemoryStore> {
    /// A session over the standard seed catalogue with an empty ledger.
    pub fn seeded() -> Result<Self> {
        Ok(Self::new(seed_catalogue()?))
    }
}

impl<S: ItemStore> LibraApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            ledger: FineLedger::new(),
        }
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.ledger)
    }

    pub fn item(&self, id: ItemId) -> Result<&LibraryItem> {
        self.store.get_item(id)
    }

    pub fn borrow_item(&mut self, id: ItemId) -> Result<commands::CmdResult> {
        commands::lending::borrow(&mut self.store, id)
    }

    pub fn return_item(&mut self, id: ItemId, actual_days: i64) -> Result<commands::CmdResult> {
        commands::lending::return_item(&mut self.store, &mut self.ledger, id, actual_days)
    }

    pub fn play_audiobook(&self, id: ItemId) -> Result<commands::CmdResult> {
        commands::media::play(&self.store, id)
    }

    pub fn archive_issue(&self, id: ItemId) -> Result<commands::CmdResult> {
        commands::media::archive(&self.store, id)
    }

    pub fn fine_for(&self, id: ItemId) -> f64 {
        self.ledger.fine_for(id)
    }

    pub fn ledger(&self) -> &FineLedger {
        &self.ledger
    }
}
