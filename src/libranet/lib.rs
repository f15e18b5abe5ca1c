//! # LibraNet Architecture
//!
//! LibraNet is a small, in-memory library catalogue: a handful of items (books,
//! audiobooks, e-magazines) that can be borrowed and returned, with a flat late fine
//! recorded per item. The interactive menu is one client of the library, not the
//! library itself.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, number parsing, coloured output      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the catalogue and the fine ledger for a session     │
//! │  - Thin facade over commands, returns Result<CmdResult>     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, borrow/return, play/archive                        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ItemStore trait, InMemoryStore, FineLedger               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Items and variants
//!
//! [`model::LibraryItem`] holds the state every item shares (id, title, author, loan
//! state). Variant data lives in the closed [`model::ItemDetails`] enum. Playing an
//! audiobook or archiving a magazine issue first goes through an explicit variant check,
//! which fails with [`error::LibraError::WrongVariant`] instead of panicking.
//!
//! ## Errors
//!
//! Expected outcomes such as borrowing an item that is already on loan are ordinary
//! `Err` values. Returning an item that is not on loan is not an error at all: it is
//! reported as [`model::ReturnOutcome::NotBorrowed`] with a zero fine.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each menu action
//! - [`store`]: Catalogue abstraction, in-memory catalogue and fine ledger
//! - [`model`]: Core data types and the fine policy
//! - [`seed`]: The catalogue every session starts with
//! - [`config`]: Presentation settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod seed;
pub mod store;
