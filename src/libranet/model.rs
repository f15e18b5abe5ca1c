//! Core data types: the catalogue item and its variants.
//!
//! Every item carries the same identity and loan state; what differs between a book,
//! an audiobook and an e-magazine lives in [`ItemDetails`]. Variant-only capabilities
//! (`play`, `archive_issue`) are reached through an explicit variant check
//! ([`LibraryItem::as_audiobook`], [`LibraryItem::as_emagazine`]) rather than being
//! present on every item.

use crate::error::{LibraError, Result};
use crate::store::ledger::FineLedger;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Loan length, in days, that is free of charge.
pub const GRACE_PERIOD_DAYS: i64 = 14;

/// Fine charged for every day past the grace period.
pub const FINE_PER_DAY: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = LibraError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(ItemId)
            .map_err(|_| LibraError::InvalidInput(format!("'{}' is not a valid item id", s.trim())))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Book,
    AudioBook,
    EMagazine,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Book => "Book",
            ItemKind::AudioBook => "Audiobook",
            ItemKind::EMagazine => "E-Magazine",
        }
    }

    /// Lower-case name with its indefinite article, for messages like "is not an audiobook".
    pub fn with_article(&self) -> &'static str {
        match self {
            ItemKind::Book => "a book",
            ItemKind::AudioBook => "an audiobook",
            ItemKind::EMagazine => "a magazine",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-variant data.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemDetails {
    Book { page_count: u32 },
    AudioBook { duration_minutes: f64 },
    EMagazine { issue_number: u32 },
}

impl ItemDetails {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemDetails::Book { .. } => ItemKind::Book,
            ItemDetails::AudioBook { .. } => ItemKind::AudioBook,
            ItemDetails::EMagazine { .. } => ItemKind::EMagazine,
        }
    }
}

impl fmt::Display for ItemDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemDetails::Book { page_count } => write!(f, "Pages: {}", page_count),
            ItemDetails::AudioBook { duration_minutes } => {
                write!(f, "Duration: {} mins", format_minutes(*duration_minutes))
            }
            ItemDetails::EMagazine { issue_number } => write!(f, "Issue No: {}", issue_number),
        }
    }
}

/// What happened when an item was handed back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReturnOutcome {
    /// The item had an open loan, which is now closed.
    Returned { fine: f64 },
    /// The item was not on loan; nothing changed.
    NotBorrowed,
}

impl ReturnOutcome {
    pub fn fine(&self) -> f64 {
        match self {
            ReturnOutcome::Returned { fine } => *fine,
            ReturnOutcome::NotBorrowed => 0.0,
        }
    }
}

/// Minutes as entered, keeping every decimal; whole numbers still show a trailing `.0`.
pub fn format_minutes(minutes: f64) -> String {
    if minutes.is_finite() && minutes.fract() == 0.0 {
        format!("{:.1}", minutes)
    } else {
        minutes.to_string()
    }
}

/// Flat late fine: nothing within the grace period, then a fixed amount per extra day.
pub fn late_fine(actual_days: i64) -> f64 {
    if actual_days > GRACE_PERIOD_DAYS {
        (actual_days - GRACE_PERIOD_DAYS) as f64 * FINE_PER_DAY
    } else {
        0.0
    }
}

#[derive(Debug, Clone)]
pub struct LibraryItem {
    id: ItemId,
    title: String,
    author: String,
    available: bool,
    borrowed_at: Option<DateTime<Utc>>,
    details: ItemDetails,
}

impl LibraryItem {
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        details: ItemDetails,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            available: true,
            borrowed_at: None,
            details,
        }
    }

    pub fn book(id: u32, title: &str, author: &str, page_count: u32) -> Self {
        Self::new(ItemId(id), title, author, ItemDetails::Book { page_count })
    }

    pub fn audiobook(id: u32, title: &str, author: &str, duration_minutes: f64) -> Self {
        Self::new(
            ItemId(id),
            title,
            author,
            ItemDetails::AudioBook { duration_minutes },
        )
    }

    pub fn emagazine(id: u32, title: &str, author: &str, issue_number: u32) -> Self {
        Self::new(
            ItemId(id),
            title,
            author,
            ItemDetails::EMagazine { issue_number },
        )
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn kind(&self) -> ItemKind {
        self.details.kind()
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn borrowed_at(&self) -> Option<DateTime<Utc>> {
        self.borrowed_at
    }

    /// Opens a loan. Fails without touching state if one is already open.
    pub fn borrow(&mut self) -> Result<()> {
        if !self.available {
            return Err(LibraError::AlreadyBorrowed {
                title: self.title.clone(),
            });
        }
        self.available = false;
        self.borrowed_at = Some(Utc::now());
        Ok(())
    }

    /// Closes the open loan, if any, and computes its fine.
    ///
    /// Returning an item that is not on loan is a no-op reported as
    /// [`ReturnOutcome::NotBorrowed`]. Recording the fine is left to the caller.
    pub fn return_item(&mut self, actual_days: i64) -> ReturnOutcome {
        if self.available {
            return ReturnOutcome::NotBorrowed;
        }
        self.available = true;
        self.borrowed_at = None;
        ReturnOutcome::Returned {
            fine: late_fine(actual_days),
        }
    }

    pub fn show_details(&self, ledger: &FineLedger) -> ItemView {
        ItemView {
            id: self.id,
            kind: self.kind(),
            title: self.title.clone(),
            author: self.author.clone(),
            details: self.details.clone(),
            available: self.available,
            borrowed_at: self.borrowed_at,
            fine: ledger.fine_for(self.id),
        }
    }

    pub fn as_audiobook(&self) -> Result<AudioBook<'_>> {
        match self.details {
            ItemDetails::AudioBook { duration_minutes } => Ok(AudioBook {
                title: &self.title,
                duration_minutes,
            }),
            _ => Err(self.wrong_variant(ItemKind::AudioBook)),
        }
    }

    pub fn as_emagazine(&self) -> Result<EMagazine<'_>> {
        match self.details {
            ItemDetails::EMagazine { issue_number } => Ok(EMagazine {
                title: &self.title,
                issue_number,
            }),
            _ => Err(self.wrong_variant(ItemKind::EMagazine)),
        }
    }

    fn wrong_variant(&self, expected: ItemKind) -> LibraError {
        LibraError::WrongVariant {
            id: self.id,
            expected,
        }
    }
}

/// Borrowed view of an item known to be an audiobook.
#[derive(Debug, Clone, Copy)]
pub struct AudioBook<'a> {
    title: &'a str,
    duration_minutes: f64,
}

impl AudioBook<'_> {
    pub fn play(&self) -> String {
        format!(
            "Playing audiobook: {} ({} mins)",
            self.title,
            format_minutes(self.duration_minutes)
        )
    }
}

/// Borrowed view of an item known to be an e-magazine.
#[derive(Debug, Clone, Copy)]
pub struct EMagazine<'a> {
    title: &'a str,
    issue_number: u32,
}

impl EMagazine<'_> {
    pub fn archive_issue(&self) -> String {
        format!("Archiving issue {} of {}", self.issue_number, self.title)
    }
}

/// Read-only snapshot of an item together with the fine on record for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub id: ItemId,
    pub kind: ItemKind,
    pub title: String,
    pub author: String,
    pub details: ItemDetails,
    pub available: bool,
    pub borrowed_at: Option<DateTime<Utc>>,
    pub fine: f64,
}
