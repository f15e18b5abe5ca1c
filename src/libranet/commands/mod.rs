use crate::model::{ItemView, ReturnOutcome};

pub mod lending;
pub mod list;
pub mod media;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// Outcome of a return, with enough context for a client to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnReceipt {
    pub title: String,
    pub outcome: ReturnOutcome,
    /// Ledger entry for the item after this return was recorded.
    pub fine_on_record: f64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_items: Vec<ItemView>,
    pub receipt: Option<ReturnReceipt>,
    pub total_fines: Option<f64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<ItemView>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_receipt(mut self, receipt: ReturnReceipt) -> Self {
        self.receipt = Some(receipt);
        self
    }

    pub fn with_total_fines(mut self, total: f64) -> Self {
        self.total_fines = Some(total);
        self
    }
}
