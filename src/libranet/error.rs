use crate::model::{ItemId, ItemKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Item already borrowed: {title}")]
    AlreadyBorrowed { title: String },

    #[error("Item {id} is not {}", .expected.with_article())]
    WrongVariant { id: ItemId, expected: ItemKind },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LibraError>;

impl LibraError {
    /// Errors caused by what the user asked for, as opposed to failures of the
    /// environment. A session reports these and carries on.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            LibraError::NotFound(_)
                | LibraError::AlreadyBorrowed { .. }
                | LibraError::WrongVariant { .. }
                | LibraError::InvalidInput(_)
        )
    }
}
