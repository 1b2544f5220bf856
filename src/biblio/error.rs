use crate::model::{BookId, UserId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiblioError {
    #[error("No book with id {0} in the catalog")]
    BookNotFound(BookId),

    #[error("No user with id {0} registered")]
    UserNotFound(UserId),

    #[error("No registered user matches {0}")]
    NoSuchMember(String),

    #[error("{0}")]
    InvalidState(String),

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BiblioError>;
