//! Error types for CommentDeck.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No API token has been captured yet; the operation was never attempted.
    #[error("No API token found in storage")]
    MissingCredential,

    /// The comment API answered with a non-success status. The message
    /// carries the operation context and the HTTP status text.
    #[error("{0}")]
    Remote(String),

    /// The request never completed (DNS, connection, body decode).
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
