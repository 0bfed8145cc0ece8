//! CommentDeck Core — configuration and shared error types.

pub mod config;
pub mod error;

pub use config::{CommentDeckConfig, DataPaths};
pub use error::{Error, Result};
