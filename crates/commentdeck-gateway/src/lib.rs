//! Comment Gateway — turns logical comment operations into authenticated
//! calls against the external comment API.
//!
//! Credentials come from the shared store populated by capture; the gateway
//! never writes them. Response bodies are returned verbatim — interpretation
//! of the comment tree belongs to the caller.

pub mod client;
pub mod filter;
pub mod types;

pub use client::{CommentGateway, EXPERIENCE_NAME};
pub use filter::CommentFilter;
pub use types::{Comment, CreateCommentRequest, SearchRequest, ORDER_BY_NEWEST};
