//! CommentDeck Store — the captured Credential Set.
//!
//! Single writer (capture), multiple readers (gateway). Storage is exposed
//! through the [`CredentialStore`] trait so the gateway can run against an
//! in-memory store in tests.

pub mod store;
pub mod types;

pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use types::{CredentialKey, CredentialSet, CredentialUpdate};
