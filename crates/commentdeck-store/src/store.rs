//! Credential store implementations — JSON file and in-memory.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::info;

use commentdeck_core::{Error, Result};

use crate::types::{CredentialKey, CredentialSet, CredentialUpdate};

/// Storage for the Credential Set. Capture is the sole writer; the gateway
/// only reads. Last write wins, no versioning.
pub trait CredentialStore: Send + Sync {
    /// Read a single credential by key.
    fn get(&self, key: CredentialKey) -> Option<String>;

    /// Read the whole record at once.
    fn snapshot(&self) -> CredentialSet;

    /// Apply all staged fields in a single write.
    fn apply(&self, update: CredentialUpdate) -> Result<()>;
}

/// Credential store persisted as a JSON file under the data directory.
pub struct FileCredentialStore {
    path: PathBuf,
    inner: RwLock<CredentialSet>,
}

impl FileCredentialStore {
    /// Open the store, loading any previously persisted record. A missing or
    /// unreadable file yields an empty record.
    pub fn open(path: &Path) -> Self {
        let set: CredentialSet = std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();

        info!(
            "Credential store opened: token {}",
            if set.has_token() { "present" } else { "absent" }
        );

        Self {
            path: path.to_path_buf(),
            inner: RwLock::new(set),
        }
    }

    fn persist(&self, set: &CredentialSet) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("create {}: {}", parent.display(), e)))?;
        }
        let json = serde_json::to_string_pretty(set)?;
        std::fs::write(&self.path, json)
            .map_err(|e| Error::Storage(format!("write {}: {}", self.path.display(), e)))
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        self.inner.read().get(key).map(str::to_string)
    }

    fn snapshot(&self) -> CredentialSet {
        self.inner.read().clone()
    }

    fn apply(&self, update: CredentialUpdate) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }
        let mut set = self.inner.write();
        for (key, value) in update.entries() {
            set.set(*key, value.clone());
        }
        self.persist(&set)
    }
}

/// In-memory credential store. Used as the test fake and anywhere persistence
/// across restarts is not wanted.
#[derive(Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<CredentialSet>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-populated record.
    pub fn with_set(set: CredentialSet) -> Self {
        Self {
            inner: RwLock::new(set),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        self.inner.read().get(key).map(str::to_string)
    }

    fn snapshot(&self) -> CredentialSet {
        self.inner.read().clone()
    }

    fn apply(&self, update: CredentialUpdate) -> Result<()> {
        let mut set = self.inner.write();
        for (key, value) in update.entries() {
            set.set(*key, value.clone());
        }
        Ok(())
    }
}
