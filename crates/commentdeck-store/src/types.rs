//! Credential record types — matching the extension's storage shape.

use serde::{Deserialize, Serialize};

/// Keys in the persisted credential record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialKey {
    #[serde(rename = "apiToken")]
    ApiToken,
    #[serde(rename = "viewerId")]
    ViewerId,
    #[serde(rename = "xPin")]
    XPin,
}

impl CredentialKey {
    pub fn all() -> &'static [CredentialKey] {
        &[Self::ApiToken, Self::ViewerId, Self::XPin]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ApiToken => "apiToken",
            Self::ViewerId => "viewerId",
            Self::XPin => "xPin",
        }
    }
}

impl std::fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The persisted Credential Set. Fields are absent until first observed;
/// `xPin` is set (possibly to `""`) once any matching request has been seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSet {
    #[serde(skip_serializing_if = "Option::is_none", rename = "apiToken")]
    pub api_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "viewerId")]
    pub viewer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "xPin")]
    pub x_pin: Option<String>,
}

impl CredentialSet {
    pub fn get(&self, key: CredentialKey) -> Option<&str> {
        match key {
            CredentialKey::ApiToken => self.api_token.as_deref(),
            CredentialKey::ViewerId => self.viewer_id.as_deref(),
            CredentialKey::XPin => self.x_pin.as_deref(),
        }
    }

    pub fn set(&mut self, key: CredentialKey, value: String) {
        match key {
            CredentialKey::ApiToken => self.api_token = Some(value),
            CredentialKey::ViewerId => self.viewer_id = Some(value),
            CredentialKey::XPin => self.x_pin = Some(value),
        }
    }

    /// True if a usable (non-empty) API token is stored.
    pub fn has_token(&self) -> bool {
        self.api_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Staged field updates, applied to the store in a single write.
#[derive(Debug, Clone, Default)]
pub struct CredentialUpdate {
    entries: Vec<(CredentialKey, String)>,
}

impl CredentialUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a field for the next write. Staging the same key twice keeps
    /// the later value.
    pub fn stage(&mut self, key: CredentialKey, value: impl Into<String>) {
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(CredentialKey, String)] {
        &self.entries
    }

    /// Staged key names, for logging without exposing values.
    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(k, _)| k.name()).collect()
    }
}
