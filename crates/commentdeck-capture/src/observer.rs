//! Header observation — origin matching, header scan, staged store writes.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use commentdeck_store::{CredentialKey, CredentialStore, CredentialUpdate};

use crate::types::{CaptureStats, ObservedRequest, RequestHeader};

/// Origins whose outbound requests carry the session credentials.
pub const CAPTURE_ORIGINS: &[&str] = &[
    "https://app.adventuresinodyssey.com/",
    "https://fotf.my.site.com/",
];

const AUTHORIZATION_HEADER: &str = "authorization";
const VIEWER_ID_HEADER: &str = "x-viewer-id";
const PIN_HEADER: &str = "x-pin";

/// Observes relayed requests and writes captured credentials to the store.
/// Sole writer of the Credential Set.
pub struct HeaderCapture {
    store: Arc<dyn CredentialStore>,
    stats: RwLock<CaptureStats>,
}

impl HeaderCapture {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            stats: RwLock::new(CaptureStats::default()),
        }
    }

    /// Observe one outbound request. Returns whether it matched a capture
    /// origin. Persistence failures are logged and swallowed.
    pub fn observe(&self, request: &ObservedRequest) -> bool {
        self.stats.write().requests_observed += 1;

        if !matches_origin(&request.url) {
            return false;
        }

        let mut update = CredentialUpdate::new();

        if let Some(value) = find_header(&request.request_headers, AUTHORIZATION_HEADER) {
            update.stage(CredentialKey::ApiToken, value);
        }
        if let Some(value) = find_header(&request.request_headers, VIEWER_ID_HEADER) {
            update.stage(CredentialKey::ViewerId, value);
        }
        // x-pin is recorded on every matching request: its value when sent,
        // the empty string otherwise. Presence of the stored field marks
        // "a matching request has been observed".
        match find_header(&request.request_headers, PIN_HEADER) {
            Some(value) => update.stage(CredentialKey::XPin, value),
            None => update.stage(CredentialKey::XPin, ""),
        }

        if !update.is_empty() {
            info!("Updating stored credentials: {:?}", update.keys());
            if let Err(e) = self.store.apply(update) {
                warn!("Failed to persist captured credentials: {}", e);
            }
        }

        let mut stats = self.stats.write();
        stats.requests_matched += 1;
        stats.last_capture_at = Some(chrono::Utc::now().to_rfc3339());

        true
    }

    /// Session capture counters.
    pub fn stats(&self) -> CaptureStats {
        self.stats.read().clone()
    }
}

fn matches_origin(url: &str) -> bool {
    CAPTURE_ORIGINS.iter().any(|origin| url.starts_with(origin))
}

fn find_header(headers: &[RequestHeader], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value.clone())
}
