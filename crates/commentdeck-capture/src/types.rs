//! Capture types — matching the extension's webRequest relay payload.

use serde::{Deserialize, Serialize};

/// An outbound request observed before its headers were finalized, as
/// relayed by the companion extension.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservedRequest {
    pub url: String,
    #[serde(rename = "requestHeaders", default)]
    pub request_headers: Vec<RequestHeader>,
}

/// One outgoing header of an observed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestHeader {
    pub name: String,
    pub value: String,
}

/// Informational capture counters for the current session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CaptureStats {
    #[serde(rename = "requestsObserved")]
    pub requests_observed: u64,
    #[serde(rename = "requestsMatched")]
    pub requests_matched: u64,
    #[serde(skip_serializing_if = "Option::is_none", rename = "lastCaptureAt")]
    pub last_capture_at: Option<String>,
}
