//! The gateway client — one reqwest call per operation, no retries.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use commentdeck_core::config::DEFAULT_API_BASE_URL;
use commentdeck_core::{Error, Result};
use commentdeck_store::{CredentialSet, CredentialStore};

use crate::types::{CreateCommentRequest, SearchRequest};

/// Product-identifying header value sent on every API call.
pub const EXPERIENCE_NAME: &str = "Adventures In Odyssey";

const SEARCH_PATH: &str = "/comment/search";
const COMMENT_PATH: &str = "/comment";

/// Authenticated client for the comment API. Reads credentials from the
/// shared store on every call; never writes them.
pub struct CommentGateway {
    client: Client,
    store: Arc<dyn CredentialStore>,
    base_url: String,
}

impl CommentGateway {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self::with_base_url(store, DEFAULT_API_BASE_URL)
    }

    /// Point the gateway at a different API base (tests, config override).
    pub fn with_base_url(store: Arc<dyn CredentialStore>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            store,
            base_url: base_url.into(),
        }
    }

    /// Fetch a page of comments for `related_to_id`. The parsed response
    /// body is returned verbatim; the caller owns interpretation.
    pub async fn search(
        &self,
        related_to_id: &str,
        page_number: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Value> {
        let (token, creds) = self.credentials()?;
        let body = SearchRequest::new(related_to_id, page_number, page_size);

        debug!(
            "Fetching comments for {} (page {}, size {})",
            related_to_id, body.page_number, body.page_size
        );

        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, SEARCH_PATH))
            .header("Authorization", &token)
            .header("Content-Type", "application/json")
            .header("x-experience-name", EXPERIENCE_NAME);
        if let Some(viewer_id) = &creds.viewer_id {
            request = request.header("x-viewer-id", viewer_id);
        }
        if let Some(pin) = &creds.x_pin {
            // Sent whenever stored, empty string included; absence means no
            // matching request has ever been observed.
            request = request.header("x-pin", pin);
        }

        let response = request
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(remote_error("Error fetching comments", response.status()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::Transport(e.to_string()))
    }

    /// Post a new top-level comment on `related_to_id`.
    pub async fn create_comment(&self, related_to_id: &str, message: &str) -> Result<Value> {
        self.post_comment(related_to_id, message, "Error posting comment")
            .await
    }

    /// Reply to an existing comment. A reply is structurally a comment whose
    /// `relatedToId` is the parent comment's id; there is no separate
    /// endpoint.
    pub async fn create_reply(&self, comment_id: &str, message: &str) -> Result<Value> {
        self.post_comment(comment_id, message, "Error sending reply")
            .await
    }

    async fn post_comment(
        &self,
        related_to_id: &str,
        message: &str,
        context: &str,
    ) -> Result<Value> {
        let (token, creds) = self.credentials()?;
        let body = CreateCommentRequest::new(related_to_id, creds.viewer_id.clone(), message);

        debug!("Posting comment on {}", related_to_id);

        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, COMMENT_PATH))
            .header("Authorization", &token)
            .header("Content-Type", "application/json")
            .header("x-experience-name", EXPERIENCE_NAME);
        if let Some(viewer_id) = &creds.viewer_id {
            request = request.header("x-viewer-id", viewer_id);
        }
        // x-pin is never sent on create or reply.

        let response = request
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::CREATED || status.is_success() {
            response
                .json::<Value>()
                .await
                .map_err(|e| Error::Transport(e.to_string()))
        } else {
            Err(remote_error(context, status))
        }
    }

    /// Snapshot the store, failing before any network activity when no
    /// usable token is present.
    fn credentials(&self) -> Result<(String, CredentialSet)> {
        let set = self.store.snapshot();
        match set.api_token.clone() {
            Some(token) if !token.is_empty() => Ok((token, set)),
            _ => Err(Error::MissingCredential),
        }
    }
}

fn remote_error(context: &str, status: StatusCode) -> Error {
    let text = status.canonical_reason().unwrap_or_else(|| status.as_str());
    Error::Remote(format!("{}: {}", context, text))
}
