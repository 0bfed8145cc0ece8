//! Shared application state.

use std::sync::Arc;

use commentdeck_capture::HeaderCapture;
use commentdeck_core::CommentDeckConfig;
use commentdeck_gateway::CommentGateway;
use commentdeck_store::{CredentialStore, FileCredentialStore};

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: CommentDeckConfig,
    pub store: Arc<dyn CredentialStore>,
    pub capture: HeaderCapture,
    pub gateway: CommentGateway,
}

impl AppState {
    pub fn new(config: CommentDeckConfig) -> Self {
        let store: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::open(
            &config.data_paths.credentials_file,
        ));

        // Capture writes the store; the gateway only reads it.
        let capture = HeaderCapture::new(store.clone());
        let gateway = CommentGateway::with_base_url(store.clone(), config.api_base_url.clone());

        Self {
            config,
            store,
            capture,
            gateway,
        }
    }
}
