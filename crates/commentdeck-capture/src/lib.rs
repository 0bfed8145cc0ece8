//! Credential Capture — observes outbound requests relayed by the companion
//! extension and stores the session credentials they carry.
//!
//! Capture is a pure side-channel: it never blocks or modifies the observed
//! request, and a failed persistence write is swallowed (the next matching
//! request retries the capture naturally).

pub mod observer;
pub mod types;

pub use observer::{HeaderCapture, CAPTURE_ORIGINS};
pub use types::{CaptureStats, ObservedRequest, RequestHeader};
