use tracing::{error, warn};

use crate::envelope::Envelope;

/// Failure of a single handler invocation.
///
/// Client errors map to 4xx (400 unless the host reports otherwise) and
/// backend errors to 500. Store failures are not classified further: a
/// missing key and a denied request surface the same way, carrying the
/// store's own message.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The host could not read the request body (too large, truncated).
    #[error("Invalid request: {reason}")]
    UnreadableBody { status: u16, reason: String },

    #[error("Invalid file type. Only .mp4 files are allowed.")]
    InvalidFileType,

    #[error("{action}: {source}")]
    Backend {
        action: &'static str,
        source: object_store::Error,
    },
}

impl HandlerError {
    /// Adapter for `map_err` that tags a store error with what was being done.
    pub fn backend(action: &'static str) -> impl FnOnce(object_store::Error) -> Self {
        move |source| Self::Backend { action, source }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) | Self::InvalidFileType => 400,
            Self::UnreadableBody { status, .. } => *status,
            Self::Backend { .. } => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }

    pub fn into_envelope(self) -> Envelope {
        if self.is_client_error() {
            warn!(error = %self, "Rejected request");
        } else {
            error!(error = %self, "Storage call failed");
        }
        Envelope::message(self.status_code(), self.to_string())
    }
}
