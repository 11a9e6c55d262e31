// ── Core error types ──
//
// User-facing errors from taskboard-core. Consumers never see reqwest or
// serde errors directly: the `From<taskboard_api::Error>` impl folds every
// transport-layer failure into `NetworkFailure`.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Network ──────────────────────────────────────────────────────
    /// Transport or HTTP-status failure from the API. `detail` carries the
    /// response body when the server sent one.
    #[error("{message}")]
    NetworkFailure {
        message: String,
        status: Option<u16>,
        detail: Option<String>,
    },

    /// The server answered 2xx but the body did not decode.
    #[error("Server sent a malformed response: {message}")]
    InvalidPayload { message: String, body: String },

    // ── Normalization ────────────────────────────────────────────────
    #[error("Invalid timestamp on {entity} {id}: {value:?}")]
    InvalidTimestamp {
        entity: &'static str,
        id: u64,
        value: String,
    },

    #[error("Snapshot references {kind} {id} more than once")]
    DuplicateEntity { kind: &'static str, id: u64 },

    // ── Lookups ──────────────────────────────────────────────────────
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u64 },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("No user is set; register or bootstrap a user first")]
    NoUser,

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// HTTP status of a network failure, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NetworkFailure { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::NetworkFailure { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<taskboard_api::Error> for CoreError {
    fn from(err: taskboard_api::Error) -> Self {
        match err {
            taskboard_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            taskboard_api::Error::Deserialization { message, body } => {
                CoreError::InvalidPayload { message, body }
            }
            other => CoreError::NetworkFailure {
                message: other.to_string(),
                status: other.status(),
                detail: other.body().map(str::to_owned),
            },
        }
    }
}
