use thiserror::Error;

/// Top-level error type for the `taskboard-api` crate.
///
/// Covers every failure mode of the REST surface: transport, HTTP status,
/// and payload decoding. `taskboard-core` folds all of these into a single
/// network-failure diagnostic.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be built.
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-2xx response. `body` is the raw response text, or
    /// `"Request failed"` when the server sent nothing.
    #[error("{status} {reason} -- {body}")]
    Http {
        status: u16,
        reason: String,
        body: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Response body carried by an HTTP error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } | Self::Deserialization { body, .. } => Some(body),
            _ => None,
        }
    }
}
