//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use taskboard_config::ConfigError;
use taskboard_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NO_USER: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const API: i32 = 5;
    pub const INVALID_DATA: i32 = 6;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the task-board API at {url}: {reason}")]
    #[diagnostic(
        code(taskboard::connection_failed),
        help(
            "Check that the server is running and the API base is right.\n\
             Try: taskboard --api-base http://localhost:3000 boards list"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(taskboard::api_error))]
    ApiError {
        status: u16,
        message: String,
        #[help]
        detail: Option<String>,
    },

    #[error("The server returned data that could not be loaded: {message}")]
    #[diagnostic(code(taskboard::invalid_data))]
    InvalidData { message: String },

    // ── Session ──────────────────────────────────────────────────────

    #[error("No user configured for profile '{profile}'")]
    #[diagnostic(
        code(taskboard::no_user),
        help(
            "Register one with: taskboard user create <name>\n\
             Or pass an existing id with --user."
        )
    )]
    NoUser { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(taskboard::not_found),
        help("Run: taskboard {list_command} to see what exists")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(taskboard::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(taskboard::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: taskboard config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(taskboard::config))]
    Config(#[from] ConfigError),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(taskboard::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    #[diagnostic(code(taskboard::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Attach the API base to a connection failure.
    pub fn at_url(self, api_base: &str) -> Self {
        match self {
            Self::ConnectionFailed { reason, .. } => Self::ConnectionFailed {
                url: api_base.into(),
                reason,
            },
            other => other,
        }
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::ApiError { .. } => exit_code::API,
            Self::InvalidData { .. } => exit_code::INVALID_DATA,
            Self::NoUser { .. } => exit_code::NO_USER,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. }
            | Self::ProfileNotFound { .. }
            | Self::Config(_)
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            Self::Io(_) | Self::Json(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NetworkFailure {
                message,
                status: Some(status),
                detail,
            } => CliError::ApiError {
                status,
                message,
                detail,
            },

            CoreError::NetworkFailure {
                message,
                status: None,
                ..
            } => CliError::ConnectionFailed {
                url: String::new(),
                reason: message,
            },

            err @ (CoreError::InvalidPayload { .. }
            | CoreError::InvalidTimestamp { .. }
            | CoreError::DuplicateEntity { .. }) => {
                CliError::InvalidData {
                    message: err.to_string(),
                }
            }

            CoreError::NotFound { kind, id } => CliError::NotFound {
                resource_type: kind.into(),
                identifier: id.to_string(),
                list_command: list_command_for(kind).into(),
            },

            CoreError::Validation { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::NoUser => CliError::NoUser {
                profile: "current".into(),
            },

            CoreError::Config { message } => CliError::Validation {
                field: "api_base".into(),
                reason: message,
            },
        }
    }
}

fn list_command_for(kind: &str) -> &'static str {
    match kind {
        "board" => "boards list",
        _ => "boards show <board>",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_maps_to_api_error() {
        let err = CliError::from(CoreError::NetworkFailure {
            message: "500 Internal Server Error -- boom".into(),
            status: Some(500),
            detail: Some("boom".into()),
        });
        assert_eq!(err.exit_code(), exit_code::API);
    }

    #[test]
    fn transport_failure_maps_to_connection() {
        let err = CliError::from(CoreError::NetworkFailure {
            message: "error sending request".into(),
            status: None,
            detail: None,
        });
        assert_eq!(err.exit_code(), exit_code::CONNECTION);
    }

    #[test]
    fn malformed_response_maps_to_invalid_data() {
        let err = CliError::from(CoreError::InvalidPayload {
            message: "expected value at line 1 column 1".into(),
            body: "oops".into(),
        });
        assert_eq!(err.exit_code(), exit_code::INVALID_DATA);
        assert!(matches!(err, CliError::InvalidData { .. }));
        assert!(err.to_string().contains("malformed response"));
    }

    #[test]
    fn not_found_points_at_listing() {
        let err = CliError::from(CoreError::NotFound { kind: "task", id: 9 });
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert_eq!(err.to_string(), "task '9' not found");
    }
}
