//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use lcadmin_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the catalog backend")]
    #[diagnostic(
        code(lcadmin::connection_failed),
        help(
            "Check that the backend is running and the server URL is right.\n\
             Try: lcadmin dashboard --server <URL> --insecure"
        )
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(lcadmin::auth_failed),
        help(
            "Sign in again with: lcadmin login\n\
             Credentials resolve from the keyring, LCADMIN_PASSWORD, or the profile."
        )
    )]
    AuthFailed,

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(lcadmin::no_credentials),
        help(
            "Configure a profile with: lcadmin config init\n\
             Or store a password with: lcadmin config set-password"
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(lcadmin::not_found),
        help("Run: lcadmin {list_command} to see available entries")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    #[error("{message}")]
    #[diagnostic(code(lcadmin::api_error))]
    ApiError { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(lcadmin::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(lcadmin::profile_not_found),
        help("Create one with: lcadmin config init")
    )]
    ProfileNotFound { name: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(lcadmin::no_config),
        help(
            "Create one with: lcadmin config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(lcadmin::config))]
    Config(#[from] lcadmin_config::ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(lcadmin::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        if err.is_auth_expired() {
            return Self::AuthFailed;
        }

        match err {
            CoreError::NotFound { entity, identifier } => Self::NotFound {
                list_command: format!("{entity}s list"),
                resource_type: entity,
                identifier,
            },

            CoreError::Validation { message } => Self::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::Api { context, source } => {
                if matches!(
                    source,
                    lcadmin_api::Error::Transport(_) | lcadmin_api::Error::Timeout { .. }
                ) && source.status().is_none()
                {
                    Self::ConnectionFailed {
                        source: Box::new(source),
                    }
                } else {
                    Self::ApiError {
                        message: format!("{context}: {source}"),
                    }
                }
            }

            other => Self::ApiError {
                message: other.to_string(),
            },
        }
    }
}
