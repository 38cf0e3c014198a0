use thiserror::Error;

/// Top-level error type for the `lcadmin-api` crate.
///
/// Covers every failure mode across authentication, transport, and the
/// catalog backend's response envelope. `lcadmin-core` wraps these with
/// operation-specific context before they reach a user.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (wrong credentials, disabled account, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Bearer token expired or was revoked.
    #[error("Session expired -- sign in again")]
    SessionExpired,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Envelope ────────────────────────────────────────────────────
    /// HTTP failure whose envelope `data` is a field→message map.
    /// The message joins every field message with `"; "`.
    #[error("{message}")]
    Validation { status: u16, message: String },

    /// HTTP failure with a scalar message, or none (synthesized
    /// `"HTTP error! status: {status}"` when the backend sent nothing).
    #[error("{message}")]
    Request { status: u16, message: String },

    /// HTTP success whose envelope signals a non-"Success" status or a
    /// missing payload. Defends against 200-with-error backends.
    #[error("Operation failed")]
    Operation,

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// The HTTP status this error carries, if any.
    ///
    /// Transport errors expose the status reqwest saw; envelope errors
    /// carry the status they were classified under. Pure failures
    /// (deserialization, operation) have none.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Validation { status, .. } | Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if a retry might succeed.
    ///
    /// Client errors (4xx) are never retryable; everything carrying a
    /// 5xx status, or no status at all (connection-level failures,
    /// timeouts), is.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => match e.status() {
                Some(s) => !s.is_client_error(),
                None => e.is_timeout() || e.is_connect() || e.is_request(),
            },
            Self::Timeout { .. } => true,
            Self::Validation { status, .. } | Self::Request { status, .. } => {
                *status < 400 || *status >= 500
            }
            _ => false,
        }
    }

    /// Returns `true` if this error indicates the session is no longer
    /// valid and re-authentication might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::SessionExpired)
    }

    /// Returns `true` if this is a "not found" failure.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
