use thiserror::Error;

/// Failures surfaced by the core layer.
///
/// API errors arrive wrapped with the operation's context prefix so
/// consumers always have a human-readable message; the HTTP status is
/// only consulted inside `lcadmin-api` (retry classification) and never
/// drives behavior above it.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Not signed in -- run `lcadmin login` first")]
    NotAuthenticated,

    /// An API call failed; `context` names the operation.
    #[error("{context}: {source}")]
    Api {
        context: String,
        #[source]
        source: lcadmin_api::Error,
    },

    /// A row/entity lookup came up empty.
    #[error("{entity} '{identifier}' not found")]
    NotFound { entity: String, identifier: String },

    /// Locally detected bad input (before any request is issued).
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Free-form failure from an embedded operation.
    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Wrap an API error with an operation context, for use as
    /// `.map_err(CoreError::ctx("Failed to fetch impact methods"))`.
    pub fn ctx(context: &str) -> impl FnOnce(lcadmin_api::Error) -> Self {
        let context = context.to_owned();
        move |source| Self::Api { context, source }
    }

    /// Whether signing in again could resolve this failure.
    pub fn is_auth_expired(&self) -> bool {
        match self {
            Self::NotAuthenticated => true,
            Self::Api { source, .. } => source.is_auth_expired(),
            _ => false,
        }
    }
}
