// ── Session context ──
//
// The signed-in state is an explicitly constructed object owned by the
// `Catalog` facade: created by `login`, replaced by `resume`, dropped
// by `logout`. Nothing reads it ambiently.

use secrecy::SecretString;

use lcadmin_api::types::{User, UserRole};

/// One authenticated session: the bearer token and the profile it
/// belongs to.
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
    token: SecretString,
}

impl Session {
    pub fn new(user: User, token: SecretString) -> Self {
        Self { user, token }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn token(&self) -> &SecretString {
        &self.token
    }

    /// Whether this session may manage console users.
    pub fn is_admin(&self) -> bool {
        self.user.role == UserRole::Admin
    }
}
