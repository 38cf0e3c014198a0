// Session endpoints: login, current user, logout.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;

use crate::client::CatalogClient;
use crate::error::Error;
use crate::types::{LoginResponse, User};

impl CatalogClient {
    /// `POST /api/login` -- exchange credentials for a bearer token and
    /// the signed-in user's profile.
    ///
    /// A 401/403 here means bad credentials, not an expired session, so
    /// the generic mapping is overridden.
    pub async fn login(
        &self,
        user_name: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            user_name: &'a str,
            password: &'a str,
        }

        debug!("logging in as {user_name}");

        self.post(
            "login",
            &Body {
                user_name,
                password: password.expose_secret(),
            },
        )
        .await
        .map_err(|err| match err {
            Error::SessionExpired => Error::Authentication {
                message: "invalid username or password".into(),
            },
            Error::Request {
                status: 401 | 403,
                message,
            } => Error::Authentication { message },
            other => other,
        })
    }

    /// `GET /api/users/me` -- the profile behind the current token.
    pub async fn me(&self) -> Result<User, Error> {
        self.get("users/me").await
    }

    /// `POST /api/logout` -- invalidate the current token server-side.
    pub async fn logout(&self) -> Result<(), Error> {
        debug!("logging out");
        self.post::<serde_json::Value, _>("logout", &serde_json::json!({}))
            .await
            .map(drop)
    }
}
