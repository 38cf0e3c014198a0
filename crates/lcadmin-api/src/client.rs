// Catalog backend HTTP client
//
// Wraps `reqwest::Client` with base-URL normalization, the response
// envelope, and the shared retry policy. All endpoint modules
// (methods, units, users, etc.) are implemented as inherent methods in
// separate files to keep this module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::envelope::{Envelope, unwrap_envelope};
use crate::error::Error;
use crate::retry::RetryPolicy;
use crate::transport::TransportConfig;

/// Async client for the LCA catalog REST backend.
///
/// All endpoints live under `{base}/api/`. Reads go through the shared
/// [`RetryPolicy`]; mutations are sent exactly once. Responses are
/// unwrapped from the `{status, message, data}` envelope before any
/// caller sees them.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl CatalogClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build an unauthenticated client (enough for `login`).
    pub fn anonymous(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            base_url: Self::normalize_base_url(base_url)?,
            retry: RetryPolicy::default(),
        })
    }

    /// Build a client that sends the session's bearer token on every
    /// request.
    pub fn with_token(
        base_url: &str,
        token: &secrecy::SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client_with_token(token)?,
            base_url: Self::normalize_base_url(base_url)?,
            retry: RetryPolicy::default(),
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
            retry: RetryPolicy::default(),
        })
    }

    /// Replace the retry policy (defaults to 3 attempts).
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The normalized base URL (always ends in `/api/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the base URL: strip trailing slashes, append `/api/` if
    /// the caller didn't include it.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/api") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/"));
        }

        Ok(url)
    }

    /// Join a relative path (e.g. `"impact-methods"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/api/`, so joining a bare path works.
        self.base_url
            .join(path)
            .expect("path should be a valid relative URL")
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.send_get(self.url(path)).await
    }

    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let mut url = self.url(path);
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        self.send_get(url).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    /// DELETE, discarding whatever acknowledgement payload the backend
    /// puts inside a successful envelope.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_response::<serde_json::Value>(resp).await.map(drop)
    }

    /// GET a raw binary body (no envelope) -- file exports.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, Error> {
        let url = self.url(path);
        debug!("GET {url} (binary)");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::SessionExpired);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Request {
                status: status.as_u16(),
                message: if body.is_empty() {
                    format!("HTTP error! status: {}", status.as_u16())
                } else {
                    body[..body.len().min(200)].to_owned()
                },
            });
        }

        Ok(resp.bytes().await.map_err(Error::Transport)?.to_vec())
    }

    /// POST a multipart form (file imports); the response is enveloped.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url} (multipart)");

        let resp = self.http.post(url).multipart(form).send().await?;
        self.handle_response(resp).await
    }

    // ── Request execution ────────────────────────────────────────────

    /// Send a GET through the retry policy. Mutations never come here.
    async fn send_get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let mut attempt = 1u32;
        loop {
            debug!("GET {url} (attempt {attempt})");

            let result = match self.http.get(url.clone()).send().await {
                Ok(resp) => self.handle_response(resp).await,
                Err(e) => Err(Error::Transport(e)),
            };

            match result {
                Err(err) if self.retry.should_retry(&err, attempt) => {
                    warn!("GET {url} failed on attempt {attempt}: {err}");
                    tokio::time::sleep(self.retry.delay(attempt)).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// Parse the `{status, message, data}` envelope, returning `data`
    /// deserialized into `T` or a classified [`Error`].
    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::SessionExpired);
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        let envelope: Envelope<serde_json::Value> = match serde_json::from_str(&body) {
            Ok(env) => env,
            Err(e) if status.is_success() => {
                let preview = &body[..body.len().min(200)];
                return Err(Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                });
            }
            // Non-JSON failure body: classify by status alone.
            Err(_) => {
                return Err(Error::Request {
                    status: status.as_u16(),
                    message: if body.is_empty() {
                        format!("HTTP error! status: {}", status.as_u16())
                    } else {
                        body[..body.len().min(200)].to_owned()
                    },
                });
            }
        };

        let data = unwrap_envelope(status.as_u16(), envelope)?;

        serde_json::from_value(data).map_err(|e| Error::Deserialization {
            message: format!("payload did not match expected shape: {e}"),
            body,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_api_suffix() {
        let url = CatalogClient::normalize_base_url("https://lca.example.com").unwrap();
        assert_eq!(url.as_str(), "https://lca.example.com/api/");
    }

    #[test]
    fn base_url_keeps_existing_api_suffix() {
        let url = CatalogClient::normalize_base_url("https://lca.example.com/api/").unwrap();
        assert_eq!(url.as_str(), "https://lca.example.com/api/");
    }

    #[test]
    fn base_url_preserves_mount_prefix() {
        let url = CatalogClient::normalize_base_url("https://example.com/catalog").unwrap();
        assert_eq!(url.as_str(), "https://example.com/catalog/api/");
    }
}
