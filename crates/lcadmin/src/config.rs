//! Flag-aware config resolution and session establishment.
//!
//! Layers, lowest to highest: config-file profile → environment →
//! CLI flags. The stored session token (keyring) is adopted when
//! present; otherwise resolvable credentials log in transparently.

use secrecy::SecretString;
use tracing::debug;

use lcadmin_config::{Config, Profile};
use lcadmin_core::{Catalog, CatalogConfig};
use lcadmin_api::{TlsMode, TransportConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// The profile name the invocation resolves to.
pub fn active_profile_name(global: &GlobalOpts, cfg: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `CatalogConfig` from profile + CLI flag overrides.
fn resolve_catalog_config(
    profile: Option<&Profile>,
    global: &GlobalOpts,
) -> Result<CatalogConfig, CliError> {
    let server = global
        .server
        .clone()
        .or_else(|| profile.map(|p| p.server.clone()))
        .ok_or_else(|| CliError::NoConfig {
            path: lcadmin_config::config_path().display().to_string(),
        })?;

    if server.parse::<url::Url>().is_err() {
        return Err(CliError::Validation {
            field: "server".into(),
            reason: format!("invalid URL: {server}"),
        });
    }

    let insecure = global.insecure || profile.and_then(|p| p.insecure).unwrap_or(false);
    let tls = if insecure {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ca) = profile.and_then(|p| p.ca_cert.clone()) {
        TlsMode::CustomCa(ca)
    } else {
        TlsMode::System
    };

    let timeout = profile
        .and_then(|p| p.timeout)
        .filter(|_| global.timeout == 30)
        .unwrap_or(global.timeout);

    Ok(CatalogConfig {
        base_url: server,
        transport: TransportConfig {
            tls,
            timeout: std::time::Duration::from_secs(timeout),
        },
    })
}

/// Keyring entry holding a profile's session token.
pub fn token_entry(profile_name: &str) -> Result<keyring::Entry, keyring::Error> {
    lcadmin_config::token_entry(profile_name)
}

/// Build a `Catalog` and establish a session if possible.
///
/// Order: stored token (adopt + profile fetch) → resolvable
/// credentials (transparent login) → anonymous. Commands that hit an
/// endpoint requiring auth surface the backend's 401 as `AuthFailed`.
pub async fn connect(global: &GlobalOpts) -> Result<Catalog, CliError> {
    let cfg = lcadmin_config::load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);
    let profile = cfg.profiles.get(&profile_name);

    let catalog_config = resolve_catalog_config(profile, global)?;
    let catalog = Catalog::new(catalog_config)?;

    // 1. Stored session token
    if let Ok(entry) = token_entry(&profile_name) {
        if let Ok(token) = entry.get_password() {
            match catalog.resume(SecretString::from(token)).await {
                Ok(user) => {
                    debug!("resumed session for {}", user.user_name);
                    return Ok(catalog);
                }
                Err(err) => {
                    debug!("stored token rejected: {err}");
                    let _ = entry.delete_credential();
                }
            }
        }
    }

    // 2. Transparent login from resolvable credentials
    if let Some(profile) = profile {
        if let Ok((username, password)) =
            lcadmin_config::resolve_credentials(profile, &profile_name)
        {
            match catalog.login(&username, &password).await {
                Ok(user) => debug!("signed in as {}", user.user_name),
                Err(err) => debug!("transparent login failed: {err}"),
            }
        }
    }

    // 3. Anonymous -- reads may work, mutations will 401.
    Ok(catalog)
}
