//! Shared configuration for the lcadmin CLI and TUI.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `lcadmin_core::CatalogConfig`. Both binaries
//! depend on this crate -- the CLI adds flag-aware overrides on top.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use lcadmin_core::CatalogConfig;
use lcadmin_api::{TlsMode, TransportConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            page_size: default_page_size(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_page_size() -> u32 {
    10
}
fn default_timeout() -> u64 {
    30
}

/// A named catalog-backend profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g. "https://lca.example.com").
    pub server: String,

    /// Username for login.
    pub username: Option<String>,

    /// Password (plaintext -- prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "verdantry", "lcadmin").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("lcadmin");
    p
}

// ── Config loading / saving ─────────────────────────────────────────

/// Load the full Config from file + environment (`LCADMIN_*`).
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit path (tests, `--config`).
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("LCADMIN_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &std::path::Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Profile selection ───────────────────────────────────────────────

/// Pick a profile by explicit name, falling back to the default.
pub fn select_profile<'a>(
    config: &'a Config,
    name: Option<&str>,
) -> Result<(&'a str, &'a Profile), ConfigError> {
    let name = name
        .map(ToOwned::to_owned)
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into());

    config
        .profiles
        .get_key_value(name.as_str())
        .map(|(k, v)| (k.as_str(), v))
        .ok_or(ConfigError::ProfileNotFound { name })
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve login credentials from the chain: profile env var →
/// `LCADMIN_PASSWORD` → system keyring → plaintext in the profile.
pub fn resolve_credentials(
    profile: &Profile,
    profile_name: &str,
) -> Result<(String, SecretString), ConfigError> {
    let username = profile
        .username
        .clone()
        .or_else(|| std::env::var("LCADMIN_USERNAME").ok())
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })?;

    // 1. Profile's password_env → env var lookup
    if let Some(ref env_name) = profile.password_env {
        if let Ok(pw) = std::env::var(env_name) {
            return Ok((username, SecretString::from(pw)));
        }
    }

    // 2. Ambient env var
    if let Ok(pw) = std::env::var("LCADMIN_PASSWORD") {
        return Ok((username, SecretString::from(pw)));
    }

    // 3. System keyring
    if let Ok(entry) = keyring_entry(profile_name) {
        if let Ok(pw) = entry.get_password() {
            return Ok((username, SecretString::from(pw)));
        }
    }

    // 4. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok((username, SecretString::from(pw.clone())));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Keyring entry for a profile's password.
pub fn keyring_entry(profile_name: &str) -> Result<keyring::Entry, keyring::Error> {
    keyring::Entry::new("lcadmin", &format!("{profile_name}/password"))
}

/// Keyring entry for a profile's stored session token.
pub fn token_entry(profile_name: &str) -> Result<keyring::Entry, keyring::Error> {
    keyring::Entry::new("lcadmin", &format!("{profile_name}/token"))
}

/// Store a password in the system keyring.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    keyring_entry(profile_name)
        .and_then(|entry| entry.set_password(password))
        .map_err(|e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        })
}

// ── CatalogConfig translation ───────────────────────────────────────

/// Build a `CatalogConfig` from a profile -- no CLI flag overrides.
/// Suitable for the TUI and other non-CLI consumers.
pub fn profile_to_catalog_config(profile: &Profile) -> Result<CatalogConfig, ConfigError> {
    if profile.server.parse::<url::Url>().is_err() {
        return Err(ConfigError::Validation {
            field: "server".into(),
            reason: format!("invalid URL: {}", profile.server),
        });
    }

    let tls = if profile.insecure.unwrap_or(false) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else {
        TlsMode::System
    };

    Ok(CatalogConfig {
        base_url: profile.server.clone(),
        transport: TransportConfig {
            tls,
            timeout: Duration::from_secs(profile.timeout.unwrap_or(default_timeout())),
        },
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn profile(server: &str) -> Profile {
        Profile {
            server: server.into(),
            username: Some("mara".into()),
            password: Some("plaintext".into()),
            password_env: None,
            ca_cert: None,
            insecure: None,
            timeout: Some(10),
        }
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = Config::default();
        config
            .profiles
            .insert("staging".into(), profile("https://lca.example.com"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.default_profile.as_deref(), Some("default"));
        assert_eq!(
            loaded.profiles.get("staging").unwrap().server,
            "https://lca.example.com"
        );
        assert_eq!(loaded.defaults.page_size, 10);
    }

    #[test]
    fn select_profile_falls_back_to_default_name() {
        let mut config = Config::default();
        config
            .profiles
            .insert("default".into(), profile("https://lca.example.com"));

        let (name, _) = select_profile(&config, None).unwrap();
        assert_eq!(name, "default");

        let err = select_profile(&config, Some("missing")).unwrap_err();
        assert!(matches!(err, ConfigError::ProfileNotFound { .. }));
    }

    #[test]
    fn plaintext_password_is_the_last_resort() {
        let p = profile("https://lca.example.com");
        let (user, _secret) = resolve_credentials(&p, "test-no-such-profile").unwrap();
        assert_eq!(user, "mara");
    }

    #[test]
    fn bad_server_url_is_rejected() {
        let err = profile_to_catalog_config(&profile("not a url")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn catalog_config_carries_timeout() {
        let cfg = profile_to_catalog_config(&profile("https://lca.example.com")).unwrap();
        assert_eq!(cfg.transport.timeout, Duration::from_secs(10));
    }
}
