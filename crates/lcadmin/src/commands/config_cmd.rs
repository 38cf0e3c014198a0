//! Configuration command handlers (no backend connection needed).

use dialoguer::{Confirm, Input};

use lcadmin_config::{Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),
        ConfigCommand::Show => show(global),
        ConfigCommand::Set { key, value } => set(&key, value, global),
        ConfigCommand::Profiles => profiles(global),
        ConfigCommand::Use { name } => use_profile(name, global),
        ConfigCommand::SetPassword { profile } => set_password(profile, global),
    }
}

/// Guided first-run setup: one profile, saved as the default.
fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = lcadmin_config::load_config_or_default();

    let name: String = Input::new()
        .with_prompt("Profile name")
        .default("default".into())
        .interact_text()
        .map_err(io_err)?;

    let server: String = Input::new()
        .with_prompt("Backend URL (e.g. https://lca.example.com)")
        .interact_text()
        .map_err(io_err)?;

    if server.parse::<url::Url>().is_err() {
        return Err(CliError::Validation {
            field: "server".into(),
            reason: format!("invalid URL: {server}"),
        });
    }

    let username: String = Input::new()
        .with_prompt("Username")
        .allow_empty(true)
        .interact_text()
        .map_err(io_err)?;

    let store_password = Confirm::new()
        .with_prompt("Store a password in the system keyring now?")
        .default(true)
        .interact()
        .map_err(io_err)?;

    if store_password {
        let password = rpassword::prompt_password("Password: ").map_err(CliError::Io)?;
        lcadmin_config::store_password(&name, &password)?;
    }

    cfg.profiles.insert(
        name.clone(),
        Profile {
            server,
            username: (!username.is_empty()).then_some(username),
            password: None,
            password_env: None,
            ca_cert: None,
            insecure: None,
            timeout: None,
        },
    );
    cfg.default_profile = Some(name.clone());
    lcadmin_config::save_config(&cfg)?;

    output::print_success(
        &format!(
            "Profile '{name}' saved to {}",
            lcadmin_config::config_path().display()
        ),
        &global.color,
        global.quiet,
    );
    Ok(())
}

fn show(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = lcadmin_config::load_config_or_default();
    let rendered = toml::to_string_pretty(&redacted(cfg)).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: e.to_string(),
    })?;
    output::print_output(&rendered, global.quiet);
    Ok(())
}

/// Plaintext passwords never leave `config show`.
fn redacted(mut cfg: Config) -> Config {
    for profile in cfg.profiles.values_mut() {
        if profile.password.is_some() {
            profile.password = Some("<redacted>".into());
        }
    }
    cfg
}

fn set(key: &str, value: String, global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = lcadmin_config::load_config_or_default();

    // Accepted shapes: defaults.<field> and profiles.<name>.<field>.
    let parts: Vec<&str> = key.split('.').collect();
    match parts.as_slice() {
        ["defaults", "output"] => cfg.defaults.output = value,
        ["defaults", "color"] => cfg.defaults.color = value,
        ["defaults", "page_size"] => {
            cfg.defaults.page_size = value.parse().map_err(|_| bad_value(key, &value))?;
        }
        ["defaults", "timeout"] => {
            cfg.defaults.timeout = value.parse().map_err(|_| bad_value(key, &value))?;
        }
        ["defaults", "insecure"] => {
            cfg.defaults.insecure = value.parse().map_err(|_| bad_value(key, &value))?;
        }
        ["profiles", name, field] => {
            let profile =
                cfg.profiles
                    .entry((*name).to_owned())
                    .or_insert_with(|| Profile {
                        server: String::new(),
                        username: None,
                        password: None,
                        password_env: None,
                        ca_cert: None,
                        insecure: None,
                        timeout: None,
                    });
            match *field {
                "server" => profile.server = value,
                "username" => profile.username = Some(value),
                "password_env" => profile.password_env = Some(value),
                "ca_cert" => profile.ca_cert = Some(value.into()),
                "insecure" => {
                    profile.insecure = Some(value.parse().map_err(|_| bad_value(key, &value))?);
                }
                "timeout" => {
                    profile.timeout = Some(value.parse().map_err(|_| bad_value(key, &value))?);
                }
                other => {
                    return Err(CliError::Validation {
                        field: "key".into(),
                        reason: format!("unknown profile field '{other}'"),
                    });
                }
            }
        }
        _ => {
            return Err(CliError::Validation {
                field: "key".into(),
                reason: format!("unrecognized key '{key}'"),
            });
        }
    }

    lcadmin_config::save_config(&cfg)?;
    output::print_success(&format!("Set {key}"), &global.color, global.quiet);
    Ok(())
}

fn profiles(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = lcadmin_config::load_config_or_default();
    let default = cfg.default_profile.as_deref().unwrap_or("");

    let mut names: Vec<&String> = cfg.profiles.keys().collect();
    names.sort();

    let lines: Vec<String> = names
        .into_iter()
        .map(|name| {
            let marker = if name == default { "*" } else { " " };
            let server = cfg
                .profiles
                .get(name)
                .map(|p| p.server.as_str())
                .unwrap_or_default();
            format!("{marker} {name}\t{server}")
        })
        .collect();

    output::print_output(&lines.join("\n"), global.quiet);
    Ok(())
}

fn use_profile(name: String, global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = lcadmin_config::load_config_or_default();
    if !cfg.profiles.contains_key(&name) {
        return Err(CliError::ProfileNotFound { name });
    }
    cfg.default_profile = Some(name.clone());
    lcadmin_config::save_config(&cfg)?;
    output::print_success(
        &format!("Default profile is now '{name}'"),
        &global.color,
        global.quiet,
    );
    Ok(())
}

fn set_password(profile: Option<String>, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = lcadmin_config::load_config_or_default();
    let name = profile
        .or_else(|| global.profile.clone())
        .or(cfg.default_profile)
        .unwrap_or_else(|| "default".into());

    let password = rpassword::prompt_password(format!("Password for profile '{name}': "))
        .map_err(CliError::Io)?;
    lcadmin_config::store_password(&name, &password)?;

    output::print_success(
        &format!("Password stored in keyring for '{name}'"),
        &global.color,
        global.quiet,
    );
    Ok(())
}

fn io_err(e: dialoguer::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

fn bad_value(key: &str, value: &str) -> CliError {
    CliError::Validation {
        field: key.to_owned(),
        reason: format!("invalid value '{value}'"),
    }
}
