//! Login / logout handlers.
//!
//! `login` exchanges credentials for a bearer token and stores it in
//! the system keyring under the active profile; later invocations
//! adopt it transparently. `logout` invalidates the token server-side
//! and removes it from the keyring.

use secrecy::SecretString;

use lcadmin_core::Catalog;

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;
use crate::output;

pub async fn login(
    catalog: &Catalog,
    username: Option<String>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let cfg = lcadmin_config::load_config_or_default();
    let profile_name = config::active_profile_name(global, &cfg);
    let profile = cfg.profiles.get(&profile_name);

    let username = match username
        .or_else(|| profile.and_then(|p| p.username.clone()))
    {
        Some(u) => u,
        None => dialoguer::Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?,
    };

    let password = SecretString::from(
        rpassword::prompt_password(format!("Password for {username}: ")).map_err(CliError::Io)?,
    );

    let user = catalog.login(&username, &password).await?;

    // Persist the token so later invocations resume the session.
    if let Some(session) = catalog.session() {
        use secrecy::ExposeSecret;
        if let Ok(entry) = config::token_entry(&profile_name) {
            if let Err(err) = entry.set_password(session.token().expose_secret()) {
                tracing::warn!("could not store session token in keyring: {err}");
            }
        }
    }

    output::print_success(
        &format!("Signed in as {} ({})", user.user_name, user.role),
        &global.color,
        global.quiet,
    );
    Ok(())
}

pub async fn logout(catalog: &Catalog, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = lcadmin_config::load_config_or_default();
    let profile_name = config::active_profile_name(global, &cfg);

    catalog.logout().await?;

    if let Ok(entry) = config::token_entry(&profile_name) {
        let _ = entry.delete_credential();
    }

    output::print_success("Signed out", &global.color, global.quiet);
    Ok(())
}
