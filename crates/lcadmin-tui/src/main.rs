//! lcadmin-tui entry point: config resolution, logging, terminal setup.

mod action;
mod app;
mod component;
mod data_bridge;
mod entities;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

use lcadmin_core::Catalog;

/// Terminal admin console for LCA data catalogs.
#[derive(Debug, Parser)]
#[command(name = "lcadmin-tui", version, about)]
struct Args {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "LCADMIN_PROFILE")]
    profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 'S', env = "LCADMIN_SERVER")]
    server: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "LCADMIN_INSECURE")]
    insecure: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    tui::install_hooks()?;
    init_file_logging();

    let args = Args::parse();

    let cfg = lcadmin_config::load_config_or_default();
    let profile_name = args
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into());
    let profile = cfg.profiles.get(&profile_name).cloned();

    let mut catalog_config = match (&args.server, &profile) {
        (Some(server), _) => lcadmin_core::CatalogConfig {
            base_url: server.clone(),
            transport: lcadmin_api::TransportConfig::default(),
        },
        (None, Some(profile)) => lcadmin_config::profile_to_catalog_config(profile)
            .map_err(|e| eyre!("profile '{profile_name}': {e}"))?,
        (None, None) => {
            return Err(eyre!(
                "no backend configured -- run `lcadmin config init` or pass --server"
            ));
        }
    };
    if args.insecure {
        catalog_config.transport.tls = lcadmin_api::TlsMode::DangerAcceptInvalid;
    }

    let catalog =
        Catalog::new(catalog_config).map_err(|e| eyre!("failed to initialize client: {e}"))?;

    app::App::new(catalog, profile_name, profile).run().await
}

/// Log to a file in the state directory; the terminal is owned by the
/// UI.
fn init_file_logging() {
    let Some(dirs) = directories::ProjectDirs::from("dev", "verdantry", "lcadmin") else {
        return;
    };
    let log_dir = dirs.data_local_dir().join("logs");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let appender = tracing_appender::rolling::daily(log_dir, "lcadmin-tui.log");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init();
}
