//! Data bridge -- owns the [`Catalog`] and every entity's browse
//! adapter; runs as a background task.
//!
//! Screens enqueue [`BridgeRequest`]s; the bridge establishes the
//! session, applies each browse operation, and answers with
//! [`Action::BrowseView`] snapshots. Browse requests are processed
//! strictly in order (one task, one queue), so a refetch triggered by
//! a mutation can never be overtaken by an older list response.
//! Dashboard fetches run concurrently and carry a generation stamp so
//! a stale response is dropped instead of overwriting fresh data.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use lcadmin_core::{Catalog, EntityKind};

use crate::action::{Action, BrowseOp, Notification};
use crate::entities::{EntityBrowser, build_browsers};

/// Requests screens send to the bridge.
#[derive(Debug)]
pub enum BridgeRequest {
    Browse(EntityKind, BrowseOp),
    Dashboard,
}

/// Run the bridge until cancelled.
pub async fn run_bridge(
    catalog: Catalog,
    profile_name: String,
    profile: Option<lcadmin_config::Profile>,
    mut rx: mpsc::UnboundedReceiver<BridgeRequest>,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    establish_session(&catalog, &profile_name, profile.as_ref(), &action_tx).await;

    let mut browsers: HashMap<EntityKind, Box<dyn EntityBrowser>> =
        build_browsers(&catalog).into_iter().collect();

    let dashboard_generation = Arc::new(AtomicU64::new(0));

    loop {
        let request = tokio::select! {
            _ = cancel.cancelled() => break,
            request = rx.recv() => match request {
                Some(request) => request,
                None => break,
            },
        };

        match request {
            BridgeRequest::Browse(kind, op) => {
                let Some(browser) = browsers.get_mut(&kind) else {
                    continue;
                };
                debug!(?kind, ?op, "applying browse op");

                // Loading snapshot first so the screen shows a throbber
                // while the network round trip is in flight.
                let _ = action_tx.send(Action::BrowseView(kind, Box::new(browser.view(true))));

                let outcome = browser.apply(op).await;

                let _ = action_tx.send(Action::BrowseView(kind, Box::new(browser.view(false))));
                if let Some(notice) = outcome.notice {
                    let _ = action_tx.send(Action::Notify(notice));
                }
            }

            BridgeRequest::Dashboard => {
                let catalog = catalog.clone();
                let tx = action_tx.clone();
                // Bump generation -- an in-flight fetch with an older
                // stamp is discarded when it lands.
                let generation = dashboard_generation.fetch_add(1, Ordering::Relaxed) + 1;
                let generation_ref = Arc::clone(&dashboard_generation);

                tokio::spawn(async move {
                    match catalog.dashboard_summary().await {
                        Ok(summary) => {
                            if generation_ref.load(Ordering::Relaxed) != generation {
                                return;
                            }
                            let _ = tx.send(Action::DashboardUpdated(summary));
                        }
                        Err(err) => {
                            warn!("dashboard fetch failed: {err}");
                            let _ = tx.send(Action::Notify(Notification::error(err.to_string())));
                        }
                    }
                });
            }
        }
    }

    debug!("data bridge stopped");
}

/// Session init: stored token first, then profile credentials, else
/// stay anonymous (reads may work; mutations surface the 401).
async fn establish_session(
    catalog: &Catalog,
    profile_name: &str,
    profile: Option<&lcadmin_config::Profile>,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    let _ = action_tx.send(Action::Connecting);

    if let Ok(entry) = lcadmin_config::token_entry(profile_name) {
        if let Ok(token) = entry.get_password() {
            match catalog.resume(SecretString::from(token)).await {
                Ok(user) => {
                    let _ = action_tx.send(Action::Connected {
                        user: user.user_name,
                    });
                    return;
                }
                Err(err) => {
                    debug!("stored token rejected: {err}");
                    let _ = entry.delete_credential();
                }
            }
        }
    }

    if let Some(profile) = profile {
        if let Ok((username, password)) = lcadmin_config::resolve_credentials(profile, profile_name)
        {
            match catalog.login(&username, &password).await {
                Ok(user) => {
                    let _ = action_tx.send(Action::Connected {
                        user: user.user_name,
                    });
                    return;
                }
                Err(err) => {
                    warn!("login failed: {err}");
                    let _ = action_tx.send(Action::Disconnected(err.to_string()));
                    return;
                }
            }
        }
    }

    let _ = action_tx.send(Action::Notify(Notification::warning(
        "No credentials -- browsing anonymously",
    )));
    let _ = action_tx.send(Action::Connected {
        user: "anonymous".to_owned(),
    });
}
