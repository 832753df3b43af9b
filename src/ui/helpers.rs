//! Shared helpers for the UI layer.

use crate::app::{App, AppEvent};
use crate::prefs::DARK_MODE_KEY;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Maximum allowed search query length (UI layer validation)
pub(super) const MAX_SEARCH_LENGTH: usize = 256;

/// Spawn a fire-and-forget write of the dark-mode flag.
///
/// The write runs on the blocking pool so disk latency never stalls the
/// event loop. The outcome comes back as an `AppEvent` purely for logging;
/// storage is best-effort and failure is never surfaced to the user.
pub(super) fn spawn_persist_dark_mode(app: &App, event_tx: &mpsc::Sender<AppEvent>) {
    let prefs = Arc::clone(&app.prefs);
    let dark = app.theme_variant.is_dark();
    let tx = event_tx.clone();

    tokio::spawn(async move {
        let value = if dark { "true" } else { "false" };
        let result =
            tokio::task::spawn_blocking(move || prefs.set(DARK_MODE_KEY, value)).await;

        let event = match result {
            Ok(Ok(())) => AppEvent::DarkModePersisted { dark },
            Ok(Err(e)) => AppEvent::DarkModePersistFailed {
                dark,
                error: e.to_string(),
            },
            Err(e) => AppEvent::DarkModePersistFailed {
                dark,
                error: format!("persist task panicked: {}", e),
            },
        };

        if let Err(e) = tx.send(event).await {
            tracing::warn!(error = %e, "Failed to report persist outcome (receiver dropped)");
        }
    });
}
