//! Application event handling.
//!
//! This module processes background task completion events. The only
//! background work in this app is the dark-mode preference persist; both
//! outcomes are logged and neither interrupts the user (storage is
//! best-effort by design).

use crate::app::{App, AppEvent};

/// Handle application events from background tasks.
pub(super) fn handle_app_event(_app: &mut App, event: AppEvent) {
    match event {
        AppEvent::DarkModePersisted { dark } => {
            tracing::debug!(dark, "Dark-mode preference persisted");
        }
        AppEvent::DarkModePersistFailed { dark, error } => {
            // Silent fallback: next startup simply reads the old value.
            tracing::warn!(dark, error = %error, "Failed to persist dark-mode preference");
        }
    }
}
