//! Integration tests for preference persistence and the collaborator seams:
//! the dark-mode flag surviving an app restart through the file store, and
//! sidebar navigation reaching the navigator port.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;

use flowcare::app::App;
use flowcare::nav::{LoggingNavigator, Navigator, Route};
use flowcare::prefs::{FilePrefs, MemoryPrefs, PreferenceStore, DARK_MODE_KEY};
use flowcare::theme::ThemeVariant;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("flowcare_it_{}", name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

// ============================================================================
// Dark Mode Persistence
// ============================================================================

#[test]
fn dark_mode_survives_restart_via_file_store() {
    let dir = scratch_dir("dark_restart");
    let path = dir.join("prefs.toml");

    // First session: default light, toggle to dark, persist.
    {
        let prefs = Arc::new(FilePrefs::open(&path));
        let mut app = App::new(prefs, Arc::new(LoggingNavigator));
        assert_eq!(app.theme_variant, ThemeVariant::Light);

        app.toggle_dark_mode();
        app.persist_dark_mode().unwrap();
    }

    // Second session: the stored flag wins.
    {
        let prefs = Arc::new(FilePrefs::open(&path));
        let app = App::new(prefs, Arc::new(LoggingNavigator));
        assert_eq!(app.theme_variant, ThemeVariant::Dark);
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn stored_value_is_the_literal_string() {
    let dir = scratch_dir("literal_value");
    let path = dir.join("prefs.toml");

    let prefs = Arc::new(FilePrefs::open(&path));
    let mut app = App::new(Arc::clone(&prefs) as Arc<dyn PreferenceStore>, Arc::new(LoggingNavigator));
    app.toggle_dark_mode();
    app.persist_dark_mode().unwrap();

    assert_eq!(prefs.get(DARK_MODE_KEY), Some("true".to_string()));

    app.toggle_dark_mode();
    app.persist_dark_mode().unwrap();
    assert_eq!(prefs.get(DARK_MODE_KEY), Some("false".to_string()));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn unreadable_store_falls_back_to_light() {
    let dir = scratch_dir("corrupt_store");
    let path = dir.join("prefs.toml");
    std::fs::write(&path, "]] not toml [[").unwrap();

    let prefs = Arc::new(FilePrefs::open(&path));
    let app = App::new(prefs, Arc::new(LoggingNavigator));
    assert_eq!(app.theme_variant, ThemeVariant::Light);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn memory_store_behaves_like_file_store() {
    let prefs = Arc::new(MemoryPrefs::new());
    let mut app = App::new(Arc::clone(&prefs) as Arc<dyn PreferenceStore>, Arc::new(LoggingNavigator));

    app.toggle_dark_mode();
    app.persist_dark_mode().unwrap();
    assert_eq!(prefs.get(DARK_MODE_KEY), Some("true".to_string()));

    // A fresh app over the same store starts dark.
    let app2 = App::new(prefs, Arc::new(LoggingNavigator));
    assert_eq!(app2.theme_variant, ThemeVariant::Dark);
    // Session state did not leak: only the flag persisted.
    assert!(app2.saved_posts.is_empty());
    assert_eq!(app2.completed_count(), 0);
}

// ============================================================================
// Navigation Collaborator
// ============================================================================

/// Test double that records requested routes.
#[derive(Default)]
struct RecordingNavigator {
    requests: Mutex<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn request(&self, route: Route) {
        self.requests.lock().unwrap().push(route);
    }
}

#[tokio::test]
async fn sidebar_select_issues_route_request() {
    let navigator = Arc::new(RecordingNavigator::default());
    let mut app = App::new(
        Arc::new(MemoryPrefs::new()),
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    );

    // Move the cursor to the Shop entry and activate it.
    app.selected_link = Route::ALL.iter().position(|r| *r == Route::Shop).unwrap();
    app.navigate_selected();

    assert_eq!(*navigator.requests.lock().unwrap(), vec![Route::Shop]);
}

#[tokio::test]
async fn every_route_is_reachable_from_the_sidebar() {
    let navigator = Arc::new(RecordingNavigator::default());
    let mut app = App::new(
        Arc::new(MemoryPrefs::new()),
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    );

    for (i, _) in Route::ALL.iter().enumerate() {
        app.selected_link = i;
        app.navigate_selected();
    }

    assert_eq!(*navigator.requests.lock().unwrap(), Route::ALL.to_vec());
}

// ============================================================================
// Share Stub
// ============================================================================

#[tokio::test]
async fn share_sets_a_status_and_nothing_else() {
    let mut app = App::new(Arc::new(MemoryPrefs::new()), Arc::new(LoggingNavigator));
    let saved_before = app.saved_posts.clone();

    app.share(1);

    assert!(app.status_message.is_some());
    assert_eq!(app.saved_posts, saved_before);
    assert_eq!(app.completed_count(), 0);
}
