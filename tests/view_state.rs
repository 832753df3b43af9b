//! Integration tests for the view-state lifecycle: theme toggling, the
//! accordion, read progress, filtering, and bookmarks.
//!
//! Each test builds its own app over an in-memory preference store for
//! isolation. These exercise the state-transition API end-to-end, the same
//! surface the input handlers drive.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use flowcare::app::{App, Focus};
use flowcare::content::{blog_posts, faq_entries, Category};
use flowcare::nav::LoggingNavigator;
use flowcare::prefs::MemoryPrefs;
use flowcare::theme::ThemeVariant;

fn test_app() -> App {
    App::new(Arc::new(MemoryPrefs::new()), Arc::new(LoggingNavigator))
}

// ============================================================================
// Dark Mode
// ============================================================================

#[test]
fn dark_mode_starts_false() {
    let app = test_app();
    assert!(!app.theme_variant.is_dark());
}

#[test]
fn dark_mode_toggle_sequence() {
    let mut app = test_app();
    assert!(app.toggle_dark_mode());
    assert!(!app.toggle_dark_mode());
    assert!(app.toggle_dark_mode());
    assert_eq!(app.theme_variant, ThemeVariant::Dark);
}

// ============================================================================
// Accordion
// ============================================================================

#[test]
fn accordion_starts_closed() {
    let app = test_app();
    assert_eq!(app.active_faq, None);
}

#[test]
fn accordion_at_most_one_open() {
    let mut app = test_app();
    for entry in faq_entries() {
        app.toggle_faq(entry.id);
        assert_eq!(app.active_faq, Some(entry.id));
    }
}

#[test]
fn accordion_open_id_is_always_valid() {
    let mut app = test_app();
    app.toggle_faq(1);
    app.toggle_faq(42); // unknown id, ignored
    let open = app.active_faq.unwrap();
    assert!(faq_entries().iter().any(|e| e.id == open));
}

// ============================================================================
// Read Progress
// ============================================================================

#[test]
fn read_progress_scenario() {
    let mut app = test_app();
    assert_eq!(app.read_flags, vec![false, false, false]);
    assert_eq!(app.completed_count(), 0);

    app.mark_read(0);
    app.mark_read(1);

    assert_eq!(app.read_flags, vec![true, true, false]);
    assert!((app.progress_fraction() - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(app.completed_count(), 2);
}

#[test]
fn read_flags_align_with_faq_entries() {
    let app = test_app();
    assert_eq!(app.read_flags.len(), faq_entries().len());
}

#[test]
fn displayed_count_cannot_drift_from_flags() {
    // Marking the same section repeatedly must not inflate the count.
    let mut app = test_app();
    for _ in 0..10 {
        app.mark_read(0);
    }
    assert_eq!(app.completed_count(), 1);
    assert_eq!(
        app.completed_count(),
        app.read_flags.iter().filter(|f| **f).count()
    );
}

// ============================================================================
// Category Filter + Search
// ============================================================================

#[test]
fn all_filter_returns_full_ordered_list() {
    let app = test_app();
    let ids: Vec<u32> = app.filtered_posts().iter().map(|p| p.id).collect();
    let expected: Vec<u32> = blog_posts().iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn nutrition_filter_yields_post_two() {
    let mut app = test_app();
    app.set_category(Some(Category::Nutrition));
    let posts = app.filtered_posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 2);
}

#[test]
fn filter_does_not_touch_saved_or_read_state() {
    let mut app = test_app();
    app.toggle_saved(1);
    app.mark_read(0);

    app.set_category(Some(Category::History));

    assert!(app.saved_posts.contains(&1));
    assert_eq!(app.completed_count(), 1);
}

#[test]
fn search_and_category_compose_with_and() {
    let mut app = test_app();
    app.search_input = "Menstrual".to_string();

    // "menstrual" matches posts 1, 2, 4 (case-insensitive, title/excerpt).
    let ids: Vec<u32> = app.filtered_posts().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);

    app.set_category(Some(Category::History));
    let ids: Vec<u32> = app.filtered_posts().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![4]);
}

// ============================================================================
// Bookmarks
// ============================================================================

#[test]
fn toggle_saved_scenario_leaves_empty_set() {
    let mut app = test_app();
    app.toggle_saved(3);
    app.toggle_saved(3);
    assert!(app.saved_posts.is_empty());
}

#[test]
fn saved_posts_stay_subset_of_post_ids() {
    let mut app = test_app();
    app.toggle_saved(1);
    app.toggle_saved(77); // unknown id, never inserted
    for id in &app.saved_posts {
        assert!(blog_posts().iter().any(|p| p.id == *id));
    }
    assert_eq!(app.saved_posts.len(), 1);
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn focus_starts_on_posts() {
    let app = test_app();
    assert_eq!(app.focus, Focus::Posts);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// After an even number of toggles dark mode equals the initial state;
    /// after an odd number it is negated.
    #[test]
    fn dark_mode_toggle_parity(toggles in 0usize..64) {
        let mut app = test_app();
        let initial = app.theme_variant.is_dark();
        for _ in 0..toggles {
            app.toggle_dark_mode();
        }
        if toggles % 2 == 0 {
            prop_assert_eq!(app.theme_variant.is_dark(), initial);
        } else {
            prop_assert_eq!(app.theme_variant.is_dark(), !initial);
        }
    }

    /// Toggling the same entry twice in a row restores the prior open state.
    #[test]
    fn accordion_double_toggle_restores(
        setup in proptest::collection::vec(1u32..=3, 0..8),
        id in 1u32..=3,
    ) {
        let mut app = test_app();
        for s in setup {
            app.toggle_faq(s);
        }
        let before = app.active_faq;
        app.toggle_faq(id);
        app.toggle_faq(id);
        prop_assert_eq!(app.active_faq, before);
    }

    /// Once a read flag is true it stays true: there is no reset operation.
    #[test]
    fn read_flags_are_monotonic(ops in proptest::collection::vec(0usize..6, 0..64)) {
        let mut app = test_app();
        let mut high_water = vec![false; app.read_flags.len()];
        for index in ops {
            app.mark_read(index);
            for (i, flag) in app.read_flags.iter().enumerate() {
                if high_water[i] {
                    prop_assert!(*flag, "flag {} reverted", i);
                }
                high_water[i] = *flag;
            }
        }
    }

    /// Progress fraction is always in [0,1] and equals trueCount/len.
    #[test]
    fn progress_fraction_in_bounds(ops in proptest::collection::vec(0usize..6, 0..64)) {
        let mut app = test_app();
        for index in ops {
            app.mark_read(index);
            let fraction = app.progress_fraction();
            prop_assert!((0.0..=1.0).contains(&fraction));
            let expected = app.read_flags.iter().filter(|f| **f).count() as f64
                / app.read_flags.len() as f64;
            prop_assert!((fraction - expected).abs() < 1e-12);
        }
    }

    /// toggle_saved is self-inverse for any valid post id.
    #[test]
    fn toggle_saved_self_inverse(
        setup in proptest::collection::vec(1u32..=4, 0..8),
        id in 1u32..=4,
    ) {
        let mut app = test_app();
        for s in setup {
            app.toggle_saved(s);
        }
        let before = app.saved_posts.clone();
        app.toggle_saved(id);
        app.toggle_saved(id);
        prop_assert_eq!(&app.saved_posts, &before);
    }

    /// Filtering by a category yields exactly the matching subset, in order.
    #[test]
    fn category_filter_is_exact(cat_index in 0usize..4) {
        let cat = Category::ALL[cat_index];
        let mut app = test_app();
        app.set_category(Some(cat));

        let got: Vec<u32> = app.filtered_posts().iter().map(|p| p.id).collect();
        let expected: Vec<u32> = blog_posts()
            .iter()
            .filter(|p| p.category == cat)
            .map(|p| p.id)
            .collect();
        prop_assert_eq!(got, expected);
    }
}
