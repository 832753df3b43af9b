//! Central application state and state-transition handlers.
//!
//! All view state lives here: theme variant, accordion state, read flags,
//! category filter, saved posts, search input, and UI chrome (focus,
//! selections, status line). Every mutation happens synchronously inside an
//! input handler; the only background work is the fire-and-forget dark-mode
//! persist, whose outcome comes back as an `AppEvent`.

use crate::content::{self, BlogPost, Category, FaqEntry};
use crate::keybindings::KeybindingRegistry;
use crate::nav::{Navigator, Route};
use crate::prefs::{self, PreferenceStore, PrefsError, DARK_MODE_KEY};
use crate::theme::{StyleMap, ThemeVariant};
use ratatui::style::Style;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::time::Instant;

/// Number of heart slots in the learning-progress row. The original page
/// renders five hearts regardless of how many sections are tracked.
pub const PROGRESS_HEARTS: usize = 5;

// ============================================================================
// Focus Enum
// ============================================================================

/// Which panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Posts,
    Faq,
}

// ============================================================================
// Background Events
// ============================================================================

/// Events from background tasks.
///
/// The dark-mode persist is the only spawned work; both outcomes are
/// reported so the event loop can log them. Failure is silent to the user
/// (storage is best-effort).
pub enum AppEvent {
    DarkModePersisted {
        dark: bool,
    },
    DarkModePersistFailed {
        dark: bool,
        error: String,
    },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state.
pub struct App {
    /// Durable preference storage (dark-mode flag only).
    pub prefs: Arc<dyn PreferenceStore>,
    /// Navigation collaborator for sidebar route requests.
    pub navigator: Arc<dyn Navigator>,

    // Theme
    /// Current theme variant. `Dark` is the persisted dark-mode flag.
    pub theme_variant: ThemeVariant,
    /// Active style map for all UI rendering.
    pub theme: StyleMap,

    // Keybindings
    pub keybindings: KeybindingRegistry,

    // View state
    pub focus: Focus,
    /// Selected sidebar link index (into `Route::ALL`).
    pub selected_link: usize,
    /// Selected post index into the *filtered* post list.
    pub selected_post: usize,
    /// Selected FAQ entry index (into `content::faq_entries()`).
    pub selected_faq: usize,
    /// Open accordion entry, at most one. `None` = all collapsed.
    pub active_faq: Option<u32>,
    /// Read flags, positionally aligned to `content::faq_entries()`.
    pub read_flags: Vec<bool>,
    /// Category filter. `None` is the "All" sentinel.
    pub selected_category: Option<Category>,
    /// Saved (bookmarked) post ids. Session-only, by design.
    pub saved_posts: HashSet<u32>,

    // Search
    pub search_mode: bool,
    pub search_input: String,

    // Chrome
    /// Status message with creation time for expiry. Cow avoids allocation
    /// for static literals.
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    /// Whether the help overlay is currently displayed.
    pub show_help: bool,
    /// Scroll offset in the help screen.
    pub help_scroll_offset: usize,
    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,
}

impl App {
    /// Create the application state.
    ///
    /// The dark-mode flag is read from the preference store once, here;
    /// an absent or unreadable value falls back to light mode.
    pub fn new(prefs: Arc<dyn PreferenceStore>, navigator: Arc<dyn Navigator>) -> Self {
        let variant = ThemeVariant::from_dark_flag(prefs::load_dark_mode(prefs.as_ref()));
        Self::with_theme(prefs, navigator, variant)
    }

    /// Create the application state with an explicit starting variant
    /// (used by `--theme` and by tests).
    pub fn with_theme(
        prefs: Arc<dyn PreferenceStore>,
        navigator: Arc<dyn Navigator>,
        variant: ThemeVariant,
    ) -> Self {
        Self {
            prefs,
            navigator,
            theme_variant: variant,
            theme: StyleMap::from_palette(&variant.palette()),
            keybindings: KeybindingRegistry::new(),
            focus: Focus::Posts,
            selected_link: Route::ALL
                .iter()
                .position(|r| *r == Route::Education)
                .unwrap_or(0),
            selected_post: 0,
            selected_faq: 0,
            active_faq: None,
            read_flags: vec![false; content::faq_entries().len()],
            selected_category: None,
            saved_posts: HashSet::new(),
            search_mode: false,
            search_input: String::new(),
            status_message: None,
            show_help: false,
            help_scroll_offset: 0,
            needs_redraw: true,
        }
    }

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    // ========================================================================
    // Dark Mode
    // ========================================================================

    /// Switch to a different theme variant at runtime.
    ///
    /// Rebuilds the `StyleMap` from the new variant's palette and marks the
    /// UI as needing a full redraw.
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Flip dark mode and return the new flag value.
    ///
    /// The durable write is the caller's job (spawned fire-and-forget from
    /// the input handler) so this transition stays synchronous and total.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.set_theme(self.theme_variant.toggled());
        self.theme_variant.is_dark()
    }

    /// Persist the current dark-mode flag to the preference store.
    ///
    /// Best-effort: callers log failures and never surface them.
    pub fn persist_dark_mode(&self) -> Result<(), PrefsError> {
        let value = if self.theme_variant.is_dark() {
            "true"
        } else {
            "false"
        };
        self.prefs.set(DARK_MODE_KEY, value)
    }

    // ========================================================================
    // Accordion + Read Progress
    // ========================================================================

    /// Toggle the accordion entry with the given id: open it if closed,
    /// collapse it if it is the open one. Unknown ids are ignored so the
    /// open-entry invariant (`active_faq` references a real entry) holds.
    pub fn toggle_faq(&mut self, id: u32) {
        if self.active_faq == Some(id) {
            self.active_faq = None;
        } else if content::faq_entries().iter().any(|e| e.id == id) {
            self.active_faq = Some(id);
        }
        self.needs_redraw = true;
    }

    /// The FAQ entry currently under the cursor.
    pub fn selected_faq_entry(&self) -> Option<&'static FaqEntry> {
        content::faq_entries().get(self.selected_faq)
    }

    /// Mark the FAQ section at `index` as read. Idempotent; once true a
    /// flag never reverts (no reset operation exists). Out-of-range
    /// indices are ignored.
    pub fn mark_read(&mut self, index: usize) {
        if let Some(flag) = self.read_flags.get_mut(index) {
            *flag = true;
            self.needs_redraw = true;
        }
    }

    /// Number of sections read. Always derived from the flags, so the
    /// count and the progress bar can never disagree.
    pub fn completed_count(&self) -> usize {
        self.read_flags.iter().filter(|f| **f).count()
    }

    /// Fraction of sections read, in [0, 1].
    pub fn progress_fraction(&self) -> f64 {
        if self.read_flags.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.read_flags.len() as f64
    }

    // ========================================================================
    // Category Filter + Search
    // ========================================================================

    /// Replace the category filter. `None` selects all posts.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.selected_category = category;
        self.clamp_selections();
        self.needs_redraw = true;
    }

    /// Cycle the category filter: All -> Health -> ... -> History -> All.
    pub fn cycle_category(&mut self, forward: bool) {
        let cats = Category::ALL;
        let next = match self.selected_category {
            None => {
                if forward {
                    Some(cats[0])
                } else {
                    Some(cats[cats.len() - 1])
                }
            }
            Some(cur) => {
                // Position is always found: selected_category stays within
                // the closed Category domain.
                let idx = cats.iter().position(|c| *c == cur).unwrap_or(0);
                if forward {
                    if idx + 1 < cats.len() {
                        Some(cats[idx + 1])
                    } else {
                        None
                    }
                } else if idx > 0 {
                    Some(cats[idx - 1])
                } else {
                    None
                }
            }
        };
        self.set_category(next);
    }

    /// Display name of the current filter for panel titles.
    pub fn category_label(&self) -> &'static str {
        self.selected_category.map(|c| c.name()).unwrap_or("All")
    }

    /// Case-insensitive substring match over title and excerpt.
    fn matches_search(&self, post: &BlogPost) -> bool {
        if self.search_input.is_empty() {
            return true;
        }
        let needle = self.search_input.to_lowercase();
        post.title.to_lowercase().contains(&needle)
            || post.excerpt.to_lowercase().contains(&needle)
    }

    /// The visible post list: category filter AND search predicate,
    /// preserving original relative order. Recomputed per render.
    pub fn filtered_posts(&self) -> Vec<&'static BlogPost> {
        content::blog_posts()
            .iter()
            .filter(|p| {
                self.selected_category
                    .map(|c| p.category == c)
                    .unwrap_or(true)
            })
            .filter(|p| self.matches_search(p))
            .collect()
    }

    /// The post currently under the cursor, if the filtered list is
    /// non-empty.
    pub fn selected_post_entry(&self) -> Option<&'static BlogPost> {
        self.filtered_posts().get(self.selected_post).copied()
    }

    // ========================================================================
    // Saved Posts + Share
    // ========================================================================

    /// Toggle bookmark membership for a post id. Self-inverse. Unknown ids
    /// are never inserted, keeping `saved_posts` a subset of real post ids.
    pub fn toggle_saved(&mut self, post_id: u32) {
        if self.saved_posts.remove(&post_id) {
            self.needs_redraw = true;
            return;
        }
        if content::blog_posts().iter().any(|p| p.id == post_id) {
            self.saved_posts.insert(post_id);
            self.needs_redraw = true;
        }
    }

    /// Share stub: emits a diagnostic record identifying the post.
    /// Extension point for a real share integration.
    pub fn share(&mut self, post_id: u32) {
        let title = content::blog_posts()
            .iter()
            .find(|p| p.id == post_id)
            .map(|p| p.title)
            .unwrap_or("unknown");
        tracing::info!(post_id, title, "Sharing post");
        self.set_status(format!("Shared \"{}\"", title));
    }

    // ========================================================================
    // Navigation + Focus
    // ========================================================================

    /// Issue a route-change request for the selected sidebar link.
    pub fn navigate_selected(&mut self) {
        if let Some(route) = Route::ALL.get(self.selected_link).copied() {
            self.navigator.request(route);
            if route == Route::Education {
                self.set_status("You are already on Education");
            } else {
                self.set_status(format!("Navigating to {}...", route.label()));
            }
        }
    }

    /// Move selection up in the focused panel.
    pub fn nav_up(&mut self) {
        match self.focus {
            Focus::Sidebar => {
                self.selected_link = self.selected_link.saturating_sub(1);
            }
            Focus::Posts => {
                self.selected_post = self.selected_post.saturating_sub(1);
            }
            Focus::Faq => {
                self.selected_faq = self.selected_faq.saturating_sub(1);
            }
        }
    }

    /// Move selection down in the focused panel.
    pub fn nav_down(&mut self) {
        match self.focus {
            Focus::Sidebar => {
                let max_index = Route::ALL.len().saturating_sub(1);
                self.selected_link = self.selected_link.saturating_add(1).min(max_index);
            }
            Focus::Posts => {
                let len = self.filtered_posts().len();
                if len > 0 {
                    self.selected_post = self.selected_post.saturating_add(1).min(len - 1);
                }
            }
            Focus::Faq => {
                let len = content::faq_entries().len();
                if len > 0 {
                    self.selected_faq = self.selected_faq.saturating_add(1).min(len - 1);
                }
            }
        }
    }

    /// Cycle panel focus: Sidebar -> Posts -> Faq -> Sidebar.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Posts,
            Focus::Posts => Focus::Faq,
            Focus::Faq => Focus::Sidebar,
        };
    }

    /// Clamp all selection indices to valid ranges.
    ///
    /// Call after any operation that shrinks a list the cursor points into
    /// (category change, search edits).
    pub fn clamp_selections(&mut self) {
        let posts_len = self.filtered_posts().len();
        self.selected_post = if posts_len == 0 {
            0
        } else {
            self.selected_post.min(posts_len - 1)
        };
        let faq_len = content::faq_entries().len();
        self.selected_faq = if faq_len == 0 {
            0
        } else {
            self.selected_faq.min(faq_len - 1)
        };
        self.selected_link = self
            .selected_link
            .min(Route::ALL.len().saturating_sub(1));
    }

    // ========================================================================
    // Status Line
    // ========================================================================

    /// Set a status message with expiry.
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    /// Clear status message if expired (older than 3 seconds).
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
