//! Input handling for the TUI.
//!
//! This module processes keyboard input and dispatches to the appropriate
//! handler based on the current mode and focused panel.

use crate::app::{App, AppEvent, Focus};
use crate::keybindings::{Action as KbAction, Context as KbContext};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::helpers::{spawn_persist_dark_mode, MAX_SEARCH_LENGTH};
use super::Action;

/// Map the current focus panel to a keybinding context.
fn focus_to_context(focus: Focus) -> KbContext {
    match focus {
        Focus::Sidebar => KbContext::Sidebar,
        Focus::Posts => KbContext::Posts,
        Focus::Faq => KbContext::Faq,
    }
}

/// Main input dispatch function.
///
/// Routes input to the appropriate handler based on current mode.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    // Handle help overlay input first (captures all keys when visible)
    if app.show_help {
        return Ok(handle_help_input(app, code));
    }

    // Handle search mode input separately
    if app.search_mode {
        return Ok(handle_search_input(app, code, modifiers));
    }

    handle_browse_input(app, code, modifiers, event_tx)
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input in the main browse view.
fn handle_browse_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    let context = focus_to_context(app.focus);
    let action = app.keybindings.action_for_key(code, modifiers, context);

    match action {
        Some(KbAction::Quit) => return Ok(Action::Quit),
        Some(KbAction::Back) => {
            // A committed search filter is the only dismissible state.
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.clamp_selections();
                app.set_status("Search cleared");
            }
        }
        Some(KbAction::NavDown) => app.nav_down(),
        Some(KbAction::NavUp) => app.nav_up(),
        Some(KbAction::CycleFocus) => app.cycle_focus(),
        Some(KbAction::Select) => handle_select(app),
        Some(KbAction::ToggleTheme) => {
            app.toggle_dark_mode();
            app.set_status(format!("Theme: {}", app.theme_variant.name()));
            spawn_persist_dark_mode(app, event_tx);
        }
        Some(KbAction::ToggleSaved) => {
            if let Some(post) = app.selected_post_entry() {
                let id = post.id;
                let title = post.title;
                app.toggle_saved(id);
                if app.saved_posts.contains(&id) {
                    app.set_status(format!("Saved \"{}\"", title));
                } else {
                    app.set_status(format!("Removed \"{}\" from saved", title));
                }
            }
        }
        Some(KbAction::Share) => {
            if let Some(post) = app.selected_post_entry() {
                let id = post.id;
                app.share(id);
            }
        }
        Some(KbAction::MarkRead) => handle_mark_read(app),
        Some(KbAction::NextCategory) => {
            app.cycle_category(true);
            app.set_status(format!("Category: {}", app.category_label()));
        }
        Some(KbAction::PrevCategory) => {
            app.cycle_category(false);
            app.set_status(format!("Category: {}", app.category_label()));
        }
        Some(KbAction::EnterSearch) => {
            app.search_mode = true;
            app.search_input.clear();
            app.clamp_selections();
        }
        Some(KbAction::ShowHelp) => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        // Search-only actions reach here only through misconfigured
        // overrides; ignore them outside search mode.
        Some(KbAction::ExitSearch) | Some(KbAction::CommitSearch) => {}
        None => {}
    }

    Ok(Action::Continue)
}

/// Enter on the focused panel: navigate, bookmark, or toggle the accordion.
fn handle_select(app: &mut App) {
    match app.focus {
        Focus::Sidebar => app.navigate_selected(),
        Focus::Posts => {
            if let Some(post) = app.selected_post_entry() {
                let id = post.id;
                app.toggle_saved(id);
            }
        }
        Focus::Faq => {
            if let Some(entry) = app.selected_faq_entry() {
                app.toggle_faq(entry.id);
            }
        }
    }
}

/// Mark the selected FAQ section as read.
///
/// Mirrors the page layout: the read checkbox only exists inside an open
/// section, so the section must be expanded first.
fn handle_mark_read(app: &mut App) {
    let Some(entry) = app.selected_faq_entry() else {
        return;
    };
    if app.active_faq == Some(entry.id) {
        let index = app.selected_faq;
        let already = app.read_flags.get(index).copied().unwrap_or(false);
        app.mark_read(index);
        if already {
            app.set_status("Section already marked as read");
        } else {
            app.set_status(format!(
                "Progress: {} of {} sections read",
                app.completed_count(),
                app.read_flags.len()
            ));
        }
    } else {
        app.set_status("Open the section first (Enter)");
    }
}

/// Handle input while typing a search query.
///
/// Printable characters edit the query; the filtered list updates live.
/// Esc cancels (clearing the query), Enter commits it and returns to
/// normal navigation with the filter still applied.
fn handle_search_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    if let Some(action) = app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Search)
    {
        match action {
            KbAction::ExitSearch => {
                app.search_mode = false;
                app.search_input.clear();
                app.clamp_selections();
            }
            KbAction::CommitSearch => {
                app.search_mode = false;
                app.clamp_selections();
                if !app.search_input.is_empty() {
                    app.set_status(format!(
                        "{} matching article(s)",
                        app.filtered_posts().len()
                    ));
                }
            }
            _ => {}
        }
        return Action::Continue;
    }

    match code {
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            if app.search_input.len() < MAX_SEARCH_LENGTH {
                app.search_input.push(c);
                app.clamp_selections();
            }
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.clamp_selections();
        }
        _ => {}
    }
    Action::Continue
}
