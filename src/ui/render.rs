//! Render functions for the TUI.
//!
//! This module handles all rendering logic: the sidebar/content split, the
//! content column (header, featured card, learning progress, post cards,
//! Period 101 accordion), the status bar, and the help overlay.

use crate::app::App;
use crate::content::FEATURED;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{faq, help, posts, progress, sidebar, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 70;
pub(super) const MIN_HEIGHT: u16 = 20;

/// Fixed sidebar width in columns.
const SIDEBAR_WIDTH: u16 = 26;

/// Main render dispatch function.
///
/// Handles terminal size validation before rendering the hub view, then
/// stacks the help overlay on top when active.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Minimum terminal size check for usable UI
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    render_hub(f, app);

    // Render help overlay on top when active
    if app.show_help {
        help::render(f, app);
    }
}

/// Render the hub view: sidebar | content column, status bar below.
fn render_hub(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    sidebar::render(f, app, columns[0]);
    render_content(f, app, columns[1]);
    status::render(f, app, rows[1]);
}

/// Render the main content column.
fn render_content(f: &mut Frame, app: &App, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(4), // Featured article
            Constraint::Length(4), // Learning progress
            Constraint::Min(0),    // Posts | FAQ
        ])
        .split(area);

    render_header(f, app, sections[0]);
    render_featured(f, app, sections[1]);
    progress::render(f, app, sections[2]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(sections[3]);

    posts::render(f, app, panels[0]);
    faq::render(f, app, panels[1]);
}

/// Render the header line: hub title left, theme indicator right.
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let theme_hint = format!("[t] {} mode", app.theme_variant.name());
    let pad = (area.width as usize)
        .saturating_sub("Education Hub".len() + theme_hint.len() + 1);

    let line = Line::from(vec![
        Span::styled("Education Hub", app.style("header_title")),
        Span::raw(" ".repeat(pad)),
        Span::styled(theme_hint, app.style("post_meta")),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Render the featured article card.
fn render_featured(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("★ ", app.style("post_saved")),
            Span::styled(FEATURED.title, app.style("featured_title")),
        ]),
        Line::from(Span::styled(FEATURED.blurb, app.style("featured_blurb"))),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.style("featured_border"))
            .title(" Featured Article "),
    );
    f.render_widget(card, area);
}
