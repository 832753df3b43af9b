//! Period 101 accordion panel.
//!
//! A progress bar over the read flags sits above the question list. At most
//! one entry is expanded; the open entry shows its wrapped answer and the
//! "I've read this section" checkbox line.

use crate::app::{App, Focus};
use crate::content;
use crate::util::wrap_to_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem},
    Frame,
};

/// Render the Period 101 panel: gauge + accordion.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 10 || area.height < 5 {
        return;
    }

    let is_focused = app.focus == Focus::Faq;
    let border_style = if is_focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Period 101 ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    render_gauge(f, app, sections[0]);
    render_accordion(f, app, sections[1], is_focused);
}

/// Progress bar sized by the fraction of sections read.
fn render_gauge(f: &mut Frame, app: &App, area: Rect) {
    let fraction = app.progress_fraction();
    let label = format!(
        "{}/{} sections read",
        app.completed_count(),
        app.read_flags.len()
    );

    let gauge = Gauge::default()
        .ratio(fraction)
        .label(Span::styled(label, app.style("progress_label")))
        .gauge_style(app.style("progress_filled"));
    f.render_widget(gauge, area);
}

/// The accordion entries, expanding the active one in place.
fn render_accordion(f: &mut Frame, app: &App, area: Rect, is_focused: bool) {
    let answer_width = area.width.saturating_sub(6) as usize;

    let items: Vec<ListItem> = content::faq_entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let selected = is_focused && i == app.selected_faq;
            let open = app.active_faq == Some(entry.id);
            let read = app.read_flags.get(i).copied().unwrap_or(false);

            let question_style = if selected {
                app.style("faq_question_selected")
            } else {
                app.style("faq_question")
            };

            let indicator = if open { "▾ " } else { "▸ " };
            let mut spans = vec![
                Span::styled(indicator, question_style),
                Span::styled(entry.question, question_style),
            ];
            if read {
                spans.push(Span::styled(" ✓", app.style("faq_read_marker")));
            }

            let mut lines = vec![Line::from(spans)];

            if open {
                for wrapped in wrap_to_width(entry.answer, answer_width) {
                    lines.push(Line::from(Span::styled(
                        format!("    {}", wrapped),
                        app.style("faq_answer"),
                    )));
                }
                let checkbox = if read { "[x]" } else { "[ ]" };
                lines.push(Line::from(Span::styled(
                    format!("    {} I've read this section (m)", checkbox),
                    app.style("faq_read_marker"),
                )));
            }
            lines.push(Line::from(""));

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items);
    f.render_widget(list, area);
}
