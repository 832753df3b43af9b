//! Learning progress panel.
//!
//! A row of heart slots, filled left to right as sections are marked read,
//! with an "N out of 5 articles completed" caption. The slot count is fixed
//! at five; the filled count derives from the read flags.

use crate::app::{App, PROGRESS_HEARTS};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the learning progress card.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let completed = app.completed_count();

    let mut heart_spans = Vec::with_capacity(PROGRESS_HEARTS * 2);
    for slot in 0..PROGRESS_HEARTS {
        let style = if slot < completed {
            app.style("progress_filled")
        } else {
            app.style("progress_empty")
        };
        heart_spans.push(Span::styled("♥", style));
        if slot + 1 < PROGRESS_HEARTS {
            heart_spans.push(Span::raw("  "));
        }
    }

    let caption = format!(
        "{} out of {} articles completed",
        completed, PROGRESS_HEARTS
    );

    let lines = vec![
        Line::from(heart_spans).alignment(Alignment::Center),
        Line::from(Span::styled(caption, app.style("progress_label")))
            .alignment(Alignment::Center),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.style("panel_border"))
            .title(" Your Learning Progress "),
    );
    f.render_widget(card, area);
}
