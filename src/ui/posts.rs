//! Blog post card list.

use crate::app::{App, Focus};
use crate::theme::{category_color, category_glyph};
use crate::util::truncate_to_width;
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Format a post date for the card meta line, e.g. "Mar 15, 2024".
pub(super) fn format_date(date: NaiveDate) -> String {
    date.format("%b %e, %Y").to_string()
}

/// Render the post card list panel.
///
/// Each card is three lines: glyph + title (+ saved marker), excerpt, and
/// an author/date/reading-time meta line, followed by a blank spacer.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focus == Focus::Posts;
    let filtered = app.filtered_posts();

    let items: Vec<ListItem> = if filtered.is_empty() {
        vec![ListItem::new("No articles match the current filter")]
    } else {
        filtered
            .iter()
            .enumerate()
            .map(|(i, post)| {
                let selected = is_focused && i == app.selected_post;

                let title_style = if selected {
                    app.style("post_selected")
                } else {
                    app.style("post_title")
                };

                // Leave room for glyph, padding, and the saved marker
                let max_title = area.width.saturating_sub(8) as usize;
                let title = truncate_to_width(post.title, max_title);

                let mut title_spans = vec![
                    Span::styled(
                        format!("{} ", category_glyph(post.category)),
                        Style::default().fg(category_color(post.category)),
                    ),
                    Span::styled(title.into_owned(), title_style),
                ];
                if app.saved_posts.contains(&post.id) {
                    title_spans.push(Span::styled(" ★", app.style("post_saved")));
                }

                let max_excerpt = area.width.saturating_sub(6) as usize;
                let excerpt = truncate_to_width(post.excerpt, max_excerpt);

                let meta = format!(
                    "  {} · {} · {} read · {}",
                    post.author,
                    format_date(post.date),
                    post.reading_time,
                    post.category.name()
                );
                let meta = truncate_to_width(&meta, area.width.saturating_sub(3) as usize);

                ListItem::new(vec![
                    Line::from(title_spans),
                    Line::from(Span::styled(
                        format!("  {}", excerpt),
                        app.style("post_excerpt"),
                    )),
                    Line::from(Span::styled(meta.into_owned(), app.style("post_meta"))),
                    Line::from(""),
                ])
            })
            .collect()
    };

    let border_style = if is_focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let title = if app.search_mode {
        format!(" Search: {}_ ", app.search_input)
    } else if !app.search_input.is_empty() {
        format!(
            " Articles - {} - \"{}\" ",
            app.category_label(),
            app.search_input
        )
    } else {
        format!(" Articles - {} ", app.category_label())
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_formats_like_a_card() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "Mar 15, 2024");
    }

    #[test]
    fn single_digit_day_is_space_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "Mar  5, 2024");
    }
}
