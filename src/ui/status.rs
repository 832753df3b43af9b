//! Status bar widget.

use crate::app::{App, Focus};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    // Status bar needs at least 1 char width to be meaningful
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Cow avoids allocations for the static keybinding hints
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.search_mode {
        Cow::Borrowed("Type to search | ESC cancel | ENTER confirm")
    } else {
        match app.focus {
            Focus::Sidebar => Cow::Borrowed("[Enter]go [Tab]switch [t]heme [/]search [?]help [q]uit"),
            Focus::Posts => Cow::Borrowed(
                "[s]ave [S]hare [c]ategory [/]search [Tab]switch [t]heme [?]help [q]uit",
            ),
            Focus::Faq => {
                Cow::Borrowed("[Enter]expand [m]ark read [Tab]switch [t]heme [?]help [q]uit")
            }
        }
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
