//! Sidebar navigation panel.
//!
//! Renders the FlowCare brand plus the fixed route list. Activating an
//! entry issues a route-change request to the navigation collaborator;
//! this view itself corresponds to the Education route.

use crate::app::{App, Focus};
use crate::nav::Route;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the sidebar link list.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let is_focused = app.focus == Focus::Sidebar;

    let items: Vec<ListItem> = Route::ALL
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let style = if is_focused && i == app.selected_link {
                app.style("sidebar_link_selected")
            } else if *route == Route::Education {
                app.style("sidebar_link_active")
            } else {
                app.style("sidebar_link")
            };

            let marker = if *route == Route::Education { "» " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(route.label(), style),
            ]))
        })
        .collect();

    let border_style = if is_focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::from(Span::styled(
                " FlowCare ",
                app.style("sidebar_brand"),
            ))),
    );

    f.render_widget(list, area);
}
