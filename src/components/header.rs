use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Common header for all screens
pub struct Header;

impl Header {
    /// Render the application banner with the current route on the right.
    ///
    /// Returns the height used.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, route: &str) -> u16 {
        let t = theme();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style(true))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, route_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(route.len() as u16 + 1)])
                .areas(inner);

        frame.render_widget(
            Paragraph::new(title)
                .style(t.title_style())
                .alignment(Alignment::Center),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(route)
                .style(t.muted_style())
                .alignment(Alignment::Right),
            route_area,
        );

        area.height
    }
}
