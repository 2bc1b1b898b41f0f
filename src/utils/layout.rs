use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A rect of at most `width` x `height`, centered in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(horizontal);
    centered
}
