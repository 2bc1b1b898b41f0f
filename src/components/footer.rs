use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Separator between key hints.
pub const HINT_SEPARATOR: &str = " │ ";

/// Common footer component
pub struct Footer;

impl Footer {
    /// Split key hints into styled spans: keys emphasized, labels plain.
    fn spans(text: &str) -> Vec<Span<'_>> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(HINT_SEPARATOR).enumerate() {
            if i > 0 {
                spans.push(Span::styled(HINT_SEPARATOR, t.muted_style()));
            }
            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(format!("{}: ", keys), t.emphasis_style()));
                spans.push(Span::styled(label, t.text_style()));
            } else {
                spans.push(Span::styled(part, t.text_style()));
            }
        }
        spans
    }

    /// Render a footer with the given key hints.
    ///
    /// Returns the height used (1 for border, 1 for text).
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> u16 {
        let t = theme();
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style(false));
        let inner = block.inner(area);

        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(Self::spans(text))).alignment(Alignment::Center),
            inner,
        );

        2
    }
}
