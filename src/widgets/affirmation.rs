//! Panel showing the affirmation returned after a journal save.

use crate::api::Affirmation;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

pub struct AffirmationPanel<'a> {
    affirmation: &'a Affirmation,
}

impl<'a> AffirmationPanel<'a> {
    pub fn new(affirmation: &'a Affirmation) -> Self {
        Self { affirmation }
    }
}

impl Widget for AffirmationPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(t.border_style(true))
            .title(" Your Daily Affirmation ")
            .title_alignment(Alignment::Center)
            .title_style(t.title_style());

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.affirmation.content.as_str(),
                t.bloom_style().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("mood: {}", self.affirmation.mood_type),
                t.muted_style(),
            )),
            Line::from(""),
            Line::from(Span::styled("[Esc] Close", t.muted_style())),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
