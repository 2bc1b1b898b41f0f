//! Horizontal mood selector bound to a [`MoodContext`].

use crate::mood::{Mood, MoodContext};
use crate::styles::theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Writes the selected mood into the shared context.
#[derive(Debug, Clone)]
pub struct MoodPicker {
    context: MoodContext,
    /// Mood under the cursor, which may differ from the selected one
    highlighted: usize,
}

impl MoodPicker {
    pub fn new(context: MoodContext) -> Self {
        let highlighted = context.selected().map(|m| m.index()).unwrap_or(0);
        Self {
            context,
            highlighted,
        }
    }

    pub fn highlighted(&self) -> Mood {
        Mood::ALL[self.highlighted % Mood::ALL.len()]
    }

    pub fn selected(&self) -> Option<Mood> {
        self.context.selected()
    }

    pub fn move_left(&mut self) {
        self.highlighted = (self.highlighted + Mood::ALL.len() - 1) % Mood::ALL.len();
    }

    pub fn move_right(&mut self) {
        self.highlighted = (self.highlighted + 1) % Mood::ALL.len();
    }

    /// Select the highlighted mood.
    pub fn select_highlighted(&mut self) {
        let mood = self.highlighted();
        tracing::debug!("Mood selected: {}", mood.as_str());
        self.context.select(Some(mood));
    }

    /// Left/Right move the highlight, Space selects. Returns true if handled.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Char(' ') => self.select_highlighted(),
            _ => return false,
        }
        true
    }

    pub fn widget(&self, focused: bool, disabled: bool) -> MoodPickerWidget<'_> {
        MoodPickerWidget {
            picker: self,
            focused,
            disabled,
        }
    }
}

pub struct MoodPickerWidget<'a> {
    picker: &'a MoodPicker,
    focused: bool,
    disabled: bool,
}

impl Widget for MoodPickerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let selected = self.picker.selected();
        let highlighted = self.picker.highlighted();

        let mut spans = Vec::new();
        for mood in Mood::ALL {
            let mut style = if Some(mood) == selected {
                t.bloom_style()
            } else {
                t.text_style()
            };
            if self.focused && mood == highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if self.disabled {
                style = t.muted_style();
            }
            let marker = if Some(mood) == selected { "●" } else { "○" };
            spans.push(Span::styled(format!(" {} {} ", marker, mood.label()), style));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style(self.focused && !self.disabled))
            .title(" How are you feeling? ");

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
