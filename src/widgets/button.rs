//! Push button widget.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled, used for the form's submit action
    #[default]
    Primary,
    /// Bordered only, used for navigation links
    Outline,
}

pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    focused: bool,
    disabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Primary,
            focused: false,
            disabled: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn label_style(&self) -> Style {
        let t = theme();
        if self.disabled {
            return t.muted_style();
        }
        match self.variant {
            ButtonVariant::Primary => t.title_style(),
            ButtonVariant::Outline => t.text_style(),
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let border_type = match self.variant {
            ButtonVariant::Primary => BorderType::Thick,
            ButtonVariant::Outline => BorderType::Rounded,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(t.border_style(self.focused && !self.disabled));

        let label = if self.focused && !self.disabled {
            format!("» {} «", self.label)
        } else {
            self.label.to_string()
        };

        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(self.label_style())
            .block(block)
            .render(area, buf);
    }
}
