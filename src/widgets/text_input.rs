//! Text input widget for rendering [`TextInput`] state.
//!
//! Handles placeholder text, password masking, the disabled look used while a
//! form is submitting, and cursor placement when focused.

use crate::styles::theme;
use crate::utils::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// A widget for rendering a TextInput with consistent styling.
///
/// # Example
/// ```
/// use mindbloom::utils::TextInput;
/// use mindbloom::widgets::TextInputWidget;
///
/// let input = TextInput::with_text("hello");
/// let widget = TextInputWidget::new(&input)
///     .title("Email")
///     .placeholder("you@example.com")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    disabled: bool,
    /// Render bullets instead of the text (passwords)
    masked: bool,
    /// Wrap long text over several lines (journal entry)
    wrap: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            disabled: false,
            masked: false,
            wrap: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
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

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Get the display text (actual text, masked text, or placeholder).
    fn display_text(&self) -> String {
        let text = self.input.text();

        if text.is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else if self.masked {
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }

    fn text_style(&self) -> Style {
        let t = theme();
        if self.disabled || self.input.text().is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let t = theme();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style(self.focused && !self.disabled));

        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }

    /// Cursor cell inside `inner`, accounting for wrapping.
    fn cursor_position(&self, inner: Rect) -> Option<Position> {
        if !self.focused || self.disabled || inner.width == 0 || inner.height == 0 {
            return None;
        }
        let cursor = self.input.cursor().min(self.input.char_count());
        let width = inner.width as usize;
        let (row, col) = if self.wrap {
            (cursor / width, cursor % width)
        } else {
            (0, cursor.min(width - 1))
        };
        if row >= inner.height as usize {
            return None;
        }
        Some(Position::new(inner.x + col as u16, inner.y + row as u16))
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut paragraph = Paragraph::new(self.display_text())
            .block(self.create_block())
            .style(self.text_style());
        if self.wrap {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        paragraph.render(area, buf);
    }
}

/// Extension trait for Frame to render TextInputWidget with cursor support.
///
/// The Widget trait has no access to the Frame, so the cursor is placed here.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let inner = widget.create_block().inner(area);
        let cursor = widget.cursor_position(inner);

        self.render_widget(widget, area);

        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
