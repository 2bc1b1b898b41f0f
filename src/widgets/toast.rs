//! Transient notifications.
//!
//! A toast is drawn over the current screen and closes itself once its
//! duration has passed. Nothing reads a toast back once it is shown.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use std::time::{Duration, Instant};

/// Default auto-close delay.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

const TOAST_WIDTH: u16 = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "✔",
            ToastVariant::Error => "✘",
        }
    }

    /// Border colour from the active theme.
    pub fn color(&self) -> Color {
        let palette = theme();
        if *self == ToastVariant::Success {
            palette.success
        } else {
            palette.error
        }
    }
}

/// Where on the screen a toast appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopCenter,
}

/// One notification and its display options.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub position: ToastPosition,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            position: ToastPosition::TopRight,
            created_at: Instant::now(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Toast::new(message, ToastVariant::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Toast::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Draws a [`Toast`] in the corner (or top centre) of the given area.
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    /// Box for the toast inside `area`, tall enough for the wrapped message.
    fn placement(&self, area: Rect) -> Rect {
        let width = TOAST_WIDTH.min(area.width.saturating_sub(4));
        let text_width = usize::from(width.saturating_sub(4)).max(1);
        let rows = self.toast.message.chars().count().div_ceil(text_width).max(1);
        let height = (rows as u16 + 2).min(area.height);

        let x = match self.toast.position {
            ToastPosition::TopRight => area.x + area.width.saturating_sub(width + 2),
            ToastPosition::TopCenter => area.x + area.width.saturating_sub(width) / 2,
        };

        Rect {
            x,
            y: area.y + 1,
            width,
            height,
        }
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = theme();
        let target = self.placement(area);

        Clear.render(target, buf);

        let frame = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.toast.variant.color()))
            .style(Style::default().bg(palette.background));

        Paragraph::new(format!(" {} {} ", self.toast.variant.icon(), self.toast.message))
            .block(frame)
            .style(palette.text_style().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .render(target, buf);
    }
}

/// Holds the toast on screen. A new toast replaces the current one.
#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        tracing::debug!("Toast ({:?}): {}", toast.variant, toast.message);
        self.current = Some(toast);
    }

    /// Drop the toast once it has expired. Returns true while one is showing.
    pub fn tick(&mut self) -> bool {
        self.current = self.current.take().filter(|toast| !toast.is_expired());
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Draw the current toast, if any, over `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(toast) = &self.current {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }
}
