//! Colour palettes for Mind-Bloom.
//!
//! One palette is active at a time. Screens and widgets ask for styles
//! through [`theme()`] instead of naming colours directly, so the no-colour
//! palette only has to be handled here.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::RwLock;

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Install the palette for `theme_type`. Called once at startup.
pub fn init_theme(theme_type: ThemeType) {
    let palette = Theme::new(theme_type);
    match THEME.write() {
        Ok(mut guard) => *guard = palette,
        Err(poisoned) => *poisoned.into_inner() = palette,
    }
}

/// The active palette.
pub fn theme() -> Theme {
    match THEME.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Terminal defaults only, as with `NO_COLOR=1`
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    /// Unknown names fall back to the dark palette.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        Ok(match name.as_str() {
            "light" => ThemeType::Light,
            "nocolor" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,
    /// Titles, focused borders, the banner
    pub accent: Color,
    /// Moods and affirmations
    pub bloom: Color,
    pub success: Color,
    pub error: Color,
    pub text: Color,
    pub muted: Color,
    pub emphasis: Color,
    pub border: Color,
    pub border_focused: Color,
    /// `Reset` keeps the terminal's own background
    pub background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            accent: Color::Magenta,
            bloom: Color::LightMagenta,
            success: Color::Green,
            error: Color::Red,
            text: Color::White,
            muted: Color::DarkGray,
            emphasis: Color::Yellow,
            border: Color::DarkGray,
            border_focused: Color::Magenta,
            background: Color::Reset,
        }
    }

    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            accent: Color::Blue,
            bloom: Color::Rgb(170, 40, 120),
            success: Color::Rgb(0, 130, 0),
            error: Color::Red,
            text: Color::Black,
            muted: Color::Gray,
            emphasis: Color::Blue,
            border: Color::Gray,
            border_focused: Color::Blue,
            background: Color::Reset,
        }
    }

    /// Every slot is `Reset`; the style helpers add modifiers instead.
    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            accent: Color::Reset,
            bloom: Color::Reset,
            success: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            muted: Color::Reset,
            emphasis: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            background: Color::Reset,
        }
    }

    /// `base` with `color` as foreground, unless colours are off.
    fn paint(&self, base: Style, color: Color) -> Style {
        match self.theme_type {
            ThemeType::NoColor => base,
            _ => base.fg(color),
        }
    }

    pub fn title_style(&self) -> Style {
        self.paint(Style::default().add_modifier(Modifier::BOLD), self.accent)
    }

    pub fn text_style(&self) -> Style {
        self.paint(Style::default(), self.text)
    }

    pub fn muted_style(&self) -> Style {
        match self.theme_type {
            ThemeType::NoColor => Style::default().add_modifier(Modifier::DIM),
            _ => Style::default().fg(self.muted),
        }
    }

    pub fn emphasis_style(&self) -> Style {
        self.paint(Style::default().add_modifier(Modifier::BOLD), self.emphasis)
    }

    /// Selected mood and affirmation text.
    pub fn bloom_style(&self) -> Style {
        self.paint(Style::default().add_modifier(Modifier::BOLD), self.bloom)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        match (self.theme_type, focused) {
            (ThemeType::NoColor, true) => Style::default().add_modifier(Modifier::BOLD),
            (ThemeType::NoColor, false) => Style::default(),
            (_, true) => Style::default().fg(self.border_focused),
            (_, false) => Style::default().fg(self.border),
        }
    }
}
