//! Theme system for customizable colors

use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeType {
    /// Default dark theme
    Dark,
    /// Light theme
    Light,
}

impl Default for ThemeType {
    fn default() -> Self {
        Self::Dark
    }
}

impl ThemeType {
    /// Returns the theme name
    pub fn name(&self) -> &str {
        match self {
            ThemeType::Dark => "Dark",
            ThemeType::Light => "Light",
        }
    }

    /// Resolves a configured theme name; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            other => {
                log::warn!("Unknown theme {:?}, falling back to dark", other);
                Self::Dark
            }
        }
    }
}

/// Color theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,
    /// Primary text color
    pub text: Color,
    /// Secondary text color
    pub text_secondary: Color,
    /// Highlight/selection color
    pub highlight: Color,
    /// Accent color
    pub accent: Color,
    /// Success color
    pub success: Color,
    /// Border color
    pub border: Color,
    /// Playing indicator
    pub playing: Color,
    /// Paused indicator
    pub paused: Color,
}

impl Theme {
    /// Creates a new theme
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            text: Color::White,
            text_secondary: Color::Gray,
            highlight: Color::Yellow,
            accent: Color::Cyan,
            success: Color::Green,
            border: Color::Gray,
            playing: Color::Green,
            paused: Color::Yellow,
        }
    }

    fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            text: Color::Black,
            text_secondary: Color::DarkGray,
            highlight: Color::Blue,
            accent: Color::Magenta,
            success: Color::Green,
            border: Color::DarkGray,
            playing: Color::Green,
            paused: Color::Red,
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn border_color(&self) -> Color {
        self.border
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
