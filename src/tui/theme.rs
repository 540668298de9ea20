//! Theme definitions for the console.

use ratatui::style::Color;

/// A color theme for the console.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: &'static str,

    /// Background color
    pub bg: Color,
    /// Foreground (text) color
    pub fg: Color,
    /// Status-line error text
    pub error_color: Color,
    /// Command-line prompt and open-port marker
    pub accent: Color,
    /// Border of the serial output area
    pub border: Color,
    /// Placeholder text
    pub inactive: Color,
    /// Status/command line background
    pub status_bg: Color,
}

impl Theme {
    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self {
            name: "dark",
            bg: Color::Rgb(30, 30, 46),
            fg: Color::Rgb(205, 214, 244),
            error_color: Color::Rgb(243, 139, 168),
            accent: Color::Rgb(203, 166, 247),
            border: Color::Rgb(88, 91, 112),
            inactive: Color::Rgb(108, 112, 134),
            status_bg: Color::Rgb(69, 71, 90),
        }
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            name: "light",
            bg: Color::Rgb(239, 241, 245),
            fg: Color::Rgb(76, 79, 105),
            error_color: Color::Rgb(210, 15, 57),
            accent: Color::Rgb(136, 57, 239),
            border: Color::Rgb(172, 176, 190),
            inactive: Color::Rgb(140, 143, 161),
            status_bg: Color::Rgb(204, 208, 218),
        }
    }

    /// Solarized Dark theme
    pub const fn solarized_dark() -> Self {
        Self {
            name: "solarized",
            bg: Color::Rgb(0, 43, 54),
            fg: Color::Rgb(131, 148, 150),
            error_color: Color::Rgb(220, 50, 47),
            accent: Color::Rgb(108, 113, 196),
            border: Color::Rgb(88, 110, 117),
            inactive: Color::Rgb(101, 123, 131),
            status_bg: Color::Rgb(7, 54, 66),
        }
    }

    /// Nord theme
    pub const fn nord() -> Self {
        Self {
            name: "nord",
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(216, 222, 233),
            error_color: Color::Rgb(191, 97, 106),
            accent: Color::Rgb(180, 142, 173),
            border: Color::Rgb(76, 86, 106),
            inactive: Color::Rgb(107, 112, 137),
            status_bg: Color::Rgb(67, 76, 94),
        }
    }

    /// Get theme by name
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        THEMES.iter().find(|t| t.name == name)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Available themes
pub static THEMES: &[Theme] = &[
    Theme::dark(),
    Theme::light(),
    Theme::solarized_dark(),
    Theme::nord(),
];
