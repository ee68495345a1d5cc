use ratatui::style::Color;

/// Represents all semantic color roles in the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Section name and expand/collapse indicator
    pub section_header: Color,
    /// The "(n)" item count next to a section name
    pub item_count: Color,

    // Item rows
    pub item_name: Color,
    pub item_detail: Color,

    // Selection
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// The default theme using plain terminal colors
    pub fn default_theme() -> Self {
        Self {
            section_header: Color::Yellow,
            item_count: Color::DarkGray,
            item_name: Color::White,
            item_detail: Color::DarkGray,
            selection_bg: Color::Rgb(60, 60, 80),
        }
    }

    /// Catppuccin Frappe theme
    pub fn catppuccin_frappe() -> Self {
        Self {
            section_header: Color::Rgb(229, 200, 144), // Yellow
            item_count: Color::Rgb(115, 121, 148),     // Overlay0
            item_name: Color::Rgb(198, 208, 245),      // Text
            item_detail: Color::Rgb(165, 173, 206),    // Subtext0
            selection_bg: Color::Rgb(65, 69, 89),      // Surface0
        }
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            section_header: Color::Rgb(249, 226, 175), // Yellow
            item_count: Color::Rgb(108, 112, 134),     // Overlay0
            item_name: Color::Rgb(205, 214, 244),      // Text
            item_detail: Color::Rgb(166, 173, 200),    // Subtext0
            selection_bg: Color::Rgb(49, 50, 68),      // Surface0
        }
    }

    /// Get a built-in theme by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "default" => Some(Self::default_theme()),
            "catppuccin-frappe" => Some(Self::catppuccin_frappe()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            _ => None,
        }
    }
}
