use std::path::PathBuf;

use ratatui::style::Color;
use serde::Deserialize;

use super::theme::Theme;

/// Parse a color string into a ratatui Color.
/// Supports: named colors, hex (#ff0000, #f00), indexed (0-255)
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    let named = match s.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        "reset" => Some(Color::Reset),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    // ANSI 256 color: just a number
    s.parse::<u8>().ok().map(Color::Indexed)
}

/// Hex color: rrggbb or rgb shorthand
fn parse_hex(hex: &str) -> Option<Color> {
    let (r, g, b) = match hex.len() {
        6 => (
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        ),
        3 => (
            u8::from_str_radix(&hex[0..1], 16).ok()? * 17,
            u8::from_str_radix(&hex[1..2], 16).ok()? * 17,
            u8::from_str_radix(&hex[2..3], 16).ok()? * 17,
        ),
        _ => return None,
    };
    Some(Color::Rgb(r, g, b))
}

/// Color overrides in the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorOverrides {
    pub section_header: Option<String>,
    pub item_count: Option<String>,
    pub item_name: Option<String>,
    pub item_detail: Option<String>,
    pub selection_bg: Option<String>,
}

/// Main config structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default)]
    pub colors: ColorOverrides,
}

fn default_theme_name() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            colors: ColorOverrides::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("foldlist").join("config.toml"))
    }

    /// Load config from the default path, or return default config
    pub fn load() -> Self {
        Self::default_path()
            .and_then(|path| Self::load_from_path(&path).ok())
            .unwrap_or_default()
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Resolve the theme with overrides applied
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_name(&self.theme).unwrap_or_else(Theme::default_theme);

        macro_rules! apply_override {
            ($field:ident) => {
                if let Some(ref color_str) = self.colors.$field {
                    if let Some(color) = parse_color(color_str) {
                        theme.$field = color;
                    }
                }
            };
        }

        apply_override!(section_header);
        apply_override!(item_count);
        apply_override!(item_name);
        apply_override!(item_detail);
        apply_override!(selection_bg);

        theme
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}
