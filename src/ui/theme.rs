use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub muted: String,
    pub accent: String,
    pub border: String,
    pub header_bg: String,
    pub header_fg: String,
    pub splash_bg: String,
    pub splash_fg: String,
    pub status_light_bg: String,
    pub status_light_fg: String,
    pub status_default_bg: String,
    pub status_default_fg: String,
    pub present: String,
    pub past: String,
    pub future: String,
    pub keynote: String,
    pub lightning: String,
    pub break_fg: String,
    pub selected_bg: String,
    pub button_bg: String,
    pub button_fg: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("confsched")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => warn!(path = %user_theme_path.display(), %err, "ignoring broken theme"),
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("catppuccin-mocha").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e1e2e".to_string(),
            fg: "#cdd6f4".to_string(),
            muted: "#6c7086".to_string(),
            accent: "#89b4fa".to_string(),
            border: "#45475a".to_string(),
            header_bg: "#313244".to_string(),
            header_fg: "#cdd6f4".to_string(),
            splash_bg: "#181825".to_string(),
            splash_fg: "#f5c2e7".to_string(),
            status_light_bg: "#181825".to_string(),
            status_light_fg: "#f5e0dc".to_string(),
            status_default_bg: "#cdd6f4".to_string(),
            status_default_fg: "#1e1e2e".to_string(),
            present: "#a6e3a1".to_string(),
            past: "#585b70".to_string(),
            future: "#cdd6f4".to_string(),
            keynote: "#f9e2af".to_string(),
            lightning: "#fab387".to_string(),
            break_fg: "#94e2d5".to_string(),
            selected_bg: "#313244".to_string(),
            button_bg: "#89b4fa".to_string(),
            button_fg: "#1e1e2e".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn muted(&self) -> Color { Self::parse_color(&self.muted) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn splash_bg(&self) -> Color { Self::parse_color(&self.splash_bg) }
    pub fn splash_fg(&self) -> Color { Self::parse_color(&self.splash_fg) }
    pub fn status_light_bg(&self) -> Color { Self::parse_color(&self.status_light_bg) }
    pub fn status_light_fg(&self) -> Color { Self::parse_color(&self.status_light_fg) }
    pub fn status_default_bg(&self) -> Color { Self::parse_color(&self.status_default_bg) }
    pub fn status_default_fg(&self) -> Color { Self::parse_color(&self.status_default_fg) }
    pub fn present(&self) -> Color { Self::parse_color(&self.present) }
    pub fn past(&self) -> Color { Self::parse_color(&self.past) }
    pub fn future(&self) -> Color { Self::parse_color(&self.future) }
    pub fn keynote(&self) -> Color { Self::parse_color(&self.keynote) }
    pub fn lightning(&self) -> Color { Self::parse_color(&self.lightning) }
    pub fn break_fg(&self) -> Color { Self::parse_color(&self.break_fg) }
    pub fn selected_bg(&self) -> Color { Self::parse_color(&self.selected_bg) }
    pub fn button_bg(&self) -> Color { Self::parse_color(&self.button_bg) }
    pub fn button_fg(&self) -> Color { Self::parse_color(&self.button_fg) }
}
