use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::screen::schedule::ScreenOptions;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Display zone; the schedule's own zone when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Schedule file to load instead of the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_path: Option<PathBuf>,
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_status_bar_overlay")]
    pub status_bar_overlay: bool,
    #[serde(default = "default_points_per_row")]
    pub points_per_row: f32,
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_refresh_interval_secs() -> u64 {
    60
}
fn default_status_bar_overlay() -> bool {
    true
}
fn default_points_per_row() -> f32 {
    16.0
}
fn default_mouse() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            time_zone: None,
            schedule_path: None,
            refresh_interval_secs: default_refresh_interval_secs(),
            status_bar_overlay: default_status_bar_overlay(),
            points_per_row: default_points_per_row(),
            mouse: default_mouse(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("confsched")
            .join("config.toml")
    }

    pub fn screen_options(&self) -> ScreenOptions {
        let refresh_secs = self.refresh_interval_secs.clamp(1, 86_400) as i64;
        ScreenOptions {
            refresh_interval: TimeDelta::seconds(refresh_secs),
            status_bar_overlay: self.status_bar_overlay,
            points_per_row: if self.points_per_row > 0.0 {
                self.points_per_row
            } else {
                default_points_per_row()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.refresh_interval_secs, 60);
        assert!(config.status_bar_overlay);
        assert!(config.time_zone.is_none());
        assert!(config.schedule_path.is_none());
    }

    #[test]
    fn test_config_partial_file() {
        let toml_str = r#"
theme = "gruvbox-dark"
time_zone = "Asia/Tokyo"
status_bar_overlay = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "gruvbox-dark");
        assert_eq!(config.time_zone.as_deref(), Some("Asia/Tokyo"));
        assert!(!config.status_bar_overlay);
        assert_eq!(config.points_per_row, 16.0);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.refresh_interval_secs, 60);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "refresh_interval_secs = 30\nmouse = false\n").unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.refresh_interval_secs, 30);
        assert!(!loaded.mouse);
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_screen_options_guard_bad_values() {
        let config = Config {
            refresh_interval_secs: 0,
            points_per_row: -1.0,
            ..Config::default()
        };
        let options = config.screen_options();
        assert_eq!(options.refresh_interval, TimeDelta::seconds(1));
        assert_eq!(options.points_per_row, 16.0);
    }
}
