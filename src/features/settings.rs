//! Demo settings persistence
//!
//! Loads the gradient button configuration from the user's config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use iced::Color;
use serde::{Deserialize, Serialize};

use crate::ui::animation::{DEFAULT_DURATION, MAX_DURATION, clamp_duration};
use crate::ui::theme::DEMO_PALETTE;
use crate::utils::{parse_hex_color, to_hex};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Gradient button configuration
    #[serde(default)]
    pub button: ButtonSettings,
    /// Display settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Gradient button configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonSettings {
    /// Palette as `#RRGGBB` / `#RRGGBBAA` strings
    pub palette: Vec<String>,
    /// Cross-fade length of one rotation step, in seconds
    pub duration_secs: f32,
    /// Start rotating as soon as the button is created
    pub animated: bool,
    /// Button label
    pub title: String,
    /// Label font size
    pub title_size: f32,
    pub corner_radius: f32,
    /// Fixed button height
    pub height: f32,
    /// Gap between the button and the window edges
    pub horizontal_inset: f32,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
}

impl Default for ButtonSettings {
    fn default() -> Self {
        Self {
            palette: DEMO_PALETTE.iter().copied().map(to_hex).collect(),
            duration_secs: DEFAULT_DURATION.as_secs_f32(),
            animated: true,
            title: "Button example".to_string(),
            title_size: 15.0,
            corner_radius: 15.0,
            height: 46.0,
            horizontal_inset: 20.0,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl ButtonSettings {
    /// Parsed palette; unreadable entries are skipped with a warning
    ///
    /// May be empty, the rotation substitutes a transparent color then.
    pub fn palette(&self) -> Vec<Color> {
        self.palette
            .iter()
            .filter_map(|hex| {
                let color = parse_hex_color(hex);
                if color.is_none() {
                    tracing::warn!("Skipping invalid palette color {:?}", hex);
                }
                color
            })
            .collect()
    }

    /// Step duration, clamped to the accepted range
    ///
    /// Zero, negative and NaN values fall back to the default.
    pub fn duration(&self) -> Duration {
        match Duration::try_from_secs_f32(self.duration_secs) {
            Ok(duration) if !duration.is_zero() => clamp_duration(duration),
            Err(_) if self.duration_secs > 0.0 => MAX_DURATION,
            _ => {
                tracing::warn!(
                    "Invalid gradient duration {}s, using {:?}",
                    self.duration_secs,
                    DEFAULT_DURATION
                );
                DEFAULT_DURATION
            }
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "gradient-button", "GradientButton")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        Self::load_from_file(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings from {:?}: {}", path, e);
            Self::default()
        })
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
