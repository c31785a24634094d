use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::AppError;

/// Bounds on the editor font size. The dialog spinner enforces the same
/// range at the widget level; anything arriving from disk is clamped here.
pub const MIN_FONT_SIZE: u32 = 1;
pub const MAX_FONT_SIZE: u32 = 100;

/// A chosen font family and point size, as returned by the font dialog
/// and applied to the editing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSelection {
    pub family: String,
    pub size: u32,
}

impl FontSelection {
    pub fn new(family: impl Into<String>, size: u32) -> Self {
        Self {
            family: family.into(),
            size: clamp_font_size(size),
        }
    }
}

pub fn clamp_font_size(size: u32) -> u32 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

fn default_font_family() -> String {
    "Courier".to_string()
}

fn default_font_size() -> u32 {
    16
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str::<AppSettings>(&contents) {
                Ok(settings) => settings.sanitized(),
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::get_config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("quillpad");
        path.push("settings.json");
        path
    }

    /// Clamp values a hand-edited or stale config file may carry out of range.
    fn sanitized(mut self) -> Self {
        self.font_size = clamp_font_size(self.font_size);
        self
    }

    pub fn font_selection(&self) -> FontSelection {
        FontSelection::new(self.font_family.clone(), self.font_size)
    }

    pub fn set_font_selection(&mut self, selection: &FontSelection) {
        self.font_family = selection.family.clone();
        self.font_size = clamp_font_size(selection.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.font_family, "Courier");
        assert_eq!(settings.font_size, 16);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate old config missing new fields
        let json = r#"{"font_family": "Helvetica"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_family, "Helvetica"); // Should use file value
        assert_eq!(settings.font_size, 16); // Should use default
    }

    #[test]
    fn test_sanitize_clamps_font_size() {
        let oversized: AppSettings =
            serde_json::from_str(r#"{"font_family": "Courier", "font_size": 400}"#).unwrap();
        assert_eq!(oversized.sanitized().font_size, MAX_FONT_SIZE);

        let zero: AppSettings =
            serde_json::from_str(r#"{"font_family": "Courier", "font_size": 0}"#).unwrap();
        assert_eq!(zero.sanitized().font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn test_clamp_font_size_bounds() {
        assert_eq!(clamp_font_size(0), 1);
        assert_eq!(clamp_font_size(1), 1);
        assert_eq!(clamp_font_size(42), 42);
        assert_eq!(clamp_font_size(100), 100);
        assert_eq!(clamp_font_size(101), 100);
    }

    #[test]
    fn test_font_selection_clamps_on_construction() {
        let selection = FontSelection::new("Times", 0);
        assert_eq!(selection.size, 1);
        let selection = FontSelection::new("Times", 999);
        assert_eq!(selection.size, 100);
    }

    #[test]
    fn test_font_selection_round_trip_through_settings() {
        let mut settings = AppSettings::default();
        let selection = FontSelection::new("Helvetica", 24);
        settings.set_font_selection(&selection);
        assert_eq!(settings.font_selection(), selection);
    }
}
