//! Application settings

use std::path::Path;
use serde::{Serialize, Deserialize};
use tracing::{info, warn};

/// Name of the optional settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "imagetool.json";

/// Color lookup used for planar images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Colormap {
    Gray,
    Viridis,
    Plasma,
}

/// Viewer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Whether to use dark mode
    pub dark_mode: bool,

    /// Cells moved per arrow-key press
    pub keyboard_step: usize,

    /// Shape of the synthetic volume shown at startup
    pub demo_shape: [usize; 3],

    /// Seed for the synthetic volume's noise
    pub demo_seed: u64,

    pub colormap: Colormap,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            keyboard_step: 1,
            demo_shape: [51, 101, 201],
            demo_seed: 0,
            colormap: Colormap::Viridis,
        }
    }
}

impl ViewerSettings {
    /// Read settings from a JSON file, falling back to defaults when the
    /// file is missing or malformed
    pub fn load_or_default(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str::<Self>(&text) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Ignoring malformed settings file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ViewerSettings::load_or_default(&dir.path().join(SETTINGS_FILE));
        assert_eq!(settings, ViewerSettings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{ "keyboard_step": 5, "colormap": "Gray" }"#).unwrap();

        let settings = ViewerSettings::load_or_default(&path);
        assert_eq!(settings.keyboard_step, 5);
        assert_eq!(settings.colormap, Colormap::Gray);
        assert_eq!(settings.demo_shape, [51, 101, 201]);
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(ViewerSettings::load_or_default(&path), ViewerSettings::default());
    }
}
