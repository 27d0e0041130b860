use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::image_picker::default_library;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Enable `debug` logging and honour `RUST_LOG`.
    pub debug_logging: bool,
    pub window_size: [f32; 2],
    pub list_panel_width: f32,
    /// Images picked from when none is given on the command line.
    pub image_library: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            window_size: [1200.0, 800.0],
            list_panel_width: 360.0,
            image_library: default_library(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Like [`Settings::load`], but writes the defaults to `path` when no
    /// file exists yet so users have something to edit.
    pub fn load_or_init(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        let settings = Self::default();
        match settings.save(path) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default settings"),
            Err(e) => tracing::warn!(path = %path.display(), "could not write default settings: {e}"),
        }
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.image_library.len(), 9);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{ "debug_logging": true, "image_library": ["a.png"] }"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        assert!(settings.debug_logging);
        assert_eq!(settings.image_library, vec!["a.png".to_string()]);
        assert_eq!(settings.window_size, [1200.0, 800.0]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let settings = Settings {
            list_panel_width: 200.0,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn first_run_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let settings = Settings::load_or_init(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn existing_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{ "list_panel_width": 240.0 }"#).unwrap();
        let settings = Settings::load_or_init(&path).unwrap();
        assert_eq!(settings.list_panel_width, 240.0);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{ "list_panel_width": 240.0 }"#
        );
    }
}
