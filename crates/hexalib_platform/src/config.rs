//! Window configuration

use std::path::Path;

use serde::Deserialize;

use crate::error::{PlatformError, Result};

/// Window configuration
///
/// Sizes are in physical pixels: the drawing surface and the window client
/// area always have the same dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Close the window as soon as the application function returns
    pub close_when_done: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hexalib".to_string(),
            width: 800,
            height: 600,
            resizable: false,
            close_when_done: false,
        }
    }
}

impl WindowConfig {
    /// Create a config with a title and size, other fields defaulted.
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Default::default()
        }
    }

    /// Parse a config from TOML. Missing keys take their default value.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: WindowConfig =
            toml::from_str(source).map_err(|e| PlatformError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| PlatformError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loaded window config from {}", path.display());
        Self::from_toml_str(&source)
    }

    /// Check the config can back a drawing surface.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PlatformError::Config(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Hexalib");
        assert_eq!((config.width, config.height), (800, 600));
        assert!(!config.resizable);
        assert!(!config.close_when_done);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = WindowConfig::from_toml_str(
            r#"
            title = "Board"
            width = 320
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "Board");
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 600);
    }

    #[test]
    fn test_from_toml_rejects_zero_size() {
        let err = WindowConfig::from_toml_str("height = 0").unwrap_err();
        assert!(matches!(err, PlatformError::Config(_)));
    }

    #[test]
    fn test_from_toml_rejects_bad_types() {
        let err = WindowConfig::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(matches!(err, PlatformError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = WindowConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("not/here.toml"));
    }
}
