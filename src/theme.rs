//! Color theme support for the rendered scene.
//!
//! Colors for the scene's visual elements are named tokens that can be
//! overridden from a TOML file. The defaults match the classic look: gray
//! axes, black origin marker, gray rectangle fill, red pivot marker.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A theme mapping color tokens to concrete CSS color values
#[derive(Debug, Clone)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Color mappings: token name -> color value
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Default palette, matching the original visualization colors
const DEFAULT_THEME: &str = r##"
[colors]
axis = "gray"
origin = "black"
shape = "gray"
pivot = "red"
"##;

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.and_then(|m| m.name),
            colors: parsed.colors,
        })
    }

    /// Resolve a color token.
    ///
    /// Returns `None` if the token is not defined in this theme.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a color token, falling back to the default palette, and
    /// finally to dark gray for unknown tokens.
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }
        if let Some(color) = Theme::default().resolve(token) {
            return color.to_string();
        }
        "#333333".to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_toml(DEFAULT_THEME).expect("default palette should be valid TOML")
    }
}
