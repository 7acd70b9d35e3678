//! Base map layer selection.

use serde::Deserialize;

/// Base map layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    /// Plain background with overlays only.
    #[default]
    Standard,
    /// World map imagery behind the overlays.
    Satellite,
}

impl MapStyle {
    /// The other style.
    pub fn toggled(self) -> Self {
        match self {
            MapStyle::Standard => MapStyle::Satellite,
            MapStyle::Satellite => MapStyle::Standard,
        }
    }

    /// Parse a config/env value (`"standard"` or `"satellite"`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(MapStyle::Standard),
            "satellite" => Some(MapStyle::Satellite),
            _ => None,
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapStyle::Standard => "standard",
            MapStyle::Satellite => "satellite",
        }
    }
}
