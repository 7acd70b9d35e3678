//! Map overlay styling.
//!
//! Provides distinct colors for the route, bus, pin, directions and crosshair.

use crate::model::MapStyle;
use ratatui::style::{Color, Modifier, Style};

/// Dimmed text for hints.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Category headers in the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Read `NO_COLOR` (any value disables colors).
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Explicit setting, for tests and callers that already decided.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== MapStyles =====

/// Colors of the map layers and overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapStyles {
    /// Route polyline.
    pub route: Color,
    /// Bus marker.
    pub bus: Color,
    /// Dropped pin and its callout.
    pub pin: Color,
    /// Directions segment from the viewport center to the pin.
    pub directions: Color,
    /// Long-press pointer.
    pub crosshair: Color,
    /// World map layer in satellite style.
    pub world: Color,
    /// Notices in the status bar.
    pub notice: Style,
    /// Highlighted row in the line menu.
    pub highlight: Style,
}

impl MapStyles {
    /// Create styles with default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env())
    }

    /// Create styles with the specified color configuration.
    ///
    /// If colors are disabled, every overlay is drawn in the terminal's
    /// default foreground and highlights fall back to reverse video.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                route: Color::Blue,
                bus: Color::Yellow,
                pin: Color::Red,
                directions: Color::Magenta,
                crosshair: Color::White,
                world: Color::Green,
                notice: Style::new().fg(Color::Yellow),
                highlight: Style::new().fg(Color::Black).bg(Color::Cyan),
            }
        } else {
            Self {
                route: Color::Reset,
                bus: Color::Reset,
                pin: Color::Reset,
                directions: Color::Reset,
                crosshair: Color::Reset,
                world: Color::Reset,
                notice: Style::new(),
                highlight: Style::new().add_modifier(Modifier::REVERSED),
            }
        }
    }

    /// Background of the canvas for a base layer.
    pub fn background(&self, style: MapStyle) -> Color {
        match style {
            MapStyle::Standard => Color::Reset,
            MapStyle::Satellite => Color::Black,
        }
    }
}

impl Default for MapStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
