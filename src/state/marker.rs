//! Dropped-pin lifecycle as a pure reducer.
//!
//! The pin moves through `Hidden → Shown(0) → Shown(1) → Hidden`. The first tap
//! only acknowledges; the second one dismisses, so a stray tap never clears it.
//! All transitions go through [`transition`], which is total over
//! [`MarkerEvent`]: combinations without a defined effect return the state as-is.

use crate::model::GeoPoint;
use tracing::debug;

/// Taps needed on a shown pin before it is dismissed.
pub const PRESSES_TO_DISMISS: u32 = 2;

/// Inputs to the marker reducer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerEvent {
    /// Long-press on the map: (re)create the pin at this point.
    Create(GeoPoint),
    /// Tap on the pin.
    Press,
    /// Force the pin hidden.
    Hide,
}

/// Lifecycle phase derived from a [`MarkerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPhase {
    /// No pin on the map.
    Hidden,
    /// Pin visible, with the number of acknowledging taps so far.
    Shown {
        /// Taps received since creation.
        presses: u32,
    },
}

/// The singleton dropped pin.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerState {
    position: GeoPoint,
    visible: bool,
    label: String,
    interaction_count: u32,
}

impl Default for MarkerState {
    fn default() -> Self {
        Self {
            position: GeoPoint::default(),
            visible: false,
            label: String::new(),
            interaction_count: 0,
        }
    }
}

impl MarkerState {
    /// Fresh hidden pin at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the pin is (or was last) placed.
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// Whether the pin is on the map.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Title shown with the pin.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Taps received since the pin was created.
    pub fn interaction_count(&self) -> u32 {
        self.interaction_count
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> MarkerPhase {
        if self.visible {
            MarkerPhase::Shown {
                presses: self.interaction_count,
            }
        } else {
            MarkerPhase::Hidden
        }
    }
}

/// Format the pin title for a position.
///
/// Uses the shortest decimal form that round-trips each coordinate.
pub fn marker_label(point: GeoPoint) -> String {
    format!(
        "Lat: {}, Lng: {}",
        coordinate_text(point.latitude()),
        coordinate_text(point.longitude())
    )
}

/// Shortest round-trip text for one coordinate.
///
/// Zero prints without a sign. Magnitudes below `1e-6` or from `1e21` up
/// switch to exponent form (`1e-7`, `1e+21`).
fn coordinate_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    value.to_string()
}

/// Apply one event to the pin.
pub fn transition(state: MarkerState, event: MarkerEvent) -> MarkerState {
    match (state.phase(), event) {
        (_, MarkerEvent::Create(point)) => {
            debug!(
                latitude = point.latitude(),
                longitude = point.longitude(),
                "Marker created"
            );
            MarkerState {
                position: point,
                visible: true,
                label: marker_label(point),
                interaction_count: 0,
            }
        }
        (MarkerPhase::Shown { presses }, MarkerEvent::Press) => {
            if presses + 1 >= PRESSES_TO_DISMISS {
                debug!("Marker acknowledged twice, dismissing");
                MarkerState {
                    visible: false,
                    ..state
                }
            } else {
                MarkerState {
                    interaction_count: presses + 1,
                    ..state
                }
            }
        }
        (MarkerPhase::Hidden, MarkerEvent::Press) => {
            debug!("Ignoring tap on hidden marker");
            state
        }
        (_, MarkerEvent::Hide) => MarkerState {
            visible: false,
            ..state
        },
    }
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
