//! Transit line: a named, ordered list of waypoints.

use crate::model::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// A bus line as supplied by the route catalog.
///
/// Never mutated once loaded. The type itself accepts an empty waypoint list;
/// consumers degrade on it rather than fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitLine {
    name: String,
    waypoints: Vec<GeoPoint>,
}

impl TransitLine {
    /// Create a line from its display name and waypoints.
    pub fn new(name: impl Into<String>, waypoints: Vec<GeoPoint>) -> Self {
        Self {
            name: name.into(),
            waypoints,
        }
    }

    /// Display label, unique within a catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered waypoints.
    pub fn waypoints(&self) -> &[GeoPoint] {
        &self.waypoints
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether the line has no waypoints at all.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// First waypoint, where playback starts.
    pub fn start(&self) -> Option<GeoPoint> {
        self.waypoints.first().copied()
    }

    /// Whether playback over this line would be inert (fewer than two waypoints).
    pub fn is_degenerate(&self) -> bool {
        self.waypoints.len() < 2
    }
}
