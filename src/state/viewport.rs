//! Map viewing region.
//!
//! The region is replaced wholesale by each producing event, never merged, so
//! no stale span can survive a recenter.

use crate::model::{GeoPoint, Region, Span, TransitLine};
use tracing::debug;

/// Startup center before any location is known.
pub const INITIAL_CENTER: GeoPoint = GeoPoint::constant(-26.834129, -65.194769);
/// Startup span (close zoom around the initial center).
pub const INITIAL_SPAN: Span = Span::constant(0.001);
/// Span applied when recentering on a device location or a line.
pub const DEFAULT_SPAN: Span = Span::constant(0.0421);

/// Owner of the current viewport region.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    region: Region,
}

impl ViewportController {
    /// Start at the given region.
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    /// Replace the region with one centered on the device position.
    pub fn set_from_device_location(&mut self, point: GeoPoint, default_span: Span) {
        debug!(
            latitude = point.latitude(),
            longitude = point.longitude(),
            "Viewport centered on device location"
        );
        self.region = Region::square(point, default_span);
    }

    /// Replace the region with one centered on the line's first waypoint.
    ///
    /// Returns `false` and keeps the region when the line has no waypoints.
    pub fn set_from_line(&mut self, line: &TransitLine, default_span: Span) -> bool {
        match line.start() {
            Some(start) => {
                debug!(line = line.name(), "Viewport centered on line start");
                self.region = Region::square(start, default_span);
                true
            }
            None => false,
        }
    }

    /// Current region.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Current center.
    pub fn center(&self) -> GeoPoint {
        self.region.center
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(initial_region())
    }
}

/// Region shown before the first producing event.
pub fn initial_region() -> Region {
    Region::square(INITIAL_CENTER, INITIAL_SPAN)
}
