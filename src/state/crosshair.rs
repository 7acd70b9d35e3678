//! Keyboard-driven pointer standing in for a finger on the map.

use crate::model::{Direction, GeoPoint, Region};

/// Fraction of the viewport moved per key press.
pub const CROSSHAIR_STEP: f64 = 1.0 / 32.0;

/// Pointer position as fractional offsets from the viewport center.
///
/// Offsets stay within `[-0.5, 0.5]`, so the crosshair is always on screen
/// and follows the viewport when it recenters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Crosshair {
    dx: f64,
    dy: f64,
}

impl Crosshair {
    /// Move one step, stopping at the viewport edge.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.dy = (self.dy + CROSSHAIR_STEP).min(0.5),
            Direction::Down => self.dy = (self.dy - CROSSHAIR_STEP).max(-0.5),
            Direction::Left => self.dx = (self.dx - CROSSHAIR_STEP).max(-0.5),
            Direction::Right => self.dx = (self.dx + CROSSHAIR_STEP).min(0.5),
        }
    }

    /// Return to the viewport center.
    pub fn recenter(&mut self) {
        *self = Self::default();
    }

    /// Geographic point under the crosshair.
    pub fn point_in(&self, region: &Region) -> GeoPoint {
        region.point_at(self.dx, self.dy)
    }

    /// Horizontal offset from the center, east positive.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Vertical offset from the center, north positive.
    pub fn dy(&self) -> f64 {
        self.dy
    }
}
