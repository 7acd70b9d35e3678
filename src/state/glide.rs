//! Bus marker glide between waypoints.

use crate::model::GeoPoint;
use crate::state::simulator::MoveDirective;
use std::time::{Duration, Instant};

/// Linear move of the bus marker from one point to another over a fixed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glide {
    from: GeoPoint,
    to: GeoPoint,
    started_at: Instant,
    duration: Duration,
}

impl Glide {
    /// A marker standing still at `point`.
    pub fn parked(point: GeoPoint, now: Instant) -> Self {
        Self {
            from: point,
            to: point,
            started_at: now,
            duration: Duration::ZERO,
        }
    }

    /// Start gliding from wherever the marker is at `now` towards the directive's target.
    ///
    /// Interrupting an unfinished glide continues from its current position.
    pub fn retarget(&self, directive: &MoveDirective, now: Instant) -> Self {
        Self {
            from: self.position_at(now),
            to: directive.target,
            started_at: now,
            duration: directive.glide,
        }
    }

    /// Marker position at `now`.
    pub fn position_at(&self, now: Instant) -> GeoPoint {
        self.from.lerp(self.to, self.progress(now))
    }

    /// Fraction of the glide completed, in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Whether the marker is still moving at `now`.
    pub fn is_moving(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }
}
