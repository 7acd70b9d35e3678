//! Geographic value types: points, spans and viewing regions.
//!
//! All types here are immutable `Copy` values with smart constructors that
//! reject non-finite input, so anything holding a `GeoPoint` can rely on
//! finite coordinates without re-checking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the geographic smart constructors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    /// Latitude or longitude is NaN or infinite.
    #[error("Coordinate is not finite: ({latitude}, {longitude})")]
    NonFinite {
        /// Raw latitude value.
        latitude: f64,
        /// Raw longitude value.
        longitude: f64,
    },

    /// Span is zero, negative or not finite.
    #[error("Span must be positive and finite, got {0}")]
    InvalidSpan(f64),
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint", into = "RawGeoPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

/// Wire shape of a `GeoPoint`, validated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = CoordinateError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.latitude, raw.longitude)
    }
}

impl From<GeoPoint> for RawGeoPoint {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

impl GeoPoint {
    /// Create a point, rejecting NaN and infinite coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NonFinite {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Point from constants known to be finite.
    pub(crate) const fn constant(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Linear interpolation towards `other`; `t` is clamped to `[0, 1]`.
    ///
    /// Weighted-sum form, so the result stays finite for any two finite
    /// endpoints even when their difference would overflow.
    pub fn lerp(&self, other: GeoPoint, t: f64) -> GeoPoint {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return other;
        }
        let mix = |a: f64, b: f64| finite(a * (1.0 - t) + b * t);
        GeoPoint {
            latitude: mix(self.latitude, other.latitude),
            longitude: mix(self.longitude, other.longitude),
        }
    }
}

/// Pull an overflowed result back to the largest finite value.
fn finite(value: f64) -> f64 {
    value.clamp(f64::MIN, f64::MAX)
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

/// Positive extent of a region along one axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Span(f64);

impl Span {
    /// Create a span, rejecting zero, negative and non-finite values.
    pub fn new(degrees: f64) -> Result<Self, CoordinateError> {
        if degrees.is_finite() && degrees > 0.0 {
            Ok(Self(degrees))
        } else {
            Err(CoordinateError::InvalidSpan(degrees))
        }
    }

    /// Span from a constant known to be positive.
    pub(crate) const fn constant(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Span in degrees.
    pub fn degrees(&self) -> f64 {
        self.0
    }
}

/// Map viewing region: a center plus latitude/longitude spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Center of the visible area.
    pub center: GeoPoint,
    /// Full north-south extent.
    pub latitude_span: Span,
    /// Full east-west extent.
    pub longitude_span: Span,
}

impl Region {
    /// Create a region from a center and explicit spans.
    pub fn new(center: GeoPoint, latitude_span: Span, longitude_span: Span) -> Self {
        Self {
            center,
            latitude_span,
            longitude_span,
        }
    }

    /// Create a region with the same span on both axes.
    pub fn square(center: GeoPoint, span: Span) -> Self {
        Self::new(center, span, span)
    }

    /// `[west, east]` longitude bounds.
    pub fn longitude_bounds(&self) -> [f64; 2] {
        let half = self.longitude_span.degrees() / 2.0;
        [
            self.center.longitude() - half,
            self.center.longitude() + half,
        ]
    }

    /// `[south, north]` latitude bounds.
    pub fn latitude_bounds(&self) -> [f64; 2] {
        let half = self.latitude_span.degrees() / 2.0;
        [self.center.latitude() - half, self.center.latitude() + half]
    }

    /// Whether `point` lies inside the region (edges inclusive).
    pub fn contains(&self, point: GeoPoint) -> bool {
        let [west, east] = self.longitude_bounds();
        let [south, north] = self.latitude_bounds();
        (south..=north).contains(&point.latitude()) && (west..=east).contains(&point.longitude())
    }

    /// Map fractional offsets in `[-0.5, 0.5]` from the center to a point.
    ///
    /// `(0.5, 0.5)` is the north-east corner.
    pub fn point_at(&self, dx: f64, dy: f64) -> GeoPoint {
        GeoPoint {
            latitude: finite(
                self.center.latitude() + dy.clamp(-0.5, 0.5) * self.latitude_span.degrees(),
            ),
            longitude: finite(
                self.center.longitude() + dx.clamp(-0.5, 0.5) * self.longitude_span.degrees(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn geo_point_rejects_nan() {
        let result = GeoPoint::new(f64::NAN, 1.0);
        assert!(matches!(result, Err(CoordinateError::NonFinite { .. })));
    }

    #[test]
    fn geo_point_rejects_infinity() {
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
        assert!(GeoPoint::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn geo_point_accepts_finite() {
        let p = point(-26.834129, -65.194769);
        assert_eq!(p.latitude(), -26.834129);
        assert_eq!(p.longitude(), -65.194769);
    }

    #[test]
    fn geo_point_deserializes_from_latitude_longitude_object() {
        let p: GeoPoint = serde_json::from_str(r#"{"latitude": -26.8, "longitude": -65.2}"#)
            .expect("valid point");
        assert_eq!(p, point(-26.8, -65.2));
    }

    #[test]
    fn geo_point_serializes_with_field_names() {
        let json = serde_json::to_string(&point(1.5, 2.5)).unwrap();
        assert_eq!(json, r#"{"latitude":1.5,"longitude":2.5}"#);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = point(0.0, 0.0);
        let b = point(2.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), point(1.0, 2.0));
    }

    #[test]
    fn lerp_clamps_progress() {
        let a = point(0.0, 0.0);
        let b = point(1.0, 1.0);
        assert_eq!(a.lerp(b, 3.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn lerp_between_distant_points_stays_finite() {
        let north = point(1e308, 0.0);
        let south = point(-1e308, f64::MAX);

        let mid = north.lerp(south, 0.5);
        assert!(mid.latitude().is_finite());
        assert!(mid.longitude().is_finite());
        assert_eq!(mid.latitude(), 0.0);

        let quarter = south.lerp(north, 0.25);
        assert!(quarter.latitude().is_finite());
        assert!(quarter.longitude().is_finite());
    }

    #[test]
    fn point_at_huge_region_stays_finite() {
        let region = Region::square(point(f64::MAX, -f64::MAX), Span::new(f64::MAX).unwrap());
        let corner = region.point_at(0.5, -0.5);
        assert!(corner.latitude().is_finite());
        assert!(corner.longitude().is_finite());
    }

    #[test]
    fn span_rejects_zero_and_negative() {
        assert_eq!(Span::new(0.0), Err(CoordinateError::InvalidSpan(0.0)));
        assert!(Span::new(-0.1).is_err());
        assert!(Span::new(f64::NAN).is_err());
    }

    #[test]
    fn region_bounds_are_centered() {
        let region = Region::square(point(10.0, 20.0), Span::new(2.0).unwrap());
        assert_eq!(region.latitude_bounds(), [9.0, 11.0]);
        assert_eq!(region.longitude_bounds(), [19.0, 21.0]);
    }

    #[test]
    fn region_contains_center_and_edges() {
        let region = Region::square(point(0.0, 0.0), Span::new(2.0).unwrap());
        assert!(region.contains(point(0.0, 0.0)));
        assert!(region.contains(point(1.0, -1.0)));
        assert!(!region.contains(point(1.5, 0.0)));
    }

    #[test]
    fn point_at_maps_corners() {
        let region = Region::square(point(0.0, 0.0), Span::new(2.0).unwrap());
        assert_eq!(region.point_at(0.5, 0.5), point(1.0, 1.0));
        assert_eq!(region.point_at(-0.5, -0.5), point(-1.0, -1.0));
        assert_eq!(region.point_at(0.0, 0.0), point(0.0, 0.0));
    }
}
