//! External position sources.
//!
//! This module provides the device location collaborator:
//! - `LocationProvider` trait and its fixed/absent implementations
//! - One-shot background lookup handed back over a channel

pub mod location;

pub use location::{
    parse_coordinate_pair, spawn_lookup, FixedLocation, LocationLookup, LocationProvider,
    NoLocation,
};

use crate::model::GeoPoint;

/// Pick the provider for a configured device position.
///
/// `None` means the device has no position source.
pub fn provider_for(device_location: Option<GeoPoint>) -> Box<dyn LocationProvider> {
    match device_location {
        Some(point) => Box::new(FixedLocation(point)),
        None => Box::new(NoLocation),
    }
}

impl LocationProvider for Box<dyn LocationProvider> {
    fn current_position(&mut self) -> Result<GeoPoint, crate::model::LocationError> {
        (**self).current_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_point_gives_fixed_provider() {
        let point = GeoPoint::new(-26.8, -65.2).unwrap();
        let mut provider = provider_for(Some(point));
        assert_eq!(provider.current_position(), Ok(point));
    }

    #[test]
    fn missing_point_gives_unavailable_provider() {
        let mut provider = provider_for(None);
        assert!(provider.current_position().is_err());
    }
}
