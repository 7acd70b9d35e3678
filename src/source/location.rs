//! One-shot device location lookup.
//!
//! The provider is queried once on a background thread and the single result
//! is handed back over a channel, so the map renders its default viewport
//! while the lookup is outstanding.

use crate::model::{GeoPoint, LocationError};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, warn};

/// Source of the device position.
pub trait LocationProvider: Send {
    /// Ask for the current position. May block.
    ///
    /// # Errors
    ///
    /// Returns `LocationError` when no position can be produced.
    fn current_position(&mut self) -> Result<GeoPoint, LocationError>;
}

/// Provider that always reports the same, configured position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub GeoPoint);

impl LocationProvider for FixedLocation {
    fn current_position(&mut self) -> Result<GeoPoint, LocationError> {
        Ok(self.0)
    }
}

/// Provider for a device without a position source.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current_position(&mut self) -> Result<GeoPoint, LocationError> {
        Err(LocationError::Unavailable(
            "no position source configured".to_string(),
        ))
    }
}

/// Handle to an outstanding lookup.
///
/// Yields exactly one result; afterwards [`LocationLookup::try_resolve`]
/// keeps returning `None`.
#[derive(Debug)]
pub struct LocationLookup {
    receiver: Receiver<Result<GeoPoint, LocationError>>,
    finished: bool,
}

impl LocationLookup {
    /// Non-blocking check for the result.
    ///
    /// A worker that exits without answering resolves to
    /// `LocationError::Aborted`.
    pub fn try_resolve(&mut self) -> Option<Result<GeoPoint, LocationError>> {
        if self.finished {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.finished = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.finished = true;
                Some(Err(LocationError::Aborted))
            }
        }
    }
}

/// Start the lookup on a background thread.
pub fn spawn_lookup<P>(mut provider: P) -> LocationLookup
where
    P: LocationProvider + 'static,
{
    let (sender, receiver) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name("tucumap-location".to_string())
        .spawn(move || {
            let result = provider.current_position();
            debug!(ok = result.is_ok(), "Location lookup finished");
            // Receiver may be gone if the app already quit.
            let _ = sender.send(result);
        });

    // On spawn failure the sender is dropped with the closure, so the lookup
    // resolves to Aborted.
    if let Err(e) = spawned {
        warn!(error = %e, "Could not start location lookup thread");
    }

    LocationLookup {
        receiver,
        finished: false,
    }
}

/// Parse a `"lat,lon"` pair as given on the command line.
///
/// # Errors
///
/// Returns a human-readable message for a malformed pair or non-finite values.
pub fn parse_coordinate_pair(input: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = input
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{input}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;
    GeoPoint::new(lat, lon).map_err(|e| e.to_string())
}
