//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod catalog;
pub mod error;
pub mod geo;
pub mod map_action;
pub mod map_style;
pub mod transit_line;

// Re-export for convenience
pub use catalog::RouteCatalog;
pub use error::{AppError, CatalogError, LocationError};
pub use geo::{CoordinateError, GeoPoint, Region, Span};
pub use map_action::{Direction, MapAction};
pub use map_style::MapStyle;
pub use transit_line::TransitLine;
