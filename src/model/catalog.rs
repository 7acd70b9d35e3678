//! Route catalog: the static list of transit lines offered to the user.
//!
//! Loaded once at startup, either from a JSON file or from the built-in
//! sample lines, and read-only afterwards.

use crate::model::error::CatalogError;
use crate::model::geo::GeoPoint;
use crate::model::transit_line::TransitLine;
use std::collections::HashSet;
use std::path::Path;

/// Ordered, validated collection of transit lines.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteCatalog {
    lines: Vec<TransitLine>,
}

impl RouteCatalog {
    /// Build a catalog, enforcing unique names and non-empty waypoint lists.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateName` or `CatalogError::EmptyLine`
    /// for the first offending line.
    pub fn new(lines: Vec<TransitLine>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for line in &lines {
            if line.is_empty() {
                return Err(CatalogError::EmptyLine {
                    name: line.name().to_string(),
                });
            }
            if !seen.insert(line.name()) {
                return Err(CatalogError::DuplicateName {
                    name: line.name().to_string(),
                });
            }
        }
        Ok(Self { lines })
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// The format is an array of `{"name": ..., "waypoints": [{"latitude": ..,
    /// "longitude": ..}, ...]}` records.
    ///
    /// # Errors
    ///
    /// `CatalogError::Parse` for malformed JSON or non-finite coordinates, plus
    /// the validation errors of [`RouteCatalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let lines: Vec<TransitLine> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse {
                reason: e.to_string(),
            })?;
        Self::new(lines)
    }

    /// Load a catalog file from disk.
    ///
    /// # Errors
    ///
    /// `CatalogError::Read` if the file cannot be read, otherwise as
    /// [`RouteCatalog::from_json`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let catalog = Self::from_json(&contents)?;
        tracing::info!(path = ?path, lines = catalog.len(), "Route catalog loaded");
        Ok(catalog)
    }

    /// Sample lines through San Miguel de Tucumán, used when no catalog file
    /// is configured.
    pub fn builtin() -> Self {
        let line = |name: &str, coords: &[(f64, f64)]| {
            let waypoints = coords
                .iter()
                .filter_map(|&(lat, lon)| GeoPoint::new(lat, lon).ok())
                .collect();
            TransitLine::new(name, waypoints)
        };

        Self {
            lines: vec![
                line(
                    "Linea 1",
                    &[
                        (-26.830352, -65.203764),
                        (-26.831924, -65.201543),
                        (-26.833511, -65.199312),
                        (-26.834129, -65.194769),
                        (-26.835482, -65.191853),
                        (-26.836720, -65.188921),
                    ],
                ),
                line(
                    "Linea 7",
                    &[
                        (-26.822640, -65.195310),
                        (-26.826115, -65.196502),
                        (-26.829780, -65.197744),
                        (-26.833205, -65.198861),
                        (-26.836911, -65.200032),
                    ],
                ),
                line(
                    "Linea 102",
                    &[
                        (-26.840215, -65.210480),
                        (-26.838470, -65.205117),
                        (-26.836702, -65.199866),
                        (-26.834951, -65.194573),
                    ],
                ),
            ],
        }
    }

    /// All lines in catalog order.
    pub fn lines(&self) -> &[TransitLine] {
        &self.lines
    }

    /// Line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&TransitLine> {
        self.lines.get(index)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the catalog has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for RouteCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
