//! Error types for tucumap.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions up to [`AppError`], which is what `main` reports.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level startup/runtime error
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`CatalogError`] - Route catalog read/parse/validation failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failures
//!   - `std::io::Error` - Terminal/TUI failures
//! - [`LocationError`] - Device location lookup failures
//!
//! # Recovery Strategy
//!
//! Only the shell can fail fatally, and only at startup or in the terminal backend.
//! The interaction core never returns errors: a failed location lookup becomes a
//! notice, a degenerate route becomes an inert simulation, and a tap on a hidden pin
//! is ignored (see [`Notice`](crate::state::Notice)).

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Returned from the startup sequence and the TUI loop. All variants are fatal:
/// the terminal is restored and the message is printed to stderr.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Route catalog could not be loaded.
    ///
    /// **Recovery**: none at runtime. The user fixes the file or drops the
    /// `--catalog` flag to fall back to the built-in lines.
    #[error("Failed to load route catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Tracing subscriber setup failed.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading a route catalog.
///
/// # Examples
///
/// ```
/// use tucumap::model::error::CatalogError;
///
/// let err = CatalogError::DuplicateName { name: "Linea 7".to_string() };
/// assert!(err.to_string().contains("Linea 7"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error message.
        reason: String,
    },

    /// Catalog is not valid JSON, or holds a non-finite coordinate.
    #[error("Invalid catalog JSON: {reason}")]
    Parse {
        /// Parser error message.
        reason: String,
    },

    /// Two lines share a display name.
    #[error("Duplicate line name '{name}'")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// A line has no waypoints.
    #[error("Line '{name}' has no waypoints")]
    EmptyLine {
        /// Name of the empty line.
        name: String,
    },
}

/// Reasons a device location lookup can fail.
///
/// A failure is terminal for that single attempt; there is no retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// No position source is configured or it produced nothing.
    #[error("Location unavailable: {0}")]
    Unavailable(String),

    /// The user or platform refused access to the position.
    #[error("Location permission denied")]
    Denied,

    /// The lookup worker went away before answering.
    #[error("Location lookup aborted")]
    Aborted,
}
