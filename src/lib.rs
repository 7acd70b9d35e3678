//! TucuMap
//!
//! Terminal map of transit lines: drop a pin, pick a line and watch a
//! simulated bus glide along it.
//!
//! Pure Core / Impure Shell: `model` and `state` hold data and transitions
//! with no I/O; `config`, `logging`, `source` and `view` talk to the outside.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
