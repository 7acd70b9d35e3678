//! Map state machine (pure).
//!
//! All state transitions are pure functions of their inputs and an explicit
//! `Instant`, testable without a terminal or real timers.

pub mod app_state;
pub mod crosshair;
pub mod glide;
pub mod line_menu;
pub mod marker;
pub mod notice;
pub mod scheduler;
pub mod simulator;
pub mod viewport;

// Re-export for convenience
pub use app_state::{AppState, DirectionsRequest};
pub use crosshair::Crosshair;
pub use glide::Glide;
pub use line_menu::LineMenu;
pub use marker::{transition, MarkerEvent, MarkerPhase, MarkerState};
pub use notice::{Notice, Notices};
pub use scheduler::{PlaybackTimer, TimerToken};
pub use simulator::{MoveDirective, RouteSimulator, SimulationState, GLIDE_DURATION, TICK_INTERVAL};
pub use viewport::{ViewportController, DEFAULT_SPAN, INITIAL_CENTER, INITIAL_SPAN};
