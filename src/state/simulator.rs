//! Bus playback along the selected transit line.
//!
//! A [`RouteSimulator`] replays one line at a fixed cadence, producing a
//! [`MoveDirective`] per tick for the renderer to glide the bus marker. It owns
//! the only [`PlaybackTimer`]; the timer is armed by [`RouteSimulator::select`]
//! and disarmed only by `select` and [`RouteSimulator::deselect`].
//!
//! # Cursor and wrap
//!
//! The cursor is the index of the next waypoint to glide to and stays within
//! `0..len`. After the move to the last waypoint a wrap is pending; the next
//! tick resets the cursor to 0 without emitting a move, so the bus never jumps
//! straight from the end of the line back to its start. One loop over `N`
//! waypoints therefore takes `N + 1` ticks.
//!
//! Lines with a single waypoint are inert: the timer runs but no tick moves
//! anything. Lines with no waypoints leave the simulator inactive.

use crate::model::{GeoPoint, TransitLine};
use crate::state::scheduler::{PlaybackTimer, TimerToken};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Interval between playback ticks.
///
/// Kept 10 ms longer than [`GLIDE_DURATION`] so each glide finishes before the
/// next one starts.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1010);

/// Duration of the bus glide towards each waypoint.
pub const GLIDE_DURATION: Duration = Duration::from_millis(1000);

/// Instruction to animate the bus marker towards a waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveDirective {
    /// Waypoint to glide to.
    pub target: GeoPoint,
    /// Index of `target` in the route.
    pub waypoint_index: usize,
    /// How long the glide should take.
    pub glide: Duration,
}

/// Read-only view of the playback for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState<'a> {
    /// Selected line, if any.
    pub route: Option<&'a TransitLine>,
    /// Index of the next waypoint to glide to.
    pub cursor: usize,
    /// Whether the playback timer is running.
    pub active: bool,
}

/// Owner of the selected route and its playback timer.
#[derive(Debug, Clone)]
pub struct RouteSimulator {
    route: Option<TransitLine>,
    cursor: usize,
    wrap_pending: bool,
    timer: PlaybackTimer,
}

impl Default for RouteSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteSimulator {
    /// Idle simulator with the standard cadence.
    pub fn new() -> Self {
        Self {
            route: None,
            cursor: 0,
            wrap_pending: false,
            timer: PlaybackTimer::new(TICK_INTERVAL),
        }
    }

    /// Start playback of `line`, replacing whatever was playing.
    ///
    /// The previous timer is cancelled before the new one is armed. Returns
    /// whether playback became active (false only for a line with no waypoints).
    pub fn select(&mut self, line: &TransitLine, now: Instant) -> bool {
        self.timer.cancel();
        self.cursor = 0;
        self.wrap_pending = false;
        self.route = Some(line.clone());

        if line.is_empty() {
            info!(line = line.name(), "Selected line has no waypoints, playback inert");
            return false;
        }

        let token = self.timer.arm(now);
        info!(
            line = line.name(),
            waypoints = line.len(),
            token = token.get(),
            "Playback started"
        );
        true
    }

    /// Stop playback and forget the route. Idempotent.
    pub fn deselect(&mut self) {
        if self.timer.is_armed() || self.route.is_some() {
            debug!("Playback stopped");
        }
        self.timer.cancel();
        self.route = None;
        self.cursor = 0;
        self.wrap_pending = false;
    }

    /// Advance playback by one cadence step.
    ///
    /// Returns the move to perform, or `None` on a silent wrap, on an inert
    /// route, or when nothing is playing.
    pub fn tick(&mut self) -> Option<MoveDirective> {
        if !self.is_active() {
            return None;
        }
        let route = self.route.as_ref()?;
        if route.is_degenerate() {
            return None;
        }

        if self.wrap_pending {
            self.wrap_pending = false;
            self.cursor = 0;
            debug!("Playback wrapped to first waypoint");
            return None;
        }

        let index = self.cursor;
        let target = *route.waypoints().get(index)?;
        if index + 1 == route.len() {
            self.wrap_pending = true;
        } else {
            self.cursor = index + 1;
        }

        Some(MoveDirective {
            target,
            waypoint_index: index,
            glide: GLIDE_DURATION,
        })
    }

    /// Deliver a tick collected for `token`.
    ///
    /// Ticks from a cancelled or replaced arming are dropped.
    pub fn fire(&mut self, token: TimerToken) -> Option<MoveDirective> {
        if !self.timer.accepts(token) {
            debug!(token = token.get(), "Dropping stale playback tick");
            return None;
        }
        self.tick()
    }

    /// Run the tick due at `now`, if any.
    pub fn poll(&mut self, now: Instant) -> Option<MoveDirective> {
        let token = self.timer.poll(now)?;
        self.fire(token)
    }

    /// Collect the due tick without running it.
    ///
    /// Pair with [`RouteSimulator::fire`] when ticks are queued before delivery.
    pub fn due_tick(&mut self, now: Instant) -> Option<TimerToken> {
        self.timer.poll(now)
    }

    /// Deadline of the next tick, for the event loop's poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    /// Whether the playback timer is running.
    pub fn is_active(&self) -> bool {
        self.timer.is_armed()
    }

    /// Selected line, if any.
    pub fn route(&self) -> Option<&TransitLine> {
        self.route.as_ref()
    }

    /// Index of the next waypoint to glide to.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the next tick is the silent wrap.
    pub fn wrap_pending(&self) -> bool {
        self.wrap_pending
    }

    /// Snapshot for rendering.
    pub fn state(&self) -> SimulationState<'_> {
        SimulationState {
            route: self.route.as_ref(),
            cursor: self.cursor,
            active: self.is_active(),
        }
    }
}

#[cfg(test)]
#[path = "simulator_tests.rs"]
mod tests;
