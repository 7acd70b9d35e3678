//! Application state and the event contract with the presentation layer.
//!
//! AppState is the root state type. It owns the three core components (pin,
//! bus playback, viewport) plus the small amount of UI state the terminal
//! shell needs, and routes each inbound event to the right component.

use crate::model::{Direction, GeoPoint, LocationError, MapStyle, Region, RouteCatalog, TransitLine};
use crate::state::crosshair::Crosshair;
use crate::state::glide::Glide;
use crate::state::line_menu::LineMenu;
use crate::state::marker::{self, MarkerEvent, MarkerState};
use crate::state::notice::{Notice, Notices};
use crate::state::simulator::{MoveDirective, RouteSimulator, SimulationState};
use crate::state::viewport::{ViewportController, DEFAULT_SPAN};
use std::time::Instant;
use tracing::{debug, info};

/// Endpoints handed to the directions collaborator while the pin is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionsRequest {
    /// Current viewport center.
    pub origin: GeoPoint,
    /// Dropped pin position.
    pub destination: GeoPoint,
}

/// Application state. No terminal or thread handles.
///
/// # Event contract
///
/// - `on_long_press(point)` → pin created at `point`
/// - `on_marker_tap()` → pin acknowledged, then dismissed on the second tap
/// - `on_line_selected(line, now)` → playback restarted on `line`, viewport on its start
/// - `on_device_location_resolved(result)` → viewport on the device, once
///
/// Outbound: [`AppState::marker`], [`AppState::simulation`], [`AppState::viewport`],
/// [`AppState::directions_request`], [`AppState::notices`].
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: RouteCatalog,
    marker: MarkerState,
    simulator: RouteSimulator,
    viewport: ViewportController,
    /// Bus marker animation; `None` while no line is shown.
    bus: Option<Glide>,
    /// Waypoint the bus last set off towards.
    bus_waypoint: Option<usize>,
    notices: Notices,
    location_resolved: bool,

    /// Line picker state.
    pub line_menu: LineMenu,
    /// Base map layer.
    pub map_style: MapStyle,
    /// Pointer used for long-presses.
    pub crosshair: Crosshair,
    /// Whether the help overlay is showing.
    pub help_visible: bool,
}

impl AppState {
    /// Fresh state over `catalog` with the default viewport.
    pub fn new(catalog: RouteCatalog) -> Self {
        Self {
            catalog,
            marker: MarkerState::new(),
            simulator: RouteSimulator::new(),
            viewport: ViewportController::default(),
            bus: None,
            bus_waypoint: None,
            notices: Notices::default(),
            location_resolved: false,
            line_menu: LineMenu::default(),
            map_style: MapStyle::default(),
            crosshair: Crosshair::default(),
            help_visible: false,
        }
    }

    // ===== Inbound events =====

    /// Drop (or move) the pin.
    pub fn on_long_press(&mut self, point: GeoPoint) {
        self.apply_marker(MarkerEvent::Create(point));
    }

    /// Tap the pin.
    pub fn on_marker_tap(&mut self) {
        self.apply_marker(MarkerEvent::Press);
    }

    /// Force the pin off the map.
    pub fn hide_marker(&mut self) {
        self.apply_marker(MarkerEvent::Hide);
    }

    fn apply_marker(&mut self, event: MarkerEvent) {
        let current = std::mem::take(&mut self.marker);
        self.marker = marker::transition(current, event);
    }

    /// Start playback on `line` and recenter on its first waypoint.
    ///
    /// The previous playback is cancelled before the new one starts.
    pub fn on_line_selected(&mut self, line: &TransitLine, now: Instant) {
        info!(line = line.name(), "Line selected");
        self.bus = None;
        self.bus_waypoint = None;
        let active = self.simulator.select(line, now);
        self.viewport.set_from_line(line, DEFAULT_SPAN);
        self.crosshair.recenter();

        if line.is_degenerate() {
            self.notices.push(Notice::DegenerateRoute {
                line: line.name().to_string(),
                waypoints: line.len(),
            });
        }
        if active {
            self.bus = line.start().map(|start| Glide::parked(start, now));
        }
    }

    /// Select the catalog line at `index`. Returns false for an unknown index.
    pub fn select_line_at(&mut self, index: usize, now: Instant) -> bool {
        match self.catalog.get(index).cloned() {
            Some(line) => {
                self.on_line_selected(&line, now);
                true
            }
            None => false,
        }
    }

    /// Stop playback and hide the route.
    pub fn stop_playback(&mut self) {
        self.simulator.deselect();
        self.bus = None;
        self.bus_waypoint = None;
    }

    /// Apply the one-shot device location result.
    ///
    /// Only the first call has an effect. A failure keeps the current viewport
    /// and records a notice. Returns whether the viewport moved.
    pub fn on_device_location_resolved(&mut self, result: Result<GeoPoint, LocationError>) -> bool {
        if self.location_resolved {
            debug!("Ignoring repeated device location result");
            return false;
        }
        self.location_resolved = true;

        match result {
            Ok(point) => {
                info!(
                    latitude = point.latitude(),
                    longitude = point.longitude(),
                    "Device location resolved"
                );
                self.viewport.set_from_device_location(point, DEFAULT_SPAN);
                true
            }
            Err(reason) => {
                self.notices.push(Notice::LocationUnavailable(reason));
                false
            }
        }
    }

    /// Run the playback tick due at `now` and start the bus glide it asks for.
    pub fn advance(&mut self, now: Instant) -> Option<MoveDirective> {
        let directive = self.simulator.poll(now)?;
        if let Some(bus) = self.bus.as_mut() {
            *bus = bus.retarget(&directive, now);
        }
        self.bus_waypoint = Some(directive.waypoint_index);
        debug!(
            waypoint = directive.waypoint_index,
            cursor = self.simulator.cursor(),
            "Bus moving"
        );
        Some(directive)
    }

    /// Tear down: no playback timer survives this.
    pub fn shutdown(&mut self) {
        self.stop_playback();
    }

    // ===== Shell conveniences =====

    /// Move the long-press pointer.
    pub fn move_crosshair(&mut self, direction: Direction) {
        self.crosshair.step(direction);
    }

    /// Long-press wherever the crosshair is.
    pub fn long_press_at_crosshair(&mut self) {
        let point = self.crosshair_point();
        self.on_long_press(point);
    }

    /// Switch between standard and satellite.
    pub fn toggle_map_style(&mut self) {
        self.map_style = self.map_style.toggled();
    }

    // ===== Outbound state =====

    /// Available lines.
    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    /// The dropped pin.
    pub fn marker(&self) -> &MarkerState {
        &self.marker
    }

    /// Playback snapshot.
    pub fn simulation(&self) -> SimulationState<'_> {
        self.simulator.state()
    }

    /// Current map region.
    pub fn viewport(&self) -> Region {
        self.viewport.region()
    }

    /// Directions to draw, present exactly while the pin is shown.
    pub fn directions_request(&self) -> Option<DirectionsRequest> {
        self.marker.is_visible().then(|| DirectionsRequest {
            origin: self.viewport.center(),
            destination: self.marker.position(),
        })
    }

    /// Non-fatal conditions raised so far.
    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    /// Whether the location result has been applied.
    pub fn location_resolved(&self) -> bool {
        self.location_resolved
    }

    /// Selected line, shown only while playback is active.
    pub fn visible_route(&self) -> Option<&TransitLine> {
        if self.simulator.is_active() {
            self.simulator.route()
        } else {
            None
        }
    }

    /// Bus marker position at `now`, if a line is shown.
    pub fn bus_position(&self, now: Instant) -> Option<GeoPoint> {
        self.bus.map(|glide| glide.position_at(now))
    }

    /// Index of the waypoint the bus is gliding to or standing at.
    ///
    /// `None` until the first move after a selection.
    pub fn bus_waypoint(&self) -> Option<usize> {
        self.bus_waypoint
    }

    /// Whether the bus is mid-glide at `now`.
    pub fn bus_moving(&self, now: Instant) -> bool {
        self.bus.is_some_and(|glide| glide.is_moving(now))
    }

    /// Next playback deadline, for the event loop timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.simulator.next_deadline()
    }

    /// Point under the long-press pointer.
    pub fn crosshair_point(&self) -> GeoPoint {
        self.crosshair.point_in(&self.viewport.region())
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
