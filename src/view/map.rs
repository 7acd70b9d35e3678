//! Map canvas: route, bus, pin, directions and crosshair over the viewport.
//!
//! The canvas x axis is longitude and the y axis latitude, bounded by the
//! current viewport region.

use crate::model::{GeoPoint, MapStyle};
use crate::state::{AppState, MarkerPhase};
use crate::view::styles::MapStyles;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        canvas::{Canvas, Context, Line, Map, MapResolution, Points},
        Block, Borders,
    },
    Frame,
};
use std::time::Instant;

/// Glyph for the bus marker.
pub const BUS_GLYPH: &str = "■";
/// Glyph for the dropped pin.
pub const PIN_GLYPH: &str = "▼";
/// Glyph for the crosshair.
pub const CROSSHAIR_GLYPH: &str = "+";

fn xy(point: GeoPoint) -> (f64, f64) {
    (point.longitude(), point.latitude())
}

/// Render the map canvas for `state` at `now`.
pub fn render_map(frame: &mut Frame, area: Rect, state: &AppState, styles: &MapStyles, now: Instant) {
    let region = state.viewport();

    let title = match state.map_style {
        MapStyle::Standard => " Map ",
        MapStyle::Satellite => " Map (satellite) ",
    };

    let canvas = Canvas::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .background_color(styles.background(state.map_style))
        .marker(Marker::Braille)
        .x_bounds(region.longitude_bounds())
        .y_bounds(region.latitude_bounds())
        .paint(|ctx| paint(ctx, state, styles, now));

    frame.render_widget(canvas, area);
}

fn paint(ctx: &mut Context<'_>, state: &AppState, styles: &MapStyles, now: Instant) {
    if state.map_style == MapStyle::Satellite {
        ctx.draw(&Map {
            color: styles.world,
            resolution: MapResolution::High,
        });
        ctx.layer();
    }

    if let Some(route) = state.visible_route() {
        for pair in route.waypoints().windows(2) {
            let (x1, y1) = xy(pair[0]);
            let (x2, y2) = xy(pair[1]);
            ctx.draw(&Line::new(x1, y1, x2, y2, styles.route));
        }
        let stops: Vec<(f64, f64)> = route.waypoints().iter().copied().map(xy).collect();
        ctx.draw(&Points {
            coords: &stops,
            color: styles.route,
        });
    }

    if let Some(request) = state.directions_request() {
        let (x1, y1) = xy(request.origin);
        let (x2, y2) = xy(request.destination);
        ctx.draw(&Line::new(x1, y1, x2, y2, styles.directions));
    }

    ctx.layer();

    let (cx, cy) = xy(state.crosshair_point());
    ctx.print(cx, cy, CROSSHAIR_GLYPH.fg(styles.crosshair));

    let marker = state.marker();
    if marker.is_visible() {
        let (x, y) = xy(marker.position());
        // First tap opens the callout; the second dismisses the pin.
        let text = match marker.phase() {
            MarkerPhase::Shown { presses } if presses > 0 => {
                format!("{PIN_GLYPH} {}", marker.label())
            }
            _ => PIN_GLYPH.to_string(),
        };
        ctx.print(x, y, TextLine::styled(text, Style::new().fg(styles.pin)));
    }

    if let Some(bus) = state.bus_position(now) {
        let (x, y) = xy(bus);
        ctx.print(x, y, BUS_GLYPH.fg(styles.bus).bold());
    }
}
