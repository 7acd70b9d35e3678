//! Screen layout rendering.
//!
//! Pure layout logic: header bar, map canvas, optional line menu and status
//! bar, with the help overlay drawn on top.

use crate::state::AppState;
use crate::view::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use crate::view::help::render_help_overlay;
use crate::view::line_menu::{menu_height, render_line_menu};
use crate::view::map::render_map;
use crate::view::styles::{MapStyles, MUTED_TEXT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Hint shown in the status bar when there is nothing else to say.
pub const IDLE_HINT: &str = "m: lines | Enter: drop pin | t: tap pin | ?: help | q: quit";

/// Render the whole screen for `state` at `now`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &MapStyles, now: Instant) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    let header_area = vertical_chunks[0];
    let content_area = vertical_chunks[1];
    let status_area = vertical_chunks[2];

    render_header(frame, header_area, state);

    let (map_area, menu_area) = split_content(content_area, state);
    render_map(frame, map_area, state, styles, now);
    if let Some(menu_area) = menu_area {
        render_line_menu(frame, menu_area, state, styles);
    }

    render_status_bar(frame, status_area, state, styles);

    if state.help_visible {
        render_help_overlay(frame);
    }
}

/// Split the content area between the map and, when open, the line menu below it.
pub fn split_content(area: Rect, state: &AppState) -> (Rect, Option<Rect>) {
    if !state.line_menu.is_open() {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(menu_height(state.catalog().len())),
        ])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

/// Render the header bar: title, map style and viewport center.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let center = state.viewport().center;
    let header_text = format!(
        " TucuMap | {} | {:.5}, {:.5}",
        state.map_style.as_str(),
        center.latitude(),
        center.longitude()
    );

    let paragraph =
        Paragraph::new(Line::from(header_text)).style(Style::default().fg(Color::Cyan));
    frame.render_widget(paragraph, area);
}

/// Status bar segments: playback position, pin label and latest notice.
pub fn status_segments(state: &AppState) -> Vec<String> {
    let mut segments = Vec::new();

    if let Some(line) = state.visible_route() {
        let stop = state
            .bus_waypoint()
            .map_or_else(|| "-".to_string(), |index| (index + 1).to_string());
        segments.push(format!("{} stop {}/{}", line.name(), stop, line.len()));
    }

    let marker = state.marker();
    if marker.is_visible() {
        segments.push(marker.label().to_string());
    }

    if let Some(notice) = state.notices().latest() {
        segments.push(notice.to_string());
    }

    segments
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &MapStyles) {
    let segments = status_segments(state);

    let line = if segments.is_empty() {
        Line::from(Span::styled(IDLE_HINT, MUTED_TEXT))
    } else {
        let has_notice = !state.notices().is_empty();
        let last = segments.len() - 1;
        let spans: Vec<Span> = segments
            .into_iter()
            .enumerate()
            .flat_map(|(index, text)| {
                let style = if has_notice && index == last {
                    styles.notice
                } else {
                    Style::default()
                };
                let separator = (index > 0).then(|| Span::raw(" | "));
                separator.into_iter().chain(std::iter::once(Span::styled(text, style)))
            })
            .collect();
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
