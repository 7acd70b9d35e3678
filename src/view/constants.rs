//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for notices, the pin label and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Upper bound on the line menu height in lines (border included).
pub const LINE_MENU_MAX_HEIGHT: u16 = 10;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Redraw interval while the bus is gliding or the location is pending.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Longest the event loop sleeps when nothing is scheduled.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(500);
