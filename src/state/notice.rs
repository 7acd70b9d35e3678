//! Non-fatal conditions surfaced to the user.
//!
//! None of these interrupt the app; they are shown in the status bar and the
//! map stays usable. Taps on a hidden pin are not noticed at all.

use crate::model::LocationError;
use std::collections::VecDeque;
use std::fmt;

/// Maximum notices retained; older ones are dropped first.
const MAX_NOTICES: usize = 8;

/// A non-fatal condition worth telling the user about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The startup location lookup failed; the default viewport is kept.
    LocationUnavailable(LocationError),
    /// The selected line has fewer than two waypoints; the bus will not move.
    DegenerateRoute {
        /// Line name.
        line: String,
        /// Number of waypoints it has.
        waypoints: usize,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LocationUnavailable(reason) => {
                write!(f, "Could not find your location ({reason}), showing default area")
            }
            Notice::DegenerateRoute { line, waypoints } => {
                write!(f, "{line} has {waypoints} waypoint(s), nothing to play")
            }
        }
    }
}

/// Bounded queue of notices, newest last.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    entries: VecDeque<Notice>,
}

impl Notices {
    /// Record a notice, evicting the oldest past capacity.
    pub fn push(&mut self, notice: Notice) {
        tracing::warn!(%notice, "Notice raised");
        if self.entries.len() == MAX_NOTICES {
            self.entries.pop_front();
        }
        self.entries.push_back(notice);
    }

    /// Most recent notice.
    pub fn latest(&self) -> Option<&Notice> {
        self.entries.back()
    }

    /// All notices, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter()
    }

    /// Number of retained notices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been noticed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
