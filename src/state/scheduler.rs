//! Cancellable fixed-cadence timer for route playback.
//!
//! The timer never calls back on its own. The event loop asks it for the next
//! deadline, and once that passes, [`PlaybackTimer::poll`] hands out a tick
//! stamped with the [`TimerToken`] of the current arming. Every `arm` mints a new
//! token and `cancel` drops it, so a tick collected before a cancel or re-arm is
//! recognisably stale and [`PlaybackTimer::accepts`] rejects it.
//!
//! Time is always passed in, which keeps the timer deterministic under test.

use std::time::{Duration, Instant};

/// Identity of one arming of a [`PlaybackTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Raw sequence number, for logging.
    pub fn get(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    token: TimerToken,
    next_due: Instant,
}

/// A single recurring timer. At most one arming is alive at any time.
#[derive(Debug, Clone)]
pub struct PlaybackTimer {
    period: Duration,
    armed: Option<Armed>,
    next_token: u64,
}

impl PlaybackTimer {
    /// Create a disarmed timer with the given cadence.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed: None,
            next_token: 0,
        }
    }

    /// Arm the timer so the first tick is due one period after `now`.
    ///
    /// Any previous arming is cancelled first; its token stops being accepted.
    pub fn arm(&mut self, now: Instant) -> TimerToken {
        self.cancel();
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.armed = Some(Armed {
            token,
            next_due: now + self.period,
        });
        token
    }

    /// Disarm the timer. Safe to call when nothing is armed.
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Whether an arming is alive.
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Token of the live arming, if any.
    pub fn token(&self) -> Option<TimerToken> {
        self.armed.map(|a| a.token)
    }

    /// Whether a tick stamped with `token` may still fire.
    pub fn accepts(&self, token: TimerToken) -> bool {
        self.token() == Some(token)
    }

    /// When the next tick is due, if armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.armed.map(|a| a.next_due)
    }

    /// Collect the tick due at `now`, if any.
    ///
    /// At most one tick is produced per call. If the loop fell behind by more
    /// than a period, the missed ticks are coalesced and the next deadline is
    /// rescheduled one period after `now`.
    pub fn poll(&mut self, now: Instant) -> Option<TimerToken> {
        let period = self.period;
        let armed = self.armed.as_mut()?;
        if now < armed.next_due {
            return None;
        }
        let following = armed.next_due + period;
        armed.next_due = if following > now {
            following
        } else {
            now + period
        };
        Some(armed.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(1010);

    #[test]
    fn new_timer_is_disarmed() {
        let timer = PlaybackTimer::new(PERIOD);
        assert!(!timer.is_armed());
        assert_eq!(timer.next_deadline(), None);
    }

    #[test]
    fn first_tick_is_due_one_period_after_arming() {
        let start = Instant::now();
        let mut timer = PlaybackTimer::new(PERIOD);
        let token = timer.arm(start);

        assert_eq!(timer.next_deadline(), Some(start + PERIOD));
        assert_eq!(timer.poll(start + Duration::from_millis(1009)), None);
        assert_eq!(timer.poll(start + PERIOD), Some(token));
    }

    #[test]
    fn ticks_follow_fixed_cadence() {
        let start = Instant::now();
        let mut timer = PlaybackTimer::new(PERIOD);
        timer.arm(start);

        assert!(timer.poll(start + PERIOD).is_some());
        assert_eq!(timer.next_deadline(), Some(start + PERIOD * 2));
        assert!(timer.poll(start + PERIOD + Duration::from_millis(500)).is_none());
        assert!(timer.poll(start + PERIOD * 2).is_some());
    }

    #[test]
    fn missed_periods_are_coalesced() {
        let start = Instant::now();
        let mut timer = PlaybackTimer::new(PERIOD);
        timer.arm(start);

        let late = start + PERIOD * 5;
        assert!(timer.poll(late).is_some());
        assert!(timer.poll(late).is_none(), "only one tick per poll");
        assert_eq!(timer.next_deadline(), Some(late + PERIOD));
    }

    #[test]
    fn rearm_mints_new_token_and_rejects_old() {
        let start = Instant::now();
        let mut timer = PlaybackTimer::new(PERIOD);
        let first = timer.arm(start);
        let second = timer.arm(start);

        assert_ne!(first, second);
        assert!(!timer.accepts(first));
        assert!(timer.accepts(second));
    }

    #[test]
    fn cancel_rejects_queued_tick() {
        let start = Instant::now();
        let mut timer = PlaybackTimer::new(PERIOD);
        timer.arm(start);

        let queued = timer.poll(start + PERIOD).unwrap();
        timer.cancel();

        assert!(!timer.accepts(queued));
        assert_eq!(timer.poll(start + PERIOD * 3), None);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut timer = PlaybackTimer::new(PERIOD);
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_armed());
    }
}
