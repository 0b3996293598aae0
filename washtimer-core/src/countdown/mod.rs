//! Countdown timing
//!
//! Remaining time is counted in whole minutes against an accumulating
//! minute anchor (`anchor += 1 min` per decrement), so the polling
//! granularity of the main loop never adds drift. The colon blink runs on
//! its own anchor and has no effect on timing.

pub mod flash;

pub use flash::CompletionFlash;

use crate::display::Frame;
use crate::time::{Millis, MS_PER_MINUTE};

const ONE_MINUTE: Millis = Millis(MS_PER_MINUTE);

/// Result of advancing a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    /// Whole minutes counted off during this poll
    pub minutes_elapsed: u32,
    /// Frame to show when the blink interval elapsed
    pub redraw: Option<Frame>,
}

/// An active countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Countdown {
    /// Whole minutes left
    remaining_minutes: u32,
    /// Start of the minute currently being counted
    minute_anchor: Millis,
    /// Time of the last colon toggle
    blink_anchor: Millis,
    /// Colon currently lit
    colon: bool,
}

impl Countdown {
    /// Start a countdown of `duration` at `now`
    ///
    /// Returns `None` for a zero duration. Partial minutes are dropped.
    pub fn start(duration: Millis, now: Millis) -> Option<Self> {
        if duration.is_zero() {
            return None;
        }

        Some(Self {
            remaining_minutes: duration.whole_minutes(),
            minute_anchor: now,
            blink_anchor: now,
            colon: false,
        })
    }

    /// Whole minutes left
    pub fn remaining_minutes(&self) -> u32 {
        self.remaining_minutes
    }

    /// Check if the colon is currently lit
    pub fn colon(&self) -> bool {
        self.colon
    }

    /// Check if the countdown reached zero
    pub fn is_elapsed(&self) -> bool {
        self.remaining_minutes == 0
    }

    /// Advance to `now`
    ///
    /// Every whole minute since the anchor is counted off, even when
    /// several are overdue after a stalled poll. The colon toggles and a
    /// redraw is requested once `blink_interval` has passed since the last
    /// toggle.
    pub fn tick(&mut self, now: Millis, blink_interval: Millis) -> Tick {
        let mut tick = Tick::default();

        while self.remaining_minutes > 0 && now.since(self.minute_anchor) >= ONE_MINUTE {
            self.minute_anchor += ONE_MINUTE;
            self.remaining_minutes -= 1;
            tick.minutes_elapsed += 1;
        }

        if now.since(self.blink_anchor) >= blink_interval {
            self.blink_anchor = now;
            self.colon = !self.colon;
            tick.redraw = Some(Frame::minutes(self.remaining_minutes, self.colon));
        }

        tick
    }
}
