//! Completion flash
//!
//! Alternates "dOnE" and a blank display at a fixed period. It is
//! re-evaluated on every poll and never waits, so an acknowledging button
//! press is seen on the next poll.

use crate::display::Frame;
use crate::time::Millis;

/// Completion flash sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompletionFlash {
    /// "dOnE" currently shown (otherwise blank)
    showing_done: bool,
    /// When the next frame is due
    next_toggle: Millis,
    /// Time each frame stays up
    interval: Millis,
}

impl CompletionFlash {
    /// Start the sequence at `now`; returns the first frame to show
    pub fn begin(now: Millis, interval: Millis) -> (Self, Frame) {
        let flash = Self {
            showing_done: true,
            next_toggle: now + interval,
            interval,
        };
        (flash, Frame::done())
    }

    /// Check if "dOnE" is currently shown
    pub fn showing_done(&self) -> bool {
        self.showing_done
    }

    /// Advance to `now`; returns the next frame when one is due
    ///
    /// After a stalled poll the cadence restarts from `now` instead of
    /// replaying the missed frames.
    pub fn tick(&mut self, now: Millis) -> Option<Frame> {
        if now < self.next_toggle {
            return None;
        }

        self.showing_done = !self.showing_done;
        self.next_toggle += self.interval;
        if self.next_toggle <= now {
            self.next_toggle = now + self.interval;
        }

        Some(if self.showing_done {
            Frame::done()
        } else {
            Frame::Blank
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_SECOND: Millis = Millis(500);

    #[test]
    fn test_begins_with_done() {
        let (flash, frame) = CompletionFlash::begin(Millis(1_000), HALF_SECOND);
        assert_eq!(frame, Frame::done());
        assert!(flash.showing_done());
    }

    #[test]
    fn test_alternates_on_schedule() {
        let (mut flash, _) = CompletionFlash::begin(Millis::ZERO, HALF_SECOND);

        assert_eq!(flash.tick(Millis(499)), None);
        assert_eq!(flash.tick(Millis(500)), Some(Frame::Blank));
        assert_eq!(flash.tick(Millis(700)), None);
        assert_eq!(flash.tick(Millis(1_000)), Some(Frame::done()));
        assert_eq!(flash.tick(Millis(1_500)), Some(Frame::Blank));
    }

    #[test]
    fn test_late_poll_keeps_cadence() {
        let (mut flash, _) = CompletionFlash::begin(Millis::ZERO, HALF_SECOND);

        assert_eq!(flash.tick(Millis(530)), Some(Frame::Blank));
        // Next frame still due at 1000, not 1030
        assert_eq!(flash.tick(Millis(1_000)), Some(Frame::done()));
    }

    #[test]
    fn test_stall_resynchronises() {
        let (mut flash, _) = CompletionFlash::begin(Millis::ZERO, HALF_SECOND);

        assert_eq!(flash.tick(Millis(5_200)), Some(Frame::Blank));
        assert_eq!(flash.tick(Millis(5_600)), None);
        assert_eq!(flash.tick(Millis(5_700)), Some(Frame::done()));
    }
}
