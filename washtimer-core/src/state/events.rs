//! Events that trigger state transitions

use crate::resolver::{DelayTimer, WashProgram};
use crate::time::Millis;

/// Events produced by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Selection events (idle only)
    /// Wash program button read; its duration is latched
    ProgramSelected(WashProgram, Millis),
    /// Delay timer button read; its duration is latched but never armed
    DelaySelected(DelayTimer, Millis),

    // Countdown events
    /// Start pressed with a non-zero selection
    CountdownStarted { minutes: u32 },
    /// One whole minute elapsed while running
    MinuteElapsed { remaining: u32 },
    /// Remaining minutes reached zero
    CountdownFinished,

    // Completion events
    /// Wash button pressed during the completion sequence
    CompletionAcknowledged,
}
