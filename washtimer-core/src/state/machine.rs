//! State machine definition
//!
//! What the display shows and which buttons are honoured is a function of
//! the current state.

use super::events::Event;

/// Timer states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Waiting for a selection and the start button
    #[default]
    Idle,
    /// Counting down the selected program
    Running,
    /// Countdown over, flashing "dOnE" until a wash button is pressed
    Finished,
}

impl State {
    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Idle transitions
            (Idle, ProgramSelected(..)) => Idle,
            (Idle, DelaySelected(..)) => Idle,
            (Idle, CountdownStarted { .. }) => Running,

            // Running transitions
            (Running, MinuteElapsed { .. }) => Running,
            (Running, CountdownFinished) => Finished,

            // Finished transitions
            (Finished, CompletionAcknowledged) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}
