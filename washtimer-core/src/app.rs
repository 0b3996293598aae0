//! Application step
//!
//! Binds the controller to an input source and a display. The firmware
//! calls [`App::poll`] from its polling loop; host tests drive it with
//! scripted inputs and a recording display.

use crate::config::TimerConfig;
use crate::controller::{Controller, Step};
use crate::display::{DisplayError, Frame, SegmentDisplay};
use crate::input::InputSource;
use crate::time::Millis;

/// A poll whose display write failed
///
/// The controller has still advanced; `step` holds the events of the poll.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollError {
    pub step: Step,
    pub error: DisplayError,
}

/// The dishwasher timer application
pub struct App<I, D> {
    input: I,
    display: D,
    controller: Controller,
    /// Frame whose write failed, retried on the next poll
    pending: Option<Frame>,
}

impl<I: InputSource, D: SegmentDisplay> App<I, D> {
    /// Create the application; call [`App::init`] before polling
    pub fn new(input: I, display: D, config: TimerConfig) -> Self {
        Self {
            input,
            display,
            controller: Controller::new(config),
            pending: None,
        }
    }

    /// Set brightness and blank the display
    pub fn init(&mut self) -> Result<(), DisplayError> {
        let brightness = self.controller.config().display.brightness;
        self.display.set_brightness(brightness, true)?;
        self.display.clear()
    }

    /// Sample the inputs, advance the controller and draw any new frame
    ///
    /// A frame that fails to draw is kept and retried on every following
    /// poll until it is written or replaced by a newer frame.
    pub fn poll(&mut self, now: Millis) -> Result<Step, PollError> {
        let snapshot = self.input.sample();
        let step = self.controller.step(&snapshot, now);

        let Some(frame) = step.frame.or(self.pending.take()) else {
            return Ok(step);
        };

        match frame.draw(&mut self.display) {
            Ok(()) => Ok(step),
            Err(error) => {
                self.pending = Some(frame);
                Err(PollError { step, error })
            }
        }
    }

    /// Get the controller
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Get the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get the input source
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
