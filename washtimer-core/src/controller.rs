//! Polling controller
//!
//! The controller is the single owner of all timer state. Each poll it:
//! - Latches wash program and delay timer selections while idle
//! - Arms the countdown on the start button
//! - Advances the countdown and the colon blink
//! - Runs the completion flash until a wash button acknowledges it
//!
//! It never touches hardware: each [`Controller::step`] returns the events
//! it produced and the frame to draw, if the display needs to change.

use heapless::Vec;

use crate::config::TimerConfig;
use crate::countdown::{CompletionFlash, Countdown};
use crate::display::Frame;
use crate::input::InputSnapshot;
use crate::resolver::{DelayTimer, WashProgram};
use crate::state::{Event, State};
use crate::time::Millis;

/// Upper bound on events produced by a single poll
///
/// The worst case is two: a selection plus `CountdownStarted` while idle,
/// or `MinuteElapsed` plus `CountdownFinished` while running.
pub const MAX_EVENTS_PER_STEP: usize = 4;

/// Outcome of one poll
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// Events in the order they happened
    pub events: Vec<Event, MAX_EVENTS_PER_STEP>,
    /// New display content, `None` if the display is unchanged
    pub frame: Option<Frame>,
}

/// Timer controller
#[derive(Debug, Clone)]
pub struct Controller {
    /// Current state
    state: State,
    /// Durations and display timing
    config: TimerConfig,
    /// Latched wash program
    selected_program: Option<WashProgram>,
    /// Latched wash duration (zero = none selected)
    selected_duration: Millis,
    /// Latched delay timer
    selected_timer: Option<DelayTimer>,
    /// Latched delay duration; never armed
    selected_delay: Millis,
    /// Active countdown (Running only)
    countdown: Option<Countdown>,
    /// Completion flash (Finished only)
    flash: Option<CompletionFlash>,
    /// Last frame handed out, used to skip redundant writes
    shown: Option<Frame>,
}

impl Controller {
    /// Create an idle controller
    pub fn new(config: TimerConfig) -> Self {
        Self {
            state: State::Idle,
            config,
            selected_program: None,
            selected_duration: Millis::ZERO,
            selected_timer: None,
            selected_delay: Millis::ZERO,
            countdown: None,
            flash: None,
            shown: Some(Frame::Blank),
        }
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get the configuration in use
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Latched wash duration (zero if none)
    pub fn selected_duration(&self) -> Millis {
        self.selected_duration
    }

    /// Latched wash program
    pub fn selected_program(&self) -> Option<WashProgram> {
        self.selected_program
    }

    /// Latched delay duration (zero if none)
    pub fn selected_delay(&self) -> Millis {
        self.selected_delay
    }

    /// Whole minutes left while running
    pub fn remaining_minutes(&self) -> Option<u32> {
        self.countdown.map(|c| c.remaining_minutes())
    }

    /// Process one poll of the inputs at time `now`
    pub fn step(&mut self, input: &InputSnapshot, now: Millis) -> Step {
        let mut step = Step::default();

        match self.state {
            State::Idle => self.step_idle(input, now, &mut step),
            State::Running => self.step_running(now, &mut step),
            State::Finished => self.step_finished(input, now, &mut step),
        }

        step
    }

    fn step_idle(&mut self, input: &InputSnapshot, now: Millis, step: &mut Step) {
        if input.any_wash_pressed() {
            if let Some(program) = WashProgram::detect(input) {
                let duration = program.duration(&self.config.wash);
                if self.selected_program != Some(program) || self.selected_duration != duration {
                    self.selected_program = Some(program);
                    self.selected_duration = duration;
                    self.emit(Event::ProgramSelected(program, duration), step);
                }
                self.show(Frame::duration(duration, true), step);
            }
        } else if input.any_timer_pressed() {
            if let Some(timer) = DelayTimer::detect(input, self.config.delay.priority) {
                let delay = timer.duration(&self.config.delay);
                if self.selected_timer != Some(timer) {
                    self.selected_timer = Some(timer);
                    self.selected_delay = delay;
                    self.emit(Event::DelaySelected(timer, delay), step);
                }
                self.show(Frame::duration(delay, true), step);
            }
        }

        if input.start_pressed() {
            if let Some(countdown) = Countdown::start(self.selected_duration, now) {
                let minutes = countdown.remaining_minutes();
                self.countdown = Some(countdown);
                self.emit(Event::CountdownStarted { minutes }, step);
            }
        }
    }

    fn step_running(&mut self, now: Millis, step: &mut Step) {
        let Some(countdown) = self.countdown.as_mut() else {
            return;
        };

        let tick = countdown.tick(now, self.config.display.blink_interval());
        let remaining = countdown.remaining_minutes();
        let elapsed = countdown.is_elapsed();

        if tick.minutes_elapsed > 0 {
            self.emit(Event::MinuteElapsed { remaining }, step);
        }
        if let Some(frame) = tick.redraw {
            self.show(frame, step);
        }

        if elapsed {
            self.countdown = None;
            self.emit(Event::CountdownFinished, step);

            let (flash, frame) =
                CompletionFlash::begin(now, self.config.display.flash_interval());
            self.flash = Some(flash);
            self.show(frame, step);
        }
    }

    fn step_finished(&mut self, input: &InputSnapshot, now: Millis, step: &mut Step) {
        if input.any_wash_pressed() {
            self.flash = None;
            self.emit(Event::CompletionAcknowledged, step);
            self.show(Frame::Blank, step);
            return;
        }

        if let Some(frame) = self.flash.as_mut().and_then(|f| f.tick(now)) {
            self.show(frame, step);
        }
    }

    fn emit(&mut self, event: Event, step: &mut Step) {
        self.state = self.state.transition(event);
        let pushed = step.events.push(event);
        debug_assert!(pushed.is_ok(), "more than MAX_EVENTS_PER_STEP events in one poll");
    }

    fn show(&mut self, frame: Frame, step: &mut Step) {
        if self.shown != Some(frame) {
            self.shown = Some(frame);
            step.frame = Some(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DelayPriority;
    use crate::display::glyphs::DONE;
    use crate::input::Button;

    fn idle() -> InputSnapshot {
        InputSnapshot::released()
    }

    fn press(button: Button) -> InputSnapshot {
        InputSnapshot::released().with(button)
    }

    #[test]
    fn test_wash_press_latches_and_previews() {
        let mut c = Controller::new(TimerConfig::default());

        let step = c.step(&press(Button::Glass), Millis(0));
        assert_eq!(c.selected_duration(), Millis::from_minutes(75));
        assert_eq!(c.selected_program(), Some(WashProgram::Glass));
        assert_eq!(step.frame, Some(Frame::Number { value: 115, colon: true }));
        assert_eq!(
            step.events.as_slice(),
            &[Event::ProgramSelected(WashProgram::Glass, Millis::from_minutes(75))]
        );

        // Held button: nothing new to report or draw
        let step = c.step(&press(Button::Glass), Millis(10));
        assert!(step.events.is_empty());
        assert_eq!(step.frame, None);
        assert_eq!(c.state(), State::Idle);
    }

    #[test]
    fn test_start_without_selection_is_noop() {
        let mut c = Controller::new(TimerConfig::default());
        let step = c.step(&press(Button::Start), Millis(0));
        assert!(step.events.is_empty());
        assert_eq!(c.state(), State::Idle);
        assert_eq!(c.remaining_minutes(), None);
    }

    #[test]
    fn test_select_and_start_in_one_poll() {
        let mut c = Controller::new(TimerConfig::default());
        let input = press(Button::Normal).with(Button::Start);
        let step = c.step(&input, Millis(0));

        assert_eq!(c.state(), State::Running);
        assert_eq!(c.remaining_minutes(), Some(120));
        assert_eq!(step.events.len(), 2);
        assert_eq!(step.events[1], Event::CountdownStarted { minutes: 120 });
    }

    #[test]
    fn test_buttons_ignored_while_running() {
        let mut c = Controller::new(TimerConfig::default());
        c.step(&press(Button::Normal).with(Button::Start), Millis(0));

        let step = c.step(&press(Button::Eco).with(Button::Start), Millis(10));
        assert!(step.events.is_empty());
        assert_eq!(c.selected_duration(), Millis::from_minutes(120));
        assert_eq!(c.remaining_minutes(), Some(120));
    }

    #[test]
    fn test_running_to_finished() {
        let mut c = Controller::new(TimerConfig::default());
        c.step(&press(Button::Quickwash), Millis(0));
        c.step(&press(Button::Start), Millis(100));
        assert_eq!(c.state(), State::Running);

        let step = c.step(&idle(), Millis(60_100));
        assert_eq!(
            step.events.as_slice(),
            &[Event::MinuteElapsed { remaining: 0 }, Event::CountdownFinished]
        );
        assert_eq!(c.state(), State::Finished);
        assert_eq!(step.frame, Some(Frame::Glyph(DONE)));
    }

    #[test]
    fn test_acknowledge_returns_to_idle_blank() {
        let mut c = Controller::new(TimerConfig::default());
        c.step(&press(Button::Quickwash).with(Button::Start), Millis(0));
        c.step(&idle(), Millis(60_000));
        assert_eq!(c.state(), State::Finished);

        // Start does not acknowledge
        c.step(&press(Button::Start), Millis(60_100));
        assert_eq!(c.state(), State::Finished);

        let step = c.step(&press(Button::Eco), Millis(60_200));
        assert_eq!(step.events.as_slice(), &[Event::CompletionAcknowledged]);
        assert_eq!(step.frame, Some(Frame::Blank));
        assert_eq!(c.state(), State::Idle);

        // Still held on the next poll: latched as a new selection
        let step = c.step(&press(Button::Eco), Millis(60_210));
        assert_eq!(c.selected_duration(), Millis::from_minutes(180));
        assert_eq!(step.frame, Some(Frame::Number { value: 300, colon: true }));
    }

    #[test]
    fn test_selection_survives_completed_run() {
        let mut c = Controller::new(TimerConfig::default());
        c.step(&press(Button::Quickwash).with(Button::Start), Millis(0));
        c.step(&idle(), Millis(60_000));
        c.step(&press(Button::Quickwash), Millis(60_500));
        c.step(&idle(), Millis(61_000));

        let step = c.step(&press(Button::Start), Millis(62_000));
        assert_eq!(step.events.as_slice(), &[Event::CountdownStarted { minutes: 1 }]);
    }

    #[test]
    fn test_delay_latched_but_not_armed() {
        let mut c = Controller::new(TimerConfig::default());

        let step = c.step(&press(Button::EightHourTimer), Millis(0));
        assert_eq!(c.selected_delay(), Millis::from_hours(8));
        assert_eq!(step.frame, Some(Frame::Number { value: 800, colon: true }));

        // Delay alone never starts a countdown
        c.step(&press(Button::Start), Millis(10));
        assert_eq!(c.state(), State::Idle);
    }

    #[test]
    fn test_combined_delay_priority() {
        let both = press(Button::TwoHourTimer).with(Button::FourHourTimer);

        let mut c = Controller::new(TimerConfig::default());
        c.step(&both, Millis(0));
        assert_eq!(c.selected_delay(), Millis::from_minutes(120));

        let mut config = TimerConfig::default();
        config.delay.priority = DelayPriority::CombinedFirst;
        let mut c = Controller::new(config);
        c.step(&both, Millis(0));
        assert_eq!(c.selected_delay(), Millis::from_minutes(360));
    }

    #[test]
    fn test_wash_preview_wins_over_delay() {
        let mut c = Controller::new(TimerConfig::default());
        let step = c.step(&press(Button::Intensive).with(Button::TwoHourTimer), Millis(0));
        assert_eq!(step.frame, Some(Frame::Number { value: 220, colon: true }));
        assert_eq!(c.selected_delay(), Millis::ZERO);
    }

    #[test]
    fn test_full_cycle_stays_within_event_capacity() {
        let mut c = Controller::new(TimerConfig::default());
        let polls = [
            (press(Button::Quickwash).with(Button::Start), 0),
            (idle(), 30_000),
            (idle(), 60_000),
            (press(Button::Glass).with(Button::TwoHourTimer), 60_500),
            (press(Button::Glass).with(Button::Start), 61_000),
        ];

        let mut total = 0;
        for (input, at) in polls {
            let step = c.step(&input, Millis(at));
            assert!(step.events.len() <= 2);
            total += step.events.len();
        }
        // Select, start, minute, finish, acknowledge, select, start
        assert_eq!(total, 7);
        assert_eq!(c.state(), State::Running);
    }
}
