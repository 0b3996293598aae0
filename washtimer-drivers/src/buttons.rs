//! Push button bank
//!
//! Nine momentary buttons to ground, each on a GPIO with the internal
//! pull-up enabled. A pressed button reads low.

use embedded_hal::digital::InputPin;

use washtimer_core::input::{InputSnapshot, InputSource, BUTTON_COUNT};

/// All buttons of the front panel
///
/// Pins are given in wiring order: the five wash programs (Intensive,
/// Normal, ECO, Glass, Quickwash), the 2h, 4h and 8h delay timers, then
/// Start. This is the order of [`washtimer_core::input::Button::ALL`].
pub struct ButtonBank<P> {
    pins: [P; BUTTON_COUNT],
}

impl<P: InputPin> ButtonBank<P> {
    /// Create a bank from pins in wiring order
    pub fn new(pins: [P; BUTTON_COUNT]) -> Self {
        Self { pins }
    }
}

impl<P: InputPin> InputSource for ButtonBank<P> {
    fn sample(&mut self) -> InputSnapshot {
        let mut low = [false; BUTTON_COUNT];
        for (level, pin) in low.iter_mut().zip(self.pins.iter_mut()) {
            // A pin that cannot be read counts as released
            *level = pin.is_low().unwrap_or(false);
        }
        InputSnapshot::from_levels(low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use washtimer_core::input::Button;

    /// Mock input pin
    #[derive(Clone, Copy)]
    enum MockPin {
        High,
        Low,
        Broken,
    }

    impl ErrorType for MockPin {
        type Error = ErrorKind;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.is_low().map(|low| !low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            match self {
                MockPin::High => Ok(false),
                MockPin::Low => Ok(true),
                MockPin::Broken => Err(ErrorKind::Other),
            }
        }
    }

    #[test]
    fn test_nothing_pressed() {
        let mut bank = ButtonBank::new([MockPin::High; BUTTON_COUNT]);
        assert_eq!(bank.sample(), InputSnapshot::released());
    }

    #[test]
    fn test_low_pins_are_pressed() {
        let mut pins = [MockPin::High; BUTTON_COUNT];
        pins[3] = MockPin::Low;
        pins[8] = MockPin::Low;
        let mut bank = ButtonBank::new(pins);

        let snapshot = bank.sample();
        assert!(snapshot.is_pressed(Button::Glass));
        assert!(snapshot.start_pressed());
        assert!(!snapshot.is_pressed(Button::Eco));
        assert!(!snapshot.any_timer_pressed());
    }

    #[test]
    fn test_read_error_counts_as_released() {
        let mut pins = [MockPin::High; BUTTON_COUNT];
        pins[0] = MockPin::Broken;
        pins[6] = MockPin::Low;
        let mut bank = ButtonBank::new(pins);

        let snapshot = bank.sample();
        assert!(!snapshot.is_pressed(Button::Intensive));
        assert!(snapshot.is_pressed(Button::FourHourTimer));
    }
}
