//! Button inputs
//!
//! Every button is wired active-low with an internal pull-up. An input
//! source reports the instantaneous level of all buttons as one
//! [`InputSnapshot`] per loop iteration. There is no debouncing and no edge
//! detection: a held button shows up in every snapshot.

/// Number of physical buttons
pub const BUTTON_COUNT: usize = 9;

/// Physical buttons, in wiring order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Intensive wash program
    Intensive,
    /// Normal wash program
    Normal,
    /// ECO wash program
    Eco,
    /// Glass wash program
    Glass,
    /// Quick wash program
    Quickwash,
    /// 2 hour delay timer
    TwoHourTimer,
    /// 4 hour delay timer
    FourHourTimer,
    /// 8 hour delay timer
    EightHourTimer,
    /// Start button
    Start,
}

impl Button {
    /// All buttons, in wiring order
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::Intensive,
        Button::Normal,
        Button::Eco,
        Button::Glass,
        Button::Quickwash,
        Button::TwoHourTimer,
        Button::FourHourTimer,
        Button::EightHourTimer,
        Button::Start,
    ];

    const fn mask(self) -> u16 {
        1 << (self as u16)
    }

    /// Check if this button selects a wash program
    pub fn is_wash(self) -> bool {
        matches!(
            self,
            Button::Intensive | Button::Normal | Button::Eco | Button::Glass | Button::Quickwash
        )
    }

    /// Check if this button selects a delay timer
    pub fn is_timer(self) -> bool {
        matches!(
            self,
            Button::TwoHourTimer | Button::FourHourTimer | Button::EightHourTimer
        )
    }
}

/// Set of buttons held down at the moment of sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSnapshot {
    pressed: u16,
}

impl InputSnapshot {
    /// Snapshot with nothing pressed
    pub const fn released() -> Self {
        Self { pressed: 0 }
    }

    /// Build a snapshot from raw pin levels in wiring order
    ///
    /// `low[i]` is true when the pin of `Button::ALL[i]` reads low.
    pub fn from_levels(low: [bool; BUTTON_COUNT]) -> Self {
        let mut snapshot = Self::released();
        for (button, is_low) in Button::ALL.iter().zip(low) {
            if is_low {
                snapshot.press(*button);
            }
        }
        snapshot
    }

    /// Builder-style helper that marks a button as pressed
    pub fn with(mut self, button: Button) -> Self {
        self.press(button);
        self
    }

    /// Mark a button as pressed
    pub fn press(&mut self, button: Button) {
        self.pressed |= button.mask();
    }

    /// Check a single button
    pub fn is_pressed(&self, button: Button) -> bool {
        self.pressed & button.mask() != 0
    }

    /// Check if any wash program button is pressed
    pub fn any_wash_pressed(&self) -> bool {
        Button::ALL
            .iter()
            .any(|b| b.is_wash() && self.is_pressed(*b))
    }

    /// Check if any delay timer button is pressed
    pub fn any_timer_pressed(&self) -> bool {
        Button::ALL
            .iter()
            .any(|b| b.is_timer() && self.is_pressed(*b))
    }

    /// Check if the start button is pressed
    pub fn start_pressed(&self) -> bool {
        self.is_pressed(Button::Start)
    }
}

/// Source of button snapshots
///
/// Implemented by the GPIO button bank on hardware and by scripted
/// sources in tests.
pub trait InputSource {
    /// Read the current level of every button
    fn sample(&mut self) -> InputSnapshot;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_snapshot() {
        let s = InputSnapshot::released();
        assert!(!s.any_wash_pressed());
        assert!(!s.any_timer_pressed());
        assert!(!s.start_pressed());
    }

    #[test]
    fn test_from_levels_maps_wiring_order() {
        let mut low = [false; BUTTON_COUNT];
        low[2] = true; // ECO
        low[8] = true; // Start
        let s = InputSnapshot::from_levels(low);

        assert!(s.is_pressed(Button::Eco));
        assert!(s.start_pressed());
        assert!(s.any_wash_pressed());
        assert!(!s.any_timer_pressed());
        assert!(!s.is_pressed(Button::Intensive));
    }

    #[test]
    fn test_group_queries() {
        let timer = InputSnapshot::released().with(Button::EightHourTimer);
        assert!(timer.any_timer_pressed());
        assert!(!timer.any_wash_pressed());
        assert!(!timer.start_pressed());

        let wash = InputSnapshot::released().with(Button::Quickwash);
        assert!(wash.any_wash_pressed());
        assert!(!wash.any_timer_pressed());
    }

    #[test]
    fn test_every_button_is_in_exactly_one_group() {
        for b in Button::ALL {
            let groups = [b.is_wash(), b.is_timer(), b == Button::Start];
            assert_eq!(groups.iter().filter(|g| **g).count(), 1);
        }
    }
}
