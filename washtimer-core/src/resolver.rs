//! Button combination to duration lookup
//!
//! Conflicting presses are resolved by a fixed priority order; no error is
//! raised when several buttons of a group are held at once.

use crate::config::{DelayPriority, DelayTable, WashTable};
use crate::input::{Button, InputSnapshot};
use crate::time::Millis;

/// Wash programs, in lookup priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WashProgram {
    Intensive,
    Normal,
    Eco,
    Glass,
    Quickwash,
}

impl WashProgram {
    /// All programs, highest priority first
    pub const PRIORITY: [WashProgram; 5] = [
        WashProgram::Intensive,
        WashProgram::Normal,
        WashProgram::Eco,
        WashProgram::Glass,
        WashProgram::Quickwash,
    ];

    /// Button that selects this program
    pub fn button(self) -> Button {
        match self {
            WashProgram::Intensive => Button::Intensive,
            WashProgram::Normal => Button::Normal,
            WashProgram::Eco => Button::Eco,
            WashProgram::Glass => Button::Glass,
            WashProgram::Quickwash => Button::Quickwash,
        }
    }

    /// Program length from the configured table
    pub fn duration(self, table: &WashTable) -> Millis {
        let minutes = match self {
            WashProgram::Intensive => table.intensive_min,
            WashProgram::Normal => table.normal_min,
            WashProgram::Eco => table.eco_min,
            WashProgram::Glass => table.glass_min,
            WashProgram::Quickwash => table.quickwash_min,
        };
        Millis::from_minutes(minutes)
    }

    /// First pressed program in priority order
    pub fn detect(input: &InputSnapshot) -> Option<WashProgram> {
        Self::PRIORITY
            .into_iter()
            .find(|p| input.is_pressed(p.button()))
    }
}

/// Delay timer selections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DelayTimer {
    TwoHours,
    FourHours,
    /// 2h and 4h buttons held together
    SixHours,
    EightHours,
}

impl DelayTimer {
    /// Delay length from the configured table
    pub fn duration(self, table: &DelayTable) -> Millis {
        let minutes = match self {
            DelayTimer::TwoHours => table.two_hour_min,
            DelayTimer::FourHours => table.four_hour_min,
            DelayTimer::SixHours => table.combined_min,
            DelayTimer::EightHours => table.eight_hour_min,
        };
        Millis::from_minutes(minutes)
    }

    /// First matching delay for the given lookup order
    ///
    /// With [`DelayPriority::Source`] the combined check comes after the
    /// single 2h and 4h checks, so [`DelayTimer::SixHours`] is never
    /// returned.
    pub fn detect(input: &InputSnapshot, priority: DelayPriority) -> Option<DelayTimer> {
        let two = input.is_pressed(Button::TwoHourTimer);
        let four = input.is_pressed(Button::FourHourTimer);
        let eight = input.is_pressed(Button::EightHourTimer);

        match priority {
            DelayPriority::Source => {
                if two {
                    Some(DelayTimer::TwoHours)
                } else if four {
                    Some(DelayTimer::FourHours)
                } else if two && four {
                    Some(DelayTimer::SixHours)
                } else if eight {
                    Some(DelayTimer::EightHours)
                } else {
                    None
                }
            }
            DelayPriority::CombinedFirst => {
                if two && four {
                    Some(DelayTimer::SixHours)
                } else if two {
                    Some(DelayTimer::TwoHours)
                } else if four {
                    Some(DelayTimer::FourHours)
                } else if eight {
                    Some(DelayTimer::EightHours)
                } else {
                    None
                }
            }
        }
    }
}

/// Duration of the highest priority pressed wash program, zero if none
pub fn resolve_wash_duration(input: &InputSnapshot, table: &WashTable) -> Millis {
    WashProgram::detect(input)
        .map(|p| p.duration(table))
        .unwrap_or(Millis::ZERO)
}

/// Duration of the matching delay timer, zero if none
pub fn resolve_delay_duration(input: &InputSnapshot, table: &DelayTable) -> Millis {
    DelayTimer::detect(input, table.priority)
        .map(|d| d.duration(table))
        .unwrap_or(Millis::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(buttons: &[Button]) -> InputSnapshot {
        buttons
            .iter()
            .fold(InputSnapshot::released(), |s, b| s.with(*b))
    }

    #[test]
    fn test_wash_table_values() {
        let table = WashTable::default();
        let cases = [
            (Button::Intensive, 140 * 60_000),
            (Button::Normal, 120 * 60_000),
            (Button::Eco, 180 * 60_000),
            (Button::Glass, 75 * 60_000),
            (Button::Quickwash, 60_000),
        ];

        for (button, ms) in cases {
            assert_eq!(resolve_wash_duration(&pressed(&[button]), &table), Millis(ms));
        }
    }

    #[test]
    fn test_no_wash_button_is_zero() {
        let table = WashTable::default();
        assert_eq!(resolve_wash_duration(&InputSnapshot::released(), &table), Millis::ZERO);

        // Timer and start buttons do not select a wash program
        let other = pressed(&[Button::TwoHourTimer, Button::Start]);
        assert_eq!(resolve_wash_duration(&other, &table), Millis::ZERO);
    }

    #[test]
    fn test_wash_priority_order() {
        let s = pressed(&[Button::Quickwash, Button::Eco, Button::Normal]);
        assert_eq!(WashProgram::detect(&s), Some(WashProgram::Normal));

        let s = pressed(&[Button::Glass, Button::Intensive]);
        assert_eq!(WashProgram::detect(&s), Some(WashProgram::Intensive));
    }

    #[test]
    fn test_delay_table_values() {
        let table = DelayTable::default();
        let cases = [
            (Button::TwoHourTimer, 2),
            (Button::FourHourTimer, 4),
            (Button::EightHourTimer, 8),
        ];

        for (button, hours) in cases {
            assert_eq!(
                resolve_delay_duration(&pressed(&[button]), &table),
                Millis::from_hours(hours)
            );
        }
        assert_eq!(
            resolve_delay_duration(&InputSnapshot::released(), &table),
            Millis::ZERO
        );
    }

    #[test]
    fn test_combined_delay_shadowed_in_source_order() {
        let table = DelayTable::default();
        let both = pressed(&[Button::TwoHourTimer, Button::FourHourTimer]);

        assert_eq!(DelayTimer::detect(&both, DelayPriority::Source), Some(DelayTimer::TwoHours));
        assert_eq!(resolve_delay_duration(&both, &table), Millis::from_minutes(120));
    }

    #[test]
    fn test_combined_delay_when_checked_first() {
        let table = DelayTable {
            priority: DelayPriority::CombinedFirst,
            ..DelayTable::default()
        };
        let both = pressed(&[Button::TwoHourTimer, Button::FourHourTimer]);
        assert_eq!(resolve_delay_duration(&both, &table), Millis::from_minutes(360));

        // Single buttons behave the same in both orders
        let four = pressed(&[Button::FourHourTimer]);
        assert_eq!(resolve_delay_duration(&four, &table), Millis::from_hours(4));
        let eight = pressed(&[Button::EightHourTimer, Button::FourHourTimer]);
        assert_eq!(resolve_delay_duration(&eight, &table), Millis::from_hours(4));
    }
}
