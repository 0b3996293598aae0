//! Configuration type definitions
//!
//! Durations are configured in whole minutes. The defaults reproduce the
//! factory duration table.

use crate::time::Millis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest brightness step supported by the display
pub const MAX_BRIGHTNESS: u8 = 7;

/// Order in which the delay timer buttons are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DelayPriority {
    /// 2h, 4h, 2h+4h, 8h. The combination is shadowed by the single 2h
    /// button and can never be selected.
    #[default]
    Source,
    /// 2h+4h first, then 2h, 4h, 8h. Holding both buttons selects the
    /// combined delay.
    CombinedFirst,
}

/// Wash program durations (minutes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct WashTable {
    pub intensive_min: u32,
    pub normal_min: u32,
    pub eco_min: u32,
    pub glass_min: u32,
    /// Nominally 30 minutes; shipped as 1 minute for bench testing
    pub quickwash_min: u32,
}

impl Default for WashTable {
    fn default() -> Self {
        Self {
            intensive_min: 140,
            normal_min: 120,
            eco_min: 180,
            glass_min: 75,
            quickwash_min: 1,
        }
    }
}

/// Delay timer durations (minutes) and lookup order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DelayTable {
    pub two_hour_min: u32,
    pub four_hour_min: u32,
    /// Selected by holding the 2h and 4h buttons together
    pub combined_min: u32,
    pub eight_hour_min: u32,
    pub priority: DelayPriority,
}

impl Default for DelayTable {
    fn default() -> Self {
        Self {
            two_hour_min: 2 * 60,
            four_hour_min: 4 * 60,
            combined_min: 6 * 60,
            eight_hour_min: 8 * 60,
            priority: DelayPriority::Source,
        }
    }
}

/// Display timing and bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DisplayConfig {
    /// Brightness step (0-7)
    pub brightness: u8,
    /// Colon toggle period while counting down
    pub blink_interval_ms: u32,
    /// Period of each "done"/blank frame in the completion sequence
    pub flash_interval_ms: u32,
    /// Half clock period on the two-wire display bus
    pub bit_delay_us: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            brightness: MAX_BRIGHTNESS,
            blink_interval_ms: 1000,
            flash_interval_ms: 500,
            bit_delay_us: 100,
        }
    }
}

impl DisplayConfig {
    /// Colon blink period
    pub fn blink_interval(&self) -> Millis {
        Millis(self.blink_interval_ms as u64)
    }

    /// Completion flash period
    pub fn flash_interval(&self) -> Millis {
        Millis(self.flash_interval_ms as u64)
    }
}

/// Complete timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TimerConfig {
    pub wash: WashTable,
    pub delay: DelayTable,
    pub display: DisplayConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A wash or delay duration is zero minutes
    ZeroDuration,
    /// A blink or flash interval is zero
    ZeroInterval,
    /// Brightness above [`MAX_BRIGHTNESS`]
    BrightnessOutOfRange,
}

impl TimerConfig {
    /// Check the configuration for values the controller cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.wash;
        let d = &self.delay;
        let durations = [
            w.intensive_min,
            w.normal_min,
            w.eco_min,
            w.glass_min,
            w.quickwash_min,
            d.two_hour_min,
            d.four_hour_min,
            d.combined_min,
            d.eight_hour_min,
        ];
        if durations.contains(&0) {
            return Err(ConfigError::ZeroDuration);
        }

        if self.display.blink_interval_ms == 0 || self.display.flash_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        if self.display.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::BrightnessOutOfRange);
        }

        Ok(())
    }
}
