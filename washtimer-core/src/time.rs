//! Millisecond time type
//!
//! All timing is tracked as milliseconds since an arbitrary monotonic epoch
//! (device boot on the firmware). A 64-bit counter does not wrap within the
//! lifetime of the device.

use core::ops::{Add, AddAssign, Sub};

/// Milliseconds per second
pub const MS_PER_SECOND: u64 = 1_000;

/// Milliseconds per minute
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;

/// Milliseconds per hour
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// A duration or instant with millisecond resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u64);

impl Millis {
    /// Zero milliseconds ("nothing selected" for durations)
    pub const ZERO: Self = Self(0);

    /// Create from whole minutes
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes as u64 * MS_PER_MINUTE)
    }

    /// Create from whole hours
    pub const fn from_hours(hours: u32) -> Self {
        Self(hours as u64 * MS_PER_HOUR)
    }

    /// Raw millisecond count
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Whole minutes, truncating any remainder
    pub const fn whole_minutes(self) -> u32 {
        (self.0 / MS_PER_MINUTE) as u32
    }

    /// Check for the zero duration
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Time elapsed from `earlier` to `self`, zero if `earlier` is later
    pub const fn since(self, earlier: Millis) -> Millis {
        Millis(self.0.saturating_sub(earlier.0))
    }
}

impl Add for Millis {
    type Output = Millis;

    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Millis {
    fn add_assign(&mut self, rhs: Millis) {
        *self = *self + rhs;
    }
}

impl Sub for Millis {
    type Output = Millis;

    fn sub(self, rhs: Millis) -> Millis {
        self.since(rhs)
    }
}
