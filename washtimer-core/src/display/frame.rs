//! Display frames
//!
//! Times are shown as `H:MM` packed into a decimal number
//! (`hours * 100 + minutes`, so 1h05 shows as `1:05`). Below one hour only
//! the minutes are shown.

use super::glyphs::{encode_number, DONE};
use super::{Cells, DisplayError, SegmentDisplay, COLON_DOTS, DIGITS};
use crate::time::Millis;

/// Largest value four digits can show
const MAX_DISPLAY_VALUE: u32 = 9999;

/// Pack whole minutes as `hours * 100 + minutes`
///
/// Saturates at 99:99 for durations the display cannot show.
pub fn compose_hmm(total_minutes: u32) -> u16 {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    (hours.saturating_mul(100).saturating_add(minutes)).min(MAX_DISPLAY_VALUE) as u16
}

/// One complete display update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// Decimal number with the colon on or off
    Number { value: u16, colon: bool },
    /// Raw segment patterns
    Glyph(Cells),
    /// Every cell dark
    Blank,
}

impl Frame {
    /// Frame for a duration, truncated to whole minutes
    pub fn duration(duration: Millis, colon: bool) -> Self {
        Self::minutes(duration.whole_minutes(), colon)
    }

    /// Frame for a count of whole minutes
    pub fn minutes(total_minutes: u32, colon: bool) -> Self {
        Frame::Number {
            value: compose_hmm(total_minutes),
            colon,
        }
    }

    /// The "dOnE" completion glyph
    pub const fn done() -> Self {
        Frame::Glyph(DONE)
    }

    /// Segment patterns this frame lights
    pub fn cells(&self) -> Cells {
        match *self {
            Frame::Number { value, colon } => {
                encode_number(value, if colon { COLON_DOTS } else { 0 }, false)
            }
            Frame::Glyph(cells) => cells,
            Frame::Blank => [0; DIGITS],
        }
    }

    /// Write this frame to a display
    pub fn draw<D: SegmentDisplay + ?Sized>(&self, display: &mut D) -> Result<(), DisplayError> {
        match *self {
            Frame::Number { value, colon } => {
                display.show_number_dec_ex(value, if colon { COLON_DOTS } else { 0 }, false)
            }
            Frame::Glyph(cells) => display.set_segments(&cells),
            Frame::Blank => display.clear(),
        }
    }
}
