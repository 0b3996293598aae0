//! Four-digit seven-segment display
//!
//! The display is written only by the application step. Drivers implement
//! [`SegmentDisplay`]; the controller describes what to show as a
//! [`Frame`].

pub mod frame;
pub mod glyphs;

pub use frame::{compose_hmm, Frame};

/// Number of digit cells
pub const DIGITS: usize = 4;

/// Raw segment pattern for all four cells
pub type Cells = [u8; DIGITS];

/// Dot mask that lights the colon (bit 7 of the second cell)
pub const COLON_DOTS: u8 = 0b0100_0000;

/// Errors that can occur writing to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// A bus line could not be driven
    Bus,
}

/// Trait for a four-digit seven-segment display
///
/// Writes are fire-and-forget: the peripheral does not acknowledge frames.
pub trait SegmentDisplay {
    /// Show a decimal number, right aligned
    ///
    /// - `value`: 0-9999
    /// - `dots`: one bit per cell, MSB is the leftmost cell
    /// - `leading_zero`: pad with zeros instead of blanks
    fn show_number_dec_ex(
        &mut self,
        value: u16,
        dots: u8,
        leading_zero: bool,
    ) -> Result<(), DisplayError>;

    /// Write raw segment patterns to all four cells
    fn set_segments(&mut self, cells: &Cells) -> Result<(), DisplayError>;

    /// Blank every cell
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.set_segments(&[0; DIGITS])
    }

    /// Set brightness (0-7) and switch the display on or off
    fn set_brightness(&mut self, level: u8, on: bool) -> Result<(), DisplayError>;
}
