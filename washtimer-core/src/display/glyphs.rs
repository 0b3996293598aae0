//! Segment bit assignments and fixed glyphs
//!
//! ```text
//!    -A-
//!   F   B
//!    -G-
//!   E   C
//!    -D-   .DP
//! ```

use super::{Cells, DIGITS};

pub const SEG_A: u8 = 0b0000_0001;
pub const SEG_B: u8 = 0b0000_0010;
pub const SEG_C: u8 = 0b0000_0100;
pub const SEG_D: u8 = 0b0000_1000;
pub const SEG_E: u8 = 0b0001_0000;
pub const SEG_F: u8 = 0b0010_0000;
pub const SEG_G: u8 = 0b0100_0000;
/// Decimal point, wired to the colon on clock-style modules
pub const SEG_DP: u8 = 0b1000_0000;

/// Patterns for the decimal digits 0-9
pub const DIGIT_GLYPHS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,
    SEG_B | SEG_C | SEG_F | SEG_G,
    SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
];

/// "dOnE"
pub const DONE: Cells = [
    SEG_B | SEG_C | SEG_D | SEG_E | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_C | SEG_E | SEG_G,
    SEG_A | SEG_D | SEG_E | SEG_F | SEG_G,
];

/// Pattern for a single decimal digit
pub fn encode_digit(digit: u8) -> u8 {
    DIGIT_GLYPHS[(digit % 10) as usize]
}

/// Cell patterns for a right-aligned decimal number
///
/// Zeros left of the most significant digit are blank unless
/// `leading_zero` is set; zero itself shows as a single `0`. Bit `7 - i`
/// of `dots` lights the decimal point of cell `i`. Values above 9999 keep
/// their lowest four digits.
pub fn encode_number(value: u16, dots: u8, leading_zero: bool) -> Cells {
    let mut cells = [0u8; DIGITS];
    let mut num = value;

    for i in (0..DIGITS).rev() {
        let digit = (num % 10) as u8;
        cells[i] = if num == 0 && !leading_zero && i != DIGITS - 1 {
            0
        } else {
            encode_digit(digit)
        };
        num /= 10;
    }

    for (i, cell) in cells.iter_mut().enumerate() {
        if dots & (0x80 >> i) != 0 {
            *cell |= SEG_DP;
        }
    }

    cells
}
