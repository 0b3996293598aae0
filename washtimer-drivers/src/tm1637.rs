//! TM1637 four-digit display driver
//!
//! The TM1637 talks a two-wire synchronous protocol that looks like I2C
//! but has no device address and sends bytes LSB first. Both lines are
//! open-drain with pull-ups: "high" means the line is released.
//!
//! # Bus protocol
//!
//! - Start: DIO falls while CLK is high
//! - Stop: DIO rises while CLK is high
//! - Each byte is 8 data clocks (LSB first) plus a ninth ACK clock
//!
//! A full frame update is three transactions:
//!
//! 1. `0x40` data command, auto-increment addressing
//! 2. `0xC0 + pos` address command followed by the segment bytes
//! 3. `0x80 | on | brightness` display control
//!
//! The ACK clock is generated but the ACK bit is not read. Writes are
//! fire-and-forget; only a pin that cannot be driven is reported.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use washtimer_core::config::MAX_BRIGHTNESS;
use washtimer_core::display::glyphs::encode_number;
use washtimer_core::display::{Cells, DisplayError, SegmentDisplay, DIGITS};

/// TM1637 commands
pub mod cmd {
    /// Write data, auto-increment address
    pub const DATA_AUTO_INCREMENT: u8 = 0x40;
    /// Set address (OR with the start cell)
    pub const ADDRESS: u8 = 0xC0;
    /// Display control (OR with on flag and brightness)
    pub const DISPLAY_CONTROL: u8 = 0x80;
    /// Display on flag for the control command
    pub const DISPLAY_ON: u8 = 0x08;
}

/// Default half-period of the bus clock in microseconds
pub const DEFAULT_BIT_DELAY_US: u32 = 100;

/// Build the display control byte
pub fn control_byte(level: u8, on: bool) -> u8 {
    let on = if on { cmd::DISPLAY_ON } else { 0 };
    cmd::DISPLAY_CONTROL | on | level.min(MAX_BRIGHTNESS)
}

/// TM1637 display on two bit-banged lines
///
/// Both lines must be released (high) when handed to [`Tm1637::new`].
/// Brightness changes take effect with the next segment write.
pub struct Tm1637<CLK, DIO, D> {
    clk: CLK,
    dio: DIO,
    delay: D,
    bit_delay_us: u32,
    /// Display control byte sent after every segment write
    control: u8,
}

impl<CLK, DIO, D> Tm1637<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin,
    D: DelayNs,
{
    /// Create a driver at full brightness
    pub fn new(clk: CLK, dio: DIO, delay: D, bit_delay_us: u32) -> Self {
        Self {
            clk,
            dio,
            delay,
            bit_delay_us,
            control: control_byte(MAX_BRIGHTNESS, true),
        }
    }

    /// Write segment bytes starting at cell `pos`
    pub fn write_cells(&mut self, pos: u8, cells: &[u8]) -> Result<(), DisplayError> {
        self.start()?;
        self.write_byte(cmd::DATA_AUTO_INCREMENT)?;
        self.stop()?;

        self.start()?;
        self.write_byte(cmd::ADDRESS | (pos & 0x03))?;
        for &cell in cells.iter().take(DIGITS) {
            self.write_byte(cell)?;
        }
        self.stop()?;

        self.start()?;
        self.write_byte(self.control)?;
        self.stop()
    }

    fn bit_delay(&mut self) {
        self.delay.delay_us(self.bit_delay_us);
    }

    fn clk(&mut self, high: bool) -> Result<(), DisplayError> {
        let res = if high {
            self.clk.set_high()
        } else {
            self.clk.set_low()
        };
        res.map_err(|_| DisplayError::Bus)
    }

    fn dio(&mut self, high: bool) -> Result<(), DisplayError> {
        let res = if high {
            self.dio.set_high()
        } else {
            self.dio.set_low()
        };
        res.map_err(|_| DisplayError::Bus)
    }

    fn start(&mut self) -> Result<(), DisplayError> {
        self.dio(false)?;
        self.bit_delay();
        Ok(())
    }

    fn stop(&mut self) -> Result<(), DisplayError> {
        self.dio(false)?;
        self.bit_delay();
        self.clk(true)?;
        self.bit_delay();
        self.dio(true)?;
        self.bit_delay();
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        for bit in 0..8 {
            self.clk(false)?;
            self.bit_delay();
            self.dio(byte & (1 << bit) != 0)?;
            self.bit_delay();
            self.clk(true)?;
            self.bit_delay();
        }

        // ACK clock; the device pulls DIO low, which is not checked
        self.clk(false)?;
        self.dio(true)?;
        self.bit_delay();
        self.clk(true)?;
        self.bit_delay();
        self.clk(false)?;
        self.bit_delay();
        Ok(())
    }
}

impl<CLK, DIO, D> SegmentDisplay for Tm1637<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin,
    D: DelayNs,
{
    fn show_number_dec_ex(
        &mut self,
        value: u16,
        dots: u8,
        leading_zero: bool,
    ) -> Result<(), DisplayError> {
        let cells = encode_number(value, dots, leading_zero);
        self.write_cells(0, &cells)
    }

    fn set_segments(&mut self, cells: &Cells) -> Result<(), DisplayError> {
        self.write_cells(0, cells)
    }

    fn set_brightness(&mut self, level: u8, on: bool) -> Result<(), DisplayError> {
        self.control = control_byte(level, on);
        Ok(())
    }
}
