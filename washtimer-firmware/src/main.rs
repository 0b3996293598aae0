//! Washtimer - Dishwasher Timer Firmware
//!
//! Firmware binary for RP2040-based dishwasher timer panels. Nine push
//! buttons select a wash program or a delay timer and start the
//! countdown; a TM1637 display shows the remaining time as H:MM.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, OutputOpenDrain, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use washtimer_core::App;
use washtimer_drivers::{ButtonBank, Tm1637};

mod config;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit timer.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../timer.toml");

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Dishwasher timer starting...");

    let p = embassy_rp::init(Default::default());
    debug!("Peripherals initialized");

    let config = config::load(EMBEDDED_CONFIG);

    // Display bus: GPIO0 = CLK, GPIO1 = DIO, released until driven
    let clk = OutputOpenDrain::new(p.PIN_0, Level::High);
    let dio = OutputOpenDrain::new(p.PIN_1, Level::High);
    let display = Tm1637::new(clk, dio, Delay, config.display.bit_delay_us);

    // Front panel buttons, active low, in wiring order
    let buttons = ButtonBank::new([
        Input::new(p.PIN_2, Pull::Up),  // Intensive
        Input::new(p.PIN_3, Pull::Up),  // Normal
        Input::new(p.PIN_4, Pull::Up),  // ECO
        Input::new(p.PIN_5, Pull::Up),  // Glass
        Input::new(p.PIN_6, Pull::Up),  // Quickwash
        Input::new(p.PIN_7, Pull::Up),  // 2h timer
        Input::new(p.PIN_8, Pull::Up),  // 4h timer
        Input::new(p.PIN_9, Pull::Up),  // 8h timer
        Input::new(p.PIN_10, Pull::Up), // Start
    ]);

    let mut app = App::new(buttons, display, config);
    if let Err(e) = app.init() {
        warn!("Display init failed: {:?}", e);
    }

    info!("Dishwasher timer ready!");
    info!("Waiting for input...");

    tasks::control::run(app).await
}
