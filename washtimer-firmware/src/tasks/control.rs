//! Control loop
//!
//! Polls the application at a fixed period. All countdown timing comes
//! from `Instant::now()`, so the period only sets input latency.

use defmt::*;
use embassy_rp::gpio::{Input, OutputOpenDrain};
use embassy_time::{Delay, Duration, Instant, Ticker};

use washtimer_core::state::Event;
use washtimer_core::{App, Millis};
use washtimer_drivers::{ButtonBank, Tm1637};

/// Poll interval in milliseconds
pub const POLL_INTERVAL_MS: u64 = 10;

/// Display as wired on the board
pub type BoardDisplay = Tm1637<OutputOpenDrain<'static>, OutputOpenDrain<'static>, Delay>;

/// Buttons as wired on the board
pub type BoardButtons = ButtonBank<Input<'static>>;

/// Run the timer forever
pub async fn run(mut app: App<BoardButtons, BoardDisplay>) -> ! {
    info!("Control loop started");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    let mut display_ok = true;

    loop {
        ticker.next().await;

        let now = Millis(Instant::now().as_millis());
        let step = match app.poll(now) {
            Ok(step) => {
                if !display_ok {
                    info!("Display writes recovered");
                    display_ok = true;
                }
                step
            }
            Err(e) => {
                // Report once per outage, the loop keeps running
                if display_ok {
                    warn!("Display write failed: {:?}", e.error);
                    display_ok = false;
                }
                e.step
            }
        };

        for event in step.events.iter() {
            log_event(event);
        }
    }
}

fn log_event(event: &Event) {
    match *event {
        Event::ProgramSelected(program, duration) => {
            info!("Wash program {:?}: {} min", program, duration.whole_minutes());
        }
        Event::DelaySelected(timer, delay) => {
            info!("Delay timer {:?}: {} min", timer, delay.whole_minutes());
        }
        Event::CountdownStarted { minutes } => {
            info!("Countdown started: {} min", minutes);
        }
        Event::MinuteElapsed { remaining } => {
            debug!("{} min remaining", remaining);
        }
        Event::CountdownFinished => {
            info!("Wash finished");
        }
        Event::CompletionAcknowledged => {
            info!("Completion acknowledged");
        }
    }
}
