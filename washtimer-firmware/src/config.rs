//! Configuration loading
//!
//! Parses the embedded timer.toml with the no_std parser from
//! washtimer-core. On any error the timer runs on the factory durations.

use defmt::*;

use washtimer_core::config::{parse_config, TimerConfig};

/// Parse and validate `text`, falling back to defaults on any error
pub fn load(text: &str) -> TimerConfig {
    let config = match parse_config(text) {
        Ok(config) => config,
        Err(e) => {
            error!("Config parse error: {:?}, using defaults", e);
            return TimerConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        error!("Invalid config: {:?}, using defaults", e);
        return TimerConfig::default();
    }

    log_config_summary(&config);
    config
}

fn log_config_summary(config: &TimerConfig) {
    let w = &config.wash;
    info!(
        "Wash programs (min): intensive={} normal={} eco={} glass={} quickwash={}",
        w.intensive_min, w.normal_min, w.eco_min, w.glass_min, w.quickwash_min
    );

    let d = &config.delay;
    info!(
        "Delay timers (min): 2h={} 4h={} 2h+4h={} 8h={} priority={:?}",
        d.two_hour_min, d.four_hour_min, d.combined_min, d.eight_hour_min, d.priority
    );

    debug!(
        "Display: brightness={} blink={}ms flash={}ms bit_delay={}us",
        config.display.brightness,
        config.display.blink_interval_ms,
        config.display.flash_interval_ms,
        config.display.bit_delay_us
    );
}
