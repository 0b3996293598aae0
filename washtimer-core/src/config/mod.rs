//! Timer configuration
//!
//! The firmware embeds a `timer.toml`; the build script validates it on the
//! host with the `toml` crate (through the `serde` feature) and the
//! firmware parses it at boot with the allocation-free [`parse_config`].

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::{
    ConfigError, DelayPriority, DelayTable, DisplayConfig, TimerConfig, WashTable, MAX_BRIGHTNESS,
};
