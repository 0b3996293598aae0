//! Minimal TOML reader for the timer configuration
//!
//! Handles only the subset used by `timer.toml`, without allocation:
//!
//! - `[wash]`, `[delay]` and `[display]` section headers
//! - `key = value` pairs with integer or string values
//! - Comments (`# ...`), whole-line or trailing
//!
//! Keys left out keep their default value. Unknown sections and keys are
//! rejected so that typos do not silently fall back to defaults.

use super::types::{DelayPriority, TimerConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Section header is not one of the known sections
    InvalidSection,
    /// Key is not valid in the current section
    UnknownKey,
    /// Value could not be converted to the expected type
    InvalidValue,
    /// Line is neither a header nor a `key = value` pair
    MissingEquals,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Wash,
    Delay,
    Display,
}

/// Parse configuration text into a [`TimerConfig`]
///
/// The result is not validated; call [`TimerConfig::validate`] afterwards.
pub fn parse_config(input: &str) -> Result<TimerConfig, ParseError> {
    let mut config = TimerConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::MissingEquals)?;
        apply_value(&mut config, section, key, value)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "wash" => Ok(Section::Wash),
        "delay" => Ok(Section::Delay),
        "display" => Ok(Section::Display),
        _ => Err(ParseError::InvalidSection),
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Strip a trailing comment unless the '#' sits inside a string
    let value = match value.find('#') {
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    strip_underscores(value)
        .parse()
        .map_err(|_| ParseError::InvalidValue)
}

fn parse_priority(value: &str) -> Result<DelayPriority, ParseError> {
    match parse_string(value) {
        "source" => Ok(DelayPriority::Source),
        "combined-first" => Ok(DelayPriority::CombinedFirst),
        _ => Err(ParseError::InvalidValue),
    }
}

fn apply_value(
    config: &mut TimerConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match section {
        Section::Root => return Err(ParseError::UnknownKey),
        Section::Wash => {
            let w = &mut config.wash;
            match key {
                "intensive_min" => w.intensive_min = parse_int(value)?,
                "normal_min" => w.normal_min = parse_int(value)?,
                "eco_min" => w.eco_min = parse_int(value)?,
                "glass_min" => w.glass_min = parse_int(value)?,
                "quickwash_min" => w.quickwash_min = parse_int(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
        Section::Delay => {
            let d = &mut config.delay;
            match key {
                "two_hour_min" => d.two_hour_min = parse_int(value)?,
                "four_hour_min" => d.four_hour_min = parse_int(value)?,
                "combined_min" => d.combined_min = parse_int(value)?,
                "eight_hour_min" => d.eight_hour_min = parse_int(value)?,
                "priority" => d.priority = parse_priority(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
        Section::Display => {
            let d = &mut config.display;
            match key {
                "brightness" => d.brightness = parse_int(value)?,
                "blink_interval_ms" => d.blink_interval_ms = parse_int(value)?,
                "flash_interval_ms" => d.flash_interval_ms = parse_int(value)?,
                "bit_delay_us" => d.bit_delay_us = parse_int(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
    }
    Ok(())
}

/// Integer literals may use `_` separators (`1_000`)
fn strip_underscores(value: &str) -> heapless::String<24> {
    let mut out = heapless::String::new();
    for c in value.chars().filter(|c| *c != '_') {
        // Overlong input is left truncated; it fails to parse afterwards
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
