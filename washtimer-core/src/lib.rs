//! Board-agnostic core logic for the dishwasher timer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Millisecond time arithmetic
//! - Button snapshots and the input source trait
//! - Wash program and delay timer duration tables
//! - Seven-segment frame rendering and the display trait
//! - State machine and countdown timing
//! - The polling controller and application step
//! - Configuration types and the embedded config parser

#![no_std]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod controller;
pub mod countdown;
pub mod display;
pub mod input;
pub mod resolver;
pub mod state;
pub mod time;

pub use app::{App, PollError};
pub use controller::{Controller, Step};
pub use time::Millis;
