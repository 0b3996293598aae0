//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in washtimer-core,
//! written against the `embedded-hal` 1.0 pin and delay traits:
//!
//! - TM1637 four-digit seven-segment display (bit-banged two-wire bus)
//! - Active-low push button bank

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod tm1637;

pub use buttons::ButtonBank;
pub use tm1637::Tm1637;
