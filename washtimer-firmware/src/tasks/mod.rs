//! Embassy async tasks
//!
//! The whole timer runs in a single polling loop that owns the
//! application.

pub mod control;
