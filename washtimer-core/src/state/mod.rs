//! State machine for the countdown
//!
//! The state machine is explicit, finite, and deterministic. The
//! controller feeds it the events it produces each poll.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
