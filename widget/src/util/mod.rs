//! Browser/environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates clock and timer access from component logic so the state
//! machines can be driven by fakes in tests.

pub mod clock;
#[cfg(feature = "hydrate")]
pub mod ticks;
