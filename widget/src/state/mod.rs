//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Plain structs with pure derivations. Components wrap them in `RwSignal`s;
//! the rules themselves stay testable without a reactive runtime.

pub mod countdown;
pub mod drop;
pub mod wallet;
