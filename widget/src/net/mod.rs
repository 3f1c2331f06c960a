//! Chain access: capability trait, RPC implementation, and wallet interop.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chain` defines what the widget needs from the chain, `rpc` implements it
//! against a JSON-RPC endpoint, `accounts` decodes the two account layouts,
//! `wallet` talks to page globals, and `types` holds the shared DTOs.

pub mod accounts;
pub mod chain;
pub mod error;
pub mod rpc;
pub mod types;
pub mod wallet;
