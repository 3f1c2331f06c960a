//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the drop surfaces while reading/writing shared state from
//! Leptos context providers or their own local signals.

pub mod countdown_timer;
pub mod drop_widget;
pub mod wallet_button;
