//! Drop widget state and display-mode derivation.
//!
//! DESIGN
//! ======
//! `DropState` is the only state the widget owns. What gets rendered is a
//! pure function of that state and the wall clock (`display_mode`), so the
//! countdown / progress / sold-out rules are tested without a DOM.
//!
//! The mode is derived when the state changes, not on every clock tick. A
//! countdown reaching zero does not switch the widget to the mint view; a
//! remount does.

#[cfg(test)]
#[path = "drop_test.rs"]
mod drop_test;

use time::OffsetDateTime;
use time::macros::format_description;

use crate::net::types::LoadedDrop;

/// Drop state owned by one `DropWidget` instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropState {
    /// Descriptors from the mount-time load; `None` until it succeeds.
    pub loaded: Option<LoadedDrop>,
    /// A mint submission is in flight.
    pub minting: bool,
}

/// State of the mint control in the live view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintControl {
    /// Supply exhausted; the control is not rendered.
    SoldOut,
    Ready,
    /// A mint is in flight; the control is rendered disabled.
    Busy,
}

/// What the widget renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Nothing loaded (yet, or ever).
    Hidden,
    /// Drop start is in the future.
    Countdown { drop_at_ms: i64 },
    /// Drop started or has no start date.
    Live {
        drop_at_ms: Option<i64>,
        items_redeemed: u64,
        items_available: u64,
        control: MintControl,
    },
}

impl DropState {
    /// Derive the display mode at `now_ms` (unix milliseconds).
    #[must_use]
    pub fn display_mode(&self, now_ms: i64) -> DisplayMode {
        let Some(loaded) = &self.loaded else {
            return DisplayMode::Hidden;
        };
        let drop_at_ms = loaded.drop_at_ms();
        if let Some(at) = drop_at_ms
            && at > now_ms
        {
            return DisplayMode::Countdown { drop_at_ms: at };
        }
        let control = if loaded.drop.is_sold_out() {
            MintControl::SoldOut
        } else if self.minting {
            MintControl::Busy
        } else {
            MintControl::Ready
        };
        DisplayMode::Live {
            drop_at_ms,
            items_redeemed: loaded.drop.items_redeemed,
            items_available: loaded.drop.items_available,
            control,
        }
    }

    /// Loaded descriptors, if a mint may start now.
    ///
    /// Refuses while a mint is in flight or the drop is sold out.
    #[must_use]
    pub fn mintable(&self) -> Option<&LoadedDrop> {
        if self.minting {
            return None;
        }
        self.loaded.as_ref().filter(|loaded| !loaded.drop.is_sold_out())
    }
}

/// `Items Minted: 3 / 10`
#[must_use]
pub fn items_minted_label(items_redeemed: u64, items_available: u64) -> String {
    format!("Items Minted: {items_redeemed} / {items_available}")
}

/// Format a unix-millisecond instant as `YYYY-MM-DD HH:MM:SS UTC`.
#[must_use]
pub fn format_drop_date(drop_at_ms: i64) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    OffsetDateTime::from_unix_timestamp(drop_at_ms.div_euclid(1_000))
        .ok()
        .and_then(|at| at.format(&format).ok())
        .unwrap_or_else(|| drop_at_ms.to_string())
}
