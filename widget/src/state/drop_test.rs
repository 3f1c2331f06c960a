use super::*;
use crate::net::types::{DropDescriptor, GuardDescriptor, SolPayment};

// =============================================================
// Helpers
// =============================================================

const NOW_MS: i64 = 1_700_000_000_000;

fn loaded(available: u64, redeemed: u64, start_date: Option<i64>) -> LoadedDrop {
    LoadedDrop {
        drop: DropDescriptor::new(
            "Cm1".to_owned(),
            "Auth1".to_owned(),
            "G1".to_owned(),
            "Col1".to_owned(),
            available,
            redeemed,
        )
        .unwrap(),
        guard: Some(GuardDescriptor {
            address: "G1".to_owned(),
            start_date,
            sol_payment: Some(SolPayment { lamports: 1, destination: "Dest1".to_owned() }),
        }),
    }
}

fn state(loaded: LoadedDrop, minting: bool) -> DropState {
    DropState { loaded: Some(loaded), minting }
}

fn is_mint_control_rendered(mode: &DisplayMode) -> bool {
    matches!(mode, DisplayMode::Live { control: MintControl::Ready | MintControl::Busy, .. })
}

// =============================================================
// DropState defaults
// =============================================================

#[test]
fn drop_state_default_is_hidden() {
    let state = DropState::default();
    assert!(!state.minting);
    assert_eq!(state.display_mode(NOW_MS), DisplayMode::Hidden);
    assert!(state.mintable().is_none());
}

// =============================================================
// Sold out
// =============================================================

#[test]
fn sold_out_never_renders_mint_control() {
    for available in [0u64, 1, 5, 10_000] {
        for minting in [false, true] {
            let mode = state(loaded(available, available, None), minting).display_mode(NOW_MS);
            assert!(!is_mint_control_rendered(&mode), "available={available} minting={minting}");
            assert!(matches!(mode, DisplayMode::Live { control: MintControl::SoldOut, .. }));
        }
    }
}

#[test]
fn sold_out_after_start_shows_counts() {
    let start_secs = NOW_MS / 1_000 - 60;
    let mode = state(loaded(10, 10, Some(start_secs)), false).display_mode(NOW_MS);
    assert_eq!(
        mode,
        DisplayMode::Live {
            drop_at_ms: Some(start_secs * 1_000),
            items_redeemed: 10,
            items_available: 10,
            control: MintControl::SoldOut,
        }
    );
}

#[test]
fn sold_out_drop_is_not_mintable() {
    assert!(state(loaded(3, 3, None), false).mintable().is_none());
}

// =============================================================
// Live mint control
// =============================================================

#[test]
fn remaining_supply_without_start_date_renders_enabled_control() {
    for (available, redeemed) in [(1u64, 0u64), (10, 9), (10_000, 1)] {
        let mode = state(loaded(available, redeemed, None), false).display_mode(NOW_MS);
        assert_eq!(
            mode,
            DisplayMode::Live {
                drop_at_ms: None,
                items_redeemed: redeemed,
                items_available: available,
                control: MintControl::Ready,
            }
        );
    }
}

#[test]
fn remaining_supply_with_past_start_renders_enabled_control() {
    let mode = state(loaded(10, 2, Some(NOW_MS / 1_000 - 1)), false).display_mode(NOW_MS);
    assert!(matches!(mode, DisplayMode::Live { control: MintControl::Ready, .. }));
}

#[test]
fn start_exactly_now_is_live() {
    let mode = state(loaded(10, 2, Some(NOW_MS / 1_000)), false).display_mode(NOW_MS);
    assert!(matches!(mode, DisplayMode::Live { .. }));
}

#[test]
fn minting_disables_control() {
    let mode = state(loaded(10, 2, None), true).display_mode(NOW_MS);
    assert!(matches!(mode, DisplayMode::Live { control: MintControl::Busy, .. }));
}

#[test]
fn missing_guard_is_live_without_timestamp() {
    let mut loaded = loaded(10, 2, Some(NOW_MS / 1_000 + 3_600));
    loaded.guard = None;
    let mode = state(loaded, false).display_mode(NOW_MS);
    assert!(matches!(mode, DisplayMode::Live { drop_at_ms: None, control: MintControl::Ready, .. }));
}

#[test]
fn mintable_refuses_while_minting() {
    assert!(state(loaded(10, 2, None), true).mintable().is_none());
    assert!(state(loaded(10, 2, None), false).mintable().is_some());
}

// =============================================================
// Countdown
// =============================================================

#[test]
fn future_start_renders_countdown_instead_of_control() {
    let start_secs = NOW_MS / 1_000 + 3;
    for (available, redeemed) in [(10u64, 2u64), (10, 10)] {
        let mode = state(loaded(available, redeemed, Some(start_secs)), false).display_mode(NOW_MS);
        assert_eq!(mode, DisplayMode::Countdown { drop_at_ms: start_secs * 1_000 });
        assert!(!is_mint_control_rendered(&mode));
    }
}

#[test]
fn countdown_gives_way_once_start_passes() {
    let start_secs = NOW_MS / 1_000 + 3;
    let state = state(loaded(10, 2, Some(start_secs)), false);
    assert!(matches!(state.display_mode(NOW_MS + 2_999), DisplayMode::Countdown { .. }));
    assert!(matches!(state.display_mode(NOW_MS + 3_000), DisplayMode::Live { .. }));
}

// =============================================================
// Labels
// =============================================================

#[test]
fn items_minted_label_formats_counts() {
    assert_eq!(items_minted_label(3, 10), "Items Minted: 3 / 10");
}

#[test]
fn format_drop_date_is_utc() {
    assert_eq!(format_drop_date(1_700_000_000_000), "2023-11-14 22:13:20 UTC");
    assert_eq!(format_drop_date(0), "1970-01-01 00:00:00 UTC");
}
