//! Candy machine drop widget: countdown, progress, and the mint button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the drop once on mount, then renders whatever `DropState::display_mode`
//! says. Owns the mint-in-progress flag; the chain client does the rest.
//!
//! TRADE-OFFS
//! ==========
//! There is no re-fetch after a successful mint, so "Items Minted" stays at
//! its mount-time value until the page is reloaded.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::countdown_timer::CountdownTimer;
use crate::net::chain::{SharedChainClient, start_mint};
use crate::state::drop::{DisplayMode, DropState, MintControl, format_drop_date, items_minted_label};
use crate::util::clock::now_ms;

/// Drop status and mint action for one candy machine.
///
/// `payer` is the connected wallet address used for the mint.
#[component]
pub fn DropWidget(client: SharedChainClient, drop_address: String, payer: String) -> impl IntoView {
    let state = RwSignal::new(DropState::default());
    let client = StoredValue::new(client);

    #[cfg(feature = "hydrate")]
    {
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            if let Some(loaded) = crate::net::chain::load_drop(client.as_ref(), &drop_address).await {
                state.update(|s| s.loaded = Some(loaded));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = drop_address;
    }

    let mode = Memo::new(move |_| state.with(|s| s.display_mode(now_ms())));

    let on_mint = move |_: leptos::ev::MouseEvent| {
        let Some(loaded) = state.with_untracked(|s| s.mintable().cloned()) else {
            return;
        };
        let pending = start_mint(client.get_value(), loaded, payer.clone(), move |busy| {
            state.update(|s| s.minting = busy);
        });
        leptos::task::spawn_local(async move {
            let _ = pending.await;
        });
    };

    view! {
        {move || match mode.get() {
            DisplayMode::Hidden => ().into_any(),
            DisplayMode::Countdown { drop_at_ms } => view! {
                <div class="machine-container">
                    <CountdownTimer drop_at_ms=drop_at_ms/>
                </div>
            }
            .into_any(),
            DisplayMode::Live { drop_at_ms, items_redeemed, items_available, control } => {
                let on_mint = on_mint.clone();
                view! {
                    <div class="machine-container">
                        {drop_at_ms.map(|at| view! { <p>{format!("Drop Date: {}", format_drop_date(at))}</p> })}
                        <p>{items_minted_label(items_redeemed, items_available)}</p>
                        {match control {
                            MintControl::SoldOut => view! { <p class="sub-text">"Sold Out 🙊"</p> }.into_any(),
                            MintControl::Ready | MintControl::Busy => view! {
                                <button
                                    class="cta-button mint-button"
                                    on:click=on_mint
                                    disabled={control == MintControl::Busy}
                                >
                                    "Mint NFT"
                                </button>
                            }
                            .into_any(),
                        }}
                    </div>
                }
                .into_any()
            }
        }}
    }
}
