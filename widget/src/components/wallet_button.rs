//! "Connect to Wallet" button.

use leptos::prelude::*;

use crate::state::wallet::WalletState;

/// Interactive wallet connect. Writes the result into the `WalletState` context.
#[component]
pub fn WalletButton() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();

    let on_connect = move |_: leptos::ev::MouseEvent| {
        if !wallet.with_untracked(WalletState::can_connect) {
            return;
        }
        wallet.update(|w| w.connecting = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::wallet::connect_wallet(false).await {
                Ok(address) => {
                    leptos::logging::log!("connected with public key: {address}");
                    wallet.update(|w| w.address = Some(address));
                }
                Err(e) => leptos::logging::error!("wallet connect failed: {e}"),
            }
            wallet.update(|w| w.connecting = false);
        });
    };

    view! {
        <Show
            when=move || !wallet.get().provider_missing
            fallback=|| view! { <p class="sub-text">"Solana wallet not found. Install Phantom to mint."</p> }
        >
            <button
                class="cta-button connect-wallet-button"
                on:click=on_connect
                disabled=move || wallet.get().connecting
            >
                "Connect to Wallet"
            </button>
        </Show>
    }
}
