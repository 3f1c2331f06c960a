//! Landing page: wallet connect, then the drop widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Tries a silent wallet reconnect on mount; once an address
//! is known and the chain context exists, mounts `DropWidget` with that
//! address as payer. A missing chain context (incomplete config) hides the
//! widget without any message.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::drop_widget::DropWidget;
use crate::components::wallet_button::WalletButton;
use crate::net::chain::ChainContext;
use crate::state::wallet::WalletState;

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let chain = use_context::<Option<ChainContext>>().flatten();

    // Runs after hydration so the first client render matches the server's.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if !crate::net::wallet::wallet_available() {
            wallet.update(|w| w.provider_missing = true);
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::wallet::connect_wallet(true).await {
                Ok(address) => {
                    leptos::logging::log!("connected with public key: {address}");
                    wallet.update(|w| w.address = Some(address));
                }
                Err(e) => leptos::logging::warn!("silent wallet connect skipped: {e}"),
            }
        });
    });

    let address = Memo::new(move |_| wallet.with(|w| w.address.clone()));

    view! {
        <div class="app-container">
            <div class="header-container">
                <p class="header">"🍭 Candy Drop"</p>
                <p class="sub-text">"NFT drop machine with fair mint"</p>
                {move || match (address.get(), chain.clone()) {
                    (None, _) => view! { <WalletButton/> }.into_any(),
                    (Some(payer), Some(chain)) => view! {
                        <DropWidget client=chain.client drop_address=chain.drop_address payer=payer/>
                    }
                    .into_any(),
                    (Some(_), None) => ().into_any(),
                }}
            </div>
        </div>
    }
}
