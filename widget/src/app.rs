//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{CONFIG_ELEMENT_ID, DropConfig};
use crate::net::chain::ChainContext;
use crate::pages::home::HomePage;
use crate::state::wallet::WalletState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is rendered into `<App/>` and embedded as JSON for the
/// `hydrate` entry point to read back.
pub fn shell(options: LeptosOptions, config: DropConfig) -> impl IntoView {
    let config_json = config.to_script_json();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=config_json></script>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the config, the chain context (absent when the config is
/// incomplete), and wallet state to the page.
#[component]
pub fn App(config: DropConfig) -> impl IntoView {
    provide_meta_context();

    let chain = ChainContext::from_config(&config);
    if chain.is_none() {
        leptos::logging::warn!("rpc endpoint or drop address missing; drop widget disabled");
    }
    provide_context(config);
    provide_context(chain);
    provide_context(RwSignal::new(WalletState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/candy-drop.css"/>
        <Title text="Candy Drop"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
