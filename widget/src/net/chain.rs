//! Chain capability interface and the widget's two call sites.
//!
//! DESIGN
//! ======
//! `DropWidget` never touches RPC or the wallet directly. It holds a
//! `SharedChainClient` and goes through `load_drop` and `start_mint`, which
//! own the logging and the mint-in-progress flag transitions. Tests drive
//! both with fake clients.
//!
//! ERROR HANDLING
//! ==============
//! Both call sites swallow errors after logging them: a failed load leaves
//! the widget hidden and a failed mint just clears the flag.

#[cfg(test)]
#[path = "chain_test.rs"]
mod chain_test;

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use super::error::ChainError;
use super::rpc::RpcChainClient;
use super::types::{DropDescriptor, GuardDescriptor, LoadedDrop, MintReceipt, MintRequest};
use crate::config::DropConfig;

/// Everything the widget asks of the chain.
///
/// Futures are `?Send`: browser HTTP and JS promises are single-threaded.
#[async_trait(?Send)]
pub trait ChainClient {
    /// Fetch the candy machine at `address`.
    async fn fetch_drop(&self, address: &str) -> Result<DropDescriptor, ChainError>;

    /// Fetch the candy guard at `address`; `Ok(None)` when no such account exists.
    async fn fetch_guard(&self, address: &str) -> Result<Option<GuardDescriptor>, ChainError>;

    /// Build, sign, send, and confirm one mint. Atomic from the widget's view.
    async fn submit_mint(&self, request: &MintRequest) -> Result<MintReceipt, ChainError>;
}

pub type SharedChainClient = Arc<dyn ChainClient + Send + Sync>;

/// Chain client plus the drop it targets, provided via context.
#[derive(Clone)]
pub struct ChainContext {
    pub client: SharedChainClient,
    pub drop_address: String,
}

impl ChainContext {
    /// Build the RPC-backed context; `None` when the config is incomplete.
    pub fn from_config(config: &DropConfig) -> Option<Self> {
        let resolved = config.resolve()?;
        Some(Self {
            client: Arc::new(RpcChainClient::new(resolved.rpc_endpoint)),
            drop_address: resolved.drop_address,
        })
    }
}

/// Fetch the drop and its guard once. Failures are logged and yield `None`.
pub async fn load_drop<C>(client: &C, drop_address: &str) -> Option<LoadedDrop>
where
    C: ChainClient + ?Sized,
{
    match fetch_loaded(client, drop_address).await {
        Ok(loaded) => {
            log_loaded(&loaded);
            Some(loaded)
        }
        Err(e) => {
            leptos::logging::error!("drop load failed: {e}");
            None
        }
    }
}

async fn fetch_loaded<C>(client: &C, drop_address: &str) -> Result<LoadedDrop, ChainError>
where
    C: ChainClient + ?Sized,
{
    let drop = client.fetch_drop(drop_address).await?;
    let guard = client.fetch_guard(&drop.mint_authority).await?;
    Ok(LoadedDrop { drop, guard })
}

fn log_loaded(loaded: &LoadedDrop) {
    leptos::logging::log!("itemsAvailable: {}", loaded.drop.items_available);
    leptos::logging::log!("itemsRedeemed: {}", loaded.drop.items_redeemed);
    if let Some(start) = loaded.guard.as_ref().and_then(|g| g.start_date) {
        leptos::logging::log!("startDate: {start}");
    }
}

/// Begin a mint.
///
/// `set_minting(true)` runs before this returns, i.e. before the submission is
/// even polled. The returned future clears the flag once the submission
/// settles, whatever the outcome, and yields the receipt on success.
pub fn start_mint<C, F>(
    client: Arc<C>,
    loaded: LoadedDrop,
    payer: String,
    set_minting: F,
) -> impl Future<Output = Option<MintReceipt>> + 'static
where
    C: ChainClient + ?Sized + 'static,
    F: Fn(bool) + 'static,
{
    set_minting(true);
    async move {
        let outcome = submit(client.as_ref(), &loaded, &payer).await;
        set_minting(false);
        match outcome {
            Ok(receipt) => {
                leptos::logging::log!("minted: {}", receipt.signature);
                Some(receipt)
            }
            Err(e) => {
                leptos::logging::error!("mint failed: {e}");
                None
            }
        }
    }
}

async fn submit<C>(client: &C, loaded: &LoadedDrop, payer: &str) -> Result<MintReceipt, ChainError>
where
    C: ChainClient + ?Sized,
{
    let request = MintRequest::new(&loaded.drop, loaded.guard.as_ref(), payer)?;
    client.submit_mint(&request).await?.into_result()
}
