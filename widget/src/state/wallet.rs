//! Connected-wallet state for the current tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided via context by `App`. `HomePage` fills it in; the connected
//! address becomes the mint payer passed to `DropWidget`.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

/// Wallet connection state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    /// Base58 public key once connected.
    pub address: Option<String>,
    /// A connect request is in flight.
    pub connecting: bool,
    /// The page has no injected wallet provider.
    pub provider_missing: bool,
}

impl WalletState {
    /// Whether the connect button should accept a click.
    #[must_use]
    pub fn can_connect(&self) -> bool {
        self.address.is_none() && !self.connecting && !self.provider_missing
    }
}
