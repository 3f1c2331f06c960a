//! Chain client error type.
//!
//! ERROR HANDLING
//! ==============
//! Every variant ends at a call site that logs it. None of them reach the
//! rendered UI; the widget simply stays hidden or re-enables the mint control.

/// Errors from fetching drop state or submitting a mint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// The HTTP request to the RPC endpoint failed.
    #[error("rpc request failed: {0}")]
    Transport(String),

    /// The RPC node answered with a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The RPC response body did not have the expected shape.
    #[error("rpc response parse failed: {0}")]
    ResponseParse(String),

    #[error("account not found: {0}")]
    AccountNotFound(String),

    #[error("account {address} is owned by {owner}, expected {expected}")]
    UnexpectedOwner { address: String, owner: String, expected: &'static str },

    /// Account bytes could not be decoded.
    #[error("account decode failed: {0}")]
    Decode(String),

    #[error("invalid supply: {redeemed} redeemed of {available} available")]
    InvalidSupply { redeemed: u64, available: u64 },

    #[error("candy guard was not loaded")]
    MissingGuard,

    #[error("destination of solPayment is not set")]
    MissingSolPayment,

    /// No injected wallet provider on the page.
    #[error("wallet provider not found")]
    WalletUnavailable,

    #[error("wallet request failed: {0}")]
    Wallet(String),

    /// The page did not install the mint bridge.
    #[error("mint bridge not found")]
    BridgeUnavailable,

    #[error("mint bridge rejected: {0}")]
    Bridge(String),

    #[error("transaction {signature} failed: {err}")]
    TransactionFailed { signature: String, err: String },

    /// Browser-only operation invoked during server rendering.
    #[error("not available on server")]
    Unavailable,
}
