//! JSON-RPC chain client.
//!
//! Client-side (hydrate): `getAccountInfo` over HTTP via `gloo-net`, and mint
//! submission through the page's wallet bridge.
//! Server-side (SSR): every call returns [`ChainError::Unavailable`]; the
//! widget only loads after hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "rpc_test.rs"]
mod rpc_test;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use super::accounts::{CANDY_GUARD_PROGRAM, CANDY_MACHINE_PROGRAM, decode_candy_guard, decode_candy_machine};
use super::chain::ChainClient;
use super::error::ChainError;
use super::types::{DropDescriptor, GuardDescriptor, MintReceipt, MintRequest};

/// Chain client talking to a Solana JSON-RPC endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcChainClient {
    endpoint: String,
}

/// Owner and raw data of a fetched account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawAccount {
    pub owner: String,
    pub data: Vec<u8>,
}

#[derive(Deserialize)]
struct RpcEnvelope<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct AccountInfoResult {
    value: Option<AccountValue>,
}

#[derive(Deserialize)]
struct AccountValue {
    data: (String, String),
    owner: String,
}

/// Payload handed to the mint bridge: the request plus the endpoint it should use.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BridgeMintCall<'a> {
    rpc_endpoint: &'a str,
    #[serde(flatten)]
    request: &'a MintRequest,
}

impl RpcChainClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch owner and data of `address`; `None` when the account does not exist.
    async fn account_info(&self, address: &str) -> Result<Option<RawAccount>, ChainError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(&account_info_request(address))
                .map_err(|e| ChainError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ChainError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ChainError::Transport(format!("status {}", resp.status())));
            }
            let body = resp.text().await.map_err(|e| ChainError::Transport(e.to_string()))?;
            parse_account_info_response(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = address;
            Err(ChainError::Unavailable)
        }
    }

    fn bridge_payload(&self, request: &MintRequest) -> Result<String, ChainError> {
        serde_json::to_string(&BridgeMintCall { rpc_endpoint: &self.endpoint, request })
            .map_err(|e| ChainError::Bridge(e.to_string()))
    }
}

#[async_trait(?Send)]
impl ChainClient for RpcChainClient {
    async fn fetch_drop(&self, address: &str) -> Result<DropDescriptor, ChainError> {
        let account = self
            .account_info(address)
            .await?
            .ok_or_else(|| ChainError::AccountNotFound(address.to_owned()))?;
        expect_owner(address, &account, CANDY_MACHINE_PROGRAM)?;
        decode_candy_machine(address, &account.data)
    }

    async fn fetch_guard(&self, address: &str) -> Result<Option<GuardDescriptor>, ChainError> {
        let Some(account) = self.account_info(address).await? else {
            return Ok(None);
        };
        expect_owner(address, &account, CANDY_GUARD_PROGRAM)?;
        decode_candy_guard(address, &account.data).map(Some)
    }

    async fn submit_mint(&self, request: &MintRequest) -> Result<MintReceipt, ChainError> {
        let payload = self.bridge_payload(request)?;
        super::wallet::bridge_mint(&payload).await
    }
}

pub(crate) fn account_info_request(address: &str) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getAccountInfo",
        "params": [address, { "encoding": "base64", "commitment": "confirmed" }],
    })
}

pub(crate) fn parse_account_info_response(body: &str) -> Result<Option<RawAccount>, ChainError> {
    let envelope: RpcEnvelope<AccountInfoResult> =
        serde_json::from_str(body).map_err(|e| ChainError::ResponseParse(e.to_string()))?;
    if let Some(error) = envelope.error {
        return Err(ChainError::Rpc { code: error.code, message: error.message });
    }
    let result = envelope
        .result
        .ok_or_else(|| ChainError::ResponseParse("missing result".to_owned()))?;
    let Some(value) = result.value else {
        return Ok(None);
    };
    let (encoded, encoding) = value.data;
    if encoding != "base64" {
        return Err(ChainError::ResponseParse(format!("unexpected encoding: {encoding}")));
    }
    let data = BASE64
        .decode(encoded.as_bytes())
        .map_err(|e| ChainError::ResponseParse(format!("account data: {e}")))?;
    Ok(Some(RawAccount { owner: value.owner, data }))
}

pub(crate) fn expect_owner(address: &str, account: &RawAccount, expected: &'static str) -> Result<(), ChainError> {
    if account.owner == expected {
        return Ok(());
    }
    Err(ChainError::UnexpectedOwner { address: address.to_owned(), owner: account.owner.clone(), expected })
}
