//! Browser wallet and mint bridge interop.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two page globals are used:
//! - `window.solana`: the injected wallet provider (`connect(opts)` resolving
//!   to an object with a `publicKey`).
//! - `window.candyDropBridge`: installed by the page next to the chain SDK;
//!   `mint(json)` builds, signs, sends and confirms the mint transaction and
//!   resolves to `{ signature, err }`.
//!
//! Both are browser-only; SSR paths return [`ChainError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use super::error::ChainError;
use super::types::MintReceipt;

#[cfg(feature = "hydrate")]
const WALLET_GLOBAL: &str = "solana";
#[cfg(feature = "hydrate")]
const BRIDGE_GLOBAL: &str = "candyDropBridge";

/// Whether the page has an injected wallet provider.
pub fn wallet_available() -> bool {
    #[cfg(feature = "hydrate")]
    {
        window_global(WALLET_GLOBAL).is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Connect the injected wallet and return its base58 public key.
///
/// With `only_if_trusted` the provider connects silently or fails without
/// prompting the user.
///
/// # Errors
///
/// Returns [`ChainError::WalletUnavailable`] without a provider, or
/// [`ChainError::Wallet`] when the provider rejects.
pub async fn connect_wallet(only_if_trusted: bool) -> Result<String, ChainError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;

        let provider = window_global(WALLET_GLOBAL).ok_or(ChainError::WalletUnavailable)?;
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("onlyIfTrusted"), &JsValue::from_bool(only_if_trusted))
            .map_err(|e| ChainError::Wallet(js_error_message(&e)))?;
        let response = call_async_method(&provider, "connect", &options)
            .await
            .map_err(ChainError::Wallet)?;
        let public_key = js_sys::Reflect::get(&response, &JsValue::from_str("publicKey"))
            .map_err(|e| ChainError::Wallet(js_error_message(&e)))?;
        let address = js_sys::Reflect::get(&public_key, &JsValue::from_str("toString"))
            .ok()
            .and_then(|f| wasm_bindgen::JsCast::dyn_into::<js_sys::Function>(f).ok())
            .and_then(|f| f.call0(&public_key).ok())
            .and_then(|v| v.as_string())
            .ok_or_else(|| ChainError::Wallet("connect returned no public key".to_owned()))?;
        Ok(address)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = only_if_trusted;
        Err(ChainError::Unavailable)
    }
}

/// Hand a JSON mint payload to the page's mint bridge.
pub(crate) async fn bridge_mint(payload: &str) -> Result<MintReceipt, ChainError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;

        let bridge = window_global(BRIDGE_GLOBAL).ok_or(ChainError::BridgeUnavailable)?;
        let result = call_async_method(&bridge, "mint", &JsValue::from_str(payload))
            .await
            .map_err(ChainError::Bridge)?;
        let json = js_sys::JSON::stringify(&result)
            .ok()
            .and_then(|s| s.as_string())
            .ok_or_else(|| ChainError::Bridge("unserializable bridge result".to_owned()))?;
        parse_bridge_receipt(&json)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ChainError::Unavailable)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_bridge_receipt(json: &str) -> Result<MintReceipt, ChainError> {
    serde_json::from_str(json).map_err(|e| ChainError::Bridge(format!("unexpected bridge result: {e}")))
}

#[cfg(feature = "hydrate")]
fn window_global(name: &str) -> Option<wasm_bindgen::JsValue> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Call `target[method](arg)` and await the returned promise.
#[cfg(feature = "hydrate")]
async fn call_async_method(
    target: &wasm_bindgen::JsValue,
    method: &str,
    arg: &wasm_bindgen::JsValue,
) -> Result<wasm_bindgen::JsValue, String> {
    use wasm_bindgen::JsCast;

    let function = js_sys::Reflect::get(target, &wasm_bindgen::JsValue::from_str(method))
        .map_err(|e| js_error_message(&e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| format!("{method} is not a function"))?;
    let returned = function.call1(target, arg).map_err(|e| js_error_message(&e))?;
    let promise = js_sys::Promise::resolve(&returned);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| js_error_message(&e))
}

#[cfg(feature = "hydrate")]
fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
