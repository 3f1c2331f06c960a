//! Drop configuration injected at the composition root.
//!
//! DESIGN
//! ======
//! The server builds a `DropConfig` from its environment and hands it to the
//! shell, which both renders `<App config/>` and embeds the same value as JSON
//! so the browser hydrates with identical props. Nothing in this crate reads
//! the environment directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// DOM id of the `<script type="application/json">` carrying the config.
pub const CONFIG_ELEMENT_ID: &str = "drop-config";

/// Chain endpoints for the drop. Either value missing disables the widget.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropConfig {
    pub rpc_endpoint: Option<String>,
    pub drop_contract_address: Option<String>,
}

/// Both configuration values, present and non-blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDrop {
    pub rpc_endpoint: String,
    pub drop_address: String,
}

impl DropConfig {
    /// Build a config, treating blank values as absent.
    pub fn new(rpc_endpoint: Option<String>, drop_contract_address: Option<String>) -> Self {
        Self {
            rpc_endpoint: non_blank(rpc_endpoint),
            drop_contract_address: non_blank(drop_contract_address),
        }
    }

    /// Returns `None` unless both the endpoint and the drop address are set.
    #[must_use]
    pub fn resolve(&self) -> Option<ResolvedDrop> {
        let rpc_endpoint = non_blank(self.rpc_endpoint.clone())?;
        let drop_address = non_blank(self.drop_contract_address.clone())?;
        Some(ResolvedDrop { rpc_endpoint, drop_address })
    }

    /// Serialize for embedding inside a `<script>` element.
    ///
    /// `</` is escaped so a hostile value cannot close the element early.
    #[must_use]
    pub fn to_script_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace("</", "<\\/")
    }

    /// Parse the JSON written by [`DropConfig::to_script_json`].
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the payload is not a config object.
    pub fn from_script_json(raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: Self = serde_json::from_str(raw.trim())?;
        Ok(Self::new(parsed.rpc_endpoint, parsed.drop_contract_address))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
