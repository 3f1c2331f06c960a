//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use widget::config::DropConfig;

pub const DEFAULT_PORT: u16 = 3000;

pub const PORT_VAR: &str = "PORT";
pub const RPC_HOST_VAR: &str = "SOLANA_RPC_HOST";
pub const CANDY_MACHINE_VAR: &str = "CANDY_MACHINE_ID";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub drop: DropConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SOLANA_RPC_HOST`: RPC endpoint the browser reads the drop from
    /// - `CANDY_MACHINE_ID`: base58 address of the candy machine
    ///
    /// A missing RPC host or candy machine id is not an error; the page then
    /// renders without the drop widget.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup(PORT_VAR).as_deref())?;
        let drop = DropConfig::new(lookup(RPC_HOST_VAR), lookup(CANDY_MACHINE_VAR));
        Ok(Self { port, drop })
    }

    #[must_use]
    pub fn drop_enabled(&self) -> bool {
        self.drop.resolve().is_some()
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { var: PORT_VAR, value: value.to_owned() }),
    }
}
