//! Drop, guard, and mint DTOs exchanged with the chain client.
//!
//! DESIGN
//! ======
//! Addresses stay base58 strings end to end. The widget only reads the fields
//! listed here; everything else about the on-chain accounts is opaque.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ChainError;

/// Compute-unit limit requested for every mint transaction.
pub const MINT_COMPUTE_UNITS: u32 = 600_000;

/// Candy machine state relevant to the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropDescriptor {
    /// Candy machine account address.
    pub address: String,
    /// Candy machine authority; also the collection update authority.
    pub authority: String,
    /// Mint authority; the candy guard account when one is wrapped around the machine.
    pub mint_authority: String,
    /// Collection NFT mint.
    pub collection_mint: String,
    /// Fixed supply.
    pub items_available: u64,
    /// Items already minted. Never exceeds `items_available`.
    pub items_redeemed: u64,
}

impl DropDescriptor {
    /// Build a descriptor, rejecting supply counts where redeemed exceeds available.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidSupply`] when `items_redeemed > items_available`.
    pub fn new(
        address: String,
        authority: String,
        mint_authority: String,
        collection_mint: String,
        items_available: u64,
        items_redeemed: u64,
    ) -> Result<Self, ChainError> {
        if items_redeemed > items_available {
            return Err(ChainError::InvalidSupply { redeemed: items_redeemed, available: items_available });
        }
        Ok(Self { address, authority, mint_authority, collection_mint, items_available, items_redeemed })
    }

    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        self.items_redeemed == self.items_available
    }
}

/// `solPayment` guard: lamports charged per mint and where they go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolPayment {
    pub lamports: u64,
    pub destination: String,
}

/// Candy guard state relevant to the widget (default guard set only).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuardDescriptor {
    pub address: String,
    /// `startDate` guard, unix seconds.
    pub start_date: Option<i64>,
    pub sol_payment: Option<SolPayment>,
}

impl GuardDescriptor {
    /// Start date in unix milliseconds.
    #[must_use]
    pub fn drop_at_ms(&self) -> Option<i64> {
        self.start_date.map(|secs| secs.saturating_mul(1_000))
    }
}

/// Everything a single mount of the widget loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedDrop {
    pub drop: DropDescriptor,
    pub guard: Option<GuardDescriptor>,
}

impl LoadedDrop {
    #[must_use]
    pub fn drop_at_ms(&self) -> Option<i64> {
        self.guard.as_ref().and_then(GuardDescriptor::drop_at_ms)
    }
}

/// Arguments for the external mint transaction builder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub candy_machine: String,
    pub candy_guard: String,
    pub collection_mint: String,
    pub collection_update_authority: String,
    pub payer: String,
    pub sol_payment_destination: String,
    pub compute_units: u32,
}

impl MintRequest {
    /// Assemble a mint request from the loaded accounts.
    ///
    /// # Errors
    ///
    /// Fails when no candy guard was loaded or its `solPayment` guard is unset.
    pub fn new(drop: &DropDescriptor, guard: Option<&GuardDescriptor>, payer: &str) -> Result<Self, ChainError> {
        let guard = guard.ok_or(ChainError::MissingGuard)?;
        let payment = guard.sol_payment.as_ref().ok_or(ChainError::MissingSolPayment)?;
        Ok(Self {
            candy_machine: drop.address.clone(),
            candy_guard: guard.address.clone(),
            collection_mint: drop.collection_mint.clone(),
            collection_update_authority: drop.authority.clone(),
            payer: payer.to_owned(),
            sol_payment_destination: payment.destination.clone(),
            compute_units: MINT_COMPUTE_UNITS,
        })
    }
}

/// Result of a confirmed send, as reported by the mint bridge.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MintReceipt {
    pub signature: String,
    /// Transaction error reported after confirmation, if any.
    #[serde(default)]
    pub err: Option<String>,
}

impl MintReceipt {
    /// Treat a confirmed-but-failed transaction as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::TransactionFailed`] when `err` is set.
    pub fn into_result(self) -> Result<Self, ChainError> {
        match self.err {
            Some(err) => Err(ChainError::TransactionFailed { signature: self.signature, err }),
            None => Ok(self),
        }
    }
}
