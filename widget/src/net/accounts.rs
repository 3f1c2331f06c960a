//! Candy machine and candy guard account decoding.
//!
//! Only the leading fields the widget reads are decoded; trailing data
//! (config lines, hidden settings, guard groups) is ignored.
//!
//! Candy machine layout: discriminator, version, token standard, six feature
//! bytes, authority, mint authority, collection mint, items redeemed, then
//! `CandyMachineData` whose first field is items available.
//!
//! Candy guard layout: discriminator, base, bump, authority, then the default
//! guard set serialized as a `u64` feature mask followed by each enabled
//! guard in declaration order.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use borsh::BorshDeserialize;

use super::error::ChainError;
use super::types::{DropDescriptor, GuardDescriptor, SolPayment};

/// Owner program of candy machine accounts.
pub const CANDY_MACHINE_PROGRAM: &str = "CndyV3LdqHUfDLmE5naZjVN8rBZz4tqhdefbAnjHG3JR";
/// Owner program of candy guard accounts.
pub const CANDY_GUARD_PROGRAM: &str = "Guard1JwRhJkVH6XZhzoYxeBVQe872VH6QggF4BWmS9g";

const BOT_TAX: u64 = 1 << 0;
const SOL_PAYMENT: u64 = 1 << 1;
const TOKEN_PAYMENT: u64 = 1 << 2;
const START_DATE: u64 = 1 << 3;

#[derive(BorshDeserialize)]
struct CandyMachineHeader {
    _discriminator: [u8; 8],
    _version: u8,
    _token_standard: u8,
    _features: [u8; 6],
    authority: [u8; 32],
    mint_authority: [u8; 32],
    collection_mint: [u8; 32],
    items_redeemed: u64,
    items_available: u64,
}

#[derive(BorshDeserialize)]
struct CandyGuardHeader {
    _discriminator: [u8; 8],
    _base: [u8; 32],
    _bump: u8,
    _authority: [u8; 32],
    features: u64,
}

#[derive(BorshDeserialize)]
struct BotTaxGuard {
    _lamports: u64,
    _last_instruction: bool,
}

#[derive(BorshDeserialize)]
struct SolPaymentGuard {
    lamports: u64,
    destination: [u8; 32],
}

#[derive(BorshDeserialize)]
struct TokenPaymentGuard {
    _amount: u64,
    _mint: [u8; 32],
    _destination_ata: [u8; 32],
}

#[derive(BorshDeserialize)]
struct StartDateGuard {
    date: i64,
}

/// Base58-encode a 32-byte public key.
#[must_use]
pub fn encode_address(bytes: &[u8; 32]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode a candy machine account into a [`DropDescriptor`].
///
/// # Errors
///
/// Returns [`ChainError::Decode`] for truncated data and
/// [`ChainError::InvalidSupply`] when the counts violate the supply invariant.
pub fn decode_candy_machine(address: &str, data: &[u8]) -> Result<DropDescriptor, ChainError> {
    let mut cursor = data;
    let header = CandyMachineHeader::deserialize(&mut cursor)
        .map_err(|e| ChainError::Decode(format!("candy machine {address}: {e}")))?;
    DropDescriptor::new(
        address.to_owned(),
        encode_address(&header.authority),
        encode_address(&header.mint_authority),
        encode_address(&header.collection_mint),
        header.items_available,
        header.items_redeemed,
    )
}

/// Decode the default guard set of a candy guard account.
///
/// # Errors
///
/// Returns [`ChainError::Decode`] when the header or an enabled guard that
/// precedes `startDate` is truncated or malformed.
pub fn decode_candy_guard(address: &str, data: &[u8]) -> Result<GuardDescriptor, ChainError> {
    let decode_err = |what: &str, e: std::io::Error| ChainError::Decode(format!("candy guard {address} {what}: {e}"));

    let mut cursor = data;
    let header = CandyGuardHeader::deserialize(&mut cursor).map_err(|e| decode_err("header", e))?;
    let features = header.features;

    if features & BOT_TAX != 0 {
        BotTaxGuard::deserialize(&mut cursor).map_err(|e| decode_err("botTax", e))?;
    }
    let sol_payment = if features & SOL_PAYMENT != 0 {
        let guard = SolPaymentGuard::deserialize(&mut cursor).map_err(|e| decode_err("solPayment", e))?;
        Some(SolPayment { lamports: guard.lamports, destination: encode_address(&guard.destination) })
    } else {
        None
    };
    if features & TOKEN_PAYMENT != 0 {
        TokenPaymentGuard::deserialize(&mut cursor).map_err(|e| decode_err("tokenPayment", e))?;
    }
    let start_date = if features & START_DATE != 0 {
        Some(
            StartDateGuard::deserialize(&mut cursor)
                .map_err(|e| decode_err("startDate", e))?
                .date,
        )
    } else {
        None
    };

    Ok(GuardDescriptor { address: address.to_owned(), start_date, sol_payment })
}
