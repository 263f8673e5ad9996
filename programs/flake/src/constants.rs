//! Constants for Flake.

// =============================================================================
// PDA SEEDS
// =============================================================================

/// Seed for Pair PDA: ["pair", creator, pairs_count (u64 LE)]
pub const PAIR_SEED: &[u8] = b"pair";

/// Seed for a pair's lamport vault: ["vault", pair]
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for a pair's attention token mint: ["attention_mint", pair]
pub const ATTENTION_MINT_SEED: &[u8] = b"attention_mint";

/// Seed for pending request records: ["pending_request", pair, sequence (u64 LE)]
pub const PENDING_REQUEST_SEED: &[u8] = b"pending_request";

// =============================================================================
// FEES
// =============================================================================

/// Basis points denominator (100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Highest protocol fee a factory may charge
pub const MAX_PROTOCOL_FEE_BPS: u16 = 10_000;

// =============================================================================
// ATTENTION TOKEN
// =============================================================================

pub const ATTENTION_TOKEN_DECIMALS: u8 = 9;

// =============================================================================
// PAIR METADATA BOUNDS (bytes)
// =============================================================================

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_TICKER_LEN: usize = 10;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_URI_LEN: usize = 200;
pub const MAX_HANDLE_LEN: usize = 64;

/// Request catalog is fixed at creation and lives inside the Pair account.
pub const MAX_REQUEST_TIERS: usize = 10;
pub const MAX_REQUEST_DESCRIPTION_LEN: usize = 100;

// =============================================================================
// REQUESTS
// =============================================================================

/// Ad copy limit, one tweet.
pub const MAX_AD_TEXT_LEN: usize = 280;
