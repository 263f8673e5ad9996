//! Event definitions for Flake.

use anchor_lang::prelude::*;

/// Emitted when a factory is created.
#[event]
pub struct FactoryInitialized {
    pub factory: Pubkey,
    pub authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub protocol_fee_bps: u16,
    pub timestamp: i64,
}

/// Emitted when the factory authority changes fee policy.
#[event]
pub struct FactoryUpdated {
    pub factory: Pubkey,
    pub authority: Pubkey,
    pub old_fee_bps: u16,
    pub new_fee_bps: u16,
    pub old_fee_recipient: Pubkey,
    pub new_fee_recipient: Pubkey,
    pub timestamp: i64,
}

/// Emitted when a creator opens a new pair.
#[event]
pub struct PairCreated {
    pub factory: Pubkey,
    pub pair: Pubkey,
    pub creator: Pubkey,
    pub attention_token_mint: Pubkey,
    pub vault: Pubkey,
    /// Factory pairs_count snapshot used as seed
    pub index: u64,
    pub base_price: u64,
    pub request_tiers: u8,
    pub timestamp: i64,
}

/// Emitted on every swap.
#[event]
pub struct Swapped {
    pub user: Pubkey,
    pub pair: Pubkey,
    pub is_buy: bool,
    /// Lamports on buy, tokens on sell
    pub amount_in: u64,
    /// Tokens on buy, lamports on sell
    pub amount_out: u64,
    pub protocol_fee: u64,
    pub timestamp: i64,
}

/// Emitted when a user pays for a request.
#[event]
pub struct RequestSubmitted {
    pub user: Pubkey,
    pub pair: Pubkey,
    pub pending_request: Pubkey,
    pub sequence: u64,
    pub request_index: u64,
    pub price_paid: u64,
    pub timestamp: i64,
}

/// Emitted when the creator accepts a pending request.
#[event]
pub struct RequestAccepted {
    pub pair: Pubkey,
    pub pending_request: Pubkey,
    pub sequence: u64,
    pub user: Pubkey,
    pub timestamp: i64,
}

/// Emitted when the creator rejects a pending request.
#[event]
pub struct RequestRejected {
    pub pair: Pubkey,
    pub pending_request: Pubkey,
    pub sequence: u64,
    pub user: Pubkey,
    pub timestamp: i64,
}

/// Emitted when the creator withdraws sale proceeds.
#[event]
pub struct ProceedsWithdrawn {
    pub pair: Pubkey,
    pub creator: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}
