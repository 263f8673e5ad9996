//! Flake Rust SDK
//!
//! Client helpers for the Flake program.
//!
//! # Features
//!
//! - PDA derivation helpers
//! - Account decoding
//! - Swap quotes matching on-chain pricing
//! - Instruction builders
//!
//! # Example
//!
//! ```no_run
//! use anchor_lang::prelude::Pubkey;
//! use flake_sdk::FlakeClient;
//!
//! let creator = Pubkey::new_unique();
//! let (pair, _bump) = FlakeClient::derive_pair_pda(&creator, 0);
//! let (vault, _bump) = FlakeClient::derive_vault_pda(&pair);
//! ```

use anchor_lang::prelude::Pubkey;
use flake::{FlakeError, ATTENTION_MINT_SEED, PAIR_SEED, PENDING_REQUEST_SEED, VAULT_SEED};
use thiserror::Error;

/// Flake program ID
pub use flake::ID;

pub mod instructions;
pub mod state;

pub use instructions::*;
pub use state::*;

/// Errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlakeSdkError {
    #[error("Account data could not be decoded as {0}")]
    InvalidAccountData(&'static str),

    #[error("Account is not owned by the Flake program")]
    InvalidOwner,

    #[error("Base price must be greater than zero")]
    InvalidBasePrice,

    #[error("Math overflow")]
    MathOverflow,

    #[error("Program rejected the computation: {0}")]
    Program(String),
}

impl From<anchor_lang::error::Error> for FlakeSdkError {
    fn from(err: anchor_lang::error::Error) -> Self {
        let invalid_base_price: anchor_lang::error::Error = FlakeError::InvalidBasePrice.into();
        let math_overflow: anchor_lang::error::Error = FlakeError::MathOverflow.into();
        if err == invalid_base_price {
            FlakeSdkError::InvalidBasePrice
        } else if err == math_overflow {
            FlakeSdkError::MathOverflow
        } else {
            FlakeSdkError::Program(err.to_string())
        }
    }
}

/// Main client for Flake
pub struct FlakeClient;

impl FlakeClient {
    /// Derive pair PDA from the creator and the factory's pairs_count at creation
    pub fn derive_pair_pda(creator: &Pubkey, index: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[PAIR_SEED, creator.as_ref(), &index.to_le_bytes()],
            &ID,
        )
    }

    /// Derive the lamport vault of a pair
    pub fn derive_vault_pda(pair: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[VAULT_SEED, pair.as_ref()], &ID)
    }

    /// Derive the attention token mint of a pair
    pub fn derive_attention_mint_pda(pair: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[ATTENTION_MINT_SEED, pair.as_ref()], &ID)
    }

    /// Derive the pending request record at `sequence`
    pub fn derive_pending_request_pda(pair: &Pubkey, sequence: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[PENDING_REQUEST_SEED, pair.as_ref(), &sequence.to_le_bytes()],
            &ID,
        )
    }

    /// Associated attention token account of `owner`
    pub fn derive_attention_token_account(owner: &Pubkey, pair: &Pubkey) -> Pubkey {
        let (mint, _) = Self::derive_attention_mint_pda(pair);
        anchor_spl::associated_token::get_associated_token_address(owner, &mint)
    }

    /// Tokens a buy of `amount_in` lamports yields, with the fee split.
    /// Same arithmetic as the program's `swap`.
    pub fn quote_buy(
        base_price: u64,
        protocol_fee_bps: u16,
        amount_in: u64,
    ) -> Result<flake::BuyQuote, FlakeSdkError> {
        flake::buy_quote(base_price, amount_in, protocol_fee_bps).map_err(FlakeSdkError::from)
    }

    /// Smallest lamport amount that buys `tokens` units.
    pub fn lamports_for_tokens(base_price: u64, tokens: u64) -> Result<u64, FlakeSdkError> {
        if base_price == 0 {
            return Err(FlakeSdkError::InvalidBasePrice);
        }
        tokens
            .checked_mul(base_price)
            .ok_or(FlakeSdkError::MathOverflow)
    }

    /// Sell-back payout for `tokens_in` units (program built with `sell-back`).
    pub fn quote_sell(
        base_price: u64,
        protocol_fee_bps: u16,
        tokens_in: u64,
    ) -> Result<flake::SellQuote, FlakeSdkError> {
        flake::sell_quote(base_price, tokens_in, protocol_fee_bps).map_err(FlakeSdkError::from)
    }

    /// Protocol fee owed on `amount` lamports.
    pub fn protocol_fee(amount: u64, protocol_fee_bps: u16) -> Result<u64, FlakeSdkError> {
        flake::fee_for(amount, protocol_fee_bps).map_err(FlakeSdkError::from)
    }
}
