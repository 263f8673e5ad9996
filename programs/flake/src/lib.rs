#![allow(clippy::result_large_err)]

//! # Flake
//!
//! Attention token marketplace. A creator opens a Pair under a Factory, sells
//! a bespoke attention token at a fixed lamport price, and sells sponsored
//! requests priced in that token.

use anchor_lang::prelude::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("5cYJsEQDUHGQuZ3SuSRjAN14g23iXtWboqoFJ6fJHtYM");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Flake",
    project_url: "https://github.com/flake-fun/flake",
    contacts: "email:security@flake.fun",
    policy: "https://github.com/flake-fun/flake/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/flake-fun/flake"
}

#[program]
pub mod flake {
    use super::*;

    // -------------------------------------------------------------------------
    // Factory
    // -------------------------------------------------------------------------

    /// Create a factory with the given protocol fee (0..=10000 bps).
    pub fn initialize_factory(ctx: Context<InitializeFactory>, protocol_fee_bps: u16) -> Result<()> {
        instructions::factory::initialize_factory(ctx, protocol_fee_bps)
    }

    /// Update fee policy (factory authority only).
    pub fn update_factory(
        ctx: Context<UpdateFactory>,
        protocol_fee_bps: u16,
        fee_recipient: Pubkey,
    ) -> Result<()> {
        instructions::factory::update_factory(ctx, protocol_fee_bps, fee_recipient)
    }

    // -------------------------------------------------------------------------
    // Pairs
    // -------------------------------------------------------------------------

    /// Open a pair: attention token mint, vault, creator token account.
    /// Consumes the factory's current pairs_count as address seed.
    pub fn create_pair(ctx: Context<CreatePair>, params: CreatePairParams) -> Result<()> {
        instructions::create_pair::handler(ctx, params)
    }

    /// Buy attention tokens at base price. `is_buy = false` requires the
    /// `sell-back` feature.
    pub fn swap(
        ctx: Context<Swap>,
        amount_in: u64,
        min_amount_out: u64,
        is_buy: bool,
    ) -> Result<()> {
        instructions::swap::handler(ctx, amount_in, min_amount_out, is_buy)
    }

    /// Creator withdraws sale proceeds from the vault.
    pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>, amount: u64) -> Result<()> {
        instructions::proceeds::handler(ctx, amount)
    }

    // -------------------------------------------------------------------------
    // Requests
    // -------------------------------------------------------------------------

    /// Pay for a catalog tier and queue the ad for the creator.
    pub fn submit_request(
        ctx: Context<SubmitRequest>,
        request_index: u64,
        ad_text: String,
    ) -> Result<()> {
        instructions::requests::submit_request(ctx, request_index, ad_text)
    }

    /// Creator accepts the pending request with sequence `request_index`.
    pub fn accept_request(ctx: Context<ResolveRequest>, request_index: u64) -> Result<()> {
        instructions::requests::accept_request(ctx, request_index)
    }

    /// Creator rejects the pending request with sequence `request_index`.
    /// No refund: payment settled at submission.
    pub fn reject_request(ctx: Context<ResolveRequest>, request_index: u64) -> Result<()> {
        instructions::requests::reject_request(ctx, request_index)
    }
}
