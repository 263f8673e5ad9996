//! On-chain state definitions for Flake.

use anchor_lang::prelude::*;

use crate::constants::{
    BPS_DENOMINATOR, MAX_AD_TEXT_LEN, MAX_DESCRIPTION_LEN, MAX_HANDLE_LEN, MAX_NAME_LEN,
    MAX_PROTOCOL_FEE_BPS, MAX_REQUEST_DESCRIPTION_LEN, MAX_REQUEST_TIERS, MAX_TICKER_LEN,
    MAX_URI_LEN,
};
use crate::errors::FlakeError;

/// Share of `amount` owed at `fee_bps`, rounded down.
pub fn fee_for(amount: u64, fee_bps: u16) -> Result<u64> {
    let fee = (amount as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(FlakeError::MathOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(FlakeError::MathOverflow)?;

    Ok(fee as u64)
}

// =============================================================================
// FACTORY
// =============================================================================

/// Fee registry and pair sequence.
/// Keypair account (no PDA).
#[account]
pub struct Factory {
    /// Version for future migrations
    pub version: u8,
    /// May update fee policy
    pub authority: Pubkey,
    /// Receives the protocol share of every buy
    pub fee_recipient: Pubkey,
    /// Protocol fee in basis points (0..=10000)
    pub protocol_fee_bps: u16,
    /// Pairs created so far; seed of the next pair
    pub pairs_count: u64,
}

impl Factory {
    pub const LEN: usize = 8  // discriminator
        + 1   // version
        + 32  // authority
        + 32  // fee_recipient
        + 2   // protocol_fee_bps
        + 8;  // pairs_count

    pub fn validate_fee(protocol_fee_bps: u16) -> Result<()> {
        require!(
            protocol_fee_bps <= MAX_PROTOCOL_FEE_BPS,
            FlakeError::InvalidFee
        );
        Ok(())
    }

    /// Fee recipient must already be rent-exempt so fees below the rent
    /// minimum can still be credited to it.
    pub fn validate_fee_recipient(recipient_lamports: u64, rent_minimum: u64) -> Result<()> {
        require!(
            recipient_lamports >= rent_minimum,
            FlakeError::FeeRecipientNotRentExempt
        );
        Ok(())
    }

    /// Protocol fee on a base-currency amount at the current fee setting.
    pub fn protocol_fee(&self, amount: u64) -> Result<u64> {
        fee_for(amount, self.protocol_fee_bps)
    }

    /// Hand out the current sequence number and advance the counter.
    pub fn take_pair_index(&mut self) -> Result<u64> {
        let index = self.pairs_count;
        self.pairs_count = index.checked_add(1).ok_or(FlakeError::MathOverflow)?;
        Ok(index)
    }
}

// =============================================================================
// PAIR
// =============================================================================

/// One purchasable sponsorship tier.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RequestTier {
    /// Attention token units charged on submission
    pub price: u64,
    pub description: String,
}

impl RequestTier {
    pub const MAX_SIZE: usize = 8 + 4 + MAX_REQUEST_DESCRIPTION_LEN;
}

/// Result of pricing a buy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuyQuote {
    pub tokens_out: u64,
    /// Lamports routed to the factory fee recipient
    pub protocol_fee: u64,
    /// Lamports routed to the pair vault
    pub vault_amount: u64,
}

impl BuyQuote {
    /// All-or-nothing slippage guard on tokens out.
    pub fn check_min_out(&self, min_amount_out: u64) -> Result<()> {
        require!(
            self.tokens_out >= min_amount_out,
            FlakeError::SlippageExceeded
        );
        Ok(())
    }
}

/// Result of pricing a sell-back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SellQuote {
    pub gross_lamports: u64,
    pub protocol_fee: u64,
    /// Lamports paid to the seller
    pub lamports_out: u64,
}

impl SellQuote {
    /// All-or-nothing slippage guard on lamports out.
    pub fn check_min_out(&self, min_amount_out: u64) -> Result<()> {
        require!(
            self.lamports_out >= min_amount_out,
            FlakeError::SlippageExceeded
        );
        Ok(())
    }
}

/// Price a buy: tokens_out = floor(amount_in / base_price).
/// The fee is taken from `amount_in`; tokens are priced on the gross amount.
pub fn buy_quote(base_price: u64, amount_in: u64, protocol_fee_bps: u16) -> Result<BuyQuote> {
    require!(base_price > 0, FlakeError::InvalidBasePrice);

    let tokens_out = amount_in
        .checked_div(base_price)
        .ok_or(FlakeError::MathOverflow)?;
    let protocol_fee = fee_for(amount_in, protocol_fee_bps)?;
    let vault_amount = amount_in
        .checked_sub(protocol_fee)
        .ok_or(FlakeError::MathOverflow)?;

    Ok(BuyQuote {
        tokens_out,
        protocol_fee,
        vault_amount,
    })
}

/// Price a sell-back of `tokens_in` at base price, fee on the gross payout.
pub fn sell_quote(base_price: u64, tokens_in: u64, protocol_fee_bps: u16) -> Result<SellQuote> {
    let gross_lamports = tokens_in
        .checked_mul(base_price)
        .ok_or(FlakeError::MathOverflow)?;
    let protocol_fee = fee_for(gross_lamports, protocol_fee_bps)?;
    let lamports_out = gross_lamports
        .checked_sub(protocol_fee)
        .ok_or(FlakeError::MathOverflow)?;

    Ok(SellQuote {
        gross_lamports,
        protocol_fee,
        lamports_out,
    })
}

/// Creator offering: fixed-price attention token plus request catalog.
/// Seeds: ["pair", creator, index (u64 LE)]
#[account]
pub struct Pair {
    /// PDA bump
    pub bump: u8,
    /// Vault PDA bump
    pub vault_bump: u8,
    /// Mint PDA bump
    pub mint_bump: u8,
    /// Pair creator; sole request resolver
    pub creator: Pubkey,
    /// Factory this pair was registered under
    pub factory: Pubkey,
    /// Attention token mint (authority = this pair)
    pub attention_token_mint: Pubkey,
    /// Lamport vault holding sale proceeds
    pub vault: Pubkey,
    /// Factory pairs_count snapshot used as seed
    pub index: u64,
    /// Lamports per raw attention token unit
    pub base_price: u64,
    /// Next pending request sequence
    pub pending_requests_count: u64,
    /// Tokens minted through swaps (for analytics)
    pub total_tokens_sold: u64,
    pub created_at: i64,
    pub name: String,
    pub ticker: String,
    pub description: String,
    pub token_image: String,
    pub twitter: String,
    pub telegram: String,
    pub website: String,
    /// Fixed catalog, immutable after creation
    pub requests: Vec<RequestTier>,
}

impl Pair {
    pub const LEN: usize = 8  // discriminator
        + 1   // bump
        + 1   // vault_bump
        + 1   // mint_bump
        + 32  // creator
        + 32  // factory
        + 32  // attention_token_mint
        + 32  // vault
        + 8   // index
        + 8   // base_price
        + 8   // pending_requests_count
        + 8   // total_tokens_sold
        + 8   // created_at
        + 4 + MAX_NAME_LEN
        + 4 + MAX_TICKER_LEN
        + 4 + MAX_DESCRIPTION_LEN
        + 4 + MAX_URI_LEN      // token_image
        + 4 + MAX_HANDLE_LEN   // twitter
        + 4 + MAX_HANDLE_LEN   // telegram
        + 4 + MAX_URI_LEN      // website
        + 4 + MAX_REQUEST_TIERS * RequestTier::MAX_SIZE;

    pub fn quote_buy(&self, amount_in: u64, protocol_fee_bps: u16) -> Result<BuyQuote> {
        buy_quote(self.base_price, amount_in, protocol_fee_bps)
    }

    pub fn quote_sell(&self, tokens_in: u64, protocol_fee_bps: u16) -> Result<SellQuote> {
        sell_quote(self.base_price, tokens_in, protocol_fee_bps)
    }

    /// Catalog price of a request tier.
    pub fn request_price(&self, request_index: u64) -> Result<u64> {
        let tier = usize::try_from(request_index)
            .ok()
            .and_then(|i| self.requests.get(i))
            .ok_or(FlakeError::InvalidRequestIndex)?;
        Ok(tier.price)
    }

    /// Hand out the next pending request sequence and advance the counter.
    pub fn take_pending_sequence(&mut self) -> Result<u64> {
        let sequence = self.pending_requests_count;
        self.pending_requests_count = sequence
            .checked_add(1)
            .ok_or(FlakeError::MathOverflow)?;
        Ok(sequence)
    }
}

// =============================================================================
// PENDING REQUEST
// =============================================================================

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A paid sponsorship slot awaiting the creator's decision.
/// Seeds: ["pending_request", pair, sequence (u64 LE)]
#[account]
pub struct PendingRequest {
    /// PDA bump
    pub bump: u8,
    /// Pair this request was bought from
    pub pair: Pubkey,
    /// Requester (payer)
    pub user: Pubkey,
    /// Position in the pair's pending log
    pub sequence: u64,
    /// Catalog tier at submission time
    pub request_index: u64,
    /// Tokens paid to the creator at submission
    pub price_paid: u64,
    pub status: RequestStatus,
    pub submitted_at: i64,
    /// Zero while pending
    pub resolved_at: i64,
    pub ad_text: String,
}

impl PendingRequest {
    pub const LEN: usize = 8  // discriminator
        + 1   // bump
        + 32  // pair
        + 32  // user
        + 8   // sequence
        + 8   // request_index
        + 8   // price_paid
        + 1   // status
        + 8   // submitted_at
        + 8   // resolved_at
        + 4 + MAX_AD_TEXT_LEN;

    pub fn validate_ad_text(ad_text: &str) -> Result<()> {
        require!(ad_text.len() <= MAX_AD_TEXT_LEN, FlakeError::AdTextTooLong);
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Pending -> Accepted. Already-resolved requests are not found.
    pub fn accept(&mut self, now: i64) -> Result<()> {
        self.resolve(RequestStatus::Accepted, now)
    }

    /// Pending -> Rejected. Payment is not refunded.
    pub fn reject(&mut self, now: i64) -> Result<()> {
        self.resolve(RequestStatus::Rejected, now)
    }

    fn resolve(&mut self, status: RequestStatus, now: i64) -> Result<()> {
        require!(self.is_pending(), FlakeError::RequestNotFound);
        self.status = status;
        self.resolved_at = now;
        Ok(())
    }
}
