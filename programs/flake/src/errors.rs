//! Error definitions for Flake.

use anchor_lang::prelude::*;

#[error_code]
pub enum FlakeError {
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Protocol fee must be within 0..=10000 bps")]
    InvalidFee,

    #[msg("Base price must be greater than zero")]
    InvalidBasePrice,

    #[msg("Request index out of range")]
    InvalidRequestIndex,

    #[msg("Ad text exceeds 280 bytes")]
    AdTextTooLong,

    #[msg("Metadata field exceeds maximum length")]
    MetadataTooLong,

    #[msg("Too many request tiers")]
    TooManyRequestTiers,

    #[msg("Request tier price must be greater than zero")]
    InvalidRequestPrice,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Unauthorized caller")]
    UnauthorizedCaller,

    #[msg("No pending request at this index")]
    RequestNotFound,

    #[msg("Slippage exceeded - insufficient output amount")]
    SlippageExceeded,

    #[msg("Insufficient attention token balance")]
    InsufficientTokenBalance,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Sell-back is not enabled")]
    SellNotEnabled,

    #[msg("Invalid mint")]
    InvalidMint,

    #[msg("Fee recipient does not match factory")]
    InvalidFeeRecipient,

    #[msg("Fee recipient must hold at least the rent-exempt minimum")]
    FeeRecipientNotRentExempt,
}
