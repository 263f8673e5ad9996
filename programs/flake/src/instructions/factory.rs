//! Factory lifecycle: creation and fee policy updates.

use anchor_lang::prelude::*;

use crate::errors::FlakeError;
use crate::events::{FactoryInitialized, FactoryUpdated};
use crate::state::Factory;

// =============================================================================
// INITIALIZE FACTORY
// =============================================================================

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(
        init,
        payer = authority,
        space = Factory::LEN,
    )]
    pub factory: Account<'info, Factory>,

    /// CHECK: Any rent-exempt account can receive protocol fees
    pub fee_recipient: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_factory(ctx: Context<InitializeFactory>, protocol_fee_bps: u16) -> Result<()> {
    Factory::validate_fee(protocol_fee_bps)?;
    Factory::validate_fee_recipient(
        ctx.accounts.fee_recipient.lamports(),
        Rent::get()?.minimum_balance(0),
    )?;

    let factory = &mut ctx.accounts.factory;
    factory.version = 1;
    factory.authority = ctx.accounts.authority.key();
    factory.fee_recipient = ctx.accounts.fee_recipient.key();
    factory.protocol_fee_bps = protocol_fee_bps;
    factory.pairs_count = 0;

    emit!(FactoryInitialized {
        factory: factory.key(),
        authority: factory.authority,
        fee_recipient: factory.fee_recipient,
        protocol_fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Factory initialized: fee={} bps, recipient={}",
        protocol_fee_bps,
        factory.fee_recipient
    );

    Ok(())
}

// =============================================================================
// UPDATE FACTORY
// =============================================================================

#[derive(Accounts)]
#[instruction(protocol_fee_bps: u16, fee_recipient: Pubkey)]
pub struct UpdateFactory<'info> {
    #[account(
        constraint = authority.key() == factory.authority @ FlakeError::UnauthorizedCaller
    )]
    pub authority: Signer<'info>,

    #[account(mut)]
    pub factory: Account<'info, Factory>,

    /// CHECK: Must match the `fee_recipient` argument; funding checked in handler
    #[account(address = fee_recipient @ FlakeError::InvalidFeeRecipient)]
    pub new_fee_recipient: UncheckedAccount<'info>,
}

/// Replace the fee policy. Takes effect on the next swap.
pub fn update_factory(
    ctx: Context<UpdateFactory>,
    protocol_fee_bps: u16,
    fee_recipient: Pubkey,
) -> Result<()> {
    Factory::validate_fee(protocol_fee_bps)?;
    Factory::validate_fee_recipient(
        ctx.accounts.new_fee_recipient.lamports(),
        Rent::get()?.minimum_balance(0),
    )?;

    let factory = &mut ctx.accounts.factory;
    let old_fee_bps = factory.protocol_fee_bps;
    let old_fee_recipient = factory.fee_recipient;
    factory.protocol_fee_bps = protocol_fee_bps;
    factory.fee_recipient = fee_recipient;

    emit!(FactoryUpdated {
        factory: factory.key(),
        authority: ctx.accounts.authority.key(),
        old_fee_bps,
        new_fee_bps: protocol_fee_bps,
        old_fee_recipient,
        new_fee_recipient: fee_recipient,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Factory fee updated: {} -> {} bps, recipient {} -> {}",
        old_fee_bps,
        protocol_fee_bps,
        old_fee_recipient,
        fee_recipient
    );
    Ok(())
}
