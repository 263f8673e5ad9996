//! Creator withdrawal of sale proceeds from the pair vault.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::{PAIR_SEED, VAULT_SEED};
use crate::errors::FlakeError;
use crate::events::ProceedsWithdrawn;
use crate::state::Pair;

#[derive(Accounts)]
pub struct WithdrawProceeds<'info> {
    #[account(
        mut,
        constraint = creator.key() == pair.creator @ FlakeError::UnauthorizedCaller
    )]
    pub creator: Signer<'info>,

    #[account(
        seeds = [PAIR_SEED, pair.creator.as_ref(), &pair.index.to_le_bytes()],
        bump = pair.bump,
    )]
    pub pair: Box<Account<'info, Pair>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, pair.key().as_ref()],
        bump = pair.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawProceeds>, amount: u64) -> Result<()> {
    require!(amount > 0, FlakeError::InvalidAmount);

    // Vault keeps its rent-exempt minimum
    let rent_minimum = Rent::get()?.minimum_balance(0);
    let available = ctx.accounts.vault.lamports().saturating_sub(rent_minimum);
    require!(amount <= available, FlakeError::InsufficientVaultBalance);

    let pair_key = ctx.accounts.pair.key();
    let vault_bump = ctx.accounts.pair.vault_bump;
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, pair_key.as_ref(), &[vault_bump]]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.creator.to_account_info(),
        },
        signer_seeds,
    );
    system_program::transfer(transfer_ctx, amount)?;

    let vault_balance = ctx.accounts.vault.lamports();

    emit!(ProceedsWithdrawn {
        pair: pair_key,
        creator: ctx.accounts.creator.key(),
        amount,
        vault_balance,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Withdrew {} lamports, vault balance {}", amount, vault_balance);
    Ok(())
}
