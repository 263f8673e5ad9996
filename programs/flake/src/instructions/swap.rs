//! Fixed-price swap between lamports and a pair's attention token.
//!
//! Buy: lamports in, tokens_out = floor(amount_in / base_price).
//!      Protocol fee -> factory fee recipient, remainder -> pair vault.
//! Sell: only with the `sell-back` feature. Burns tokens and pays out of the vault.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, MintTo, Token, TokenAccount},
};

use crate::constants::{PAIR_SEED, VAULT_SEED};
use crate::errors::FlakeError;
use crate::events::Swapped;
use crate::state::{Factory, Pair};

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [PAIR_SEED, pair.creator.as_ref(), &pair.index.to_le_bytes()],
        bump = pair.bump,
    )]
    pub pair: Box<Account<'info, Pair>>,

    /// Fee policy is read here at swap time
    #[account(address = pair.factory)]
    pub factory: Box<Account<'info, Factory>>,

    /// Pair lamport vault
    #[account(
        mut,
        seeds = [VAULT_SEED, pair.key().as_ref()],
        bump = pair.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    /// CHECK: Validated against factory.fee_recipient
    #[account(
        mut,
        address = factory.fee_recipient @ FlakeError::InvalidFeeRecipient,
    )]
    pub fee_recipient: UncheckedAccount<'info>,

    #[account(
        mut,
        address = pair.attention_token_mint @ FlakeError::InvalidMint,
    )]
    pub attention_token_mint: Box<Account<'info, Mint>>,

    /// User's attention token account (created if needed)
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = attention_token_mint,
        associated_token::authority = user,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Swap>, amount_in: u64, min_amount_out: u64, is_buy: bool) -> Result<()> {
    require!(amount_in > 0, FlakeError::InvalidAmount);

    if is_buy {
        buy(ctx, amount_in, min_amount_out)
    } else {
        sell(ctx, amount_in, min_amount_out)
    }
}

fn buy(ctx: Context<Swap>, amount_in: u64, min_amount_out: u64) -> Result<()> {
    let clock = Clock::get()?;
    let pair = &ctx.accounts.pair;

    let quote = pair.quote_buy(amount_in, ctx.accounts.factory.protocol_fee_bps)?;
    quote.check_min_out(min_amount_out)?;
    require!(quote.tokens_out > 0, FlakeError::InvalidAmount);

    // Protocol share
    if quote.protocol_fee > 0 {
        let fee_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.fee_recipient.to_account_info(),
            },
        );
        system_program::transfer(fee_ctx, quote.protocol_fee)?;
    }

    // Creator proceeds
    if quote.vault_amount > 0 {
        let vault_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        );
        system_program::transfer(vault_ctx, quote.vault_amount)?;
    }

    // Mint attention tokens, pair PDA signs as mint authority
    let creator_key = pair.creator;
    let index_bytes = pair.index.to_le_bytes();
    let bump = pair.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[
        PAIR_SEED,
        creator_key.as_ref(),
        &index_bytes,
        &[bump],
    ]];

    let mint_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        MintTo {
            mint: ctx.accounts.attention_token_mint.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: ctx.accounts.pair.to_account_info(),
        },
        signer_seeds,
    );
    token::mint_to(mint_ctx, quote.tokens_out)?;

    let pair = &mut ctx.accounts.pair;
    pair.total_tokens_sold = pair
        .total_tokens_sold
        .checked_add(quote.tokens_out)
        .ok_or(FlakeError::MathOverflow)?;

    emit!(Swapped {
        user: ctx.accounts.user.key(),
        pair: pair.key(),
        is_buy: true,
        amount_in,
        amount_out: quote.tokens_out,
        protocol_fee: quote.protocol_fee,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Bought {} tokens for {} lamports (fee {}, vault {})",
        quote.tokens_out,
        amount_in,
        quote.protocol_fee,
        quote.vault_amount
    );

    Ok(())
}

#[cfg(feature = "sell-back")]
fn sell(ctx: Context<Swap>, tokens_in: u64, min_amount_out: u64) -> Result<()> {
    use anchor_spl::token::Burn;

    let clock = Clock::get()?;
    let pair = &ctx.accounts.pair;

    let quote = pair.quote_sell(tokens_in, ctx.accounts.factory.protocol_fee_bps)?;
    quote.check_min_out(min_amount_out)?;
    require!(
        ctx.accounts.user_token_account.amount >= tokens_in,
        FlakeError::InsufficientTokenBalance
    );

    // Vault stays rent-exempt
    let rent_minimum = Rent::get()?.minimum_balance(0);
    let available = ctx.accounts.vault.lamports().saturating_sub(rent_minimum);
    require!(
        available >= quote.gross_lamports,
        FlakeError::InsufficientVaultBalance
    );

    let burn_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Burn {
            mint: ctx.accounts.attention_token_mint.to_account_info(),
            from: ctx.accounts.user_token_account.to_account_info(),
            authority: ctx.accounts.user.to_account_info(),
        },
    );
    token::burn(burn_ctx, tokens_in)?;

    let pair_key = pair.key();
    let vault_bump = pair.vault_bump;
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, pair_key.as_ref(), &[vault_bump]]];

    if quote.protocol_fee > 0 {
        let fee_ctx = CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.fee_recipient.to_account_info(),
            },
            signer_seeds,
        );
        system_program::transfer(fee_ctx, quote.protocol_fee)?;
    }

    if quote.lamports_out > 0 {
        let payout_ctx = CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.user.to_account_info(),
            },
            signer_seeds,
        );
        system_program::transfer(payout_ctx, quote.lamports_out)?;
    }

    let pair = &mut ctx.accounts.pair;
    pair.total_tokens_sold = pair.total_tokens_sold.saturating_sub(tokens_in);

    emit!(Swapped {
        user: ctx.accounts.user.key(),
        pair: pair_key,
        is_buy: false,
        amount_in: tokens_in,
        amount_out: quote.lamports_out,
        protocol_fee: quote.protocol_fee,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Sold {} tokens for {} lamports (fee {})",
        tokens_in,
        quote.lamports_out,
        quote.protocol_fee
    );

    Ok(())
}

#[cfg(not(feature = "sell-back"))]
fn sell(_ctx: Context<Swap>, _tokens_in: u64, _min_amount_out: u64) -> Result<()> {
    Err(FlakeError::SellNotEnabled.into())
}
