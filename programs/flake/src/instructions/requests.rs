//! Sponsored request lifecycle.
//!
//! submit_request -> creator is paid immediately, record starts Pending
//! accept_request / reject_request -> creator resolves the record, no funds move
//!
//! Each submission is its own PDA keyed by (pair, sequence), so the pair
//! account never grows with request volume.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::{PAIR_SEED, PENDING_REQUEST_SEED};
use crate::errors::FlakeError;
use crate::events::{RequestAccepted, RequestRejected, RequestSubmitted};
use crate::state::{Pair, PendingRequest, RequestStatus};

// =============================================================================
// SUBMIT REQUEST
// =============================================================================

#[derive(Accounts)]
pub struct SubmitRequest<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [PAIR_SEED, pair.creator.as_ref(), &pair.index.to_le_bytes()],
        bump = pair.bump,
    )]
    pub pair: Box<Account<'info, Pair>>,

    #[account(address = pair.attention_token_mint @ FlakeError::InvalidMint)]
    pub attention_token_mint: Box<Account<'info, Mint>>,

    /// User's attention token account (payer)
    #[account(
        mut,
        constraint = user_token_account.owner == user.key() @ FlakeError::UnauthorizedCaller,
        constraint = user_token_account.mint == attention_token_mint.key() @ FlakeError::InvalidMint,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    /// Creator's attention token account (payee)
    #[account(
        mut,
        constraint = creator_token_account.owner == pair.creator @ FlakeError::UnauthorizedCaller,
        constraint = creator_token_account.mint == attention_token_mint.key() @ FlakeError::InvalidMint,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    /// New record at the next sequence
    #[account(
        init,
        payer = user,
        space = PendingRequest::LEN,
        seeds = [
            PENDING_REQUEST_SEED,
            pair.key().as_ref(),
            &pair.pending_requests_count.to_le_bytes()
        ],
        bump
    )]
    pub pending_request: Box<Account<'info, PendingRequest>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn submit_request(
    ctx: Context<SubmitRequest>,
    request_index: u64,
    ad_text: String,
) -> Result<()> {
    let clock = Clock::get()?;

    let price = ctx.accounts.pair.request_price(request_index)?;
    PendingRequest::validate_ad_text(&ad_text)?;
    require!(
        ctx.accounts.user_token_account.amount >= price,
        FlakeError::InsufficientTokenBalance
    );

    // Pay the creator now; acceptance does not gate settlement
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        TransferChecked {
            from: ctx.accounts.user_token_account.to_account_info(),
            mint: ctx.accounts.attention_token_mint.to_account_info(),
            to: ctx.accounts.creator_token_account.to_account_info(),
            authority: ctx.accounts.user.to_account_info(),
        },
    );
    token::transfer_checked(
        transfer_ctx,
        price,
        ctx.accounts.attention_token_mint.decimals,
    )?;

    let pair = &mut ctx.accounts.pair;
    let sequence = pair.take_pending_sequence()?;
    let pair_key = pair.key();

    let request = &mut ctx.accounts.pending_request;
    request.bump = ctx.bumps.pending_request;
    request.pair = pair_key;
    request.user = ctx.accounts.user.key();
    request.sequence = sequence;
    request.request_index = request_index;
    request.price_paid = price;
    request.status = RequestStatus::Pending;
    request.submitted_at = clock.unix_timestamp;
    request.resolved_at = 0;
    request.ad_text = ad_text;

    emit!(RequestSubmitted {
        user: request.user,
        pair: pair_key,
        pending_request: request.key(),
        sequence,
        request_index,
        price_paid: price,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Request #{} submitted for tier {}, paid {} tokens",
        sequence,
        request_index,
        price
    );

    Ok(())
}

// =============================================================================
// ACCEPT / REJECT REQUEST
// =============================================================================

#[derive(Accounts)]
pub struct ResolveRequest<'info> {
    #[account(
        constraint = creator.key() == pair.creator @ FlakeError::UnauthorizedCaller
    )]
    pub creator: Signer<'info>,

    #[account(
        seeds = [PAIR_SEED, pair.creator.as_ref(), &pair.index.to_le_bytes()],
        bump = pair.bump,
    )]
    pub pair: Box<Account<'info, Pair>>,

    /// CHECK: Validated by PDA derivation and owner check in handler, so a
    /// missing or foreign record surfaces as RequestNotFound
    #[account(mut)]
    pub pending_request: UncheckedAccount<'info>,
}

/// Creator accepts the pending request at `request_index` (its sequence).
pub fn accept_request(ctx: Context<ResolveRequest>, request_index: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let mut request = load_pending(&ctx.accounts, request_index)?;
    request.accept(now)?;
    store_pending(&ctx.accounts.pending_request, &request)?;

    emit!(RequestAccepted {
        pair: request.pair,
        pending_request: ctx.accounts.pending_request.key(),
        sequence: request.sequence,
        user: request.user,
        timestamp: now,
    });

    msg!("Request #{} accepted", request.sequence);
    Ok(())
}

/// Creator rejects the pending request at `request_index`. Payment stays with the creator.
pub fn reject_request(ctx: Context<ResolveRequest>, request_index: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let mut request = load_pending(&ctx.accounts, request_index)?;
    request.reject(now)?;
    store_pending(&ctx.accounts.pending_request, &request)?;

    emit!(RequestRejected {
        pair: request.pair,
        pending_request: ctx.accounts.pending_request.key(),
        sequence: request.sequence,
        user: request.user,
        timestamp: now,
    });

    msg!("Request #{} rejected", request.sequence);
    Ok(())
}

fn load_pending(accounts: &ResolveRequest, request_index: u64) -> Result<PendingRequest> {
    let pair = &accounts.pair;
    require!(
        request_index < pair.pending_requests_count,
        FlakeError::RequestNotFound
    );

    let pair_key = pair.key();
    let (expected, _) = Pubkey::find_program_address(
        &[
            PENDING_REQUEST_SEED,
            pair_key.as_ref(),
            &request_index.to_le_bytes(),
        ],
        &crate::ID,
    );

    let info = accounts.pending_request.to_account_info();
    require_keys_eq!(info.key(), expected, FlakeError::RequestNotFound);
    require!(
        *info.owner == crate::ID && !info.data_is_empty(),
        FlakeError::RequestNotFound
    );

    let data = info.try_borrow_data()?;
    let request = PendingRequest::try_deserialize(&mut &data[..])?;
    require_keys_eq!(request.pair, pair_key, FlakeError::RequestNotFound);

    Ok(request)
}

fn store_pending(account: &UncheckedAccount, request: &PendingRequest) -> Result<()> {
    let info = account.to_account_info();
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    request.try_serialize(&mut writer)?;
    Ok(())
}
