//! Open a new pair: attention token mint, lamport vault and request catalog.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::constants::{
    ATTENTION_MINT_SEED, ATTENTION_TOKEN_DECIMALS, MAX_DESCRIPTION_LEN, MAX_HANDLE_LEN,
    MAX_NAME_LEN, MAX_REQUEST_DESCRIPTION_LEN, MAX_REQUEST_TIERS, MAX_TICKER_LEN, MAX_URI_LEN,
    PAIR_SEED, VAULT_SEED,
};
use crate::errors::FlakeError;
use crate::events::PairCreated;
use crate::state::{Factory, Pair, RequestTier};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct CreatePairParams {
    pub name: String,
    pub ticker: String,
    pub description: String,
    pub token_image: String,
    pub twitter: String,
    pub telegram: String,
    pub website: String,
    /// Lamports per raw attention token unit
    pub base_price: u64,
    pub requests: Vec<RequestTier>,
}

impl CreatePairParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.base_price > 0, FlakeError::InvalidBasePrice);

        let bounded = [
            (&self.name, MAX_NAME_LEN),
            (&self.ticker, MAX_TICKER_LEN),
            (&self.description, MAX_DESCRIPTION_LEN),
            (&self.token_image, MAX_URI_LEN),
            (&self.twitter, MAX_HANDLE_LEN),
            (&self.telegram, MAX_HANDLE_LEN),
            (&self.website, MAX_URI_LEN),
        ];
        for (field, max_len) in bounded {
            require!(field.len() <= max_len, FlakeError::MetadataTooLong);
        }

        require!(
            self.requests.len() <= MAX_REQUEST_TIERS,
            FlakeError::TooManyRequestTiers
        );
        for tier in &self.requests {
            require!(tier.price > 0, FlakeError::InvalidRequestPrice);
            require!(
                tier.description.len() <= MAX_REQUEST_DESCRIPTION_LEN,
                FlakeError::MetadataTooLong
            );
        }

        Ok(())
    }
}

#[derive(Accounts)]
pub struct CreatePair<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(mut)]
    pub factory: Box<Account<'info, Factory>>,

    /// New pair PDA, addressed by the factory's current pairs_count
    #[account(
        init,
        payer = creator,
        space = Pair::LEN,
        seeds = [PAIR_SEED, creator.key().as_ref(), &factory.pairs_count.to_le_bytes()],
        bump
    )]
    pub pair: Box<Account<'info, Pair>>,

    /// Lamport vault (system-owned PDA)
    #[account(
        mut,
        seeds = [VAULT_SEED, pair.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    /// Attention token mint (authority = pair)
    #[account(
        init,
        payer = creator,
        seeds = [ATTENTION_MINT_SEED, pair.key().as_ref()],
        bump,
        mint::decimals = ATTENTION_TOKEN_DECIMALS,
        mint::authority = pair,
    )]
    pub attention_token_mint: Box<Account<'info, Mint>>,

    /// Creator's attention token account; receives request payments
    #[account(
        init,
        payer = creator,
        associated_token::mint = attention_token_mint,
        associated_token::authority = creator,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<CreatePair>, params: CreatePairParams) -> Result<()> {
    params.validate()?;
    let clock = Clock::get()?;

    // Only writer of pairs_count; commits with the pair account or not at all.
    let factory = &mut ctx.accounts.factory;
    let index = factory.take_pair_index()?;

    // Vault must be rent-exempt before it can accept arbitrary credits
    let rent_minimum = ctx.accounts.rent.minimum_balance(0);
    let top_up = rent_minimum.saturating_sub(ctx.accounts.vault.lamports());
    if top_up > 0 {
        let transfer_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.creator.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        );
        system_program::transfer(transfer_ctx, top_up)?;
    }

    let CreatePairParams {
        name,
        ticker,
        description,
        token_image,
        twitter,
        telegram,
        website,
        base_price,
        requests,
    } = params;

    let pair = &mut ctx.accounts.pair;
    pair.bump = ctx.bumps.pair;
    pair.vault_bump = ctx.bumps.vault;
    pair.mint_bump = ctx.bumps.attention_token_mint;
    pair.creator = ctx.accounts.creator.key();
    pair.factory = ctx.accounts.factory.key();
    pair.attention_token_mint = ctx.accounts.attention_token_mint.key();
    pair.vault = ctx.accounts.vault.key();
    pair.index = index;
    pair.base_price = base_price;
    pair.pending_requests_count = 0;
    pair.total_tokens_sold = 0;
    pair.created_at = clock.unix_timestamp;
    pair.name = name;
    pair.ticker = ticker;
    pair.description = description;
    pair.token_image = token_image;
    pair.twitter = twitter;
    pair.telegram = telegram;
    pair.website = website;
    pair.requests = requests;

    emit!(PairCreated {
        factory: pair.factory,
        pair: pair.key(),
        creator: pair.creator,
        attention_token_mint: pair.attention_token_mint,
        vault: pair.vault,
        index,
        base_price,
        request_tiers: pair.requests.len() as u8,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Pair #{} created: {} ({}), base_price={}, mint={}",
        index,
        pair.name,
        pair.ticker,
        base_price,
        pair.attention_token_mint
    );

    Ok(())
}
