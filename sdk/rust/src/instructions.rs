//! Instruction builders.
//!
//! Thin wrappers over the Anchor-generated `accounts` / `instruction` types
//! that fill in every derivable address.

use anchor_lang::prelude::{Pubkey, System};
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{Id, InstructionData, ToAccountMetas};
use anchor_spl::{associated_token::AssociatedToken, token::Token};
use flake::{accounts, instruction, CreatePairParams};

use crate::{FlakeClient, ID};

fn build(metas: impl ToAccountMetas, data: impl InstructionData) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: metas.to_account_metas(None),
        data: data.data(),
    }
}

/// `factory` must sign: it is a fresh keypair account.
pub fn initialize_factory(
    factory: &Pubkey,
    fee_recipient: &Pubkey,
    authority: &Pubkey,
    protocol_fee_bps: u16,
) -> Instruction {
    build(
        accounts::InitializeFactory {
            factory: *factory,
            fee_recipient: *fee_recipient,
            authority: *authority,
            system_program: System::id(),
        },
        instruction::InitializeFactory { protocol_fee_bps },
    )
}

pub fn update_factory(
    authority: &Pubkey,
    factory: &Pubkey,
    protocol_fee_bps: u16,
    fee_recipient: &Pubkey,
) -> Instruction {
    build(
        accounts::UpdateFactory {
            authority: *authority,
            factory: *factory,
            new_fee_recipient: *fee_recipient,
        },
        instruction::UpdateFactory {
            protocol_fee_bps,
            fee_recipient: *fee_recipient,
        },
    )
}

/// `pairs_count` must be the factory's current counter; the pair address
/// is derived from it. Returns the instruction and the new pair address.
pub fn create_pair(
    creator: &Pubkey,
    factory: &Pubkey,
    pairs_count: u64,
    params: CreatePairParams,
) -> (Instruction, Pubkey) {
    let (pair, _) = FlakeClient::derive_pair_pda(creator, pairs_count);
    let (vault, _) = FlakeClient::derive_vault_pda(&pair);
    let (attention_token_mint, _) = FlakeClient::derive_attention_mint_pda(&pair);

    let ix = build(
        accounts::CreatePair {
            creator: *creator,
            factory: *factory,
            pair,
            vault,
            attention_token_mint,
            creator_token_account: FlakeClient::derive_attention_token_account(creator, &pair),
            token_program: Token::id(),
            associated_token_program: AssociatedToken::id(),
            system_program: System::id(),
            rent: anchor_lang::solana_program::sysvar::rent::ID,
        },
        instruction::CreatePair { params },
    );

    (ix, pair)
}

pub fn swap(
    user: &Pubkey,
    pair: &Pubkey,
    factory: &Pubkey,
    fee_recipient: &Pubkey,
    amount_in: u64,
    min_amount_out: u64,
    is_buy: bool,
) -> Instruction {
    let (vault, _) = FlakeClient::derive_vault_pda(pair);
    let (attention_token_mint, _) = FlakeClient::derive_attention_mint_pda(pair);

    build(
        accounts::Swap {
            user: *user,
            pair: *pair,
            factory: *factory,
            vault,
            fee_recipient: *fee_recipient,
            attention_token_mint,
            user_token_account: FlakeClient::derive_attention_token_account(user, pair),
            token_program: Token::id(),
            associated_token_program: AssociatedToken::id(),
            system_program: System::id(),
        },
        instruction::Swap {
            amount_in,
            min_amount_out,
            is_buy,
        },
    )
}

/// `next_sequence` must be the pair's current pending_requests_count.
pub fn submit_request(
    user: &Pubkey,
    creator: &Pubkey,
    pair: &Pubkey,
    next_sequence: u64,
    request_index: u64,
    ad_text: String,
) -> Instruction {
    let (attention_token_mint, _) = FlakeClient::derive_attention_mint_pda(pair);
    let (pending_request, _) = FlakeClient::derive_pending_request_pda(pair, next_sequence);

    build(
        accounts::SubmitRequest {
            user: *user,
            pair: *pair,
            attention_token_mint,
            user_token_account: FlakeClient::derive_attention_token_account(user, pair),
            creator_token_account: FlakeClient::derive_attention_token_account(creator, pair),
            pending_request,
            token_program: Token::id(),
            system_program: System::id(),
        },
        instruction::SubmitRequest {
            request_index,
            ad_text,
        },
    )
}

fn resolve_accounts(creator: &Pubkey, pair: &Pubkey, sequence: u64) -> accounts::ResolveRequest {
    let (pending_request, _) = FlakeClient::derive_pending_request_pda(pair, sequence);
    accounts::ResolveRequest {
        creator: *creator,
        pair: *pair,
        pending_request,
    }
}

pub fn accept_request(creator: &Pubkey, pair: &Pubkey, sequence: u64) -> Instruction {
    build(
        resolve_accounts(creator, pair, sequence),
        instruction::AcceptRequest {
            request_index: sequence,
        },
    )
}

pub fn reject_request(creator: &Pubkey, pair: &Pubkey, sequence: u64) -> Instruction {
    build(
        resolve_accounts(creator, pair, sequence),
        instruction::RejectRequest {
            request_index: sequence,
        },
    )
}

pub fn withdraw_proceeds(creator: &Pubkey, pair: &Pubkey, amount: u64) -> Instruction {
    let (vault, _) = FlakeClient::derive_vault_pda(pair);

    build(
        accounts::WithdrawProceeds {
            creator: *creator,
            pair: *pair,
            vault,
            system_program: System::id(),
        },
        instruction::WithdrawProceeds { amount },
    )
}
