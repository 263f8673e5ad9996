//! Account decoding.

use anchor_lang::{AccountDeserialize, Discriminator};

use crate::{FlakeSdkError, ID};
use anchor_lang::prelude::Pubkey;
use flake::{Factory, Pair, PendingRequest, RequestStatus};

fn decode<T: AccountDeserialize + Discriminator>(
    owner: &Pubkey,
    data: &[u8],
    name: &'static str,
) -> Result<T, FlakeSdkError> {
    if *owner != ID {
        return Err(FlakeSdkError::InvalidOwner);
    }
    let mut slice = data;
    T::try_deserialize(&mut slice).map_err(|_| FlakeSdkError::InvalidAccountData(name))
}

/// Decode a Factory account owned by the Flake program.
pub fn decode_factory(owner: &Pubkey, data: &[u8]) -> Result<Factory, FlakeSdkError> {
    decode(owner, data, "Factory")
}

/// Decode a Pair account owned by the Flake program.
pub fn decode_pair(owner: &Pubkey, data: &[u8]) -> Result<Pair, FlakeSdkError> {
    decode(owner, data, "Pair")
}

/// Decode a PendingRequest account owned by the Flake program.
pub fn decode_pending_request(
    owner: &Pubkey,
    data: &[u8],
) -> Result<PendingRequest, FlakeSdkError> {
    decode(owner, data, "PendingRequest")
}

/// Requests still waiting on the creator, in submission order.
pub fn pending_only(requests: &[PendingRequest]) -> Vec<&PendingRequest> {
    let mut pending: Vec<&PendingRequest> = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Pending)
        .collect();
    pending.sort_by_key(|r| r.sequence);
    pending
}
