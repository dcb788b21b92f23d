//! # Group
//!
//! Membership registry and group catalog: creates saccos, enforces capacity
//! and member uniqueness, and assigns rotation positions in join order.
//!
//! Sacco IDs come from a single instance-storage allocator (see
//! [`crate::storage::next_sacco_id`]), so `total_saccos` is just the counter
//! and callers can enumerate `1..=total`.

use soroban_sdk::{Address, Env, String, Vec};

use crate::errors::ContractError;
use crate::events;
use crate::storage;
use crate::types::{Sacco, SaccoInfo};

pub fn create_sacco(
    env: &Env,
    creator: Address,
    name: String,
    contribution_amount: i128,
    cycle_length: u64,
    max_members: u32,
) -> Result<u64, ContractError> {
    creator.require_auth();

    if contribution_amount <= 0 || cycle_length == 0 || max_members < 1 {
        return Err(ContractError::InvalidParameters);
    }

    let id = storage::next_sacco_id(env);

    // The creator is auto-enrolled at rotation position 1.
    let mut members = Vec::new(env);
    members.push_back(creator.clone());

    let sacco = Sacco {
        id,
        name,
        creator: creator.clone(),
        contribution_amount,
        cycle_length,
        max_members,
        members,
        created_at: env.ledger().timestamp(),
    };

    storage::set_sacco(env, &sacco);
    storage::add_member_sacco(env, &creator, id);

    events::emit_sacco_created(env, id, creator, contribution_amount, max_members);

    Ok(id)
}

pub fn join_sacco(env: &Env, member: Address, sacco_id: u64) -> Result<(), ContractError> {
    member.require_auth();

    let mut sacco = load_sacco(env, sacco_id)?;

    if sacco.members.len() >= sacco.max_members {
        return Err(ContractError::GroupFull);
    }
    if sacco.is_member(&member) {
        return Err(ContractError::AlreadyMember);
    }

    // Late joiners enter the rotation at the end.
    sacco.members.push_back(member.clone());
    let position = sacco.members.len();

    storage::set_sacco(env, &sacco);
    storage::add_member_sacco(env, &member, sacco_id);

    events::emit_member_joined(env, sacco_id, member, position);

    Ok(())
}

pub fn load_sacco(env: &Env, sacco_id: u64) -> Result<Sacco, ContractError> {
    storage::get_sacco(env, sacco_id).ok_or(ContractError::SaccoNotFound)
}

pub fn member_count(env: &Env, sacco_id: u64) -> Result<u32, ContractError> {
    Ok(load_sacco(env, sacco_id)?.members.len())
}

/// 1-based rotation position of `member` in `sacco_id`.
pub fn position_of(env: &Env, sacco_id: u64, member: &Address) -> Result<u32, ContractError> {
    load_sacco(env, sacco_id)?
        .position_of(member)
        .ok_or(ContractError::NotAMember)
}

/// Summary projection for the list and detail pages.
pub fn sacco_info(env: &Env, sacco_id: u64) -> Result<SaccoInfo, ContractError> {
    let sacco = load_sacco(env, sacco_id)?;
    Ok(SaccoInfo {
        name: sacco.name.clone(),
        creator: sacco.creator.clone(),
        contribution_amount: sacco.contribution_amount,
        member_count: sacco.members.len(),
    })
}

pub fn total_saccos(env: &Env) -> u64 {
    storage::sacco_count(env)
}

pub fn saccos_of(env: &Env, member: &Address) -> Vec<u64> {
    storage::get_member_saccos(env, member)
}
