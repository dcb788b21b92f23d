//! # Contribution
//!
//! Validates and records a member's payment for the currently active cycle.
//!
//! The cycle index is purely a function of time: `(now − created_at) /
//! cycle_length`, starting at 0. It is recomputed on every call rather
//! than stored, so it cannot drift from the records.

use soroban_sdk::{Address, Env, Map};

use crate::errors::ContractError;
use crate::events;
use crate::group;
use crate::ledger;
use crate::types::{ContributionRecord, CycleStatus, Sacco};

/// The cycle index active at the current ledger timestamp.
pub fn current_cycle(env: &Env, sacco: &Sacco) -> u64 {
    (env.ledger().timestamp() - sacco.created_at) / sacco.cycle_length
}

/// Record `member`'s contribution for the active cycle of `sacco_id`.
///
/// Partial and over-payments are rejected outright: `amount` must equal the
/// group's required contribution exactly. Returns the cycle the payment was
/// recorded against.
pub fn contribute(
    env: &Env,
    member: Address,
    sacco_id: u64,
    amount: i128,
) -> Result<u64, ContractError> {
    member.require_auth();

    let sacco = group::load_sacco(env, sacco_id)?;

    if !sacco.is_member(&member) {
        return Err(ContractError::NotAMember);
    }
    if amount != sacco.contribution_amount {
        return Err(ContractError::AmountMismatch);
    }

    let cycle = current_cycle(env, &sacco);
    let record = ContributionRecord {
        sacco_id,
        member: member.clone(),
        cycle,
        amount,
        recorded_at: env.ledger().timestamp(),
    };

    ledger::append_contribution(env, &record)?;

    events::emit_contribution_made(env, sacco_id, member, cycle, amount);

    Ok(cycle)
}

/// Per-member contributed flags for (sacco, cycle), plus the cycle total
/// and the pool-completeness bit the scheduler gates on.
pub fn cycle_status(env: &Env, sacco_id: u64, cycle: u64) -> Result<CycleStatus, ContractError> {
    let sacco = group::load_sacco(env, sacco_id)?;

    let mut contributions = Map::new(env);
    let mut total_contributed: i128 = 0;
    let mut pool_complete = true;

    for member in sacco.members.iter() {
        match ledger::contribution_for(env, sacco_id, cycle, &member) {
            Some(record) => {
                contributions.set(member, true);
                total_contributed += record.amount;
            }
            None => {
                contributions.set(member, false);
                pool_complete = false;
            }
        }
    }

    Ok(CycleStatus {
        cycle,
        contributions,
        total_contributed,
        pool_complete,
    })
}

/// Whether `member` has a contribution record for (sacco, cycle).
pub fn has_contributed(
    env: &Env,
    sacco_id: u64,
    cycle: u64,
    member: &Address,
) -> Result<bool, ContractError> {
    group::load_sacco(env, sacco_id)?;
    Ok(ledger::contribution_for(env, sacco_id, cycle, member).is_some())
}
