//! # Payout
//!
//! Deterministic rotation scheduling: cycle `c` in a group with `N` current
//! members pays out to the member at rotation position `(c mod N) + 1`.
//! Every member receives exactly one payout per full rotation of `N`
//! cycles, ordered by join time, with no randomness; the recipient is
//! auditable from (sacco, cycle) alone.
//!
//! `N` is evaluated at disbursement time from the *current* roster. A member
//! who joins between a cycle's contribution window and its disbursement
//! changes the modulus for that and all later cycles; the new member also
//! owes a contribution before the pool counts as complete.

use soroban_sdk::{Address, Env};

use crate::contribution;
use crate::errors::ContractError;
use crate::events;
use crate::group;
use crate::ledger;
use crate::types::{PayoutRecord, Sacco};

/// The address the rotation rule selects for (sacco, cycle).
pub fn recipient_for(env: &Env, sacco_id: u64, cycle: u64) -> Result<Address, ContractError> {
    let sacco = group::load_sacco(env, sacco_id)?;
    Ok(rotation_recipient(&sacco, cycle))
}

fn rotation_recipient(sacco: &Sacco, cycle: u64) -> Address {
    // Position (c mod N) + 1, i.e. roster index c mod N. The roster is
    // never empty: the creator is enrolled at creation.
    let n = sacco.members.len() as u64;
    let index = (cycle % n) as u32;
    sacco.members.get_unchecked(index)
}

/// True when every current member has contributed for `cycle` and no
/// payout has been recorded for it yet.
pub fn eligible_for_payout(env: &Env, sacco_id: u64, cycle: u64) -> Result<bool, ContractError> {
    if ledger::payout_for(env, sacco_id, cycle).is_some() {
        return Ok(false);
    }
    let status = contribution::cycle_status(env, sacco_id, cycle)?;
    Ok(status.pool_complete)
}

/// Disburse the pooled funds for (sacco, cycle) to the rotation recipient.
///
/// The payout amount is `contribution_amount × N` for the `N` members on
/// the roster at disbursement time; pool completeness guarantees the
/// ledger holds exactly that much for the cycle, so the derived balance
/// stays non-negative. Anyone may call this once the pool is complete.
pub fn disburse(env: &Env, sacco_id: u64, cycle: u64) -> Result<PayoutRecord, ContractError> {
    let sacco = group::load_sacco(env, sacco_id)?;

    // Duplicate check comes first: a repeat call must report the existing
    // payout even if the roster has since grown.
    if ledger::payout_for(env, sacco_id, cycle).is_some() {
        return Err(ContractError::DuplicatePayout);
    }

    let status = contribution::cycle_status(env, sacco_id, cycle)?;
    if !status.pool_complete {
        return Err(ContractError::PoolIncomplete);
    }

    let amount = sacco
        .contribution_amount
        .checked_mul(sacco.members.len() as i128)
        .ok_or(ContractError::Overflow)?;

    let record = PayoutRecord {
        sacco_id,
        cycle,
        recipient: rotation_recipient(&sacco, cycle),
        amount,
        recorded_at: env.ledger().timestamp(),
    };

    ledger::append_payout(env, &record)?;

    events::emit_payout_disbursed(env, sacco_id, cycle, record.recipient.clone(), amount);

    Ok(record)
}
