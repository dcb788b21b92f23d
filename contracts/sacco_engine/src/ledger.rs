//! # Ledger
//!
//! Append-only store of [`ContributionRecord`] and [`PayoutRecord`] entries.
//!
//! This module is the integrity boundary the rest of the engine relies on:
//! it exposes exactly two write operations, both of which reject duplicates
//! instead of merging them, and no update or delete operation exists. Under
//! concurrent duplicate attempts exactly one append wins and the loser
//! observes `DuplicateContribution` / `DuplicatePayout`, which is what gives
//! `contribute` and `disburse` at-most-once semantics without any external
//! lock.
//!
//! The running per-sacco totals are maintained here and only here, inside
//! the same append paths, so `sum_contributions − sum_payouts` is always
//! re-derivable from the records and can never silently drift.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::ContractError;
use crate::storage;
use crate::types::{ContributionRecord, PayoutRecord};

/// Append one member's contribution for one cycle.
///
/// Rejects a second record for the same (sacco, member, cycle) rather than
/// summing it, to prevent silent double counting.
pub fn append_contribution(env: &Env, record: &ContributionRecord) -> Result<(), ContractError> {
    if record.amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if storage::has_contribution(env, record.sacco_id, record.cycle, &record.member) {
        return Err(ContractError::DuplicateContribution);
    }

    let total = storage::contribution_total(env, record.sacco_id)
        .checked_add(record.amount)
        .ok_or(ContractError::Overflow)?;

    storage::set_contribution(env, record);
    storage::add_cycle_contributor(env, record.sacco_id, record.cycle, &record.member);
    storage::set_contribution_total(env, record.sacco_id, total);
    Ok(())
}

/// Append one cycle's disbursement. At most one payout per (sacco, cycle).
pub fn append_payout(env: &Env, record: &PayoutRecord) -> Result<(), ContractError> {
    if storage::has_payout(env, record.sacco_id, record.cycle) {
        return Err(ContractError::DuplicatePayout);
    }

    let total = storage::payout_total(env, record.sacco_id)
        .checked_add(record.amount)
        .ok_or(ContractError::Overflow)?;

    storage::set_payout(env, record);
    storage::set_payout_total(env, record.sacco_id, total);
    Ok(())
}

/// Sum of every contribution ever recorded for `sacco_id`.
pub fn sum_contributions(env: &Env, sacco_id: u64) -> i128 {
    storage::contribution_total(env, sacco_id)
}

/// Sum of every payout ever recorded for `sacco_id`.
pub fn sum_payouts(env: &Env, sacco_id: u64) -> i128 {
    storage::payout_total(env, sacco_id)
}

/// Members who have a contribution record for (sacco, cycle).
pub fn contributors_for_cycle(env: &Env, sacco_id: u64, cycle: u64) -> Vec<Address> {
    storage::get_cycle_contributors(env, sacco_id, cycle)
}

pub fn contribution_for(
    env: &Env,
    sacco_id: u64,
    cycle: u64,
    member: &Address,
) -> Option<ContributionRecord> {
    storage::get_contribution(env, sacco_id, cycle, member)
}

pub fn payout_for(env: &Env, sacco_id: u64, cycle: u64) -> Option<PayoutRecord> {
    storage::get_payout(env, sacco_id, cycle)
}
