//! # SACCO Engine Contract
//!
//! This is the root crate of the **SACCO rotating-savings engine**. It
//! exposes the single Soroban contract `SaccoEngine` whose entry points
//! cover the full group and goal lifecycle:
//!
//! | Concern       | Entry Point(s)                                       |
//! |---------------|------------------------------------------------------|
//! | Groups        | [`SaccoEngine::create_sacco`], `join_sacco`          |
//! | Contributions | [`SaccoEngine::make_contribution`]                   |
//! | Payouts       | [`SaccoEngine::disburse_payout`]                     |
//! | Goals         | `create_goal`, `add_goal_progress`, `update_goal`, `delete_goal` |
//! | Queries       | `get_sacco_info`, `get_balance`, `get_total_saccos`, `get_cycle_status`, … |
//!
//! ## Architecture
//!
//! Membership and the group catalog live in [`group`], the append-only
//! record store in [`ledger`], cycle accounting in [`contribution`],
//! rotation scheduling in [`payout`], and personal targets in [`goals`].
//! Storage access is fully delegated to [`storage`]. This file contains
//! **only** the public entry points; no business logic lives here
//! directly.
//!
//! All amounts are integers in the smallest currency unit; the engine
//! records them but never moves tokens. Every ledger write is append-only
//! and duplicate-rejecting, so any failed transaction may be retried
//! without risk of double counting.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub mod events;
pub mod ledger;

mod contribution;
mod errors;
mod goals;
mod group;
mod payout;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use errors::ContractError;
pub use types::{ContributionRecord, CycleStatus, Goal, PayoutRecord, Sacco, SaccoInfo};

#[contract]
pub struct SaccoEngine;

#[contractimpl]
impl SaccoEngine {
    // ─────────────────────────────────────────────────────────
    // Group lifecycle
    // ─────────────────────────────────────────────────────────

    /// Create a new savings group. The caller is auto-enrolled as the first
    /// member at rotation position 1. Returns the new group's ID.
    pub fn create_sacco(
        env: Env,
        creator: Address,
        name: String,
        contribution_amount: i128,
        cycle_length: u64,
        max_members: u32,
    ) -> Result<u64, ContractError> {
        group::create_sacco(
            &env,
            creator,
            name,
            contribution_amount,
            cycle_length,
            max_members,
        )
    }

    /// Join an existing group at the next rotation position.
    pub fn join_sacco(env: Env, member: Address, sacco_id: u64) -> Result<(), ContractError> {
        group::join_sacco(&env, member, sacco_id)
    }

    /// Get a group's full record, members included.
    pub fn get_sacco(env: Env, sacco_id: u64) -> Result<Sacco, ContractError> {
        group::load_sacco(&env, sacco_id)
    }

    /// Get the summary projection shown by the list and detail pages.
    pub fn get_sacco_info(env: Env, sacco_id: u64) -> Result<SaccoInfo, ContractError> {
        group::sacco_info(&env, sacco_id)
    }

    /// Derived balance: all contributions minus all payouts. Never negative.
    pub fn get_balance(env: Env, sacco_id: u64) -> Result<i128, ContractError> {
        group::load_sacco(&env, sacco_id)?;
        Ok(ledger::sum_contributions(&env, sacco_id) - ledger::sum_payouts(&env, sacco_id))
    }

    /// Number of saccos ever created. IDs run `1..=total`.
    pub fn get_total_saccos(env: Env) -> u64 {
        group::total_saccos(&env)
    }

    /// All group IDs `member` belongs to.
    pub fn get_member_saccos(env: Env, member: Address) -> Vec<u64> {
        group::saccos_of(&env, &member)
    }

    /// 1-based rotation position of `member` in `sacco_id`.
    pub fn get_position(env: Env, sacco_id: u64, member: Address) -> Result<u32, ContractError> {
        group::position_of(&env, sacco_id, &member)
    }

    /// Current number of members in `sacco_id`.
    pub fn get_member_count(env: Env, sacco_id: u64) -> Result<u32, ContractError> {
        group::member_count(&env, sacco_id)
    }

    // ─────────────────────────────────────────────────────────
    // Contributions
    // ─────────────────────────────────────────────────────────

    /// Contribute to the currently active cycle. `amount` must equal the
    /// group's required contribution exactly. Returns the cycle index the
    /// payment was recorded against.
    pub fn make_contribution(
        env: Env,
        member: Address,
        sacco_id: u64,
        amount: i128,
    ) -> Result<u64, ContractError> {
        contribution::contribute(&env, member, sacco_id, amount)
    }

    /// The cycle index active right now, derived from elapsed time.
    pub fn get_current_cycle(env: Env, sacco_id: u64) -> Result<u64, ContractError> {
        let sacco = group::load_sacco(&env, sacco_id)?;
        Ok(contribution::current_cycle(&env, &sacco))
    }

    /// Per-member contributed flags and pool completeness for a cycle.
    pub fn get_cycle_status(
        env: Env,
        sacco_id: u64,
        cycle: u64,
    ) -> Result<CycleStatus, ContractError> {
        contribution::cycle_status(&env, sacco_id, cycle)
    }

    /// Members with a contribution record for (sacco, cycle).
    pub fn get_cycle_contributors(env: Env, sacco_id: u64, cycle: u64) -> Vec<Address> {
        ledger::contributors_for_cycle(&env, sacco_id, cycle)
    }

    /// Whether `member` has contributed for (sacco, cycle).
    pub fn has_contributed(
        env: Env,
        sacco_id: u64,
        cycle: u64,
        member: Address,
    ) -> Result<bool, ContractError> {
        contribution::has_contributed(&env, sacco_id, cycle, &member)
    }

    // ─────────────────────────────────────────────────────────
    // Payouts
    // ─────────────────────────────────────────────────────────

    /// True when the pool is complete for `cycle` and no payout has been
    /// recorded yet.
    pub fn is_payout_ready(env: Env, sacco_id: u64, cycle: u64) -> Result<bool, ContractError> {
        payout::eligible_for_payout(&env, sacco_id, cycle)
    }

    /// The member the rotation rule selects for (sacco, cycle).
    pub fn get_payout_recipient(
        env: Env,
        sacco_id: u64,
        cycle: u64,
    ) -> Result<Address, ContractError> {
        payout::recipient_for(&env, sacco_id, cycle)
    }

    /// Disburse the pooled funds for a cycle to its rotation recipient.
    /// Anyone can call this once all contributions are in.
    pub fn disburse_payout(
        env: Env,
        sacco_id: u64,
        cycle: u64,
    ) -> Result<PayoutRecord, ContractError> {
        payout::disburse(&env, sacco_id, cycle)
    }

    /// The payout recorded for (sacco, cycle), if any.
    pub fn get_payout(env: Env, sacco_id: u64, cycle: u64) -> Option<PayoutRecord> {
        ledger::payout_for(&env, sacco_id, cycle)
    }

    // ─────────────────────────────────────────────────────────
    // Goals
    // ─────────────────────────────────────────────────────────

    /// Create a personal savings goal with `current = 0`.
    pub fn create_goal(
        env: Env,
        owner: Address,
        label: String,
        target: i128,
    ) -> Result<Goal, ContractError> {
        goals::create_goal(&env, owner, label, target)
    }

    /// Add a positive delta to a goal's progress.
    pub fn add_goal_progress(
        env: Env,
        owner: Address,
        goal_id: u64,
        amount: i128,
    ) -> Result<Goal, ContractError> {
        goals::add_progress(&env, owner, goal_id, amount)
    }

    /// Partially update a goal's label and/or target.
    pub fn update_goal(
        env: Env,
        owner: Address,
        goal_id: u64,
        label: Option<String>,
        target: Option<i128>,
    ) -> Result<Goal, ContractError> {
        goals::update_goal(&env, owner, goal_id, label, target)
    }

    /// Permanently delete a goal.
    pub fn delete_goal(env: Env, owner: Address, goal_id: u64) -> Result<(), ContractError> {
        goals::delete_goal(&env, owner, goal_id)
    }

    /// Get one goal; the caller must be its owner.
    pub fn get_goal(env: Env, owner: Address, goal_id: u64) -> Result<Goal, ContractError> {
        goals::get_goal(&env, &owner, goal_id)
    }

    /// All goals belonging to `owner`, in creation order.
    pub fn get_goals(env: Env, owner: Address) -> Vec<Goal> {
        goals::goals_of(&env, &owner)
    }
}
