//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by the engine:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key          | Type  | Description                       |
//! |--------------|-------|-----------------------------------|
//! | `SaccoCount` | `u64` | Auto-increment sacco ID allocator |
//! | `GoalCount`  | `u64` | Auto-increment goal ID allocator  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day
//! remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                           | Type                 | Description                         |
//! |-------------------------------|----------------------|-------------------------------------|
//! | `Sacco(id)`                   | `Sacco`              | Group config + member roster        |
//! | `Contribution(id, cycle, m)`  | `ContributionRecord` | One member's payment for one cycle  |
//! | `CycleContributors(id, cycle)`| `Vec<Address>`       | Who has paid for a cycle            |
//! | `Payout(id, cycle)`           | `PayoutRecord`       | A cycle's disbursement              |
//! | `ContributionTotal(id)`       | `i128`               | Running sum of all contributions    |
//! | `PayoutTotal(id)`             | `i128`               | Running sum of all payouts          |
//! | `MemberSaccos(addr)`          | `Vec<u64>`           | Groups an address belongs to        |
//! | `Goal(id)`                    | `Goal`               | A personal savings goal             |
//! | `OwnerGoals(addr)`            | `Vec<u64>`           | Goal IDs owned by an address        |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! ## Why running totals next to an append-only ledger?
//!
//! `ContributionTotal` / `PayoutTotal` exist so that `get_balance` does not
//! have to enumerate every record ever written. They are written *only*
//! inside the two append helpers in [`crate::ledger`], under the same
//! duplicate-rejection checks, so they cannot drift from the records they
//! summarize.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{ContributionRecord, Goal, PayoutRecord, Sacco};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys (`SaccoCount`, `GoalCount`) live as long as the
/// contract and are extended together. Persistent-tier keys hold
/// per-entity data with independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global auto-increment allocator for sacco IDs (Instance).
    SaccoCount,
    /// Global auto-increment allocator for goal IDs (Instance).
    GoalCount,
    /// Group config and roster keyed by ID (Persistent).
    Sacco(u64),
    /// Contribution keyed by (sacco, cycle, member) (Persistent).
    Contribution(u64, u64, Address),
    /// Contributor index keyed by (sacco, cycle) (Persistent).
    CycleContributors(u64, u64),
    /// Payout keyed by (sacco, cycle) (Persistent).
    Payout(u64, u64),
    /// Running sum of contributions keyed by sacco (Persistent).
    ContributionTotal(u64),
    /// Running sum of payouts keyed by sacco (Persistent).
    PayoutTotal(u64),
    /// Sacco IDs an address has joined (Persistent).
    MemberSaccos(Address),
    /// Goal keyed by ID (Persistent).
    Goal(u64),
    /// Goal IDs keyed by owner (Persistent).
    OwnerGoals(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Allocate the next sacco ID. IDs start at 1 and are never reused, so
/// the stored counter doubles as the total-saccos projection.
pub fn next_sacco_id(env: &Env) -> u64 {
    bump_instance(env);
    let next: u64 = sacco_count(env) + 1;
    env.storage().instance().set(&DataKey::SaccoCount, &next);
    next
}

/// Total number of saccos ever created.
pub fn sacco_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::SaccoCount)
        .unwrap_or(0)
}

/// Allocate the next goal ID.
pub fn next_goal_id(env: &Env) -> u64 {
    bump_instance(env);
    let next: u64 = env
        .storage()
        .instance()
        .get(&DataKey::GoalCount)
        .unwrap_or(0u64)
        + 1;
    env.storage().instance().set(&DataKey::GoalCount, &next);
    next
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Sacco ──

pub fn get_sacco(env: &Env, id: u64) -> Option<Sacco> {
    let key = DataKey::Sacco(id);
    let sacco: Option<Sacco> = env.storage().persistent().get(&key);
    if sacco.is_some() {
        bump_persistent(env, &key);
    }
    sacco
}

pub fn set_sacco(env: &Env, sacco: &Sacco) {
    let key = DataKey::Sacco(sacco.id);
    env.storage().persistent().set(&key, sacco);
    bump_persistent(env, &key);
}

// ── Member → sacco index ──

pub fn get_member_saccos(env: &Env, member: &Address) -> Vec<u64> {
    let key = DataKey::MemberSaccos(member.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn add_member_sacco(env: &Env, member: &Address, sacco_id: u64) {
    let key = DataKey::MemberSaccos(member.clone());
    let mut saccos = get_member_saccos(env, member);
    saccos.push_back(sacco_id);
    env.storage().persistent().set(&key, &saccos);
    bump_persistent(env, &key);
}

// ── Contribution records ──

pub fn has_contribution(env: &Env, sacco_id: u64, cycle: u64, member: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Contribution(sacco_id, cycle, member.clone()))
}

pub fn get_contribution(
    env: &Env,
    sacco_id: u64,
    cycle: u64,
    member: &Address,
) -> Option<ContributionRecord> {
    let key = DataKey::Contribution(sacco_id, cycle, member.clone());
    let record: Option<ContributionRecord> = env.storage().persistent().get(&key);
    if record.is_some() {
        bump_persistent(env, &key);
    }
    record
}

pub fn set_contribution(env: &Env, record: &ContributionRecord) {
    let key = DataKey::Contribution(record.sacco_id, record.cycle, record.member.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

pub fn get_cycle_contributors(env: &Env, sacco_id: u64, cycle: u64) -> Vec<Address> {
    let key = DataKey::CycleContributors(sacco_id, cycle);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn add_cycle_contributor(env: &Env, sacco_id: u64, cycle: u64, member: &Address) {
    let key = DataKey::CycleContributors(sacco_id, cycle);
    let mut contributors = get_cycle_contributors(env, sacco_id, cycle);
    contributors.push_back(member.clone());
    env.storage().persistent().set(&key, &contributors);
    bump_persistent(env, &key);
}

// ── Payout records ──

pub fn has_payout(env: &Env, sacco_id: u64, cycle: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Payout(sacco_id, cycle))
}

pub fn get_payout(env: &Env, sacco_id: u64, cycle: u64) -> Option<PayoutRecord> {
    let key = DataKey::Payout(sacco_id, cycle);
    let record: Option<PayoutRecord> = env.storage().persistent().get(&key);
    if record.is_some() {
        bump_persistent(env, &key);
    }
    record
}

pub fn set_payout(env: &Env, record: &PayoutRecord) {
    let key = DataKey::Payout(record.sacco_id, record.cycle);
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

// ── Running totals ──

pub fn contribution_total(env: &Env, sacco_id: u64) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::ContributionTotal(sacco_id))
        .unwrap_or(0)
}

pub fn set_contribution_total(env: &Env, sacco_id: u64, total: i128) {
    let key = DataKey::ContributionTotal(sacco_id);
    env.storage().persistent().set(&key, &total);
    bump_persistent(env, &key);
}

pub fn payout_total(env: &Env, sacco_id: u64) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::PayoutTotal(sacco_id))
        .unwrap_or(0)
}

pub fn set_payout_total(env: &Env, sacco_id: u64, total: i128) {
    let key = DataKey::PayoutTotal(sacco_id);
    env.storage().persistent().set(&key, &total);
    bump_persistent(env, &key);
}

// ── Goals ──

pub fn get_goal(env: &Env, id: u64) -> Option<Goal> {
    let key = DataKey::Goal(id);
    let goal: Option<Goal> = env.storage().persistent().get(&key);
    if goal.is_some() {
        bump_persistent(env, &key);
    }
    goal
}

pub fn set_goal(env: &Env, goal: &Goal) {
    let key = DataKey::Goal(goal.id);
    env.storage().persistent().set(&key, goal);
    bump_persistent(env, &key);
}

pub fn remove_goal(env: &Env, id: u64) {
    env.storage().persistent().remove(&DataKey::Goal(id));
}

pub fn get_owner_goals(env: &Env, owner: &Address) -> Vec<u64> {
    let key = DataKey::OwnerGoals(owner.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn add_owner_goal(env: &Env, owner: &Address, goal_id: u64) {
    let key = DataKey::OwnerGoals(owner.clone());
    let mut goals = get_owner_goals(env, owner);
    goals.push_back(goal_id);
    env.storage().persistent().set(&key, &goals);
    bump_persistent(env, &key);
}

pub fn remove_owner_goal(env: &Env, owner: &Address, goal_id: u64) {
    let key = DataKey::OwnerGoals(owner.clone());
    let goals = get_owner_goals(env, owner);
    let mut remaining = Vec::new(env);
    for id in goals.iter() {
        if id != goal_id {
            remaining.push_back(id);
        }
    }
    env.storage().persistent().set(&key, &remaining);
    bump_persistent(env, &key);
}
