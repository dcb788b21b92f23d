//! # Types
//!
//! Shared data structures used across all modules of the SACCO engine.
//!
//! ## Design decisions
//!
//! ### Derived balance, append-only records
//!
//! A sacco never stores a mutable balance field. [`ContributionRecord`] and
//! [`PayoutRecord`] entries are written exactly once and never edited; the
//! balance is always `sum(contributions) − sum(payouts)`, re-derivable from
//! the records alone. Corrections require a new compensating record.
//!
//! ### Rotation order is join order
//!
//! `Sacco::members` is append-only, so a member's rotation position is its
//! vector index + 1. Positions are a gapless `1..=N` permutation by
//! construction; there is no separate position field to drift out of sync.
//!
//! ### Goal as a two-state machine
//!
//! ```text
//! InProgress ──► Completed        (current >= target)
//! Completed  ──► InProgress       (only via a target increase)
//! ```
//!
//! `Goal::completed` is not stored opinion; it is recomputed from
//! `current >= target` on every mutating operation, so for non-decreasing
//! targets the transition is one-way.

use soroban_sdk::{contracttype, Address, Map, String, Vec};

/// A rotating savings group.
///
/// Written at creation and on every successful join; all other fields are
/// immutable after creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sacco {
    /// Auto-incremented unique ID, allocated from 1 and never reused.
    pub id: u64,
    pub name: String,
    /// Address that created the group; auto-enrolled at rotation position 1.
    pub creator: Address,
    /// Amount each member owes per cycle, in the smallest currency unit.
    pub contribution_amount: i128,
    /// Cycle length in seconds. The active cycle index is
    /// `(now − created_at) / cycle_length`.
    pub cycle_length: u64,
    pub max_members: u32,
    /// Members in join order. Index + 1 is the rotation position.
    pub members: Vec<Address>,
    pub created_at: u64,
}

impl Sacco {
    /// 1-based rotation position of `member`, or `None` if not enrolled.
    pub fn position_of(&self, member: &Address) -> Option<u32> {
        for (i, m) in self.members.iter().enumerate() {
            if &m == member {
                return Some(i as u32 + 1);
            }
        }
        None
    }

    pub fn is_member(&self, member: &Address) -> bool {
        self.position_of(member).is_some()
    }
}

/// Summary projection of a sacco, the shape the list/detail pages read.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaccoInfo {
    pub name: String,
    pub creator: Address,
    pub contribution_amount: i128,
    pub member_count: u32,
}

/// One member's contribution for one cycle. Append-only; at most one
/// record exists per (sacco, member, cycle).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionRecord {
    pub sacco_id: u64,
    pub member: Address,
    pub cycle: u64,
    pub amount: i128,
    pub recorded_at: u64,
}

/// One cycle's disbursement. Append-only; at most one record exists per
/// (sacco, cycle).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutRecord {
    pub sacco_id: u64,
    pub cycle: u64,
    pub recipient: Address,
    pub amount: i128,
    pub recorded_at: u64,
}

/// Per-cycle view used to decide pool completeness before a payout.
#[contracttype]
#[derive(Clone, Debug)]
pub struct CycleStatus {
    pub cycle: u64,
    /// Contributed flag for every *current* member.
    pub contributions: Map<Address, bool>,
    pub total_contributed: i128,
    /// True when every current member has a record for this cycle.
    pub pool_complete: bool,
}

/// A personal savings target. Owned exclusively by its creator; mutated
/// only through owner-authorized operations and deletable at will.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Goal {
    pub id: u64,
    pub owner: Address,
    pub label: String,
    pub current: i128,
    pub target: i128,
    pub completed: bool,
    pub created_at: u64,
}

impl Goal {
    /// Re-derive the completed flag. Called after every mutation so the
    /// flag can never disagree with the amounts.
    pub fn recompute_completed(&mut self) {
        self.completed = self.current >= self.target;
    }
}
