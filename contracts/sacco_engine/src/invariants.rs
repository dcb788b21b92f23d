#![allow(dead_code)]

extern crate std;

use crate::types::{Goal, PayoutRecord, Sacco};

/// INV-1: A group's derived balance must never be negative.
pub fn assert_balance_non_negative(contribution_sum: i128, payout_sum: i128) {
    assert!(
        contribution_sum - payout_sum >= 0,
        "INV-1 violated: balance is negative ({} contributed, {} paid out)",
        contribution_sum,
        payout_sum
    );
}

/// INV-2: A sacco's roster never exceeds its capacity and never holds the
/// same member twice; rotation positions are therefore a gapless 1..=N.
pub fn assert_roster_well_formed(sacco: &Sacco) {
    assert!(
        sacco.members.len() <= sacco.max_members,
        "INV-2 violated: sacco {} has {} members over capacity {}",
        sacco.id,
        sacco.members.len(),
        sacco.max_members
    );
    for i in 0..sacco.members.len() {
        for j in (i + 1)..sacco.members.len() {
            assert_ne!(
                sacco.members.get_unchecked(i),
                sacco.members.get_unchecked(j),
                "INV-2 violated: sacco {} holds a duplicate member",
                sacco.id
            );
        }
    }
}

/// INV-3: Sacco configuration is valid: positive contribution, positive
/// cycle length, capacity of at least one.
pub fn assert_config_valid(sacco: &Sacco) {
    assert!(
        sacco.contribution_amount > 0,
        "INV-3 violated: sacco {} has non-positive contribution ({})",
        sacco.id,
        sacco.contribution_amount
    );
    assert!(
        sacco.cycle_length > 0,
        "INV-3 violated: sacco {} has zero cycle length",
        sacco.id
    );
    assert!(
        sacco.max_members >= 1,
        "INV-3 violated: sacco {} has zero capacity",
        sacco.id
    );
}

/// INV-4: A payout's recipient is exactly the member at rotation position
/// `(cycle mod N) + 1`, and its amount is the full pool for `N` members.
pub fn assert_payout_matches_rotation(sacco: &Sacco, payout: &PayoutRecord) {
    let n = sacco.members.len() as u64;
    let expected = sacco.members.get_unchecked((payout.cycle % n) as u32);
    assert_eq!(
        payout.recipient, expected,
        "INV-4 violated: cycle {} paid the wrong member",
        payout.cycle
    );
    assert_eq!(
        payout.amount,
        sacco.contribution_amount * sacco.members.len() as i128,
        "INV-4 violated: cycle {} payout is not the full pool",
        payout.cycle
    );
}

/// INV-5: A goal's completed flag always equals `current >= target`, and
/// its amounts stay in range.
pub fn assert_goal_consistent(goal: &Goal) {
    assert!(
        goal.target > 0,
        "INV-5 violated: goal {} has non-positive target ({})",
        goal.id,
        goal.target
    );
    assert!(
        goal.current >= 0,
        "INV-5 violated: goal {} has negative progress ({})",
        goal.id,
        goal.current
    );
    assert_eq!(
        goal.completed,
        goal.current >= goal.target,
        "INV-5 violated: goal {} completed flag disagrees with amounts",
        goal.id
    );
}

/// Run all stateless sacco invariants.
pub fn assert_all_sacco_invariants(sacco: &Sacco) {
    assert_roster_well_formed(sacco);
    assert_config_valid(sacco);
}
