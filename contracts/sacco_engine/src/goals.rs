//! # Goals
//!
//! Personal savings targets, independent of the group machinery. Each goal
//! is owned exclusively by its creator: every mutation requires the owner's
//! authorization and an ownership check, and reads are scoped per owner.
//!
//! `completed` is recomputed from `current >= target` on every mutating
//! operation, target edits included, so for non-decreasing targets
//! completion is one-way, while a target raised above the current amount
//! legitimately reopens the goal.

use soroban_sdk::{Address, Env, String, Vec};

use crate::errors::ContractError;
use crate::events;
use crate::storage;
use crate::types::Goal;

pub fn create_goal(
    env: &Env,
    owner: Address,
    label: String,
    target: i128,
) -> Result<Goal, ContractError> {
    owner.require_auth();

    if target <= 0 {
        return Err(ContractError::InvalidTarget);
    }

    let goal = Goal {
        id: storage::next_goal_id(env),
        owner: owner.clone(),
        label,
        current: 0,
        target,
        completed: false,
        created_at: env.ledger().timestamp(),
    };

    storage::set_goal(env, &goal);
    storage::add_owner_goal(env, &owner, goal.id);

    Ok(goal)
}

/// Add a caller-supplied delta to the goal's progress.
///
/// Retries after a transport failure risk double-counting; callers must
/// deduplicate at a higher level, the engine only validates the delta.
pub fn add_progress(
    env: &Env,
    owner: Address,
    goal_id: u64,
    amount: i128,
) -> Result<Goal, ContractError> {
    owner.require_auth();

    let mut goal = load_owned_goal(env, &owner, goal_id)?;

    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    goal.current = goal
        .current
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;

    let was_completed = goal.completed;
    goal.recompute_completed();
    storage::set_goal(env, &goal);

    if goal.completed && !was_completed {
        events::emit_goal_completed(env, goal.id, owner, goal.current, goal.target);
    }

    Ok(goal)
}

/// Partial update of label and/or target. A target change re-derives the
/// completed flag against the unchanged current amount.
pub fn update_goal(
    env: &Env,
    owner: Address,
    goal_id: u64,
    label: Option<String>,
    target: Option<i128>,
) -> Result<Goal, ContractError> {
    owner.require_auth();

    let mut goal = load_owned_goal(env, &owner, goal_id)?;

    if let Some(label) = label {
        goal.label = label;
    }
    if let Some(target) = target {
        if target <= 0 {
            return Err(ContractError::InvalidTarget);
        }
        goal.target = target;
    }

    let was_completed = goal.completed;
    goal.recompute_completed();
    storage::set_goal(env, &goal);

    if goal.completed && !was_completed {
        events::emit_goal_completed(env, goal.id, owner, goal.current, goal.target);
    }

    Ok(goal)
}

/// Permanently remove the goal. No soft-delete.
pub fn delete_goal(env: &Env, owner: Address, goal_id: u64) -> Result<(), ContractError> {
    owner.require_auth();

    load_owned_goal(env, &owner, goal_id)?;

    storage::remove_goal(env, goal_id);
    storage::remove_owner_goal(env, &owner, goal_id);

    Ok(())
}

pub fn get_goal(env: &Env, owner: &Address, goal_id: u64) -> Result<Goal, ContractError> {
    load_owned_goal(env, owner, goal_id)
}

/// All goals belonging to `owner`, in creation order.
pub fn goals_of(env: &Env, owner: &Address) -> Vec<Goal> {
    let mut goals = Vec::new(env);
    for id in storage::get_owner_goals(env, owner).iter() {
        if let Some(goal) = storage::get_goal(env, id) {
            goals.push_back(goal);
        }
    }
    goals
}

fn load_owned_goal(env: &Env, owner: &Address, goal_id: u64) -> Result<Goal, ContractError> {
    let goal = storage::get_goal(env, goal_id).ok_or(ContractError::GoalNotFound)?;
    if &goal.owner != owner {
        return Err(ContractError::NotGoalOwner);
    }
    Ok(goal)
}
