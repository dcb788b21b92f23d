use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaccoCreated {
    pub sacco_id: u64,
    pub creator: Address,
    pub contribution_amount: i128,
    pub max_members: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberJoined {
    pub sacco_id: u64,
    pub member: Address,
    pub position: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionMade {
    pub sacco_id: u64,
    pub member: Address,
    pub cycle: u64,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutDisbursed {
    pub sacco_id: u64,
    pub cycle: u64,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalCompleted {
    pub goal_id: u64,
    pub owner: Address,
    pub current: i128,
    pub target: i128,
}

pub fn emit_sacco_created(
    env: &Env,
    sacco_id: u64,
    creator: Address,
    contribution_amount: i128,
    max_members: u32,
) {
    let topics = (symbol_short!("created"), sacco_id);
    let data = SaccoCreated {
        sacco_id,
        creator,
        contribution_amount,
        max_members,
    };
    env.events().publish(topics, data);
}

pub fn emit_member_joined(env: &Env, sacco_id: u64, member: Address, position: u32) {
    let topics = (symbol_short!("joined"), sacco_id);
    let data = MemberJoined {
        sacco_id,
        member,
        position,
    };
    env.events().publish(topics, data);
}

pub fn emit_contribution_made(
    env: &Env,
    sacco_id: u64,
    member: Address,
    cycle: u64,
    amount: i128,
) {
    let topics = (symbol_short!("contrib"), sacco_id);
    let data = ContributionMade {
        sacco_id,
        member,
        cycle,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_payout_disbursed(
    env: &Env,
    sacco_id: u64,
    cycle: u64,
    recipient: Address,
    amount: i128,
) {
    let topics = (symbol_short!("payout"), sacco_id);
    let data = PayoutDisbursed {
        sacco_id,
        cycle,
        recipient,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_goal_completed(env: &Env, goal_id: u64, owner: Address, current: i128, target: i128) {
    let topics = (symbol_short!("goal_done"), goal_id);
    let data = GoalCompleted {
        goal_id,
        owner,
        current,
        target,
    };
    env.events().publish(topics, data);
}
