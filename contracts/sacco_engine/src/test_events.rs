extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Events},
    symbol_short, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{ContributionMade, GoalCompleted, MemberJoined, PayoutDisbursed, SaccoCreated};
use crate::{SaccoEngine, SaccoEngineClient};

fn setup() -> (Env, SaccoEngineClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(SaccoEngine, ());
    let client = SaccoEngineClient::new(&env, &contract_id);
    (env, client)
}

fn create_sacco(env: &Env, client: &SaccoEngineClient, creator: &Address) -> u64 {
    client.create_sacco(
        creator,
        &String::from_str(env, "Events"),
        &50_000i128,
        &86_400u64,
        &3u32,
    )
}

#[test]
fn test_sacco_created_event() {
    let (env, client) = setup();
    let creator = Address::generate(&env);

    let sacco_id = create_sacco(&env, &client, &creator);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), sacco_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        sacco_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: SaccoCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        SaccoCreated {
            sacco_id,
            creator: creator.clone(),
            contribution_amount: 50_000,
            max_members: 3,
        }
    );
}

#[test]
fn test_member_joined_event() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let member = Address::generate(&env);
    let sacco_id = create_sacco(&env, &client, &creator);

    client.join_sacco(&member, &sacco_id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("joined").into_val(&env),
        sacco_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: MemberJoined = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        MemberJoined {
            sacco_id,
            member: member.clone(),
            position: 2,
        }
    );
}

#[test]
fn test_contribution_made_event() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let sacco_id = create_sacco(&env, &client, &creator);

    client.make_contribution(&creator, &sacco_id, &50_000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("contrib").into_val(&env),
        sacco_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ContributionMade = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ContributionMade {
            sacco_id,
            member: creator.clone(),
            cycle: 0,
            amount: 50_000,
        }
    );
}

#[test]
fn test_payout_disbursed_event() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let member = Address::generate(&env);
    let sacco_id = create_sacco(&env, &client, &creator);
    client.join_sacco(&member, &sacco_id);

    client.make_contribution(&creator, &sacco_id, &50_000);
    client.make_contribution(&member, &sacco_id, &50_000);
    client.disburse_payout(&sacco_id, &0);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("payout").into_val(&env),
        sacco_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PayoutDisbursed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PayoutDisbursed {
            sacco_id,
            cycle: 0,
            recipient: creator.clone(),
            amount: 100_000,
        }
    );
}

#[test]
fn test_goal_completed_event_fires_once() {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    let goal = client.create_goal(&owner, &String::from_str(&env, "Roof"), &1_000);

    // Below target: no completion event yet.
    client.add_goal_progress(&owner, &goal.id, &400);
    assert!(no_goal_completed_event(&env));

    // Crossing the target emits goal_done.
    client.add_goal_progress(&owner, &goal.id, &700);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("goal_done").into_val(&env),
        goal.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: GoalCompleted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        GoalCompleted {
            goal_id: goal.id,
            owner: owner.clone(),
            current: 1_100,
            target: 1_000,
        }
    );

    // A further addition while already complete does not re-emit.
    client.add_goal_progress(&owner, &goal.id, &100);
    assert!(no_goal_completed_event(&env));
}

/// True when the last invocation emitted no `GoalCompleted` event.
fn no_goal_completed_event(env: &Env) -> bool {
    match env.events().all().last() {
        None => true,
        Some(event) => {
            let data: Result<GoalCompleted, _> = event.2.try_into_val(env);
            data.is_err()
        }
    }
}
