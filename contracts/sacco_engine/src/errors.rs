use soroban_sdk::contracterror;

/// Every failure mode of the engine.
///
/// Grouped by kind: validation errors (bad input, never retried),
/// conflict errors (the ledger's duplicate-rejection invariant firing),
/// capacity errors, and not-found errors. A failed transaction is safe
/// to retry for any append path because the duplicate rejection makes
/// the retry observe `DuplicateContribution` / `DuplicatePayout` instead
/// of double-counting.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    SaccoNotFound = 1,
    GoalNotFound = 2,
    NotAMember = 3,
    AlreadyMember = 4,
    GroupFull = 5,
    InvalidParameters = 6,
    InvalidAmount = 7,
    AmountMismatch = 8,
    DuplicateContribution = 9,
    DuplicatePayout = 10,
    PoolIncomplete = 11,
    InvalidTarget = 12,
    NotGoalOwner = 13,
    Overflow = 14,
}
