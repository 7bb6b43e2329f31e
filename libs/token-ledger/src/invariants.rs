// ============================================================================
// LEDGER INVARIANTS
// ============================================================================
//
// Pure predicates over balances and supply counters. The oracle checks them
// after every mutation, the scenario runner at every checkpoint, and the
// contract's formal-verification rules restate them.
//
// 1. SUPPLY - tracked balances sum to minted minus burned
// 2. BALANCES - never negative
// 3. TRANSFERS - moving tokens between accounts creates nothing
// 4. DEBITS - only what is held can leave an account
//
// ============================================================================

/// Invariant: tracked balances sum to the outstanding supply
///
/// Property:
///   sum(balance) == minted - burned
pub fn supply_conserved(total_tracked: i128, minted: i128, burned: i128) -> bool {
    match minted.checked_sub(burned) {
        Some(outstanding) => outstanding == total_tracked,
        None => false,
    }
}

/// Invariant: balance is non-negative
pub fn balance_non_negative(balance: i128) -> bool {
    balance >= 0
}

/// Invariant: a transfer leaves the pair sum unchanged
///
/// Property:
///   from_after + to_after == from_before + to_before
///
/// Holds for self-transfers too, where both sides are the same account.
pub fn transfer_conserves(
    from_before: i128,
    to_before: i128,
    from_after: i128,
    to_after: i128,
) -> bool {
    match (
        from_before.checked_add(to_before),
        from_after.checked_add(to_after),
    ) {
        (Some(before), Some(after)) => before == after,
        _ => false,
    }
}

/// Invariant: a debit is permitted only when covered by the balance
pub fn debit_permitted(balance: i128, amount: i128) -> bool {
    amount >= 0 && amount <= balance
}

/// Invariant: supply moves by exactly the minted or burned amount
pub fn supply_delta_matches(supply_before: i128, supply_after: i128, delta: i128) -> bool {
    supply_before.checked_add(delta) == Some(supply_after)
}
