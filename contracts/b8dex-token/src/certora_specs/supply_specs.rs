// ============================================================================
// SUPPLY ACCOUNTING SPECIFICATIONS
// ============================================================================
//
// Transfers only move balances; mint and burn move the supply by exactly
// the amount.
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::{
    certora_specs::model::{construct, TokenSnapshot},
    B8dexToken,
};

/// RULE: Construction puts the whole supply on the owner
#[cfg(feature = "certora")]
#[rule]
pub fn construction_credits_owner(env: Env, owner: Address, other: Address) {
    cvlr_assume!(owner != other);
    construct(&env, &owner);

    let snapshot = TokenSnapshot::capture(&env, &owner, &other);
    cvlr_assert!(snapshot.first == snapshot.total_supply);
    cvlr_assert!(snapshot.second == 0);
    cvlr_assert!(snapshot.running);
}

/// RULE: An accepted transfer leaves the supply and the pair total unchanged
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_preserves_total_supply(env: Env, owner: Address, to: Address, amount: i128) {
    cvlr_assume!(owner != to);
    construct(&env, &owner);

    let before = TokenSnapshot::capture(&env, &owner, &to);
    let result = B8dexToken::transfer(env.clone(), owner.clone(), to.clone(), amount);
    let after = TokenSnapshot::capture(&env, &owner, &to);

    cvlr_assert!(after.total_supply == before.total_supply);
    if result.is_ok() {
        cvlr_assert!(after.first == before.first - amount);
        cvlr_assert!(after.second == before.second + amount);
    } else {
        cvlr_assert!(after.first == before.first);
        cvlr_assert!(after.second == before.second);
    }
}

/// RULE: A transfer never debits more than the sender holds
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_never_overdraws(env: Env, owner: Address, to: Address, amount: i128) {
    cvlr_assume!(owner != to);
    construct(&env, &owner);

    let before = TokenSnapshot::capture(&env, &owner, &to);
    cvlr_assume!(amount > before.first);

    let result = B8dexToken::transfer(env.clone(), owner, to, amount);
    cvlr_assert!(result.is_err());
}

/// RULE: Owner mint grows the supply and the owner balance by `amount`
#[cfg(feature = "certora")]
#[rule]
pub fn mint_increases_supply(env: Env, owner: Address, other: Address, amount: i128) {
    cvlr_assume!(owner != other);
    cvlr_assume!(amount >= 0 && amount <= 1_000_000_000);
    construct(&env, &owner);

    let before = TokenSnapshot::capture(&env, &owner, &other);
    let result = B8dexToken::mint(env.clone(), owner.clone(), amount);
    let after = TokenSnapshot::capture(&env, &owner, &other);

    cvlr_assert!(result.is_ok());
    cvlr_assert!(after.total_supply == before.total_supply + amount);
    cvlr_assert!(after.first == before.first + amount);
    cvlr_assert!(after.second == before.second);
}

/// RULE: Burn shrinks the supply and the holder balance by `amount`
#[cfg(feature = "certora")]
#[rule]
pub fn burn_decreases_supply(env: Env, owner: Address, other: Address, amount: i128) {
    cvlr_assume!(owner != other);
    construct(&env, &owner);

    let before = TokenSnapshot::capture(&env, &owner, &other);
    cvlr_assume!(amount >= 0 && amount <= before.first);

    let result = B8dexToken::burn(env.clone(), owner.clone(), amount);
    let after = TokenSnapshot::capture(&env, &owner, &other);

    cvlr_assert!(result.is_ok());
    cvlr_assert!(after.total_supply == before.total_supply - amount);
    cvlr_assert!(after.first == before.first - amount);
}

/// SANITY: A transfer can succeed at all
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_sanity(env: Env, owner: Address, to: Address, amount: i128) {
    construct(&env, &owner);
    let result = B8dexToken::transfer(env, owner, to, amount);
    cvlr_satisfy!(result.is_ok());
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
