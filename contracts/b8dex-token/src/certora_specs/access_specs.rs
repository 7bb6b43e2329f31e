// ============================================================================
// ACCESS CONTROL SPECIFICATIONS
// ============================================================================
//
// Only the owner may mint, burn from others or toggle the run state, and a
// stopped token rejects every transfer.
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env, Vec};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use token_types::TokenError;

#[cfg(feature = "certora")]
use crate::{
    certora_specs::model::{construct, TokenSnapshot},
    B8dexToken,
};

/// RULE: A non-owner mint is rejected and changes nothing
#[cfg(feature = "certora")]
#[rule]
pub fn non_owner_cannot_mint(env: Env, owner: Address, caller: Address, amount: i128) {
    cvlr_assume!(owner != caller);
    construct(&env, &owner);

    let before = TokenSnapshot::capture(&env, &owner, &caller);
    let result = B8dexToken::mint(env.clone(), caller.clone(), amount);
    let after = TokenSnapshot::capture(&env, &owner, &caller);

    cvlr_assert!(result == Err(TokenError::Unauthorized));
    cvlr_assert!(after.total_supply == before.total_supply);
    cvlr_assert!(after.second == before.second);
}

/// RULE: A non-owner cannot toggle the run state
#[cfg(feature = "certora")]
#[rule]
pub fn non_owner_cannot_start_stop(env: Env, owner: Address, caller: Address) {
    cvlr_assume!(owner != caller);
    construct(&env, &owner);

    let result = B8dexToken::start_stop(env.clone(), caller);
    cvlr_assert!(result == Err(TokenError::Unauthorized));
    cvlr_assert!(B8dexToken::is_running(env));
}

/// RULE: A non-owner cannot burn another holder's balance
#[cfg(feature = "certora")]
#[rule]
pub fn non_owner_cannot_burn_from(env: Env, owner: Address, caller: Address, amount: i128) {
    cvlr_assume!(owner != caller);
    construct(&env, &owner);

    let before = TokenSnapshot::capture(&env, &owner, &caller);
    let result = B8dexToken::burn_from(env.clone(), caller.clone(), owner.clone(), amount);
    let after = TokenSnapshot::capture(&env, &owner, &caller);

    cvlr_assert!(result == Err(TokenError::Unauthorized));
    cvlr_assert!(after.first == before.first);
}

/// RULE: While stopped, transfers are rejected before any balance moves
#[cfg(feature = "certora")]
#[rule]
pub fn stopped_token_rejects_transfer(env: Env, owner: Address, to: Address, amount: i128) {
    cvlr_assume!(owner != to);
    construct(&env, &owner);
    let _ = B8dexToken::start_stop(env.clone(), owner.clone());

    let before = TokenSnapshot::capture(&env, &owner, &to);
    let result = B8dexToken::transfer(env.clone(), owner.clone(), to.clone(), amount);
    let after = TokenSnapshot::capture(&env, &owner, &to);

    cvlr_assert!(!before.running);
    cvlr_assert!(result == Err(TokenError::NotRunning));
    cvlr_assert!(after.first == before.first);
    cvlr_assert!(after.second == before.second);
}

/// RULE: While stopped, batch transfers are rejected as well
#[cfg(feature = "certora")]
#[rule]
pub fn stopped_token_rejects_multi_transfer(env: Env, owner: Address, to: Address, amount: i128) {
    construct(&env, &owner);
    let _ = B8dexToken::start_stop(env.clone(), owner.clone());

    let recipients = Vec::from_array(&env, [to]);
    let values = Vec::from_array(&env, [amount]);
    let result = B8dexToken::multi_transfer(env, owner, recipients, values);
    cvlr_assert!(result == Err(TokenError::NotRunning));
}

/// RULE: Toggling twice restores the running state
#[cfg(feature = "certora")]
#[rule]
pub fn start_stop_round_trip(env: Env, owner: Address) {
    construct(&env, &owner);

    let stopped = B8dexToken::start_stop(env.clone(), owner.clone());
    let running = B8dexToken::start_stop(env.clone(), owner);
    cvlr_assert!(stopped.is_ok() && running.is_ok());
    cvlr_assert!(B8dexToken::is_running(env));
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
