extern crate std;


use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation},
    Address, Env, IntoVal, String, Symbol, Vec,
};
use token_types::{RunState, TokenError};

use crate::{B8dexToken, B8dexTokenClient};

const DECIMALS: u32 = 2;
const MAX_SUPPLY: i128 = 1_000;
const SUPPLY: i128 = 100_000;

fn create_token<'a>(env: &Env, owner: &Address) -> B8dexTokenClient<'a> {
    let contract_id = env.register(
        B8dexToken,
        (
            owner.clone(),
            String::from_str(env, "B8DEX"),
            String::from_str(env, "B8T"),
            DECIMALS,
            MAX_SUPPLY,
        ),
    );
    B8dexTokenClient::new(env, &contract_id)
}

fn setup(env: &Env) -> (B8dexTokenClient<'_>, Address, Address, Address) {
    env.mock_all_auths();
    let owner = Address::generate(env);
    let holder = Address::generate(env);
    let external = Address::generate(env);
    (create_token(env, &owner), owner, holder, external)
}

// === Deployment Tests ===

#[test]
fn test_constructor_sets_metadata() {
    let env = Env::default();
    let (token, owner, _, _) = setup(&env);

    assert_eq!(token.name(), String::from_str(&env, "B8DEX"));
    assert_eq!(token.symbol(), String::from_str(&env, "B8T"));
    assert_eq!(token.decimals(), DECIMALS);
    assert_eq!(token.owner(), owner);
    assert!(token.is_running());
    assert_eq!(token.run_state(), RunState::Running);
}

#[test]
fn test_constructor_mints_supply_to_owner() {
    let env = Env::default();
    let (token, owner, holder, _) = setup(&env);

    assert_eq!(token.total_supply(), SUPPLY);
    assert_eq!(token.balance(&owner), SUPPLY);
    assert_eq!(token.balance(&holder), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #7)")]
fn test_constructor_rejects_unscalable_supply() {
    let env = Env::default();
    let owner = Address::generate(&env);
    env.register(
        B8dexToken,
        (
            owner,
            String::from_str(&env, "B8DEX"),
            String::from_str(&env, "B8T"),
            39_u32,
            MAX_SUPPLY,
        ),
    );
}

// === Transfer Tests ===

#[test]
fn test_transfer() {
    let env = Env::default();
    let (token, owner, holder, _) = setup(&env);

    token.transfer(&owner, &holder, &100);

    assert_eq!(token.balance(&owner), SUPPLY - 100);
    assert_eq!(token.balance(&holder), 100);
    assert_eq!(token.total_supply(), SUPPLY);
}

#[test]
fn test_transfer_requires_sender_auth() {
    let env = Env::default();
    let (token, owner, holder, _) = setup(&env);

    token.transfer(&owner, &holder, &100);

    assert_eq!(
        env.auths(),
        std::vec![(
            owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    Symbol::new(&env, "transfer"),
                    (owner.clone(), holder.clone(), 100_i128).into_val(&env),
                )),
                sub_invocations: std::vec![],
            }
        )]
    );
}

#[test]
fn test_transfer_without_auth_aborts() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let holder = Address::generate(&env);
    let token = create_token(&env, &owner);

    let result = token.try_transfer(&owner, &holder, &100);
    assert!(matches!(result, Err(Err(_))));
    assert_eq!(token.balance(&owner), SUPPLY);
}

#[test]
fn test_transfer_insufficient_balance() {
    let env = Env::default();
    let (token, owner, holder, external) = setup(&env);

    token.transfer(&owner, &holder, &10);

    let result = token.try_transfer(&holder, &external, &11);
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    assert_eq!(token.balance(&holder), 10);
    assert_eq!(token.balance(&external), 0);
}

#[test]
fn test_transfer_negative_amount() {
    let env = Env::default();
    let (token, owner, holder, _) = setup(&env);

    let result = token.try_transfer(&owner, &holder, &-1);
    assert_eq!(result, Err(Ok(TokenError::InvalidAmount)));
}

#[test]
fn test_transfer_zero_and_self() {
    let env = Env::default();
    let (token, owner, holder, _) = setup(&env);

    token.transfer(&owner, &holder, &0);
    token.transfer(&owner, &owner, &SUPPLY);

    assert_eq!(token.balance(&owner), SUPPLY);
    assert_eq!(token.balance(&holder), 0);
}

// === Multi Transfer Tests ===

#[test]
fn test_multi_transfer() {
    let env = Env::default();
    let (token, owner, holder, external) = setup(&env);

    let to = Vec::from_array(&env, [holder.clone(), external.clone()]);
    let values = Vec::from_array(&env, [400_i128, 100]);
    token.multi_transfer(&owner, &to, &values);

    assert_eq!(token.balance(&owner), SUPPLY - 500);
    assert_eq!(token.balance(&holder), 400);
    assert_eq!(token.balance(&external), 100);
}

#[test]
fn test_multi_transfer_length_mismatch() {
    let env = Env::default();
    let (token, owner, holder, external) = setup(&env);

    let to = Vec::from_array(&env, [holder.clone(), external.clone()]);
    let values = Vec::from_array(&env, [400_i128]);
    let result = token.try_multi_transfer(&owner, &to, &values);

    assert_eq!(result, Err(Ok(TokenError::LengthMismatch)));
    assert_eq!(token.balance(&owner), SUPPLY);
}

#[test]
fn test_multi_transfer_all_or_nothing() {
    let env = Env::default();
    let (token, owner, holder, external) = setup(&env);
    token.transfer(&owner, &holder, &500);

    // Second leg overdraws; the first must not stick
    let to = Vec::from_array(&env, [external.clone(), external.clone()]);
    let values = Vec::from_array(&env, [300_i128, 300]);
    let result = token.try_multi_transfer(&holder, &to, &values);

    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    assert_eq!(token.balance(&holder), 500);
    assert_eq!(token.balance(&external), 0);
}

#[test]
fn test_multi_transfer_to_self_is_funded_in_order() {
    let env = Env::default();
    let (token, owner, holder, external) = setup(&env);
    token.transfer(&owner, &holder, &100);

    let to = Vec::from_array(&env, [holder.clone(), external.clone()]);
    let values = Vec::from_array(&env, [100_i128, 100]);
    token.multi_transfer(&holder, &to, &values);

    assert_eq!(token.balance(&holder), 0);
    assert_eq!(token.balance(&external), 100);
}

#[test]
fn test_multi_transfer_empty() {
    let env = Env::default();
    let (token, owner, _, _) = setup(&env);

    token.multi_transfer(&owner, &Vec::new(&env), &Vec::new(&env));
    assert_eq!(token.balance(&owner), SUPPLY);
}

// === Run State Tests ===

#[test]
fn test_start_stop_toggles() {
    let env = Env::default();
    let (token, owner, _, _) = setup(&env);

    assert_eq!(token.start_stop(&owner), RunState::Stopped);
    assert!(!token.is_running());
    assert_eq!(token.start_stop(&owner), RunState::Running);
    assert!(token.is_running());
}

#[test]
fn test_start_stop_not_owner() {
    let env = Env::default();
    let (token, _, holder, _) = setup(&env);

    let result = token.try_start_stop(&holder);
    assert_eq!(result, Err(Ok(TokenError::Unauthorized)));
    assert_eq!(TokenError::Unauthorized.reason(), "Ownable: caller is not the owner");
    assert!(token.is_running());
}

#[test]
fn test_stopped_rejects_transfers() {
    let env = Env::default();
    let (token, owner, holder, external) = setup(&env);
    token.transfer(&owner, &holder, &100);
    token.start_stop(&owner);

    assert_eq!(
        token.try_transfer(&owner, &holder, &1),
        Err(Ok(TokenError::NotRunning))
    );
    assert_eq!(
        token.try_transfer(&holder, &external, &1),
        Err(Ok(TokenError::NotRunning))
    );

    let to = Vec::from_array(&env, [external.clone()]);
    let values = Vec::from_array(&env, [1_i128]);
    assert_eq!(
        token.try_multi_transfer(&holder, &to, &values),
        Err(Ok(TokenError::NotRunning))
    );
    assert_eq!(TokenError::NotRunning.reason(), "Contract not running");

    assert_eq!(token.balance(&owner), SUPPLY - 100);
    assert_eq!(token.balance(&holder), 100);
    assert_eq!(token.balance(&external), 0);
}

#[test]
fn test_stopped_checks_run_state_before_lengths() {
    let env = Env::default();
    let (token, owner, holder, _) = setup(&env);
    token.start_stop(&owner);

    let to = Vec::from_array(&env, [holder.clone()]);
    let result = token.try_multi_transfer(&owner, &to, &Vec::new(&env));
    assert_eq!(result, Err(Ok(TokenError::NotRunning)));
}

#[test]
fn test_restart_allows_transfers() {
    let env = Env::default();
    let (token, owner, holder, _) = setup(&env);
    token.start_stop(&owner);
    token.start_stop(&owner);

    token.transfer(&owner, &holder, &1);
    assert_eq!(token.balance(&holder), 1);
}

// === Mint / Burn Tests ===

#[test]
fn test_mint_by_owner() {
    let env = Env::default();
    let (token, owner, _, _) = setup(&env);

    token.mint(&owner, &100);

    assert_eq!(token.total_supply(), SUPPLY + 100);
    assert_eq!(token.balance(&owner), SUPPLY + 100);
}

#[test]
fn test_mint_not_owner() {
    let env = Env::default();
    let (token, _, holder, _) = setup(&env);

    let result = token.try_mint(&holder, &100);
    assert_eq!(result, Err(Ok(TokenError::Unauthorized)));
    assert_eq!(token.total_supply(), SUPPLY);
    assert_eq!(token.balance(&holder), 0);
}

#[test]
fn test_mint_overflow() {
    let env = Env::default();
    let (token, owner, _, _) = setup(&env);

    let result = token.try_mint(&owner, &i128::MAX);
    assert_eq!(result, Err(Ok(TokenError::Overflow)));
    assert_eq!(token.total_supply(), SUPPLY);
}

#[test]
fn test_mint_and_burn_while_stopped() {
    let env = Env::default();
    let (token, owner, _, _) = setup(&env);
    token.start_stop(&owner);

    token.mint(&owner, &10);
    token.burn(&owner, &4);
    assert_eq!(token.total_supply(), SUPPLY + 6);
}

#[test]
fn test_burn_own_balance() {
    let env = Env::default();
    let (token, owner, holder, _) = setup(&env);
    token.transfer(&owner, &holder, &100);

    token.burn(&holder, &40);

    assert_eq!(token.balance(&holder), 60);
    assert_eq!(token.total_supply(), SUPPLY - 40);
}

#[test]
fn test_burn_more_than_balance() {
    let env = Env::default();
    let (token, owner, holder, _) = setup(&env);
    token.transfer(&owner, &holder, &100);

    let result = token.try_burn(&holder, &101);
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    assert_eq!(token.total_supply(), SUPPLY);
}

#[test]
fn test_burn_from_by_owner() {
    let env = Env::default();
    let (token, owner, holder, _) = setup(&env);
    token.transfer(&owner, &holder, &100);

    token.burn_from(&owner, &holder, &30);

    assert_eq!(token.balance(&holder), 70);
    assert_eq!(token.total_supply(), SUPPLY - 30);
}

#[test]
fn test_burn_from_not_owner() {
    let env = Env::default();
    let (token, owner, holder, _) = setup(&env);

    let result = token.try_burn_from(&holder, &owner, &30);
    assert_eq!(result, Err(Ok(TokenError::Unauthorized)));
    assert_eq!(token.balance(&owner), SUPPLY);
}

// === Ownership Tests ===

#[test]
fn test_transfer_ownership() {
    let env = Env::default();
    let (token, owner, holder, _) = setup(&env);

    token.transfer_ownership(&owner, &holder);
    assert_eq!(token.owner(), holder);

    assert_eq!(
        token.try_start_stop(&owner),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(token.start_stop(&holder), RunState::Stopped);
}

#[test]
fn test_transfer_ownership_not_owner() {
    let env = Env::default();
    let (token, owner, holder, external) = setup(&env);

    let result = token.try_transfer_ownership(&holder, &external);
    assert_eq!(result, Err(Ok(TokenError::Unauthorized)));
    assert_eq!(token.owner(), owner);
}
