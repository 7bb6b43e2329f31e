#![no_std]

mod access;
mod balances;
mod events;
mod storage;

pub mod certora_specs;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String, Vec};
use token_types::{scaled_supply, Recipient, RunState, TokenError};

use access::{require_owner, require_running};
use events::TokenEvents;
use storage::{
    get_balance, get_metadata, get_owner, get_state, get_total_supply, set_metadata, set_owner,
    set_state, TokenMetadata,
};

/// Fixed-supply token with an owner, a pause switch and batch transfers
#[contract]
pub struct B8dexToken;

#[contractimpl]
impl B8dexToken {
    /// Deploy the token and mint the whole supply to `owner`.
    ///
    /// # Arguments
    /// * `owner` - Deployer; receives the supply and the owner role
    /// * `name`, `symbol`, `decimals` - Token identity
    /// * `max_supply` - Supply in whole tokens, scaled by `10^decimals`
    pub fn __constructor(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        decimals: u32,
        max_supply: i128,
    ) {
        let supply = match scaled_supply(max_supply, decimals) {
            Some(supply) => supply,
            None => panic_with_error!(&env, TokenError::InvalidSupply),
        };

        set_owner(&env, &owner);
        set_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        set_state(&env, RunState::Running);

        if let Err(error) = balances::mint(&env, &owner, supply) {
            panic_with_error!(&env, error);
        }
        log!(&env, "token constructed", owner, supply);
    }

    // === Transfers ===

    /// Move `amount` from `from` to `to`. Rejected while stopped.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        require_running(&env)?;
        balances::transfer(&env, &from, &to, amount)
    }

    /// Pay `values[i]` to `to[i]` for every `i`, in order.
    ///
    /// All-or-nothing: if any leg fails, no balance changes.
    pub fn multi_transfer(
        env: Env,
        from: Address,
        to: Vec<Address>,
        values: Vec<i128>,
    ) -> Result<(), TokenError> {
        from.require_auth();
        require_running(&env)?;
        if to.len() != values.len() {
            return Err(TokenError::LengthMismatch);
        }

        let mut recipients = Vec::new(&env);
        for (to, amount) in to.iter().zip(values.iter()) {
            recipients.push_back(Recipient { to, amount });
        }
        balances::multi_transfer(&env, &from, &recipients)
    }

    // === Supply ===

    /// Mint `amount` to the owner
    pub fn mint(env: Env, caller: Address, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        require_owner(&env, &caller)?;
        balances::mint(&env, &caller, amount)
    }

    /// Burn `amount` of the caller's own balance
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        balances::burn(&env, &from, amount)
    }

    /// Owner burns `amount` held by `from`
    pub fn burn_from(env: Env, caller: Address, from: Address, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        require_owner(&env, &caller)?;
        balances::burn(&env, &from, amount)
    }

    // === Owner controls ===

    /// Toggle between running and stopped; returns the new state
    pub fn start_stop(env: Env, caller: Address) -> Result<RunState, TokenError> {
        caller.require_auth();
        require_owner(&env, &caller)?;

        let state = get_state(&env).toggled();
        set_state(&env, state);

        TokenEvents::run_state(&env, &caller, state);
        log!(&env, "run state toggled", state.is_running());
        Ok(state)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), TokenError> {
        caller.require_auth();
        require_owner(&env, &caller)?;

        set_owner(&env, &new_owner);
        TokenEvents::ownership(&env, &caller, &new_owner);
        Ok(())
    }

    // === View Functions ===

    pub fn name(env: Env) -> String {
        get_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        get_metadata(&env).symbol
    }

    pub fn decimals(env: Env) -> u32 {
        get_metadata(&env).decimals
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn owner(env: Env) -> Address {
        get_owner(&env)
    }

    pub fn is_running(env: Env) -> bool {
        get_state(&env).is_running()
    }

    pub fn run_state(env: Env) -> RunState {
        get_state(&env)
    }
}
