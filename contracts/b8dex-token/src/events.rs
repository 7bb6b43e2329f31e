use soroban_sdk::{Address, Env, Symbol};
use token_types::RunState;

pub struct TokenEvents;

impl TokenEvents {
    /// Topics: `("transfer", from, to)`
    /// Data:   `amount`
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        env.events().publish(
            (Symbol::new(env, "transfer"), from.clone(), to.clone()),
            amount,
        );
    }

    pub fn mint(env: &Env, to: &Address, amount: i128) {
        env.events()
            .publish((Symbol::new(env, "mint"), to.clone()), amount);
    }

    pub fn burn(env: &Env, from: &Address, amount: i128) {
        env.events()
            .publish((Symbol::new(env, "burn"), from.clone()), amount);
    }

    /// Topics: `("run_state", caller)`
    /// Data:   `RunState` after the toggle
    pub fn run_state(env: &Env, caller: &Address, state: RunState) {
        env.events()
            .publish((Symbol::new(env, "run_state"), caller.clone()), state);
    }

    pub fn ownership(env: &Env, previous: &Address, new_owner: &Address) {
        env.events().publish(
            (Symbol::new(env, "ownership"),),
            (previous.clone(), new_owner.clone()),
        );
    }
}
