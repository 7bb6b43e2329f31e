use soroban_sdk::{Address, Env};
use token_types::TokenError;

use crate::storage::{get_owner, get_state};

/// Owner guard, evaluated before a privileged call touches any state.
///
/// `caller` must already have been authenticated with `require_auth`.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
    if caller != &get_owner(env) {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

/// Run-state guard for the transfer family
pub fn require_running(env: &Env) -> Result<(), TokenError> {
    if !get_state(env).is_running() {
        return Err(TokenError::NotRunning);
    }
    Ok(())
}

pub fn require_non_negative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}
