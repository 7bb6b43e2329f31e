use soroban_sdk::{Address, Env, Map, Vec};
use token_ledger::invariants::debit_permitted;
use token_types::{Recipient, TokenError};

use crate::{
    access::require_non_negative,
    events::TokenEvents,
    storage::{get_balance, get_total_supply, set_balance, set_total_supply},
};

/// Balances touched by one call.
///
/// Reads fall through to storage; nothing is written until `commit`, so a
/// failing leg leaves every balance as it was.
struct StagedBalances {
    env: Env,
    balances: Map<Address, i128>,
}

impl StagedBalances {
    fn new(env: &Env) -> Self {
        Self {
            env: env.clone(),
            balances: Map::new(env),
        }
    }

    fn get(&self, id: &Address) -> i128 {
        match self.balances.get(id.clone()) {
            Some(balance) => balance,
            None => get_balance(&self.env, id),
        }
    }

    fn debit(&mut self, id: &Address, amount: i128) -> Result<(), TokenError> {
        let balance = self.get(id);
        if !debit_permitted(balance, amount) {
            return Err(TokenError::InsufficientBalance);
        }
        self.balances.set(id.clone(), balance - amount);
        Ok(())
    }

    fn credit(&mut self, id: &Address, amount: i128) -> Result<(), TokenError> {
        let balance = self
            .get(id)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        self.balances.set(id.clone(), balance);
        Ok(())
    }

    fn commit(self) {
        for (id, balance) in self.balances.iter() {
            set_balance(&self.env, &id, balance);
        }
    }
}

/// Move `amount` from `from` to `to`
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    require_non_negative(amount)?;

    let mut staged = StagedBalances::new(env);
    staged.debit(from, amount)?;
    staged.credit(to, amount)?;
    staged.commit();

    TokenEvents::transfer(env, from, to, amount);
    Ok(())
}

/// Pay each recipient in list order; every leg succeeds or none is kept
pub fn multi_transfer(env: &Env, from: &Address, recipients: &Vec<Recipient>) -> Result<(), TokenError> {
    let mut staged = StagedBalances::new(env);
    for recipient in recipients.iter() {
        require_non_negative(recipient.amount)?;
        staged.debit(from, recipient.amount)?;
        staged.credit(&recipient.to, recipient.amount)?;
    }
    staged.commit();

    for recipient in recipients.iter() {
        TokenEvents::transfer(env, from, &recipient.to, recipient.amount);
    }
    Ok(())
}

/// Create `amount` on `to`, growing the supply
pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    require_non_negative(amount)?;
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;

    let mut staged = StagedBalances::new(env);
    staged.credit(to, amount)?;
    staged.commit();
    set_total_supply(env, supply);

    TokenEvents::mint(env, to, amount);
    Ok(())
}

/// Destroy `amount` held by `from`, shrinking the supply
pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    require_non_negative(amount)?;

    let mut staged = StagedBalances::new(env);
    staged.debit(from, amount)?;
    staged.commit();
    set_total_supply(env, get_total_supply(env) - amount);

    TokenEvents::burn(env, from, amount);
    Ok(())
}
