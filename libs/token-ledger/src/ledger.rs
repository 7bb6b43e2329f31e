use soroban_sdk::{Address, Env, Map, Vec};
use token_types::Recipient;

use crate::invariants;

/// Failures of the balance oracle.
///
/// `InsufficientBalance` mirrors the revert a correct contract must
/// produce; the others signal a broken scenario rather than a contract bug.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LedgerError {
    /// Negative amount
    InvalidAmount,
    /// Debit exceeds the current balance
    InsufficientBalance,
    /// A credit or counter would overflow i128
    Overflow,
}

/// Expected balances, mirrored operation by operation.
///
/// Every mutating method either applies fully or leaves the ledger
/// untouched.
#[derive(Clone, Debug)]
pub struct Ledger {
    balances: Map<Address, i128>,
    minted: i128,
    burned: i128,
}

impl Ledger {
    /// Empty ledger with nothing minted
    pub fn new(env: &Env) -> Self {
        Self {
            balances: Map::new(env),
            minted: 0,
            burned: 0,
        }
    }

    /// Ledger holding the full genesis supply on `owner`
    pub fn genesis(env: &Env, owner: &Address, supply: i128) -> Result<Self, LedgerError> {
        let mut ledger = Self::new(env);
        ledger.mint(owner, supply)?;
        Ok(ledger)
    }

    pub fn balance(&self, account: &Address) -> i128 {
        self.balances.get(account.clone()).unwrap_or(0)
    }

    /// Accounts that have ever held a balance
    pub fn accounts(&self) -> Vec<Address> {
        self.balances.keys()
    }

    pub fn minted(&self) -> i128 {
        self.minted
    }

    pub fn burned(&self) -> i128 {
        self.burned
    }

    /// Total supply a conforming contract must report
    pub fn expected_supply(&self) -> i128 {
        self.minted - self.burned
    }

    /// Sum of all tracked balances, None on overflow
    pub fn total_tracked(&self) -> Option<i128> {
        let mut total: i128 = 0;
        for balance in self.balances.values() {
            total = total.checked_add(balance)?;
        }
        Some(total)
    }

    /// Checks the supply and non-negativity invariants
    pub fn is_consistent(&self) -> bool {
        let total = match self.total_tracked() {
            Some(total) => total,
            None => return false,
        };
        invariants::supply_conserved(total, self.minted, self.burned)
            && self.balances.values().iter().all(invariants::balance_non_negative)
    }

    pub fn credit(&mut self, account: &Address, amount: i128) -> Result<(), LedgerError> {
        if amount < 0 {
            return Err(LedgerError::InvalidAmount);
        }
        let balance = self
            .balance(account)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.set(account.clone(), balance);
        Ok(())
    }

    pub fn debit(&mut self, account: &Address, amount: i128) -> Result<(), LedgerError> {
        if amount < 0 {
            return Err(LedgerError::InvalidAmount);
        }
        let balance = self.balance(account);
        if !invariants::debit_permitted(balance, amount) {
            return Err(LedgerError::InsufficientBalance);
        }
        self.balances.set(account.clone(), balance - amount);
        Ok(())
    }

    /// Debit `from` then credit `to`; no change if either leg fails
    pub fn transfer(&mut self, from: &Address, to: &Address, amount: i128) -> Result<(), LedgerError> {
        let mut staged = self.balances.clone();
        let result = Self::transfer_in(&mut staged, from, to, amount);
        if result.is_ok() {
            self.balances = staged;
        }
        result
    }

    /// Transfers to each recipient in list order, all or nothing
    pub fn multi_transfer(
        &mut self,
        from: &Address,
        recipients: &Vec<Recipient>,
    ) -> Result<(), LedgerError> {
        let mut staged = self.balances.clone();
        for recipient in recipients.iter() {
            Self::transfer_in(&mut staged, from, &recipient.to, recipient.amount)?;
        }
        self.balances = staged;
        Ok(())
    }

    pub fn mint(&mut self, to: &Address, amount: i128) -> Result<(), LedgerError> {
        let minted = self
            .minted
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let supply_before = self.expected_supply();
        self.credit(to, amount)?;
        self.minted = minted;
        debug_assert!(invariants::supply_delta_matches(
            supply_before,
            self.expected_supply(),
            amount
        ));
        Ok(())
    }

    pub fn burn(&mut self, from: &Address, amount: i128) -> Result<(), LedgerError> {
        let burned = self
            .burned
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let supply_before = self.expected_supply();
        self.debit(from, amount)?;
        self.burned = burned;
        debug_assert!(invariants::supply_delta_matches(
            supply_before,
            self.expected_supply(),
            -amount
        ));
        Ok(())
    }

    fn transfer_in(
        balances: &mut Map<Address, i128>,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        if amount < 0 {
            return Err(LedgerError::InvalidAmount);
        }
        let from_balance = balances.get(from.clone()).unwrap_or(0);
        if !invariants::debit_permitted(from_balance, amount) {
            return Err(LedgerError::InsufficientBalance);
        }
        balances.set(from.clone(), from_balance - amount);

        let to_balance = balances
            .get(to.clone())
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        balances.set(to.clone(), to_balance);
        Ok(())
    }
}
