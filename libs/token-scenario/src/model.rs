use soroban_sdk::{Address, Env};
use token_ledger::{Ledger, LedgerError};
use token_types::{scaled_supply, Operation, Role, RunState, TokenConfig, TokenError};

use crate::{error::ScenarioError, interface::Rejection};

/// Result of a single operation, predicted or observed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Accepted,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}

impl From<Result<(), Rejection>> for Outcome {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Outcome::Accepted,
            Err(rejection) => Outcome::Rejected(rejection),
        }
    }
}

/// What a conforming token must do: balances, owner and run state.
///
/// Guards are evaluated in the order the contract applies them: owner
/// role first, then run state, then amounts and balances.
#[derive(Clone, Debug)]
pub struct ExpectationModel {
    ledger: Ledger,
    owner: Address,
    state: RunState,
}

impl ExpectationModel {
    /// Model of a freshly deployed token: full supply on the owner, running
    pub fn genesis(env: &Env, owner: &Address, config: &TokenConfig) -> Result<Self, ScenarioError> {
        let supply =
            scaled_supply(config.max_supply, config.decimals).ok_or(ScenarioError::InvalidConfig)?;
        Ok(Self {
            ledger: Ledger::genesis(env, owner, supply)?,
            owner: owner.clone(),
            state: RunState::Running,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Predict how a conforming contract answers `op`
    pub fn expect(&self, op: &Operation) -> Outcome {
        if let Err(error) = self.authorize(op) {
            return Outcome::Rejected(error.into());
        }
        if op.requires_running() && !self.state.is_running() {
            return Outcome::Rejected(TokenError::NotRunning.into());
        }

        let mut trial = self.ledger.clone();
        match Self::apply_to(&mut trial, op) {
            Ok(()) => Outcome::Accepted,
            Err(error) => Outcome::Rejected(rejection_for(error).into()),
        }
    }

    /// Mirror an operation the contract accepted
    pub fn apply(&mut self, op: &Operation) -> Result<(), ScenarioError> {
        Self::apply_to(&mut self.ledger, op)?;
        if let Operation::SetRunning { value, .. } = op {
            self.state = *value;
        }
        Ok(())
    }

    /// Owner guard, evaluated before any state is touched
    fn authorize(&self, op: &Operation) -> Result<(), TokenError> {
        match op.required_role() {
            Role::Owner if op.caller() != &self.owner => Err(TokenError::Unauthorized),
            _ => Ok(()),
        }
    }

    fn apply_to(ledger: &mut Ledger, op: &Operation) -> Result<(), LedgerError> {
        match op {
            Operation::Transfer { from, to, amount } => ledger.transfer(from, to, *amount),
            Operation::MultiTransfer { from, recipients } => ledger.multi_transfer(from, recipients),
            Operation::Mint { to, amount } => ledger.mint(to, *amount),
            Operation::Burn { from, amount } => ledger.burn(from, *amount),
            Operation::BurnFrom { from, amount, .. } => ledger.burn(from, *amount),
            Operation::SetRunning { .. } => Ok(()),
        }
    }
}

fn rejection_for(error: LedgerError) -> TokenError {
    match error {
        LedgerError::InvalidAmount => TokenError::InvalidAmount,
        LedgerError::InsufficientBalance => TokenError::InsufficientBalance,
        LedgerError::Overflow => TokenError::Overflow,
    }
}
