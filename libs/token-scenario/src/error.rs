use soroban_sdk::Address;
use token_ledger::LedgerError;
use token_types::RunState;

use crate::{model::Outcome, reference::Step};

/// Divergence between the token under test and the expectation model
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScenarioError {
    /// Token parameters cannot produce a valid genesis supply
    InvalidConfig,
    /// The model itself refused an operation it had predicted to succeed
    Ledger(LedgerError),
    OutcomeMismatch {
        step: Step,
        expected: Outcome,
        actual: Outcome,
    },
    /// Rejected, but not for the stated reason
    ReasonMismatch {
        step: Step,
        expected: &'static str,
        actual: &'static str,
    },
    BalanceMismatch {
        step: Step,
        account: Address,
        expected: i128,
        actual: i128,
    },
    SupplyMismatch {
        step: Step,
        expected: i128,
        actual: i128,
    },
    RunStateMismatch {
        step: Step,
        expected: RunState,
        actual: RunState,
    },
    MetadataMismatch {
        step: Step,
        field: &'static str,
    },
    /// Model balances no longer sum to its supply, or overflow when summed
    InconsistentModel { step: Step },
}

impl From<LedgerError> for ScenarioError {
    fn from(error: LedgerError) -> Self {
        ScenarioError::Ledger(error)
    }
}
