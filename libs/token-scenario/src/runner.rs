use soroban_sdk::{log, Address, Env, String, Vec};
use token_ledger::{scale, Ledger};
use token_types::{Operation, RunState, TokenConfig};

use crate::{
    error::ScenarioError,
    interface::{CallResult, TokenDeployer, TokenUnderTest},
    model::{ExpectationModel, Outcome},
    reference::Step,
};

/// The three signers the scenario is played with
#[derive(Clone, Debug)]
pub struct Actors {
    /// Deployer, receives the genesis supply
    pub owner: Address,
    /// Ordinary holder
    pub holder: Address,
    /// Account that only ever receives tokens from others
    pub external: Address,
}

impl Actors {
    pub fn all(&self, env: &Env) -> Vec<Address> {
        Vec::from_array(
            env,
            [self.owner.clone(), self.holder.clone(), self.external.clone()],
        )
    }
}

/// Counters collected while a scenario runs
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScenarioReport {
    /// Calls actually issued against the token
    pub operations: u32,
    pub accepted: u32,
    pub rejected: u32,
    pub checkpoints: u32,
    pub last_step: Option<Step>,
}

/// Drives a token under test and compares it with the expectation model
/// after every operation.
pub struct ScenarioRunner<'a, T: TokenUnderTest> {
    env: &'a Env,
    token: T,
    config: TokenConfig,
    actors: Actors,
    model: ExpectationModel,
    step: Step,
    report: ScenarioReport,
}

impl<'a, T: TokenUnderTest> ScenarioRunner<'a, T> {
    /// Deploy a fresh token from `config` with `actors.owner` as deployer
    pub fn deploy<D>(
        env: &'a Env,
        deployer: &D,
        config: &TokenConfig,
        actors: Actors,
    ) -> Result<Self, ScenarioError>
    where
        D: TokenDeployer<Token = T>,
    {
        let token = deployer.deploy(&actors.owner, config.contract_arguments());
        log!(env, "token deployed", actors.owner);
        Self::new(env, token, config, actors)
    }

    /// Attach to a token deployed by `actors.owner` and never used since
    pub fn new(
        env: &'a Env,
        token: T,
        config: &TokenConfig,
        actors: Actors,
    ) -> Result<Self, ScenarioError> {
        let model = ExpectationModel::genesis(env, &actors.owner, config)?;
        Ok(Self {
            env,
            token,
            config: *config,
            actors,
            model,
            step: Step::Deployment,
            report: ScenarioReport::default(),
        })
    }

    pub fn env(&self) -> &Env {
        self.env
    }

    pub fn token(&self) -> &T {
        &self.token
    }

    pub fn actors(&self) -> &Actors {
        &self.actors
    }

    pub fn model(&self) -> &ExpectationModel {
        &self.model
    }

    pub fn report(&self) -> ScenarioReport {
        self.report
    }

    /// Label subsequent failures with `step`
    pub fn begin(&mut self, step: Step) {
        self.step = step;
        self.report.last_step = Some(step);
        log!(self.env, "scenario step", step.index());
    }

    /// Whole tokens in base units
    pub fn amount(&self, whole: i128) -> Result<i128, ScenarioError> {
        scale(whole, self.config.decimals).ok_or(ScenarioError::InvalidConfig)
    }

    /// Issue `op`, check the outcome against the model, mirror it on success
    pub fn execute(&mut self, op: Operation) -> Result<Outcome, ScenarioError> {
        let expected = self.model.expect(&op);

        // The contract only toggles; asking for the current state is a no-op
        if let Operation::SetRunning { value, .. } = &op {
            if expected.is_accepted() && *value == self.model.state() {
                return Ok(Outcome::Accepted);
            }
        }

        let actual: Outcome = self.issue(&op).into();
        self.report.operations += 1;
        match actual {
            Outcome::Accepted => self.report.accepted += 1,
            Outcome::Rejected(_) => self.report.rejected += 1,
        }

        if actual != expected {
            log!(self.env, "outcome mismatch", self.step.index());
            return Err(ScenarioError::OutcomeMismatch {
                step: self.step,
                expected,
                actual,
            });
        }
        if actual.is_accepted() {
            self.model.apply(&op)?;
        }
        Ok(actual)
    }

    /// Issue `op` and require a rejection carrying `reason` verbatim
    pub fn expect_revert(&mut self, op: Operation, reason: &'static str) -> Result<(), ScenarioError> {
        match self.execute(op)? {
            Outcome::Rejected(rejection) if rejection.reason() == reason => Ok(()),
            Outcome::Rejected(rejection) => Err(ScenarioError::ReasonMismatch {
                step: self.step,
                expected: reason,
                actual: rejection.reason(),
            }),
            Outcome::Accepted => Err(ScenarioError::ReasonMismatch {
                step: self.step,
                expected: reason,
                actual: "",
            }),
        }
    }

    /// Name, symbol, decimals and total supply match the configuration
    pub fn check_metadata(&mut self) -> Result<(), ScenarioError> {
        if self.token.name() != String::from_str(self.env, self.config.contract_name) {
            return Err(self.metadata_mismatch("name"));
        }
        if self.token.symbol() != String::from_str(self.env, self.config.symbol) {
            return Err(self.metadata_mismatch("symbol"));
        }
        if self.token.decimals() != self.config.decimals {
            return Err(self.metadata_mismatch("decimals"));
        }
        self.check_supply()
    }

    /// Every tracked balance, the supply and the run state agree with the model
    pub fn checkpoint(&mut self, step: Step) -> Result<(), ScenarioError> {
        self.begin(step);

        let mut accounts = self.model.ledger().accounts();
        for actor in self.actors.all(self.env).iter() {
            if !accounts.contains(&actor) {
                accounts.push_back(actor);
            }
        }
        for account in accounts.iter() {
            let expected = self.model.ledger().balance(&account);
            self.check_balance(&account, expected)?;
        }

        self.check_supply()?;
        self.check_run_state()?;

        require_consistent(self.env, self.model.ledger(), self.step)?;

        self.report.checkpoints += 1;
        Ok(())
    }

    /// Require both the model and the token to hold exactly `expected`.
    ///
    /// Guards against the model and the contract agreeing on a wrong value.
    pub fn expect_balance(&mut self, account: &Address, expected: i128) -> Result<(), ScenarioError> {
        let modeled = self.model.ledger().balance(account);
        if modeled != expected {
            return Err(ScenarioError::BalanceMismatch {
                step: self.step,
                account: account.clone(),
                expected,
                actual: modeled,
            });
        }
        self.check_balance(account, expected)
    }

    fn check_balance(&self, account: &Address, expected: i128) -> Result<(), ScenarioError> {
        let actual = self.token.balance(account);
        if actual != expected {
            return Err(ScenarioError::BalanceMismatch {
                step: self.step,
                account: account.clone(),
                expected,
                actual,
            });
        }
        Ok(())
    }

    fn check_supply(&self) -> Result<(), ScenarioError> {
        let expected = self.model.ledger().expected_supply();
        let actual = self.token.total_supply();
        if actual != expected {
            return Err(ScenarioError::SupplyMismatch {
                step: self.step,
                expected,
                actual,
            });
        }
        Ok(())
    }

    fn check_run_state(&self) -> Result<(), ScenarioError> {
        let expected = self.model.state();
        let actual = if self.token.is_running() {
            RunState::Running
        } else {
            RunState::Stopped
        };
        if actual != expected {
            return Err(ScenarioError::RunStateMismatch {
                step: self.step,
                expected,
                actual,
            });
        }
        Ok(())
    }

    fn metadata_mismatch(&self, field: &'static str) -> ScenarioError {
        ScenarioError::MetadataMismatch {
            step: self.step,
            field,
        }
    }

    fn issue(&self, op: &Operation) -> CallResult {
        match op {
            Operation::Transfer { from, to, amount } => self.token.transfer(from, to, *amount),
            Operation::MultiTransfer { from, recipients } => {
                let mut to = Vec::new(self.env);
                let mut values = Vec::new(self.env);
                for recipient in recipients.iter() {
                    to.push_back(recipient.to);
                    values.push_back(recipient.amount);
                }
                self.token.multi_transfer(from, &to, &values)
            }
            Operation::Mint { to, amount } => self.token.mint(to, *amount),
            Operation::Burn { from, amount } => self.token.burn(from, *amount),
            Operation::BurnFrom { by, from, amount } => self.token.burn_from(by, from, *amount),
            Operation::SetRunning { by, .. } => self.token.start_stop(by),
        }
    }
}

/// The model ledger must still balance before anything is compared to it
fn require_consistent(env: &Env, ledger: &Ledger, step: Step) -> Result<(), ScenarioError> {
    if !ledger.is_consistent() {
        log!(env, "model inconsistent", step.index());
        return Err(ScenarioError::InconsistentModel { step });
    }
    Ok(())
}
