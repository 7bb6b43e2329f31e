use soroban_sdk::{Address, Vec};
use token_types::{Operation, Recipient, RunState, NOT_RUNNING_REASON, OWNABLE_REASON};

use crate::{
    error::ScenarioError,
    interface::TokenUnderTest,
    runner::{ScenarioReport, ScenarioRunner},
};

/// Stages of the reference scenario, in execution order
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    Deployment,
    InitialData,
    BeforeTransactions,
    Transactions,
    MultiTransactions,
    StopContract,
    StoppedTransactions,
    RunContract,
    MintTokens,
    BurnTokens,
}

impl Step {
    pub fn index(&self) -> u32 {
        *self as u32
    }
}

// Amounts of the reference scenario, in whole tokens
const FIRST_AMOUNT: i128 = 1;
const SECOND_AMOUNT: i128 = 4;

impl<'a, T: TokenUnderTest> ScenarioRunner<'a, T> {
    /// Play the reference scenario on a freshly deployed token.
    ///
    /// Transfers, a batch transfer, a stop with transfers that must bounce,
    /// a restart, then mint and burn; each step ends on a checkpoint.
    pub fn run_reference(&mut self) -> Result<ScenarioReport, ScenarioError> {
        self.begin(Step::Deployment);
        self.initial_data()?;
        self.before_transactions()?;
        self.transactions()?;
        self.multi_transactions()?;
        self.stop_contract()?;
        self.stopped_transactions()?;
        self.run_contract()?;
        self.mint_tokens()?;
        self.burn_tokens()?;
        Ok(self.report())
    }

    pub fn initial_data(&mut self) -> Result<(), ScenarioError> {
        self.begin(Step::InitialData);
        self.check_metadata()?;
        self.checkpoint(Step::InitialData)
    }

    pub fn before_transactions(&mut self) -> Result<(), ScenarioError> {
        self.begin(Step::BeforeTransactions);
        let (owner, holder, external) = self.signers();
        let supply = self.model().ledger().expected_supply();

        self.expect_balance(&owner, supply)?;
        self.expect_balance(&holder, 0)?;
        self.expect_balance(&external, 0)?;
        self.checkpoint(Step::BeforeTransactions)
    }

    pub fn transactions(&mut self) -> Result<(), ScenarioError> {
        self.begin(Step::Transactions);
        let (owner, holder, external) = self.signers();
        let supply = self.model().ledger().expected_supply();
        let first = self.amount(FIRST_AMOUNT)?;
        let second = self.amount(SECOND_AMOUNT)?;

        self.execute(Operation::Transfer {
            from: owner.clone(),
            to: holder.clone(),
            amount: first,
        })?;
        self.execute(Operation::Transfer {
            from: owner.clone(),
            to: external.clone(),
            amount: second,
        })?;
        self.execute(Operation::Transfer {
            from: external.clone(),
            to: holder.clone(),
            amount: first,
        })?;

        self.expect_balance(&owner, supply - first - second)?;
        self.expect_balance(&holder, first + first)?;
        self.expect_balance(&external, second - first)?;
        self.checkpoint(Step::Transactions)
    }

    pub fn multi_transactions(&mut self) -> Result<(), ScenarioError> {
        self.begin(Step::MultiTransactions);
        let (owner, holder, external) = self.signers();
        let genesis = self.model().ledger().minted();
        let first = self.amount(FIRST_AMOUNT)?;
        let second = self.amount(SECOND_AMOUNT)?;

        let batch = self.batch(&owner, &holder, &external, second);
        self.execute(batch)?;

        self.expect_balance(&owner, genesis - first - 3 * second)?;
        self.expect_balance(&holder, 2 * first + second)?;
        self.expect_balance(&external, 2 * second - first)?;
        self.checkpoint(Step::MultiTransactions)
    }

    pub fn stop_contract(&mut self) -> Result<(), ScenarioError> {
        self.begin(Step::StopContract);
        let (owner, holder, _) = self.signers();

        self.expect_revert(
            Operation::SetRunning {
                by: holder,
                value: RunState::Stopped,
            },
            OWNABLE_REASON,
        )?;
        self.execute(Operation::SetRunning {
            by: owner,
            value: RunState::Stopped,
        })?;
        self.checkpoint(Step::StopContract)
    }

    pub fn stopped_transactions(&mut self) -> Result<(), ScenarioError> {
        self.begin(Step::StoppedTransactions);
        let (owner, holder, external) = self.signers();
        let first = self.amount(FIRST_AMOUNT)?;
        let second = self.amount(SECOND_AMOUNT)?;
        let before = self.balances(&owner, &holder, &external);

        let transfers = [
            (owner.clone(), holder.clone()),
            (holder.clone(), external.clone()),
            (external.clone(), holder.clone()),
        ];
        for (from, to) in transfers {
            self.expect_revert(
                Operation::Transfer {
                    from,
                    to,
                    amount: first,
                },
                NOT_RUNNING_REASON,
            )?;
        }

        for sender in [owner.clone(), holder.clone(), external.clone()] {
            let batch = self.batch(&sender, &holder, &external, second);
            self.expect_revert(batch, NOT_RUNNING_REASON)?;
        }

        self.expect_balance(&owner, before.0)?;
        self.expect_balance(&holder, before.1)?;
        self.expect_balance(&external, before.2)?;
        self.checkpoint(Step::StoppedTransactions)
    }

    pub fn run_contract(&mut self) -> Result<(), ScenarioError> {
        self.begin(Step::RunContract);
        let (owner, holder, _) = self.signers();

        self.expect_revert(
            Operation::SetRunning {
                by: holder,
                value: RunState::Running,
            },
            OWNABLE_REASON,
        )?;
        self.execute(Operation::SetRunning {
            by: owner,
            value: RunState::Running,
        })?;
        self.checkpoint(Step::RunContract)
    }

    pub fn mint_tokens(&mut self) -> Result<(), ScenarioError> {
        self.begin(Step::MintTokens);
        let (owner, holder, external) = self.signers();
        let first = self.amount(FIRST_AMOUNT)?;
        let before = self.balances(&owner, &holder, &external);

        self.expect_revert(
            Operation::Mint {
                to: holder.clone(),
                amount: first,
            },
            OWNABLE_REASON,
        )?;
        self.execute(Operation::Mint {
            to: owner.clone(),
            amount: first,
        })?;

        self.expect_balance(&owner, before.0 + first)?;
        self.expect_balance(&holder, before.1)?;
        self.checkpoint(Step::MintTokens)
    }

    pub fn burn_tokens(&mut self) -> Result<(), ScenarioError> {
        self.begin(Step::BurnTokens);
        let (owner, holder, external) = self.signers();
        let first = self.amount(FIRST_AMOUNT)?;
        let before = self.balances(&owner, &holder, &external);

        self.execute(Operation::Burn {
            from: holder.clone(),
            amount: first,
        })?;
        self.execute(Operation::Burn {
            from: owner.clone(),
            amount: first,
        })?;

        self.expect_balance(&owner, before.0 - first)?;
        self.expect_balance(&holder, before.1 - first)?;
        self.checkpoint(Step::BurnTokens)
    }

    fn signers(&self) -> (Address, Address, Address) {
        let actors = self.actors();
        (
            actors.owner.clone(),
            actors.holder.clone(),
            actors.external.clone(),
        )
    }

    fn balances(&self, owner: &Address, holder: &Address, external: &Address) -> (i128, i128, i128) {
        let ledger = self.model().ledger();
        (
            ledger.balance(owner),
            ledger.balance(holder),
            ledger.balance(external),
        )
    }

    /// `amount` from `from` to the holder and the external account, in that order
    fn batch(&self, from: &Address, holder: &Address, external: &Address, amount: i128) -> Operation {
        Operation::MultiTransfer {
            from: from.clone(),
            recipients: Vec::from_array(
                self.env(),
                [
                    Recipient {
                        to: holder.clone(),
                        amount,
                    },
                    Recipient {
                        to: external.clone(),
                        amount,
                    },
                ],
            ),
        }
    }
}
