use soroban_sdk::{contracttype, Address, Vec};

/// Pause state gating the transfer family
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunState {
    Running,
    Stopped,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    /// The state `start_stop` moves to
    pub fn toggled(&self) -> RunState {
        match self {
            RunState::Running => RunState::Stopped,
            RunState::Stopped => RunState::Running,
        }
    }
}

/// One leg of a multi-transfer
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Recipient {
    pub to: Address,
    pub amount: i128,
}

/// Who may issue an operation
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    /// Only the designated owner
    Owner,
    /// The holder whose balance is debited
    Holder(Address),
}

/// A state transition issued against a token contract
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    Transfer {
        from: Address,
        to: Address,
        amount: i128,
    },
    MultiTransfer {
        from: Address,
        recipients: Vec<Recipient>,
    },
    /// Mint to `to`; the contract credits the calling owner
    Mint { to: Address, amount: i128 },
    /// Holder burns its own balance
    Burn { from: Address, amount: i128 },
    /// Owner burns another holder's balance
    BurnFrom {
        by: Address,
        from: Address,
        amount: i128,
    },
    SetRunning { by: Address, value: RunState },
}

impl Operation {
    /// Address that signs the call
    pub fn caller(&self) -> &Address {
        match self {
            Operation::Transfer { from, .. } => from,
            Operation::MultiTransfer { from, .. } => from,
            Operation::Mint { to, .. } => to,
            Operation::Burn { from, .. } => from,
            Operation::BurnFrom { by, .. } => by,
            Operation::SetRunning { by, .. } => by,
        }
    }

    pub fn required_role(&self) -> Role {
        match self {
            Operation::Mint { .. } | Operation::BurnFrom { .. } | Operation::SetRunning { .. } => {
                Role::Owner
            }
            Operation::Transfer { from, .. }
            | Operation::MultiTransfer { from, .. }
            | Operation::Burn { from, .. } => Role::Holder(from.clone()),
        }
    }

    /// Transfer-family operations are rejected while stopped
    pub fn requires_running(&self) -> bool {
        matches!(
            self,
            Operation::Transfer { .. } | Operation::MultiTransfer { .. }
        )
    }
}
