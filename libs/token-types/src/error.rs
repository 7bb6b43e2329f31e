use soroban_sdk::contracterror;

/// Revert reason of owner-only calls made by anyone else
pub const OWNABLE_REASON: &str = "Ownable: caller is not the owner";

/// Revert reason of transfer-family calls while stopped
pub const NOT_RUNNING_REASON: &str = "Contract not running";

/// Rejections surfaced by the token contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Caller lacks the owner role
    Unauthorized = 1,
    /// Transfer-family call while the contract is stopped
    NotRunning = 2,
    /// Debit exceeds the account balance
    InsufficientBalance = 3,
    /// Negative amount
    InvalidAmount = 4,
    /// multi_transfer recipient and value lists differ in length
    LengthMismatch = 5,
    Overflow = 6,
    /// Constructor supply is non-positive or not representable
    InvalidSupply = 7,
}

impl TokenError {
    /// Revert reason for this rejection.
    ///
    /// The owner-guard and run-state reasons are fixed strings that
    /// callers match on verbatim.
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::Unauthorized => OWNABLE_REASON,
            TokenError::NotRunning => NOT_RUNNING_REASON,
            TokenError::InsufficientBalance => "Insufficient balance",
            TokenError::InvalidAmount => "Amount must not be negative",
            TokenError::LengthMismatch => "Recipients and values length mismatch",
            TokenError::Overflow => "Arithmetic overflow",
            TokenError::InvalidSupply => "Invalid max supply",
        }
    }
}
