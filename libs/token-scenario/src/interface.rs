use soroban_sdk::{Address, String, Vec};
use token_types::{ContractArguments, TokenError};

/// Why a call against the token did not go through
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rejection {
    /// The contract returned one of its declared errors
    Contract(TokenError),
    /// The invocation trapped without a contract error (failed auth, panic)
    Aborted,
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::Contract(error) => error.reason(),
            Rejection::Aborted => "Invocation aborted",
        }
    }
}

impl From<TokenError> for Rejection {
    fn from(error: TokenError) -> Self {
        Rejection::Contract(error)
    }
}

pub type CallResult = Result<(), Rejection>;

/// A deployed token contract, seen from outside.
///
/// Every mutating call runs to completion before returning; a rejected
/// call must leave the contract state untouched.
pub trait TokenUnderTest {
    fn name(&self) -> String;
    fn symbol(&self) -> String;
    fn decimals(&self) -> u32;
    fn total_supply(&self) -> i128;
    fn balance(&self, id: &Address) -> i128;
    fn is_running(&self) -> bool;

    fn transfer(&self, caller: &Address, to: &Address, amount: i128) -> CallResult;
    fn multi_transfer(&self, caller: &Address, to: &Vec<Address>, values: &Vec<i128>) -> CallResult;
    /// Mint `amount` to the caller
    fn mint(&self, caller: &Address, amount: i128) -> CallResult;
    /// Burn from the caller's own balance
    fn burn(&self, caller: &Address, amount: i128) -> CallResult;
    /// Burn from another holder's balance
    fn burn_from(&self, caller: &Address, from: &Address, amount: i128) -> CallResult;
    /// Toggle between running and stopped
    fn start_stop(&self, caller: &Address) -> CallResult;
}

/// Deploys a fresh token owned by the deploying address
pub trait TokenDeployer {
    type Token: TokenUnderTest;

    fn deploy(&self, owner: &Address, args: ContractArguments) -> Self::Token;
}
