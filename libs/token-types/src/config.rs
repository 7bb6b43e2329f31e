use soroban_sdk::{Env, String};

use crate::network::{NetworkConfig, NetworkKind, MAINNET, TESTNET};

/// Token identity and deployment targets - immutable, loaded once
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TokenConfig {
    pub testnet: NetworkConfig,
    pub mainnet: NetworkConfig,
    /// On-chain token name
    pub contract_name: &'static str,
    /// Display name
    pub public_name: &'static str,
    pub symbol: &'static str,
    pub decimals: u32,
    /// Max supply in whole tokens (scaled by 10^decimals on deploy)
    pub max_supply: i128,
    /// Contract id of the live deployment, once there is one
    pub contract_address: Option<&'static str>,
}

pub const TOKEN_CONFIG: TokenConfig = TokenConfig {
    testnet: TESTNET,
    mainnet: MAINNET,
    contract_name: "B8DEX",
    public_name: "B8DEX",
    symbol: "B8T",
    decimals: 18,
    max_supply: 1_000_000_000,
    contract_address: None,
};

impl TokenConfig {
    pub fn network(&self, kind: NetworkKind) -> &NetworkConfig {
        match kind {
            NetworkKind::Testnet => &self.testnet,
            NetworkKind::Mainnet => &self.mainnet,
        }
    }

    pub fn contract_arguments(&self) -> ContractArguments {
        ContractArguments::from_config(self)
    }
}

/// Constructor arguments in the order the token contract expects them.
///
/// Update this together with the contract constructor if its signature
/// changes. The deploying owner is passed separately by the deployer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContractArguments {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u32,
    pub max_supply: i128,
}

impl ContractArguments {
    pub fn from_config(config: &TokenConfig) -> Self {
        Self {
            name: config.contract_name,
            symbol: config.symbol,
            decimals: config.decimals,
            max_supply: config.max_supply,
        }
    }

    /// Arguments as Soroban values, in constructor order
    pub fn into_soroban(self, env: &Env) -> (String, String, u32, i128) {
        (
            String::from_str(env, self.name),
            String::from_str(env, self.symbol),
            self.decimals,
            self.max_supply,
        )
    }
}
