/// Network a token deployment targets
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NetworkKind {
    Testnet,
    Mainnet,
}

/// Connection details for a Stellar network
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NetworkConfig {
    /// Human readable network name
    pub name: &'static str,
    /// Passphrase that scopes transaction signatures to this network
    pub network_passphrase: &'static str,
    /// Soroban RPC endpoint
    pub rpc_url: &'static str,
    /// Base URL of the block explorer
    pub block_explorer_url: &'static str,
}

pub const TESTNET: NetworkConfig = NetworkConfig {
    name: "Stellar Testnet",
    network_passphrase: "Test SDF Network ; September 2015",
    rpc_url: "https://soroban-testnet.stellar.org",
    block_explorer_url: "https://stellar.expert/explorer/testnet",
};

pub const MAINNET: NetworkConfig = NetworkConfig {
    name: "Stellar Mainnet",
    network_passphrase: "Public Global Stellar Network ; September 2015",
    rpc_url: "https://mainnet.sorobanrpc.com",
    block_explorer_url: "https://stellar.expert/explorer/public",
};
