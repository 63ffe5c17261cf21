//! Static descriptors for the Shardeum networks the wallet widget is
//! configured with. Served as data only; the service never talks to these
//! endpoints.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChainDescriptor {
    pub id: u64,
    pub name: &'static str,
    pub native_currency: NativeCurrency,
    pub rpc_url: &'static str,
    pub explorer_name: &'static str,
    pub explorer_url: &'static str,
    pub testnet: bool,
}

pub const SHARDEUM: ChainDescriptor = ChainDescriptor {
    id: 8118,
    name: "Shardeum",
    native_currency: NativeCurrency {
        name: "Shardeum",
        symbol: "SHM",
        decimals: 18,
    },
    rpc_url: "https://api.shardeum.org",
    explorer_name: "Shardeum Explorer",
    explorer_url: "https://explorer.shardeum.org",
    testnet: false,
};

pub const SHARDEUM_TESTNET: ChainDescriptor = ChainDescriptor {
    id: 8080,
    name: "Shardeum Unstablenet",
    native_currency: NativeCurrency {
        name: "Shardeum",
        symbol: "SHM",
        decimals: 18,
    },
    rpc_url: "https://api-unstable.shardeum.org",
    explorer_name: "Shardeum Explorer",
    explorer_url: "https://explorer-unstable.shardeum.org",
    testnet: true,
};

/// The chains offered to the wallet widget, mainnet first.
pub fn configured_chains() -> Vec<ChainDescriptor> {
    vec![SHARDEUM, SHARDEUM_TESTNET]
}
