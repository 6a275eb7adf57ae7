//! # Solana Cluster Selection
//!
//! Only the logical cluster name is configured; the public RPC endpoint and the
//! explorer query parameter are resolved here.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Public Solana cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cluster {
    /// Public development network (the minter's fixed target)
    #[default]
    Devnet,
    /// Public test network
    Testnet,
    /// Production network
    MainnetBeta,
}

impl Cluster {
    /// Public RPC endpoint for this cluster.
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
        }
    }

    /// Logical name as used by the explorer and the Solana CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
        }
    }

    /// Explorer link for an account address, scoped to this cluster.
    ///
    /// ```rust
    /// use lib_core::model::Cluster;
    ///
    /// assert_eq!(
    ///     Cluster::Devnet.explorer_address_url("Addr1"),
    ///     "https://explorer.solana.com/address/Addr1?cluster=devnet"
    /// );
    /// ```
    pub fn explorer_address_url(&self, address: &str) -> String {
        match self {
            Cluster::MainnetBeta => format!("https://explorer.solana.com/address/{}", address),
            other => format!(
                "https://explorer.solana.com/address/{}?cluster={}",
                address,
                other.name()
            ),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cluster {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            "mainnet" | "mainnet-beta" => Ok(Cluster::MainnetBeta),
            other => Err(AppError::Config(format!("Unknown Solana cluster: {}", other))),
        }
    }
}
