//! # Solana Connection
//!
//! Builds RPC connections for a [`Cluster`] and binds a [`MetaplexClient`] to them.
//!
//! ## RPC Endpoints
//!
//! | Cluster | URL |
//! |---|---|
//! | Devnet | `https://api.devnet.solana.com` |
//! | Testnet | `https://api.testnet.solana.com` |
//! | Mainnet Beta | `https://api.mainnet-beta.solana.com` |
//!
//! A custom RPC URL (for example a local validator) overrides the table.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lib_core::model::Cluster;
//! use lib_solana::client::SolanaConnector;
//!
//! let connector = SolanaConnector::builder()
//!     .custom_rpc_url("http://127.0.0.1:8899".to_string())
//!     .build();
//! assert_eq!(connector.rpc_url(Cluster::Devnet), "http://127.0.0.1:8899");
//! ```

use std::sync::Arc;

use anyhow::Context;
use lib_core::model::Cluster;
use lib_core::service::{MintConnector, MintingClient};
use lib_core::Result;
use solana_client::nonblocking::rpc_client::RpcClient;
use tracing::info;

use crate::metaplex::MetaplexClient;

/// Opens RPC connections and hands out minting clients.
#[derive(Debug, Clone, Default)]
pub struct SolanaConnector {
    custom_rpc_url: Option<String>,
}

/// Builder for configuring SolanaConnector.
#[derive(Debug, Clone, Default)]
pub struct SolanaConnectorBuilder {
    custom_rpc_url: Option<String>,
}

impl SolanaConnectorBuilder {
    /// Set a custom RPC URL (overrides cluster-based URL).
    pub fn custom_rpc_url(mut self, url: String) -> Self {
        self.custom_rpc_url = Some(url);
        self
    }

    pub fn build(self) -> SolanaConnector {
        SolanaConnector { custom_rpc_url: self.custom_rpc_url }
    }
}

impl SolanaConnector {
    pub fn builder() -> SolanaConnectorBuilder {
        SolanaConnectorBuilder::default()
    }

    /// RPC URL used for `cluster`.
    pub fn rpc_url(&self, cluster: Cluster) -> String {
        self.custom_rpc_url
            .clone()
            .unwrap_or_else(|| cluster.rpc_url().to_string())
    }

    /// Open an RPC client. The connection is lazy; nothing is sent until the first call.
    pub fn rpc_client(&self, cluster: Cluster) -> Arc<RpcClient> {
        let url = self.rpc_url(cluster);
        info!("🔗 Connecting to Solana RPC: {}", url);
        Arc::new(RpcClient::new(url))
    }

    /// Check RPC endpoint connectivity.
    pub async fn health_check(&self, cluster: Cluster) -> anyhow::Result<()> {
        let rpc = self.rpc_client(cluster);
        let version = rpc
            .get_version()
            .await
            .with_context(|| format!("{} RPC unreachable at {}", cluster, self.rpc_url(cluster)))?;
        info!(cluster = %cluster, version = %version.solana_core, "RPC healthy");
        Ok(())
    }
}

impl MintConnector for SolanaConnector {
    fn connect(&self, cluster: Cluster) -> Result<Box<dyn MintingClient>> {
        Ok(Box::new(MetaplexClient::new(self.rpc_client(cluster), cluster)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_urls() {
        let connector = SolanaConnector::default();
        assert_eq!(connector.rpc_url(Cluster::Devnet), "https://api.devnet.solana.com");
        assert_eq!(connector.rpc_url(Cluster::MainnetBeta), "https://api.mainnet-beta.solana.com");
    }

    #[test]
    fn test_custom_url_overrides() {
        let connector = SolanaConnector::builder()
            .custom_rpc_url("http://127.0.0.1:8899".to_string())
            .build();
        assert_eq!(connector.rpc_url(Cluster::Devnet), "http://127.0.0.1:8899");
    }

    #[tokio::test]
    async fn test_connect_is_lazy() {
        // unroutable endpoint, but connecting makes no request
        let connector = SolanaConnector::builder()
            .custom_rpc_url("http://127.0.0.1:1".to_string())
            .build();
        assert!(connector.connect(Cluster::Devnet).is_ok());
        assert!(connector.health_check(Cluster::Devnet).await.is_err());
    }
}
