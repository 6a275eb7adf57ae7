//! # RPC Health Check
//!
//! Startup probe of the cluster endpoint. Only logs; minting is never blocked on it.

use lib_core::model::Cluster;
use lib_solana::SolanaConnector;

use crate::debug::spawn_traced;

pub(crate) fn check_rpc(connector: SolanaConnector, cluster: Cluster) {
    spawn_traced("rpc_health", async move {
        if let Err(e) = connector.health_check(cluster).await {
            tracing::warn!(error = %format!("{:#}", e), "RPC health check failed");
        }
    });
}
