//! # Solana Library
//!
//! Solana adapters for the minting workflow: RPC connection, local keypair wallet,
//! Token Metadata minting client, and IPFS metadata storage.

pub mod client;
pub mod metaplex;
pub mod storage;
pub mod wallet;

// Re-export commonly used types from root for convenience
pub use client::SolanaConnector;
pub use metaplex::MetaplexClient;
pub use storage::IpfsStorage;
pub use wallet::{KeypairWallet, WalletError, WalletStatus};
