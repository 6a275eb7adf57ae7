//! # Keypair Wallet
//!
//! Local signing wallet backed by a Solana keypair.
//!
//! ## Features
//! - Load a Solana CLI keypair file (`~/.config/solana/id.json`)
//! - Load a base58 secret key
//! - Generate a throwaway keypair
//! - Disconnect, dropping the key

use std::fs;
use std::path::Path;
use std::sync::Arc;

use lib_core::service::WalletSession;
use lib_core::AppError;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use thiserror::Error;
use tracing::info;

/// Wallet loading errors
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Failed to read keypair file: {0}")]
    KeypairLoad(#[from] std::io::Error),

    #[error("Invalid keypair: {0}")]
    InvalidKeypair(String),
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

/// Wallet connection status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletStatus {
    /// Not connected
    Disconnected,
    /// Connected with wallet address
    Connected(String),
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletStatus::Connected(addr) => Some(addr),
            WalletStatus::Disconnected => None,
        }
    }
}

/// Wallet holding a local keypair.
#[derive(Clone, Default)]
pub struct KeypairWallet {
    keypair: Option<Arc<Keypair>>,
}

impl KeypairWallet {
    /// Wallet with no key loaded.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Wrap an existing keypair (connected).
    pub fn from_keypair(keypair: Keypair) -> Self {
        Self { keypair: Some(Arc::new(keypair)) }
    }

    /// Fresh random keypair, mostly useful on devnet.
    pub fn generate() -> Self {
        Self::from_keypair(Keypair::new())
    }

    /// Load a keypair file.
    ///
    /// Supports:
    /// - Solana CLI JSON array, 64 bytes (secret + public) or 32 bytes (secret only)
    /// - base58 secret, 64 or 32 bytes
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WalletError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let bytes = if contents.trim().starts_with('[') {
            serde_json::from_str::<Vec<u8>>(&contents)
                .map_err(|e| WalletError::InvalidKeypair(format!("Invalid JSON format: {}", e)))?
        } else {
            decode_base58(&contents)?
        };

        let wallet = Self::from_keypair(keypair_from_bytes(&bytes)?);
        info!(
            path = %path.display(),
            address = %wallet.status().address().unwrap_or_default(),
            "Keypair loaded"
        );
        Ok(wallet)
    }

    /// Load a base58 encoded secret key.
    pub fn load_from_base58(encoded: &str) -> Result<Self, WalletError> {
        let bytes = decode_base58(encoded)?;
        Ok(Self::from_keypair(keypair_from_bytes(&bytes)?))
    }

    /// Drop the keypair.
    pub fn disconnect(&mut self) {
        if self.keypair.take().is_some() {
            info!("Wallet disconnected");
        }
    }

    pub fn status(&self) -> WalletStatus {
        match &self.keypair {
            Some(keypair) => WalletStatus::Connected(keypair.pubkey().to_string()),
            None => WalletStatus::Disconnected,
        }
    }
}

impl WalletSession for KeypairWallet {
    fn is_connected(&self) -> bool {
        self.keypair.is_some()
    }

    fn public_key(&self) -> Option<Pubkey> {
        self.keypair.as_ref().map(|k| k.pubkey())
    }

    fn signer(&self) -> Option<Arc<Keypair>> {
        self.keypair.clone()
    }
}

fn decode_base58(encoded: &str) -> Result<Vec<u8>, WalletError> {
    bs58::decode(encoded.trim())
        .into_vec()
        .map_err(|e| WalletError::InvalidKeypair(format!("Invalid base58: {}", e)))
}

fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair, WalletError> {
    match bytes.len() {
        64 => Keypair::try_from(bytes).map_err(|e| WalletError::InvalidKeypair(e.to_string())),
        32 => {
            let mut secret = [0u8; 32];
            secret.copy_from_slice(bytes);
            Ok(Keypair::new_from_array(secret))
        }
        n => Err(WalletError::InvalidKeypair(format!("Expected 64 or 32 bytes, got {}", n))),
    }
}
