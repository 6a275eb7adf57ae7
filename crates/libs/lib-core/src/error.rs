//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] shared by the minting core and
//! every adapter crate (`lib-solana`, `lib-imagegen`, the `minter` app).
//!
//! ## Error Categories
//!
//! 1. **Precondition / input errors**
//!    - [`InvalidInput`](AppError::InvalidInput) - empty prompt, oversized metadata fields
//!    - [`Config`](AppError::Config) - missing or invalid environment configuration
//!
//! 2. **External-call failures** (surfaced to the user, never retried)
//!    - [`Wallet`](AppError::Wallet) - keypair loading, missing signing identity
//!    - [`Rpc`](AppError::Rpc) - Solana cluster communication
//!    - [`Storage`](AppError::Storage) - metadata upload to the storage backend
//!    - [`Mint`](AppError::Mint) - token creation failures not caused by RPC transport
//!    - [`ImageGeneration`](AppError::ImageGeneration) - image-generation service
//!
//! No distinction is made between transient and permanent failures. The user-visible
//! artifact is the `Display` string of the error.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn check_prompt(prompt: &str) -> Result<&str> {
//!     if prompt.trim().is_empty() {
//!         return Err(AppError::InvalidInput("Prompt must not be empty".to_string()));
//!     }
//!     Ok(prompt.trim())
//! }
//!
//! assert!(check_prompt("  ").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type covering every failure the mint and generate workflows can observe.
///
/// Each variant carries a descriptive `String`; the `#[error]` attribute provides
/// the `Display` text that ends up in the blocking notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input rejected before any external call was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Wallet identity error (no keypair, unreadable keypair file, etc.).
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Solana RPC communication error.
    ///
    /// Used for blockhash fetches, rent queries and transaction submission.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Storage backend error while persisting the metadata document.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Token creation error not attributable to the transport.
    #[error("Mint error: {0}")]
    Mint(String),

    /// Image-generation service error.
    #[error("Image generation error: {0}")]
    ImageGeneration(String),
}

impl AppError {
    /// The inner message without the category prefix of `Display`.
    pub fn message(&self) -> &str {
        match self {
            AppError::Config(msg)
            | AppError::InvalidInput(msg)
            | AppError::Wallet(msg)
            | AppError::Rpc(msg)
            | AppError::Storage(msg)
            | AppError::Mint(msg)
            | AppError::ImageGeneration(msg) => msg,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(format!("Metadata serialization failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_inner_message() {
        let err = AppError::Rpc("network error".to_string());
        assert_eq!(err.to_string(), "RPC error: network error");

        let err = AppError::ImageGeneration("rate limited".to_string());
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_message_drops_category_prefix() {
        assert_eq!(AppError::Rpc("network error".to_string()).message(), "network error");
        let err = AppError::ImageGeneration("quota exceeded".to_string());
        assert_eq!(err.message(), "quota exceeded");
    }

    #[test]
    fn test_json_error_maps_to_storage() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
