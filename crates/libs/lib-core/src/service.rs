//! # Service Traits
//!
//! Narrow capability contracts for the external collaborators the workflows drive.
//! Production implementations live in `lib-solana` and `lib-imagegen`; tests use the
//! fakes in `lib_core::testing` (behind the `testing` feature).
//!
//! ```text
//! WalletSession  ── who signs and receives the token
//! MintConnector  ── step 1+2: connection handle and a client bound to it
//! MintingClient  ── step 3/4 configuration, step 6 upload, step 7 create
//! ImageGenerator ── prompt → image reference
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;

use crate::config::StorageConfig;
use crate::error::Result;
use crate::model::{Cluster, CreateNftParams, ImageReference, MetadataDocument, MintReceipt};

/// Connected wallet as seen by the workflows. Read-only.
pub trait WalletSession: Send + Sync {
    fn is_connected(&self) -> bool;

    /// Public identity of the connected wallet
    fn public_key(&self) -> Option<Pubkey>;

    /// Signing identity handed to the minting client
    fn signer(&self) -> Option<Arc<Keypair>>;
}

/// Opens a connection to a cluster and binds a minting client to it.
pub trait MintConnector: Send + Sync {
    fn connect(&self, cluster: Cluster) -> Result<Box<dyn MintingClient>>;
}

/// Minting client bound to one connection.
#[async_trait]
pub trait MintingClient: Send + Sync {
    /// Attach the signing identity (also used as payer and update authority).
    fn use_identity(&mut self, signer: Arc<Keypair>) -> Result<()>;

    /// Attach the off-chain storage backend used by [`MintingClient::upload_metadata`].
    fn use_storage(&mut self, storage: &StorageConfig) -> Result<()>;

    /// Persist the metadata document off-chain and return its URI.
    async fn upload_metadata(&self, document: &MetadataDocument) -> Result<String>;

    /// Create the token on-chain.
    async fn create(&self, params: CreateNftParams) -> Result<MintReceipt>;
}

/// Text-to-image model used for every generation.
pub const IMAGE_MODEL: &str = "dall-e-3";
/// Images requested per call.
pub const IMAGE_COUNT: u8 = 1;
/// Fixed output resolution.
pub const IMAGE_SIZE: &str = "1024x1024";

/// Request sent to the image-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub n: u8,
    pub size: String,
}

impl GenerationRequest {
    /// The only way the workflows build a request: one image, fixed model and size.
    pub fn for_prompt(prompt: &str) -> Self {
        Self {
            model: IMAGE_MODEL.to_string(),
            prompt: prompt.to_string(),
            n: IMAGE_COUNT,
            size: IMAGE_SIZE.to_string(),
        }
    }
}

/// External text-to-image capability.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<ImageReference>;
}
