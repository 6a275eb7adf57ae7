//! # NFT Metadata and Mint Values
//!
//! Values constructed around a single mint attempt. A [`MintRequest`] is built fresh
//! right before each attempt and never retained; a [`MintReceipt`] is turned into a
//! user-facing message and then dropped.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;

use crate::error::{AppError, Result};
use crate::model::{Cluster, ImageReference};
use crate::service::WalletSession;

/// Royalty recorded on every token this system creates (5%).
pub const ROYALTY_BASIS_POINTS: u16 = 500;

/// Token Metadata program limits (bytes).
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_URI_LENGTH: usize = 200;

/// Display metadata chosen for a mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
}

impl Default for NftMetadata {
    fn default() -> Self {
        Self {
            name: "My Solana NFT".to_string(),
            description: "A beautiful NFT on Solana".to_string(),
        }
    }
}

/// Off-chain metadata document uploaded to the storage backend.
///
/// Serializes to the Metaplex JSON standard subset:
/// `{ name, description, image, properties: { files: [{ uri, type }] } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDocument {
    pub name: String,
    pub description: String,
    pub image: String,
    pub properties: MetadataProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataProperties {
    pub files: Vec<MetadataFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFile {
    pub uri: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl MetadataDocument {
    /// Build the document for an image, echoing the image URI into the files list.
    pub fn for_image(name: &str, description: &str, image: &ImageReference) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            image: image.as_str().to_string(),
            properties: MetadataProperties {
                files: vec![MetadataFile {
                    uri: image.as_str().to_string(),
                    mime_type: image.mime_type().to_string(),
                }],
            },
        }
    }
}

/// Everything needed to run one mint attempt.
///
/// Only obtainable through [`MintRequest::prepare`], so a request can never exist
/// for a disconnected wallet or a missing image.
#[derive(Clone)]
pub struct MintRequest {
    pub image: ImageReference,
    pub name: String,
    pub description: String,
    pub royalty_basis_points: u16,
    pub recipient: Pubkey,
    pub signer: Arc<Keypair>,
}

impl MintRequest {
    /// Construct a request, or `None` when the preconditions are not met.
    pub fn prepare(
        wallet: &dyn WalletSession,
        image: Option<&ImageReference>,
        metadata: &NftMetadata,
    ) -> Option<Self> {
        if !wallet.is_connected() {
            return None;
        }
        let image = image?.clone();
        let recipient = wallet.public_key()?;
        let signer = wallet.signer()?;

        Some(Self {
            image,
            name: metadata.name.clone(),
            description: metadata.description.clone(),
            royalty_basis_points: ROYALTY_BASIS_POINTS,
            recipient,
            signer,
        })
    }

    /// Check the on-chain field limits before any network call.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput("NFT name must not be empty".to_string()));
        }
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(AppError::InvalidInput(format!(
                "NFT name is {} bytes, the limit is {}",
                self.name.len(),
                MAX_NAME_LENGTH
            )));
        }
        Ok(())
    }

    pub fn metadata_document(&self) -> MetadataDocument {
        MetadataDocument::for_image(&self.name, &self.description, &self.image)
    }
}

impl fmt::Debug for MintRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MintRequest")
            .field("image", &self.image)
            .field("name", &self.name)
            .field("royalty_basis_points", &self.royalty_basis_points)
            .field("recipient", &self.recipient)
            .finish_non_exhaustive()
    }
}

/// Parameters of the create-token call (step 7).
pub struct CreateNftParams {
    /// Metadata URI returned by the upload step
    pub uri: String,
    pub name: String,
    pub seller_fee_basis_points: u16,
    /// Freshly generated asset identity; its public key becomes the mint address
    pub mint: Keypair,
    /// Wallet that receives the token
    pub token_owner: Pubkey,
}

impl fmt::Debug for CreateNftParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use solana_sdk::signature::Signer;

        f.debug_struct("CreateNftParams")
            .field("uri", &self.uri)
            .field("name", &self.name)
            .field("seller_fee_basis_points", &self.seller_fee_basis_points)
            .field("mint", &self.mint.pubkey())
            .field("token_owner", &self.token_owner)
            .finish()
    }
}

/// Result of a successful create-token call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    pub mint_address: String,
    pub metadata_address: String,
    /// Transaction signature, when the backend reports one
    pub signature: Option<String>,
}

impl MintReceipt {
    pub fn explorer_url(&self, cluster: Cluster) -> String {
        cluster.explorer_address_url(&self.mint_address)
    }
}
