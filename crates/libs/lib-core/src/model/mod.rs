//! # Domain Model
//!
//! Transient values the screen holds while a wallet is connected. Nothing here is
//! persisted.
//!
//! - [`cluster`]: logical Solana network names and their public endpoints
//! - [`image`]: the resolvable image reference minted into the token
//! - [`nft`]: metadata document, mint request, create parameters and receipt

pub mod cluster;
pub mod image;
pub mod nft;

pub use cluster::Cluster;
pub use image::ImageReference;
pub use nft::{
    CreateNftParams, MetadataDocument, MetadataFile, MetadataProperties, MintReceipt, MintRequest,
    NftMetadata, MAX_NAME_LENGTH, MAX_URI_LENGTH, ROYALTY_BASIS_POINTS,
};
