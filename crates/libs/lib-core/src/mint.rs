//! # Mint Orchestration
//!
//! Drives the mint workflow for one [`MintRequest`]:
//!
//! ```text
//! 1. connect to the cluster          (MintConnector::connect)
//! 2. bind a minting client to it     (MintConnector::connect)
//! 3. attach the wallet identity      (MintingClient::use_identity)
//! 4. attach the storage backend      (MintingClient::use_storage)
//! 5. generate the asset keypair
//! 6. upload the metadata document    (MintingClient::upload_metadata)
//! 7. create the token                (MintingClient::create)
//! ```
//!
//! Steps run strictly in order and the first error aborts the rest. Nothing is
//! rolled back: a document uploaded in step 6 is abandoned if step 7 fails.

use std::sync::Arc;

use solana_sdk::signature::{Keypair, Signer};
use tracing::{debug, info, instrument, warn};

use crate::config::StorageConfig;
use crate::error::{AppError, Result};
use crate::model::{
    Cluster, CreateNftParams, ImageReference, MintReceipt, MintRequest, NftMetadata,
    MAX_URI_LENGTH,
};
use crate::service::{MintConnector, WalletSession};

pub struct MintOrchestrator {
    connector: Arc<dyn MintConnector>,
    cluster: Cluster,
    storage: StorageConfig,
}

impl MintOrchestrator {
    pub fn new(
        connector: Arc<dyn MintConnector>,
        cluster: Cluster,
        storage: StorageConfig,
    ) -> Self {
        Self { connector, cluster, storage }
    }

    /// Guarded entry point: builds the request and mints, or returns `None` without
    /// touching the connector when the wallet is disconnected or no image is set.
    pub async fn try_mint(
        &self,
        wallet: &dyn WalletSession,
        image: Option<&ImageReference>,
        metadata: &NftMetadata,
    ) -> Option<Result<MintReceipt>> {
        let request = MintRequest::prepare(wallet, image, metadata)?;
        Some(self.mint(request).await)
    }

    /// Run steps 1 through 7 for `request`.
    #[instrument(skip_all, fields(cluster = %self.cluster, name = %request.name))]
    pub async fn mint(&self, request: MintRequest) -> Result<MintReceipt> {
        request.validate()?;

        debug!(step = 1, "Connecting to cluster");
        let mut client = self.connector.connect(self.cluster)?;
        debug!(step = 2, "Minting client ready");

        debug!(step = 3, signer = %request.signer.pubkey(), "Attaching wallet identity");
        client.use_identity(Arc::clone(&request.signer))?;

        debug!(
            step = 4,
            address = %self.storage.address,
            timeout_ms = self.storage.timeout_ms,
            "Attaching storage backend"
        );
        client.use_storage(&self.storage)?;

        let mint = Keypair::new();
        debug!(step = 5, mint = %mint.pubkey(), "Generated asset keypair");

        let document = request.metadata_document();
        debug!(step = 6, image = %request.image, "Uploading metadata");
        let uri = client.upload_metadata(&document).await?;

        if uri.trim().is_empty() {
            return Err(AppError::Storage("Storage backend returned an empty URI".to_string()));
        }
        if uri.len() > MAX_URI_LENGTH {
            warn!(uri = %uri, "Uploaded metadata abandoned: URI exceeds on-chain limit");
            return Err(AppError::InvalidInput(format!(
                "Metadata URI is {} bytes, the limit is {}",
                uri.len(),
                MAX_URI_LENGTH
            )));
        }
        info!(uri = %uri, "Metadata uploaded");

        let mint_address = mint.pubkey();
        let params = CreateNftParams {
            uri: uri.clone(),
            name: request.name.clone(),
            seller_fee_basis_points: request.royalty_basis_points,
            mint,
            token_owner: request.recipient,
        };

        debug!(step = 7, mint = %mint_address, "Creating token");
        match client.create(params).await {
            Ok(receipt) => {
                info!(
                    mint = %receipt.mint_address,
                    metadata = %receipt.metadata_address,
                    signature = ?receipt.signature,
                    "NFT minted"
                );
                Ok(receipt)
            }
            Err(e) => {
                warn!(
                    uri = %uri,
                    error = %e,
                    "Token creation failed; uploaded metadata is orphaned"
                );
                Err(e)
            }
        }
    }
}
