//! # Metaplex Minting Client
//!
//! [`MintingClient`] implementation that uploads metadata to IPFS and creates a
//! Token Metadata NFT in a single transaction:
//!
//! ```text
//! System     CreateAccount            mint account (82 bytes, rent exempt)
//! SPL Token  InitializeMint2          0 decimals, identity = mint + freeze authority
//! ATA        CreateAssociatedToken    token owner's account for the mint
//! SPL Token  MintTo                   amount 1
//! Metadata   CreateMetadataAccountV3  identity as verified 100% creator
//! Metadata   CreateMasterEditionV3    max supply 0
//! ```

pub mod instructions;

use std::sync::Arc;

use async_trait::async_trait;
use lib_core::model::{Cluster, CreateNftParams, MetadataDocument, MintReceipt};
use lib_core::service::MintingClient;
use lib_core::{AppError, Result, StorageConfig};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;
use tracing::{debug, info};

use crate::storage::IpfsStorage;
use instructions::{Creator, MetadataData, MINT_ACCOUNT_LEN};

/// Minting client bound to one RPC connection.
pub struct MetaplexClient {
    rpc: Arc<RpcClient>,
    cluster: Cluster,
    identity: Option<Arc<Keypair>>,
    storage: Option<IpfsStorage>,
}

impl MetaplexClient {
    pub fn new(rpc: Arc<RpcClient>, cluster: Cluster) -> Self {
        Self { rpc, cluster, identity: None, storage: None }
    }

    fn identity(&self) -> Result<&Arc<Keypair>> {
        self.identity
            .as_ref()
            .ok_or_else(|| AppError::Wallet("No wallet identity attached".to_string()))
    }

    fn storage(&self) -> Result<&IpfsStorage> {
        self.storage
            .as_ref()
            .ok_or_else(|| AppError::Storage("No storage backend attached".to_string()))
    }
}

/// Instructions for one NFT, in execution order.
pub fn build_create_instructions(
    identity: &Pubkey,
    params: &CreateNftParams,
    mint_rent_lamports: u64,
) -> Result<Vec<Instruction>> {
    let mint = params.mint.pubkey();
    let token_program = spl_token::id();
    let owner_ata =
        spl_associated_token_account::get_associated_token_address(&params.token_owner, &mint);

    let initialize_mint = spl_token::instruction::initialize_mint2(
        &token_program,
        &mint,
        identity,
        Some(identity),
        0,
    )
    .map_err(|e| AppError::Mint(format!("InitializeMint2: {}", e)))?;

    let mint_to =
        spl_token::instruction::mint_to(&token_program, &mint, &owner_ata, identity, &[], 1)
            .map_err(|e| AppError::Mint(format!("MintTo: {}", e)))?;

    let data = MetadataData {
        name: params.name.clone(),
        symbol: String::new(),
        uri: params.uri.clone(),
        seller_fee_basis_points: params.seller_fee_basis_points,
        creators: vec![Creator { address: *identity, verified: true, share: 100 }],
    };

    Ok(vec![
        instructions::create_account(
            identity,
            &mint,
            mint_rent_lamports,
            MINT_ACCOUNT_LEN,
            &token_program,
        ),
        initialize_mint,
        spl_associated_token_account::instruction::create_associated_token_account(
            identity,
            &params.token_owner,
            &mint,
            &token_program,
        ),
        mint_to,
        instructions::create_metadata_account_v3(&mint, identity, identity, identity, &data),
        instructions::create_master_edition_v3(&mint, identity, identity, identity, Some(0)),
    ])
}

#[async_trait]
impl MintingClient for MetaplexClient {
    fn use_identity(&mut self, signer: Arc<Keypair>) -> Result<()> {
        debug!(identity = %signer.pubkey(), "Identity attached");
        self.identity = Some(signer);
        Ok(())
    }

    fn use_storage(&mut self, storage: &StorageConfig) -> Result<()> {
        self.storage = Some(IpfsStorage::new(storage)?);
        Ok(())
    }

    async fn upload_metadata(&self, document: &MetadataDocument) -> Result<String> {
        self.identity()?;
        self.storage()?.upload_json(document).await
    }

    async fn create(&self, params: CreateNftParams) -> Result<MintReceipt> {
        let identity = Arc::clone(self.identity()?);
        let payer = identity.pubkey();
        let mint = params.mint.pubkey();

        let rent = self
            .rpc
            .get_minimum_balance_for_rent_exemption(MINT_ACCOUNT_LEN as usize)
            .await
            .map_err(|e| AppError::Rpc(format!("Failed to get rent exemption: {}", e)))?;

        let instructions = build_create_instructions(&payer, &params, rent)?;

        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| AppError::Rpc(format!("Failed to get blockhash: {}", e)))?;

        let transaction = Transaction::new_signed_with_payer(
            &instructions,
            Some(&payer),
            &[identity.as_ref(), &params.mint],
            blockhash,
        );

        info!(mint = %mint, cluster = %self.cluster, "Sending create transaction");
        let signature = self
            .rpc
            .send_and_confirm_transaction(&transaction)
            .await
            .map_err(|e| AppError::Mint(format!("Transaction failed: {}", e)))?;

        Ok(MintReceipt {
            mint_address: mint.to_string(),
            metadata_address: instructions::metadata_pda(&mint).to_string(),
            signature: Some(signature.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(owner: Pubkey) -> CreateNftParams {
        CreateNftParams {
            uri: "ipfs://abc".to_string(),
            name: "My Solana NFT".to_string(),
            seller_fee_basis_points: 500,
            mint: Keypair::new(),
            token_owner: owner,
        }
    }

    fn client() -> MetaplexClient {
        let rpc = Arc::new(RpcClient::new("http://127.0.0.1:1".to_string()));
        MetaplexClient::new(rpc, Cluster::Devnet)
    }

    #[test]
    fn test_instruction_order() {
        let identity = Keypair::new();
        let params = params(identity.pubkey());
        let ixs = build_create_instructions(&identity.pubkey(), &params, 1_461_600).unwrap();

        let programs: Vec<Pubkey> = ixs.iter().map(|ix| ix.program_id).collect();
        assert_eq!(
            programs,
            vec![
                instructions::SYSTEM_PROGRAM_ID,
                spl_token::id(),
                Pubkey::from_str_const("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"),
                spl_token::id(),
                instructions::TOKEN_METADATA_PROGRAM_ID,
                instructions::TOKEN_METADATA_PROGRAM_ID,
            ]
        );
        // royalty lands right after the three strings
        let data = &ixs[4].data;
        let name_end = 1 + 4 + "My Solana NFT".len();
        let uri_end = name_end + 4 + 4 + "ipfs://abc".len();
        assert_eq!(u16::from_le_bytes([data[uri_end], data[uri_end + 1]]), 500);
    }

    #[test]
    fn test_transaction_is_signed_by_identity_and_mint() {
        let identity = Keypair::new();
        let params = params(Pubkey::new_unique());
        let ixs = build_create_instructions(&identity.pubkey(), &params, 1).unwrap();

        let tx = Transaction::new_signed_with_payer(
            &ixs,
            Some(&identity.pubkey()),
            &[&identity, &params.mint],
            solana_sdk::hash::Hash::default(),
        );
        assert_eq!(tx.message.header.num_required_signatures, 2);
        assert_eq!(tx.message.account_keys[0], identity.pubkey());
    }

    #[tokio::test]
    async fn test_requires_identity_then_storage() {
        let mut client = client();
        let doc = MetadataDocument::for_image(
            "Fox",
            "",
            &lib_core::model::ImageReference::new("https://img/1.png").unwrap(),
        );

        assert!(matches!(client.upload_metadata(&doc).await, Err(AppError::Wallet(_))));
        let created = client.create(params(Pubkey::new_unique())).await;
        assert!(matches!(created, Err(AppError::Wallet(_))));

        client.use_identity(Arc::new(Keypair::new())).unwrap();
        assert!(matches!(client.upload_metadata(&doc).await, Err(AppError::Storage(_))));
    }
}
