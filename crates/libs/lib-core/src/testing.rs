//! # Test Doubles
//!
//! In-memory implementations of every capability trait in [`crate::service`],
//! used by the workflow tests here and by the application's handler tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

use crate::config::StorageConfig;
use crate::error::{AppError, Result};
use crate::model::{Cluster, CreateNftParams, ImageReference, MetadataDocument, MintReceipt};
use crate::service::{
    GenerationRequest, ImageGenerator, MintConnector, MintingClient, WalletSession,
};

/// Wallet with a fixed keypair and a toggleable connection flag.
pub struct FakeWallet {
    keypair: Arc<Keypair>,
    connected: bool,
}

impl FakeWallet {
    pub fn connected() -> Self {
        Self { keypair: Arc::new(Keypair::new()), connected: true }
    }

    pub fn disconnected() -> Self {
        Self { keypair: Arc::new(Keypair::new()), connected: false }
    }

    pub fn address(&self) -> Pubkey {
        self.keypair.pubkey()
    }
}

impl WalletSession for FakeWallet {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn public_key(&self) -> Option<Pubkey> {
        self.connected.then(|| self.keypair.pubkey())
    }

    fn signer(&self) -> Option<Arc<Keypair>> {
        self.connected.then(|| Arc::clone(&self.keypair))
    }
}

/// One recorded interaction with the fake minting stack.
#[derive(Debug, Clone, PartialEq)]
pub enum MintCall {
    Connect(Cluster),
    UseIdentity(Pubkey),
    UseStorage(StorageConfig),
    Upload(MetadataDocument),
    Create {
        uri: String,
        name: String,
        seller_fee_basis_points: u16,
        mint: Pubkey,
        token_owner: Pubkey,
    },
}

#[derive(Clone)]
struct Script {
    connect: std::result::Result<(), AppError>,
    upload: Result<String>,
    create: Result<MintReceipt>,
}

/// Connector whose clients follow a script and record every call in order.
#[derive(Clone)]
pub struct FakeConnector {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<MintCall>>>,
}

impl Default for FakeConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeConnector {
    /// Upload returns `ipfs://abc`, create returns `Addr1`/`Meta1`.
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                connect: Ok(()),
                upload: Ok("ipfs://abc".to_string()),
                create: Ok(MintReceipt {
                    mint_address: "Addr1".to_string(),
                    metadata_address: "Meta1".to_string(),
                    signature: None,
                }),
            })),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn fail_connect(self, error: AppError) -> Self {
        self.script.lock().connect = Err(error);
        self
    }

    pub fn upload_returns(self, uri: &str) -> Self {
        self.script.lock().upload = Ok(uri.to_string());
        self
    }

    pub fn fail_upload(self, error: AppError) -> Self {
        self.script.lock().upload = Err(error);
        self
    }

    pub fn create_returns(self, receipt: MintReceipt) -> Self {
        self.script.lock().create = Ok(receipt);
        self
    }

    pub fn fail_create(self, error: AppError) -> Self {
        self.script.lock().create = Err(error);
        self
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> Vec<MintCall> {
        self.calls.lock().clone()
    }
}

impl MintConnector for FakeConnector {
    fn connect(&self, cluster: Cluster) -> Result<Box<dyn MintingClient>> {
        self.calls.lock().push(MintCall::Connect(cluster));
        self.script.lock().connect.clone()?;

        Ok(Box::new(FakeMintingClient {
            script: Arc::clone(&self.script),
            calls: Arc::clone(&self.calls),
            identity: None,
            storage: None,
        }))
    }
}

struct FakeMintingClient {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<MintCall>>>,
    identity: Option<Arc<Keypair>>,
    storage: Option<StorageConfig>,
}

#[async_trait]
impl MintingClient for FakeMintingClient {
    fn use_identity(&mut self, signer: Arc<Keypair>) -> Result<()> {
        self.calls.lock().push(MintCall::UseIdentity(signer.pubkey()));
        self.identity = Some(signer);
        Ok(())
    }

    fn use_storage(&mut self, storage: &StorageConfig) -> Result<()> {
        self.calls.lock().push(MintCall::UseStorage(storage.clone()));
        self.storage = Some(storage.clone());
        Ok(())
    }

    async fn upload_metadata(&self, document: &MetadataDocument) -> Result<String> {
        if self.storage.is_none() {
            return Err(AppError::Storage("No storage backend attached".to_string()));
        }
        self.calls.lock().push(MintCall::Upload(document.clone()));
        self.script.lock().upload.clone()
    }

    async fn create(&self, params: CreateNftParams) -> Result<MintReceipt> {
        if self.identity.is_none() {
            return Err(AppError::Wallet("No identity attached".to_string()));
        }
        self.calls.lock().push(MintCall::Create {
            uri: params.uri,
            name: params.name,
            seller_fee_basis_points: params.seller_fee_basis_points,
            mint: params.mint.pubkey(),
            token_owner: params.token_owner,
        });
        self.script.lock().create.clone()
    }
}

/// Image generator returning a fixed result and recording requests.
///
/// Clones share the request log.
#[derive(Clone)]
pub struct FakeImageGenerator {
    result: Result<ImageReference>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl FakeImageGenerator {
    pub fn returning(uri: &str) -> Self {
        Self {
            result: ImageReference::new(uri),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(AppError::ImageGeneration(message.to_string())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ImageGenerator for FakeImageGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<ImageReference> {
        self.requests.lock().push(request.clone());
        self.result.clone()
    }
}
