//! # Application Configuration
//!
//! Configuration loaded from environment variables (and a `.env` file, if present).
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().expect("invalid configuration");
//! let storage = &core_config().storage;
//! println!("uploading metadata to {}", storage.address);
//! ```
//!
//! ## Variables
//!
//! | Variable | Default |
//! |---|---|
//! | `OPENAI_API_KEY` | unset (static image screen) |
//! | `MINTER_IMAGE_SOURCE` | `prompt` when a key is set, else `static` |
//! | `MINTER_STATIC_IMAGE_URL` | [`DEFAULT_STATIC_IMAGE_URL`] |
//! | `MINTER_KEYPAIR_PATH` | `~/.config/solana/id.json` |
//! | `MINTER_STORAGE_ADDRESS` | [`DEFAULT_STORAGE_ADDRESS`] |
//! | `MINTER_STORAGE_GATEWAY` | [`DEFAULT_STORAGE_GATEWAY`] |
//! | `OPENAI_BASE_URL` | `https://api.openai.com` |

use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::{AppError, Result};
use crate::model::{Cluster, ImageReference};

/// Image shown on the static screen.
pub const DEFAULT_STATIC_IMAGE_URL: &str =
    "https://miro.medium.com/v2/resize:fit:1199/1*0rjK35h3sJE_W3z4pGIQOA.jpeg";

/// Storage node API the metadata document is posted to.
pub const DEFAULT_STORAGE_ADDRESS: &str = "http://127.0.0.1:5001";

/// Gateway used to resolve `ipfs://` URIs for previews.
pub const DEFAULT_STORAGE_GATEWAY: &str = "https://ipfs.io";

/// Upload timeout handed verbatim to the storage backend.
pub const STORAGE_TIMEOUT_MS: u64 = 60_000;

/// Default OpenAI API host.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Off-chain storage backend configuration.
///
/// No credentials are carried; signing is delegated to the attached wallet identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    /// Upload endpoint of the storage node
    pub address: String,
    /// Provider URL used to resolve stored documents over HTTP
    pub provider_url: String,
    /// Upload timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_STORAGE_ADDRESS.to_string(),
            provider_url: DEFAULT_STORAGE_GATEWAY.to_string(),
            timeout_ms: STORAGE_TIMEOUT_MS,
        }
    }
}

impl StorageConfig {
    /// Resolve an `ipfs://` URI through the provider; other URIs pass through.
    pub fn gateway_url(&self, uri: &str) -> String {
        match uri.strip_prefix("ipfs://") {
            Some(path) => format!("{}/ipfs/{}", self.provider_url.trim_end_matches('/'), path),
            None => uri.to_string(),
        }
    }
}

/// Where the screen's image comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSourceConfig {
    /// Fixed image URL, minted as-is
    Static(ImageReference),
    /// Image generated on demand from a prompt
    Prompt,
}

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct MinterConfig {
    /// Target cluster (fixed to devnet)
    pub cluster: Cluster,

    /// Image source variant of the screen
    pub image_source: ImageSourceConfig,

    /// API credential for the image-generation service
    ///
    /// The only secret the application reads. Required for [`ImageSourceConfig::Prompt`].
    pub openai_api_key: Option<String>,

    /// Image-generation API host (overridable for local testing)
    pub openai_base_url: String,

    /// Keypair file opened by the "connect default wallet" action
    pub keypair_path: PathBuf,

    /// Metadata storage backend
    pub storage: StorageConfig,
}

impl MinterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Missing .env is fine, everything has a default except the API key
        let _ = dotenvy::dotenv();

        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let image_source = match env::var("MINTER_IMAGE_SOURCE").ok().as_deref().map(str::trim) {
            Some("prompt") => ImageSourceConfig::Prompt,
            Some("static") => ImageSourceConfig::Static(static_image_from_env()?),
            Some(other) => {
                return Err(AppError::Config(format!(
                    "MINTER_IMAGE_SOURCE must be 'prompt' or 'static', got '{}'",
                    other
                )))
            }
            None if openai_api_key.is_some() => ImageSourceConfig::Prompt,
            None => ImageSourceConfig::Static(static_image_from_env()?),
        };

        let keypair_path = env::var("MINTER_KEYPAIR_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_keypair_path());

        let storage = StorageConfig {
            address: env::var("MINTER_STORAGE_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_STORAGE_ADDRESS.to_string()),
            provider_url: env::var("MINTER_STORAGE_GATEWAY")
                .unwrap_or_else(|_| DEFAULT_STORAGE_GATEWAY.to_string()),
            timeout_ms: STORAGE_TIMEOUT_MS,
        };

        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());

        Ok(Self {
            cluster: Cluster::Devnet,
            image_source,
            openai_api_key,
            openai_base_url,
            keypair_path,
            storage,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.image_source == ImageSourceConfig::Prompt && self.openai_api_key.is_none() {
            return Err(AppError::Config(
                "OPENAI_API_KEY must be set to generate images from a prompt".to_string(),
            ));
        }

        if self.storage.timeout_ms == 0 {
            return Err(AppError::Config("Storage timeout must be greater than 0".to_string()));
        }

        let address = &self.storage.address;
        if !address.starts_with("http://") && !address.starts_with("https://") {
            return Err(AppError::Config(format!(
                "MINTER_STORAGE_ADDRESS must be an http(s) URL, got '{}'",
                self.storage.address
            )));
        }

        Ok(())
    }
}

fn static_image_from_env() -> Result<ImageReference> {
    let url = env::var("MINTER_STATIC_IMAGE_URL")
        .unwrap_or_else(|_| DEFAULT_STATIC_IMAGE_URL.to_string());
    ImageReference::new(url).map_err(|e| AppError::Config(e.to_string()))
}

/// Solana CLI default keypair location.
pub fn default_keypair_path() -> PathBuf {
    #[cfg(windows)]
    let base = env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
    #[cfg(not(windows))]
    let base = env::var("HOME").unwrap_or_else(|_| ".".to_string());

    PathBuf::from(base).join(".config").join("solana").join("id.json")
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<MinterConfig> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are invalid
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<&'static MinterConfig> {
    let config = MinterConfig::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;
    Ok(core_config())
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static MinterConfig {
    CONFIG.get().expect("Config must be initialized with init_config() before use")
}
