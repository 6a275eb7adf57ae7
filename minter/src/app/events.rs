//! # Application Events
//!
//! Results sent from background tasks to the main thread.

use lib_core::model::{ImageReference, MintReceipt};

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Image generation finished
    ImageGenerated(Result<ImageReference, String>),
    /// Mint workflow finished
    MintFinished(Result<MintReceipt, String>),
    /// Keypair load finished (address on success)
    WalletConnected(Result<String, String>),
}
