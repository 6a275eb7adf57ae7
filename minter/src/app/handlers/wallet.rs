//! # Wallet Handlers
//!
//! Handlers for keypair loading and disconnection.

use std::path::Path;
use std::sync::Arc;

use async_channel::Sender;
use lib_solana::KeypairWallet;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// Handle wallet select button click
///
/// Internal handler function - use [`crate::app::App::handle_wallet_select_click`] instead.
pub(crate) fn handle_wallet_select_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let picked = rfd::FileDialog::new()
        .set_title("Select Solana keypair")
        .add_filter("Keypair", &["json"])
        .add_filter("All files", &["*"])
        .pick_file();

    match picked {
        Some(path) => connect_from_path(state, event_tx, &path),
        None => tracing::debug!("Keypair selection cancelled"),
    }
}

/// Load a keypair file and make it the active wallet.
///
/// Loading is synchronous (a small local file); the outcome is reported through
/// the event channel so the UI can toast it.
pub(crate) fn connect_from_path(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    path: &Path,
) {
    let result = match KeypairWallet::load_from_file(path) {
        Ok(wallet) => {
            let address = wallet.status().address().unwrap_or_default().to_string();
            state.write().wallet = wallet;
            Ok(address)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to load wallet");
            Err(e.to_string())
        }
    };

    if event_tx.try_send(AppEvent::WalletConnected(result)).is_err() {
        tracing::warn!("Event channel closed, wallet result dropped");
    }
}

/// Handle wallet disconnect button click
pub(crate) fn handle_wallet_disconnect_click(state: Arc<RwLock<AppState>>) {
    state.write().wallet.disconnect();
}
