//! # Mint Screen Handlers
//!
//! Generate and mint clicks. Each one runs the matching `start_*` transition under
//! a short write lock and only spawns a task when the transition allows it, so a
//! click while the operation is in flight (or preconditions are unmet) does nothing.

use std::sync::Arc;

use async_channel::Sender;
use lib_core::service::ImageGenerator;
use lib_core::MintOrchestrator;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;

/// Handle generate button click
pub(crate) fn handle_generate_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    generator: Option<Arc<dyn ImageGenerator>>,
) {
    let Some(generator) = generator else {
        tracing::debug!("Generate clicked without an image generator");
        return;
    };

    let prompt = state.write().screen.start_generate();
    match prompt {
        Some(prompt) => tasks::generate::generate_image(generator, prompt, event_tx),
        None => tracing::debug!("Generate ignored: blank prompt or already generating"),
    }
}

/// Handle mint button click
pub(crate) fn handle_mint_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    orchestrator: Arc<MintOrchestrator>,
) {
    let request = {
        let mut guard = state.write();
        let state = &mut *guard;
        state.screen.start_mint(&state.wallet, &state.metadata)
    };

    match request {
        Some(request) => tasks::mint::mint_nft(orchestrator, request, event_tx),
        None => tracing::debug!("Mint ignored: wallet disconnected, no image, or already minting"),
    }
}
