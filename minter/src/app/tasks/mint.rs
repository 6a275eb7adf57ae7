//! # Mint Task

use std::sync::Arc;

use async_channel::Sender;
use lib_core::model::MintRequest;
use lib_core::MintOrchestrator;

use crate::app::events::AppEvent;

/// Run the mint workflow for `request` and report the result.
pub(crate) fn mint_nft(
    orchestrator: Arc<MintOrchestrator>,
    request: MintRequest,
    event_tx: Sender<AppEvent>,
) {
    super::spawn_reported(
        "mint_nft",
        async move { orchestrator.mint(request).await.map_err(|e| e.message().to_string()) },
        event_tx,
        AppEvent::MintFinished,
    );
}
