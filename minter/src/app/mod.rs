//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the UI, the background tasks, and the shared state.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                 Main Thread (egui)                    │
//! │  App                                                  │
//! │  - handle_*_click()  user actions                     │
//! │  - on_tick()         drains the event channel         │
//! │  - handle_event()    applies task results             │
//! │               │                                       │
//! │  State: Arc<RwLock<AppState>>                         │
//! └───────────────┬───────────────────────────────────────┘
//!                 │ async_channel (unbounded)
//! ┌───────────────▼───────────────────────────────────────┐
//! │            Background Tasks (TOKIO_RT)                │
//! │  - generate_image()  prompt → image reference         │
//! │  - mint_nft()        upload metadata → create token   │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! Every task sends exactly one terminal [`AppEvent`]; [`App::handle_event`] turns
//! it into exactly one state transition and one [`Notification`].
//!
//! Locks are held only for the duration of a state read or write, never across an
//! `.await`.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use std::path::PathBuf;
use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use lib_core::config::MinterConfig;
use lib_core::model::{Cluster, ImageReference};
use lib_core::service::{ImageGenerator, MintConnector};
use lib_core::{ImageSource, MintOrchestrator, ScreenState, StorageConfig};
use lib_imagegen::OpenAiImageClient;
use lib_solana::SolanaConnector;
use parking_lot::RwLock;

/// External collaborators the app drives.
pub struct Services {
    pub connector: Arc<dyn MintConnector>,
    /// Absent on the static-image screen
    pub generator: Option<Arc<dyn ImageGenerator>>,
    pub storage: StorageConfig,
    /// Keypair file used by "connect default wallet"
    pub keypair_path: PathBuf,
}

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for minimal duration to prevent UI freezing.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every background task.
    event_tx: Sender<AppEvent>,

    orchestrator: Arc<MintOrchestrator>,
    generator: Option<Arc<dyn ImageGenerator>>,
    keypair_path: PathBuf,
    storage: StorageConfig,
}

impl App {
    /// Create the application from validated configuration.
    pub fn new(config: &MinterConfig) -> Self {
        let connector = SolanaConnector::default();
        tasks::health::check_rpc(connector.clone(), config.cluster);

        let generator: Option<Arc<dyn ImageGenerator>> = config.openai_api_key.as_ref().map(|key| {
            Arc::new(OpenAiImageClient::with_base_url(key.clone(), config.openai_base_url.clone()))
                as Arc<dyn ImageGenerator>
        });

        let services = Services {
            connector: Arc::new(connector),
            generator,
            storage: config.storage.clone(),
            keypair_path: config.keypair_path.clone(),
        };

        Self::with_services(services, config.image_source.clone().into(), config.cluster)
    }

    /// Create the application around explicit collaborators.
    pub fn with_services(services: Services, source: ImageSource, cluster: Cluster) -> Self {
        let state = AppState::new(ScreenState::new(source), cluster);
        let (event_tx, event_rx) = unbounded();
        let orchestrator = Arc::new(MintOrchestrator::new(
            services.connector,
            cluster,
            services.storage.clone(),
        ));

        tracing::info!(
            cluster = %cluster,
            prompt = state.screen.shows_prompt(),
            "App state initialized"
        );

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            orchestrator,
            generator: services.generator,
            keypair_path: services.keypair_path,
            storage: services.storage,
        }
    }

    /// Called every frame to process async events.
    ///
    /// Non-blocking: drains whatever is in the channel and returns.
    pub fn on_tick(&mut self) {
        let mut processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        if processed > 0 {
            tracing::debug!(events_processed = processed, "on_tick: processed events");
        }
    }

    /// Apply one task result to the state.
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ----- wallet -----

    /// Pick a keypair file with the native file dialog and load it.
    pub fn handle_wallet_select_click(&mut self) {
        handlers::wallet::handle_wallet_select_click(self.state.clone(), self.event_tx.clone());
    }

    /// Load the keypair at the configured default path.
    pub fn handle_wallet_connect_default(&mut self) {
        handlers::wallet::connect_from_path(
            self.state.clone(),
            self.event_tx.clone(),
            &self.keypair_path,
        );
    }

    pub fn handle_wallet_disconnect_click(&mut self) {
        handlers::wallet::handle_wallet_disconnect_click(self.state.clone());
    }

    // ----- screen -----

    pub fn handle_prompt_change(&mut self, prompt: String) {
        self.state.write().screen.prompt = prompt;
    }

    pub fn handle_metadata_change(&mut self, name: String, description: String) {
        let mut state = self.state.write();
        state.metadata.name = name;
        state.metadata.description = description;
    }

    pub fn handle_generate_click(&mut self) {
        handlers::mint::handle_generate_click(
            self.state.clone(),
            self.event_tx.clone(),
            self.generator.clone(),
        );
    }

    pub fn handle_mint_click(&mut self) {
        handlers::mint::handle_mint_click(
            self.state.clone(),
            self.event_tx.clone(),
            self.orchestrator.clone(),
        );
    }

    /// Close the notification currently shown.
    pub fn dismiss_notification(&mut self) {
        self.state.write().notifications.pop_front();
    }

    /// Open a link from a notification in the system browser.
    pub fn handle_open_link(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            tracing::warn!(url = %url, error = %e, "Failed to open link");
            self.state.write().pending_toasts.push(Toast {
                kind: ToastKind::Error,
                message: format!("Could not open browser: {}", e),
            });
        }
    }

    /// HTTP URL the preview loads for `image` (`ipfs://` goes through the gateway).
    pub fn preview_url(&self, image: &ImageReference) -> String {
        self.storage.gateway_url(image.as_str())
    }

    /// Take the toasts queued since the last frame.
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.state.write().pending_toasts)
    }
}
