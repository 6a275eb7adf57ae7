//! App-level flows: clicks spawn tasks on the shared runtime, results come back
//! through the event channel and become exactly one notification each.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use lib_core::model::{Cluster, ImageReference, MintReceipt};
use lib_core::service::{GenerationRequest, ImageGenerator, MintConnector, MintingClient, WalletSession};
use lib_core::testing::{FakeConnector, FakeImageGenerator, MintCall};
use lib_core::{AppError, ImageSource, StorageConfig};
use lib_solana::KeypairWallet;
use minter::app::{NotificationKind, Services, ToastKind};
use minter::{App, AppEvent};
use solana_sdk::signature::Keypair;

const STATIC_IMAGE: &str = "https://example.com/nft.jpeg";

struct PanickingGenerator;

#[async_trait]
impl ImageGenerator for PanickingGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> lib_core::Result<ImageReference> {
        panic!("generator exploded")
    }
}

struct PanickingConnector;

impl MintConnector for PanickingConnector {
    fn connect(&self, _cluster: Cluster) -> lib_core::Result<Box<dyn MintingClient>> {
        panic!("connector exploded")
    }
}

fn app_with(
    connector: FakeConnector,
    generator: Option<FakeImageGenerator>,
    source: ImageSource,
) -> App {
    let generator = generator.map(|g| Arc::new(g) as Arc<dyn ImageGenerator>);
    app_with_services(Arc::new(connector), generator, source)
}

fn app_with_services(
    connector: Arc<dyn MintConnector>,
    generator: Option<Arc<dyn ImageGenerator>>,
    source: ImageSource,
) -> App {
    let services = Services {
        connector,
        generator,
        storage: StorageConfig::default(),
        keypair_path: PathBuf::from("/nonexistent/id.json"),
    };
    App::with_services(services, source, Cluster::Devnet)
}

fn static_source() -> ImageSource {
    ImageSource::Static(ImageReference::new(STATIC_IMAGE).unwrap())
}

fn next_event(app: &App) -> AppEvent {
    app.event_rx.recv_blocking().expect("channel open")
}

#[test]
fn mint_success_shows_single_explorer_notification() {
    let connector = FakeConnector::new().create_returns(MintReceipt {
        mint_address: "Addr1".to_string(),
        metadata_address: "Meta1".to_string(),
        signature: None,
    });
    let mut app = app_with(connector.clone(), None, static_source());
    app.state.write().wallet = KeypairWallet::generate();

    app.handle_mint_click();
    assert!(app.state.read().screen.is_minting());

    // Second click while in flight is ignored
    app.handle_mint_click();

    let event = next_event(&app);
    app.handle_event(event);

    let state = app.state.read();
    assert!(!state.screen.is_minting());
    assert_eq!(state.notifications.len(), 1);
    let notification = state.current_notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(
        notification.message,
        "NFT minted successfully! View it at: https://explorer.solana.com/address/Addr1?cluster=devnet"
    );
    assert_eq!(
        notification.link.as_deref(),
        Some("https://explorer.solana.com/address/Addr1?cluster=devnet")
    );
    drop(state);

    let creates = connector
        .calls()
        .into_iter()
        .filter(|c| matches!(c, MintCall::Create { .. }))
        .count();
    assert_eq!(creates, 1);
    assert!(app.event_rx.is_empty());
}

#[test]
fn mint_failure_resets_flag_and_reports_error() {
    let connector = FakeConnector::new().fail_create(AppError::Rpc("network error".to_string()));
    let mut app = app_with(connector, None, static_source());
    app.state.write().wallet = KeypairWallet::generate();

    app.handle_mint_click();
    let event = next_event(&app);
    app.handle_event(event);

    let state = app.state.read();
    assert!(!state.screen.is_minting());
    assert_eq!(state.screen.image().map(|i| i.as_str()), Some(STATIC_IMAGE));
    let notification = state.current_notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Error minting NFT: network error");
}

#[test]
fn mint_panic_still_clears_flag_and_notifies_once() {
    let mut app = app_with_services(Arc::new(PanickingConnector), None, static_source());
    app.state.write().wallet = KeypairWallet::generate();

    app.handle_mint_click();
    assert!(app.state.read().screen.is_minting());

    let event = next_event(&app);
    app.handle_event(event);

    let state = app.state.read();
    assert!(!state.screen.is_minting());
    assert_eq!(state.notifications.len(), 1);
    let notification = state.current_notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Error minting NFT: Task panicked: connector exploded");
    drop(state);
    assert!(app.event_rx.is_empty());
}

#[test]
fn generate_panic_still_clears_flag_and_notifies_once() {
    let generator: Arc<dyn ImageGenerator> = Arc::new(PanickingGenerator);
    let mut app =
        app_with_services(Arc::new(FakeConnector::new()), Some(generator), ImageSource::Prompt);
    app.handle_prompt_change("a cat".to_string());

    app.handle_generate_click();
    assert!(app.state.read().screen.is_generating());

    let event = next_event(&app);
    app.handle_event(event);

    let state = app.state.read();
    assert!(!state.screen.is_generating());
    assert!(state.screen.image().is_none());
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(
        state.current_notification().unwrap().message,
        "Error generating image: Task panicked: generator exploded"
    );
}

#[test]
fn mint_without_wallet_does_nothing() {
    let connector = FakeConnector::new();
    let mut app = app_with(connector.clone(), None, static_source());

    app.handle_mint_click();

    assert!(!app.state.read().screen.is_minting());
    assert!(connector.calls().is_empty());
    assert!(app.event_rx.is_empty());
}

#[test]
fn generate_success_sets_image_and_notifies() {
    let generator = FakeImageGenerator::returning("https://img.example/fox.png");
    let mut app = app_with(FakeConnector::new(), Some(generator.clone()), ImageSource::Prompt);
    app.handle_prompt_change("  a red fox in snow ".to_string());

    app.handle_generate_click();
    assert!(app.state.read().screen.is_generating());

    let event = next_event(&app);
    app.handle_event(event);

    let state = app.state.read();
    assert!(!state.screen.is_generating());
    assert_eq!(state.screen.image().map(|i| i.as_str()), Some("https://img.example/fox.png"));
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.current_notification().unwrap().kind, NotificationKind::Info);
    assert_eq!(generator.requests()[0].prompt, "a red fox in snow");
}

#[test]
fn generate_failure_keeps_screen_without_image() {
    let generator = FakeImageGenerator::failing("quota exceeded");
    let mut app = app_with(FakeConnector::new(), Some(generator), ImageSource::Prompt);
    app.handle_prompt_change("a cat".to_string());

    app.handle_generate_click();
    let event = next_event(&app);
    app.handle_event(event);

    let state = app.state.read();
    assert!(!state.screen.is_generating());
    assert!(state.screen.image().is_none());
    let notification = state.current_notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Error generating image: quota exceeded");
}

#[test]
fn blank_prompt_does_not_generate() {
    let generator = FakeImageGenerator::returning("https://img.example/x.png");
    let mut app = app_with(FakeConnector::new(), Some(generator.clone()), ImageSource::Prompt);
    app.handle_prompt_change("   ".to_string());

    app.handle_generate_click();

    assert!(!app.state.read().screen.is_generating());
    assert!(generator.requests().is_empty());
}

#[test]
fn dismiss_pops_oldest_notification() {
    let mut app = app_with(FakeConnector::new(), None, static_source());
    app.handle_event(AppEvent::MintFinished(Err("first".to_string())));
    app.handle_event(AppEvent::MintFinished(Err("second".to_string())));
    assert_eq!(app.state.read().notifications.len(), 2);

    app.dismiss_notification();

    let state = app.state.read();
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.current_notification().unwrap().message, "Error minting NFT: second");
}

#[test]
fn wallet_connect_from_keypair_file_toasts_address() {
    let keypair = Keypair::new();
    let path = std::env::temp_dir().join(format!("minter-app-flow-{}.json", std::process::id()));
    std::fs::write(&path, format!("{:?}", keypair.to_bytes().to_vec())).unwrap();

    let services = Services {
        connector: Arc::new(FakeConnector::new()),
        generator: None,
        storage: StorageConfig::default(),
        keypair_path: path.clone(),
    };
    let mut app = App::with_services(services, static_source(), Cluster::Devnet);

    app.handle_wallet_connect_default();
    app.on_tick();

    assert!(app.state.read().wallet.is_connected());
    let toasts = app.take_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert!(toasts[0].message.starts_with("Wallet connected: "));
    assert!(app.take_toasts().is_empty());

    app.handle_wallet_disconnect_click();
    assert!(!app.state.read().wallet.is_connected());

    let _ = std::fs::remove_file(path);
}

#[test]
fn wallet_connect_missing_file_toasts_error() {
    let mut app = app_with(FakeConnector::new(), None, static_source());

    app.handle_wallet_connect_default();
    app.on_tick();

    assert!(!app.state.read().wallet.is_connected());
    let toasts = app.take_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);
    assert!(toasts[0].message.starts_with("Failed to load wallet: "));
}
