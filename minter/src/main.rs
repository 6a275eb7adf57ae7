//! Solana NFT Minter desktop entry point.

use lib_core::config::init_config;
use minter::ui::MinterApp;
use minter::{debug, App};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] lib_core::AppError),

    #[error("UI error: {0}")]
    Ui(#[from] eframe::Error),
}

fn main() -> Result<(), StartupError> {
    // Guard flushes the file appender on exit
    let _log_guard = debug::init_logger();

    let config = init_config()
        .inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))?;
    tracing::info!(cluster = %config.cluster, "Starting Solana NFT Minter");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Solana NFT Minter")
            .with_inner_size([720.0, 760.0])
            .with_min_inner_size([480.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Solana NFT Minter",
        options,
        Box::new(move |cc| Ok(Box::new(MinterApp::new(cc, App::new(config))))),
    )?;

    tracing::info!("Minter closed");
    Ok(())
}
