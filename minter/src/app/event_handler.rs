//! # Event Handler
//!
//! Turns task results into state transitions and user-facing notifications.

use lib_core::format::truncate_identity;
use lib_core::model::{ImageReference, MintReceipt};

use crate::app::{App, AppEvent, Notification, Toast, ToastKind};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::ImageGenerated(result) => self.handle_image_generated(result),
            AppEvent::MintFinished(result) => self.handle_mint_finished(result),
            AppEvent::WalletConnected(result) => self.handle_wallet_connected(result),
        }
    }
}

impl App {
    fn handle_image_generated(&mut self, result: Result<ImageReference, String>) {
        let mut state = self.state.write();
        match result {
            Ok(image) => {
                tracing::info!(image = %image, "Image generated");
                let link = image.as_str().to_string();
                state.screen.complete_generate(image);
                let message = format!("Image generated: {}", link);
                state.notifications.push_back(Notification::info(message, Some(link)));
            }
            Err(message) => {
                tracing::warn!(error = %message, "Image generation failed");
                state.screen.fail_generate();
                state
                    .notifications
                    .push_back(Notification::error(format!("Error generating image: {}", message)));
            }
        }
    }

    fn handle_mint_finished(&mut self, result: Result<MintReceipt, String>) {
        let mut state = self.state.write();
        match result {
            Ok(receipt) => {
                let url = receipt.explorer_url(state.cluster);
                tracing::info!(mint = %receipt.mint_address, url = %url, "Mint succeeded");
                state.screen.complete_mint();
                state.notifications.push_back(Notification::success(
                    format!("NFT minted successfully! View it at: {}", url),
                    Some(url),
                ));
            }
            Err(message) => {
                tracing::warn!(error = %message, "Mint failed");
                state.screen.fail_mint();
                state
                    .notifications
                    .push_back(Notification::error(format!("Error minting NFT: {}", message)));
            }
        }
    }

    fn handle_wallet_connected(&mut self, result: Result<String, String>) {
        let toast = match result {
            Ok(address) => Toast {
                kind: ToastKind::Success,
                message: format!("Wallet connected: {}", truncate_identity(&address)),
            },
            Err(message) => Toast {
                kind: ToastKind::Error,
                message: format!("Failed to load wallet: {}", message),
            },
        };
        self.state.write().pending_toasts.push(toast);
    }
}
