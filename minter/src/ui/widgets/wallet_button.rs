//! # Wallet Connector
//!
//! Shows the connection state and triggers the keypair selection flow.

use lib_core::format::truncate_identity;
use lib_solana::WalletStatus;

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAction {
    None,
    Select,
    ConnectDefault,
    Disconnect,
}

/// Render the wallet control.
pub fn render(ui: &mut egui::Ui, status: &WalletStatus, theme: &Theme) -> WalletAction {
    let mut action = WalletAction::None;

    ui.horizontal(|ui| match status {
        WalletStatus::Connected(address) => {
            ui.colored_label(theme.success, "●");
            ui.monospace(truncate_identity(address)).on_hover_text(address);
            if ui.button("Disconnect").clicked() {
                action = WalletAction::Disconnect;
            }
        }
        WalletStatus::Disconnected => {
            ui.colored_label(theme.dim, "○ disconnected");
            if ui.button("Select Keypair…").clicked() {
                action = WalletAction::Select;
            }
            if ui
                .button("Use Default")
                .on_hover_text("Load the Solana CLI keypair")
                .clicked()
            {
                action = WalletAction::ConnectDefault;
            }
        }
    });

    action
}
