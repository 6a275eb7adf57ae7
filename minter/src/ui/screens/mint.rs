//! # Mint Screen
//!
//! Single screen: wallet row, NFT details, optional prompt, image preview, mint button.
//!
//! Renders from a state snapshot and reports user input straight to [`App`].

use lib_core::service::WalletSession;
use lib_core::ImageSource;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{wallet_button, WalletAction};

const PREVIEW_SIZE: f32 = 320.0;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new("Solana NFT Minter").color(theme.accent).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match wallet_button::render(ui, &state.wallet.status(), theme) {
                WalletAction::Select => app.handle_wallet_select_click(),
                WalletAction::ConnectDefault => app.handle_wallet_connect_default(),
                WalletAction::Disconnect => app.handle_wallet_disconnect_click(),
                WalletAction::None => {}
            }
        });
    });
    ui.label(egui::RichText::new(format!("Cluster: {}", state.cluster)).color(theme.dim).small());
    ui.separator();

    render_details(ui, state, app);
    ui.add_space(8.0);

    if state.screen.shows_prompt() {
        render_prompt(ui, state, app);
        ui.add_space(8.0);
    }

    render_preview(ui, state, app, theme);

    if state.screen.shows_mint() {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let enabled = state.screen.can_mint(&state.wallet);
            let button = egui::Button::new(egui::RichText::new("Mint NFT").strong());
            if ui.add_enabled(enabled, button).clicked() {
                app.handle_mint_click();
            }
            if state.screen.is_minting() {
                ui.spinner();
                ui.label("Minting…");
            } else if !state.wallet.is_connected() {
                ui.colored_label(theme.dim, "Connect a wallet to mint");
            }
        });
    }
}

fn render_details(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let mut name = state.metadata.name.clone();
    let mut description = state.metadata.description.clone();
    let busy = state.screen.is_minting();

    egui::Grid::new("nft_details").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
        ui.label("Name:");
        let name_changed = ui.add_enabled(!busy, egui::TextEdit::singleline(&mut name)).changed();
        ui.end_row();

        ui.label("Description:");
        let desc_changed = ui
            .add_enabled(!busy, egui::TextEdit::multiline(&mut description).desired_rows(2))
            .changed();
        ui.end_row();

        if name_changed || desc_changed {
            app.handle_metadata_change(name.clone(), description.clone());
        }
    });
}

fn render_prompt(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let mut prompt = state.screen.prompt.clone();

    ui.label("Prompt:");
    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut prompt)
            .hint_text("Describe the image to generate")
            .desired_width(ui.available_width() - 120.0);
        let response = ui.add_enabled(!state.screen.is_generating(), input);
        if response.changed() {
            app.handle_prompt_change(prompt.clone());
        }

        let submit = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let enabled = state.screen.can_generate() && !prompt.trim().is_empty();
        if ui.add_enabled(enabled, egui::Button::new("Generate")).clicked() || (submit && enabled) {
            app.handle_generate_click();
        }
        if state.screen.is_generating() {
            ui.spinner();
        }
    });
}

fn render_preview(ui: &mut egui::Ui, state: &AppState, app: &App, theme: &Theme) {
    match state.screen.image() {
        Some(image) => {
            ui.add(
                egui::Image::new(app.preview_url(image))
                    .max_size(egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE))
                    .maintain_aspect_ratio(true)
                    .corner_radius(6.0),
            );
        }
        None => {
            let text = match state.screen.source() {
                ImageSource::Prompt if state.screen.is_generating() => "Generating image…",
                ImageSource::Prompt => "Enter a prompt to generate an image",
                ImageSource::Static(_) => "No image",
            };
            ui.colored_label(theme.dim, text);
        }
    }
}
