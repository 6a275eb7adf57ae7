//! # GUI Layer
//!
//! eframe application shell around [`App`]. Each frame:
//!
//! 1. drain task results ([`App::on_tick`])
//! 2. render the mint screen from a state snapshot
//! 3. show queued toasts and the head notification modal

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use crate::app::App;
use theme::Theme;
use widgets::{render_notification_modal, ModalAction, NotificationManager};

/// Repaint cadence while a background task is in flight.
const BUSY_REPAINT: Duration = Duration::from_millis(100);

pub struct MinterApp {
    app: App,
    theme: Theme,
    toasts: NotificationManager,
}

impl MinterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        Self { app, theme, toasts: NotificationManager::new() }
    }
}

impl eframe::App for MinterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        for toast in self.app.take_toasts() {
            self.toasts.push(toast);
        }

        // Handlers take the write lock, so render from a copy.
        let snapshot = self.app.state.read().clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                screens::mint::render(ui, &snapshot, &mut self.app, &self.theme);
            });
        });

        if let Some(notification) = snapshot.current_notification() {
            match render_notification_modal(ctx, notification, &self.theme) {
                ModalAction::OpenLink(url) => self.app.handle_open_link(&url),
                ModalAction::Dismiss => self.app.dismiss_notification(),
                ModalAction::None => {}
            }
        }

        self.toasts.show(ctx);

        if snapshot.screen.is_generating() || snapshot.screen.is_minting() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }
}
