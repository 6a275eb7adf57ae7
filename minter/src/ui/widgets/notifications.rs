//! # Notifications Widgets
//!
//! - [`NotificationManager`]: non-blocking toasts (egui-notify) for wallet status
//! - [`render_notification_modal`]: blocking modal for generate/mint outcomes

use egui_notify::Toasts;

use crate::app::{Notification, NotificationKind, Toast, ToastKind};
use crate::ui::theme::Theme;

/// Toast manager for the application
pub struct NotificationManager {
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self { toasts: Toasts::default() }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => self.toasts.success(toast.message),
            ToastKind::Error => self.toasts.error(toast.message),
            ToastKind::Info => self.toasts.info(toast.message),
        };
    }

    /// Render toasts in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}

/// What the user did with the modal this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    None,
    Dismiss,
    OpenLink(String),
}

/// Render the blocking notification modal.
pub fn render_notification_modal(
    ctx: &egui::Context,
    notification: &Notification,
    theme: &Theme,
) -> ModalAction {
    let mut action = ModalAction::None;

    let (title, color) = match notification.kind {
        NotificationKind::Success => ("Success", theme.success),
        NotificationKind::Error => ("Error", theme.error),
        NotificationKind::Info => ("Info", theme.info),
    };

    let response = egui::Modal::new(egui::Id::new("notification_modal")).show(ctx, |ui| {
        ui.set_max_width(420.0);
        ui.heading(egui::RichText::new(title).color(color));
        ui.add_space(6.0);
        ui.add(egui::Label::new(&notification.message).wrap());
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if let Some(link) = &notification.link {
                let label = match notification.kind {
                    NotificationKind::Success => "Open in Explorer",
                    _ => "Open Image",
                };
                if ui.button(label).clicked() {
                    action = ModalAction::OpenLink(link.clone());
                }
            }
            if ui.button("OK").clicked() {
                action = ModalAction::Dismiss;
            }
        });
    });

    if action == ModalAction::None && response.should_close() {
        action = ModalAction::Dismiss;
    }
    action
}
