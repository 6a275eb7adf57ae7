//! # Custom Widgets

pub mod notifications;
pub mod wallet_button;

pub use notifications::{render_notification_modal, ModalAction, NotificationManager};
pub use wallet_button::WalletAction;
