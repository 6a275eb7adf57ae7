//! # Application State
//!
//! Everything the mint screen renders from. Owned by [`crate::app::App`] behind an
//! `Arc<RwLock<_>>`; background tasks never touch it directly.

use std::collections::VecDeque;

use lib_core::model::{Cluster, NftMetadata};
use lib_core::ScreenState;
use lib_solana::KeypairWallet;

/// Main application state
#[derive(Clone)]
pub struct AppState {
    /// Prompt, image, and in-flight flags
    pub screen: ScreenState,
    /// Display name and description used for the next mint
    pub metadata: NftMetadata,
    /// Local signing wallet (starts disconnected)
    pub wallet: KeypairWallet,
    /// Blocking notifications, oldest first; the UI shows the head
    pub notifications: VecDeque<Notification>,
    /// Non-blocking toasts waiting to be shown
    pub pending_toasts: Vec<Toast>,
    /// Target cluster for minting and explorer links
    pub cluster: Cluster,
}

impl AppState {
    pub fn new(screen: ScreenState, cluster: Cluster) -> Self {
        Self {
            screen,
            metadata: NftMetadata::default(),
            wallet: KeypairWallet::disconnected(),
            notifications: VecDeque::new(),
            pending_toasts: Vec::new(),
            cluster,
        }
    }

    /// Notification currently shown in the modal, if any.
    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// Blocking, modal-style message. Dismissed explicitly by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// URL offered as an "open" action (explorer link or generated image)
    pub link: Option<String>,
}

impl Notification {
    pub fn success(message: impl Into<String>, link: Option<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into(), link }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into(), link: None }
    }

    pub fn info(message: impl Into<String>, link: Option<String>) -> Self {
        Self { kind: NotificationKind::Info, message: message.into(), link }
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}
