//! # Solana NFT Minter
//!
//! Desktop NFT minter: pick an image (static or generated from a prompt), upload its
//! metadata, and mint a one-of-one token on Solana.
//!
//! ## Module Organization
//!
//! - `app`: state, event channel, handlers, background tasks
//! - `ui`: egui screens and widgets
//! - `debug`: logging and task tracing
//! - `utils`: shared Tokio runtime

pub mod app;
pub mod debug;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState};
