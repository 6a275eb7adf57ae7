//! # Core Library
//!
//! Domain model, capability traits, workflows, and configuration for the NFT minter.
//! Nothing in here talks to the network directly; the adapters in `lib-solana` and
//! `lib-imagegen` implement the traits in [`service`].

pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod mint;
pub mod model;
pub mod screen;
pub mod service;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types
pub use config::{MinterConfig, StorageConfig};
pub use error::{AppError, Result};
pub use mint::MintOrchestrator;
pub use screen::{ImageSource, ScreenState};
