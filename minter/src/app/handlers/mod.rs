//! # Event Handlers
//!
//! User action handlers organized by domain.

pub mod mint;
pub mod wallet;
