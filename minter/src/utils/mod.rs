//! # Utilities

pub mod runtime;

pub use runtime::TOKIO_RT;
