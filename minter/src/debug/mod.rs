//! # Logging and Tracing
//!
//! - **File-based logging**: Structured logs to `logs/minter.log` (daily rotation)
//! - **Console logging**: Same events on stderr
//! - **Task tracing**: Each background task runs in a span with a `trace_id`
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `minter=debug,info`)
//! - `MINTER_LOG_DIR`: Log directory (default: `logs`)

pub mod config;
pub mod logger;
pub mod task_tracker;

pub use config::DebugConfig;
pub use logger::init as init_logger;
pub use task_tracker::{active_task_count, new_trace_id, spawn_traced};
