//! Global Tokio runtime for background work.
//!
//! egui drives the UI from the main thread without a Tokio context, so tasks are
//! spawned onto this process-wide runtime and report back through the app's event
//! channel.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for background tasks")
});
