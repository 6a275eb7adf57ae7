//! # Async Tasks
//!
//! Background work spawned on the global runtime. Each task reports back with
//! exactly one [`crate::app::AppEvent`], also when the work panics.

pub mod generate;
pub mod health;
pub mod mint;

use std::future::Future;

use async_channel::Sender;
use tokio::task::JoinError;

use crate::app::events::AppEvent;
use crate::debug::spawn_traced;
use crate::utils::TOKIO_RT;

/// Spawn `work` as a traced task and send `to_event(outcome)` once it ends.
///
/// A panic or cancellation of `work` becomes an `Err` outcome, so the in-flight
/// flag it guards is always cleared.
pub(crate) fn spawn_reported<T, F>(
    name: &'static str,
    work: F,
    event_tx: Sender<AppEvent>,
    to_event: fn(Result<T, String>) -> AppEvent,
) where
    T: Send + 'static,
    F: Future<Output = Result<T, String>> + Send + 'static,
{
    let handle = spawn_traced(name, work);

    TOKIO_RT.spawn(async move {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(task = name, error = %e, "Task aborted");
                Err(abort_message(e))
            }
        };

        if event_tx.send(to_event(outcome)).await.is_err() {
            tracing::warn!(task = name, "Event channel closed, result dropped");
        }
    });
}

fn abort_message(err: JoinError) -> String {
    if !err.is_panic() {
        return "Task was cancelled".to_string();
    }

    let payload = err.into_panic();
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    format!("Task panicked: {}", detail)
}
