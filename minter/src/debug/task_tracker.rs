//! Traced background tasks
//!
//! Every task runs on [`TOKIO_RT`] inside a span carrying a fresh `trace_id`, so
//! all log lines of one generate or mint attempt can be correlated.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::utils::TOKIO_RT;

/// Global task counter
static ACTIVE_TASKS: AtomicU64 = AtomicU64::new(0);

/// Get current number of active tasks
pub fn active_task_count() -> u64 {
    ACTIVE_TASKS.load(Ordering::Relaxed)
}

/// Counts a task as active until dropped, including when the task panics.
struct ActiveTask;

impl ActiveTask {
    fn enter() -> Self {
        ACTIVE_TASKS.fetch_add(1, Ordering::Relaxed);
        ActiveTask
    }
}

impl Drop for ActiveTask {
    fn drop(&mut self) {
        ACTIVE_TASKS.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Generate a new trace ID
pub fn new_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Spawn an instrumented task with lifecycle logging
///
/// ```rust,ignore
/// spawn_traced("mint", async move {
///     orchestrator.mint(request).await
/// });
/// ```
pub fn spawn_traced<F>(name: &'static str, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let trace_id = new_trace_id();
    let span = tracing::info_span!("task", task = name, trace_id = %trace_id);
    let active = ActiveTask::enter();

    TOKIO_RT.spawn(
        async move {
            let _active = active;
            let start = Instant::now();
            tracing::debug!(active_tasks = active_task_count(), "Task started");

            let result = future.await;

            tracing::info!(duration_ms = start.elapsed().as_millis() as u64, "Task completed");
            result
        }
        .instrument(span),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_ids_are_unique() {
        assert_ne!(new_trace_id(), new_trace_id());
    }

    #[test]
    fn test_panicking_task_reports_join_error() {
        let handle = spawn_traced("test_panic", async { panic!("boom") });
        let err = TOKIO_RT.block_on(handle).unwrap_err();
        assert!(err.is_panic());
    }

    #[test]
    fn test_spawn_traced_returns_output() {
        let handle = spawn_traced("test", async { 21 * 2 });
        assert_eq!(TOKIO_RT.block_on(handle).unwrap(), 42);
    }
}
