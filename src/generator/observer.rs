//! Observer hooks for generator lifecycle events
//!
//! A generator carries at most one observer, injected at construction. There
//! is no process-wide logger: [`TracingObserver`] forwards events to whatever
//! `tracing` subscriber the embedding application installed.

use crate::distribution::Distribution;
use tracing::info;

/// Receives lifecycle events from a [`Generator`](super::Generator)
///
/// Callbacks run on the thread that triggers the event: `on_start` on the
/// caller starting the stream, `on_stop` on the producer thread as it exits.
/// No generator lock is held during a callback, so observers may call back
/// into the generator (`state`, `close`). A `close` racing with startup can
/// deliver `on_stop` before `on_start` returns.
pub trait GeneratorObserver: Send + Sync {
    /// Producer thread has been spawned
    fn on_start(&self, distribution: &Distribution, candidates: usize) {
        let _ = (distribution, candidates);
    }

    /// Producer loop exited after pushing `emitted` items
    fn on_stop(&self, emitted: u64) {
        let _ = emitted;
    }
}

/// Logs lifecycle events at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl GeneratorObserver for TracingObserver {
    fn on_start(&self, distribution: &Distribution, candidates: usize) {
        info!(%distribution, candidates, "workload stream started");
    }

    fn on_stop(&self, emitted: u64) {
        info!(emitted, "workload stream stopped");
    }
}
