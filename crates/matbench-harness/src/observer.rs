//! Sweep progress observers.

use std::time::Duration;

use tracing::info;

use crate::method::Method;

/// Receives progress callbacks from sweeps and searches.
pub trait SweepObserver: Send + Sync {
    /// One measurement completed.
    fn on_measurement(&self, method: Method, size: usize, elapsed: Duration);

    /// A method finished escalating; `last_size` is the final size measured.
    fn on_method_complete(&self, method: Method, last_size: usize) {
        let _ = (method, last_size);
    }
}

/// Null object pattern; discards all updates.
#[derive(Debug, Default)]
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SweepObserver for NoOpObserver {
    fn on_measurement(&self, _method: Method, _size: usize, _elapsed: Duration) {
        // Intentionally empty
    }
}

/// Logs every measurement through `tracing`.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SweepObserver for LoggingObserver {
    fn on_measurement(&self, method: Method, size: usize, elapsed: Duration) {
        info!(method = %method, size, elapsed = ?elapsed, "measurement");
    }

    fn on_method_complete(&self, method: Method, last_size: usize) {
        info!(method = %method, last_size, "method sweep complete");
    }
}
