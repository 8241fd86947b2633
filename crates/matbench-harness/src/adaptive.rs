//! Adaptive maximum-size search.

use std::time::Duration;

use rand::Rng;
use tracing::info;

use crate::cancel::CancellationToken;
use crate::error::HarnessError;
use crate::generate::TestPair;
use crate::method::Method;
use crate::observer::SweepObserver;
use crate::runner::{run_once, BenchOptions};

/// Parameters for [`find_max_size`].
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// First size probed.
    pub start: usize,
    /// Size increment between probes.
    pub step: usize,
    /// Wall-clock budget a single run must stay within.
    pub ceiling: Duration,
    /// Cutoff forwarded to the engines.
    pub cutoff: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            start: 4,
            step: 1,
            ceiling: Duration::from_secs(120),
            cutoff: matbench_core::DEFAULT_CUTOFF,
        }
    }
}

/// Size at which the ceiling was first exceeded, with its elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub size: usize,
    pub elapsed: Duration,
}

/// Escalate the problem size until one timed run exceeds the ceiling, and
/// return that size.
///
/// Every probe runs against a freshly generated pair and is reported to the
/// observer and the log. Each size gets exactly one sample, so a single slow
/// or unlucky run ends the search early; that single-sample stopping rule is
/// intentional and part of the experiment's semantics.
pub fn find_max_size<R: Rng + ?Sized>(
    method: Method,
    opts: &SearchOptions,
    rng: &mut R,
    cancel: &CancellationToken,
    observer: &dyn SweepObserver,
) -> Result<SearchOutcome, HarnessError> {
    if opts.step == 0 {
        return Err(HarnessError::Config("step must be at least 1".into()));
    }
    let bench = BenchOptions {
        cutoff: opts.cutoff,
    }
    .normalize();

    let mut size = opts.start;
    loop {
        cancel.check()?;
        let pair = TestPair::random(size, rng);
        let elapsed = run_once(&pair, method, &bench)?;
        info!(method = %method, size, elapsed = ?elapsed, "probe");
        observer.on_measurement(method, size, elapsed);
        if elapsed > opts.ceiling {
            observer.on_method_complete(method, size);
            return Ok(SearchOutcome { size, elapsed });
        }
        size += opts.step;
    }
}
