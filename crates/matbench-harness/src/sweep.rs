//! Multi-method, size-escalating benchmark sweep.

use std::time::Duration;

use rand::Rng;

use crate::cancel::CancellationToken;
use crate::error::HarnessError;
use crate::method::Method;
use crate::observer::SweepObserver;
use crate::runner::{average_time, BenchOptions};
use crate::table::ResultTable;

/// Parameters for [`series_run`].
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// First size measured.
    pub start: usize,
    /// Size increment between points.
    pub step: usize,
    /// Average-time budget per point; crossing it stops escalation for the
    /// current method.
    pub ceiling: Duration,
    /// Repetitions averaged per (method, size) point.
    pub repetitions: u32,
    /// Cutoff forwarded to the engines.
    pub cutoff: usize,
    /// Methods to sweep, in order.
    pub methods: Vec<Method>,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            start: 50,
            step: 50,
            ceiling: Duration::from_secs(120),
            repetitions: 3,
            cutoff: matbench_core::DEFAULT_CUTOFF,
            methods: Method::ALL.to_vec(),
        }
    }
}

/// Sweep every selected method across escalating sizes, averaging
/// `repetitions` runs per point, and collect the timings into a table.
///
/// The point that crosses the ceiling is recorded before escalation stops,
/// so each method's last row shows where its budget ran out. Crossing the
/// ceiling is a normal stop signal, never an error. The completed table is
/// returned whole for an external reporter to consume.
pub fn series_run<R: Rng + ?Sized>(
    opts: &SweepOptions,
    rng: &mut R,
    cancel: &CancellationToken,
    observer: &dyn SweepObserver,
) -> Result<ResultTable, HarnessError> {
    if opts.step == 0 {
        return Err(HarnessError::Config("step must be at least 1".into()));
    }
    let bench = BenchOptions {
        cutoff: opts.cutoff,
    }
    .normalize();

    let mut table = ResultTable::new();
    for &method in &opts.methods {
        let mut size = opts.start;
        loop {
            cancel.check()?;
            let elapsed = average_time(size, opts.repetitions, method, &bench, rng)?;
            table.record(size, method, elapsed);
            observer.on_measurement(method, size, elapsed);
            if elapsed > opts.ceiling {
                break;
            }
            size += opts.step;
        }
        observer.on_method_complete(method, size);
    }
    Ok(table)
}
