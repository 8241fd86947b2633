//! Timed dispatch of single multiplications and averaged repetitions.

use std::time::{Duration, Instant};

use rand::Rng;

use matbench_core::{strassen, strassen_flat, Matrix, DEFAULT_CUTOFF};

use crate::error::HarnessError;
use crate::generate::TestPair;
use crate::method::Method;

/// Knobs shared by every timed run.
#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// Block size at and below which the cutoff variants go naive.
    pub cutoff: usize,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl BenchOptions {
    /// Apply defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.cutoff == 0 {
            self.cutoff = DEFAULT_CUTOFF;
        }
        self
    }
}

/// Run `method` once against the pair, returning the product and the
/// elapsed wall-clock time (monotonic clock, nanosecond resolution).
///
/// For the flat methods the buffer conversion happens before the clock
/// starts and the conversion back after it stops, so the measurement covers
/// only the engine itself.
pub fn solve(
    pair: &TestPair,
    method: Method,
    opts: &BenchOptions,
) -> Result<(Matrix, Duration), HarnessError> {
    let cutoff = Some(opts.cutoff);
    match method {
        Method::Naive => {
            let start = Instant::now();
            let product = pair.a.multiply(&pair.b)?;
            Ok((product, start.elapsed()))
        }
        Method::StrassenPure => {
            let start = Instant::now();
            let product = strassen(&pair.a, &pair.b, None)?;
            Ok((product, start.elapsed()))
        }
        Method::StrassenCutoff => {
            let start = Instant::now();
            let product = strassen(&pair.a, &pair.b, cutoff)?;
            Ok((product, start.elapsed()))
        }
        Method::StrassenPureFlat => {
            let (a, b) = (pair.a.to_rows(), pair.b.to_rows());
            let start = Instant::now();
            let product = strassen_flat(a, b, None)?;
            let elapsed = start.elapsed();
            Ok((Matrix::from_rows(&product)?, elapsed))
        }
        Method::StrassenCutoffFlat => {
            let (a, b) = (pair.a.to_rows(), pair.b.to_rows());
            let start = Instant::now();
            let product = strassen_flat(a, b, cutoff)?;
            let elapsed = start.elapsed();
            Ok((Matrix::from_rows(&product)?, elapsed))
        }
    }
}

/// Time exactly one invocation of `method`; the product is dropped.
pub fn run_once(
    pair: &TestPair,
    method: Method,
    opts: &BenchOptions,
) -> Result<Duration, HarnessError> {
    solve(pair, method, opts).map(|(_, elapsed)| elapsed)
}

/// Mean elapsed time of `repetitions` runs of `method` at size `n`.
///
/// Each repetition times a freshly generated random pair; regenerating
/// operands amortizes input-dependent variance, not just timer noise.
pub fn average_time<R: Rng + ?Sized>(
    n: usize,
    repetitions: u32,
    method: Method,
    opts: &BenchOptions,
    rng: &mut R,
) -> Result<Duration, HarnessError> {
    if repetitions == 0 {
        return Err(HarnessError::Config("repetitions must be at least 1".into()));
    }
    let mut total = Duration::ZERO;
    for _ in 0..repetitions {
        let pair = TestPair::random(n, rng);
        total += run_once(&pair, method, opts)?;
    }
    Ok(total / repetitions)
}
