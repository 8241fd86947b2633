//! Random operand generation.

use matbench_core::Matrix;
use rand::Rng;

/// Generated entries are drawn uniformly from `-RAND_ABS_MAX..RAND_ABS_MAX`.
pub const RAND_ABS_MAX: i64 = 1000;

/// Square matrix of side `n` with uniformly random entries.
///
/// The generator is passed in explicitly so seeded runs are reproducible
/// and concurrent callers never share state.
pub fn random_matrix<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Matrix {
    let mut m = Matrix::new(n, n);
    for i in 0..n {
        for j in 0..n {
            m[(i, j)] = rng.random_range(-RAND_ABS_MAX..RAND_ABS_MAX);
        }
    }
    m
}

/// One benchmark input: a pair of equally sized square operands.
#[derive(Debug, Clone)]
pub struct TestPair {
    pub a: Matrix,
    pub b: Matrix,
}

impl TestPair {
    /// Generate a fresh random pair of side `n`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        Self {
            a: random_matrix(n, rng),
            b: random_matrix(n, rng),
        }
    }

    /// Side length of the operands.
    #[must_use]
    pub fn size(&self) -> usize {
        self.a.rows()
    }
}
