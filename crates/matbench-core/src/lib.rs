//! # matbench-core
//!
//! Square-matrix containers and the block-recursive Strassen multiplication
//! engines: a structured [`Matrix`] variant and a raw-buffer variant that
//! share one generic kernel and produce bit-identical results.

pub mod error;
pub mod flat;
pub(crate) mod kernel;
pub mod matrix;
pub mod strassen;

pub use error::MatError;
pub use matrix::Matrix;
pub use strassen::{strassen, strassen_flat, DEFAULT_CUTOFF};

/// Multiply two square matrices with the cutoff Strassen engine.
///
/// Convenience wrapper for simple use cases; [`strassen`] exposes the full
/// pure/cutoff choice and [`strassen_flat`] the raw-buffer variant.
///
/// # Example
/// ```
/// use matbench_core::Matrix;
///
/// let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).expect("rectangular buffer");
/// let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).expect("rectangular buffer");
/// let c = matbench_core::multiply(&a, &b).expect("matched shapes");
/// assert_eq!(c[(0, 0)], 19);
/// assert_eq!(c[(1, 1)], 50);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    strassen::strassen(a, b, Some(DEFAULT_CUTOFF))
}
