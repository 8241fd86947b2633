//! Typed errors for matrix construction and arithmetic.

use thiserror::Error;

/// Error type for matrix operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatError {
    /// Operand shapes are incompatible with the requested operation.
    #[error("shape mismatch in {op}: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    ShapeMismatch {
        /// Operation that rejected the operands.
        op: &'static str,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// A square-only operation was asked of a rectangular matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A slice or extension dimension is out of range for the source.
    #[error("invalid dimension for {op}: requested {requested}, source side is {available}")]
    InvalidDimension {
        op: &'static str,
        requested: usize,
        available: usize,
    },

    /// A raw 2-D buffer had rows of differing lengths.
    #[error("ragged buffer: row {row} has {found} columns, expected {expected}")]
    RaggedBuffer {
        row: usize,
        expected: usize,
        found: usize,
    },
}
