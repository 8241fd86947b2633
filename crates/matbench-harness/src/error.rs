//! Harness error type.

use thiserror::Error;

use matbench_core::MatError;

/// Error type for benchmark runs and test-case loading.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A matrix operation rejected its operands.
    #[error(transparent)]
    Matrix(#[from] MatError),

    /// A test-case file was malformed or truncated.
    #[error("parse failure at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// An unrecognized method selector.
    #[error("unknown method: {0:?}")]
    UnknownMethod(String),

    /// Invalid benchmark configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The run was cancelled cooperatively.
    #[error("benchmark cancelled")]
    Cancelled,

    /// An I/O failure while reading test cases.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
