//! Exit-code mapping.

use matbench_harness::HarnessError;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic failure.
    pub const ERROR_GENERIC: i32 = 1;
    /// A test-case file failed to parse.
    pub const ERROR_PARSE: i32 = 2;
    /// Operand shapes were incompatible.
    pub const ERROR_SHAPE: i32 = 3;
    /// Invalid configuration or unknown method.
    pub const ERROR_CONFIG: i32 = 4;
    /// Cancelled by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

/// Map an application error to its process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<HarnessError>() {
        Some(HarnessError::Cancelled) => exit_codes::ERROR_CANCELED,
        Some(HarnessError::UnknownMethod(_) | HarnessError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(HarnessError::Parse { .. }) => exit_codes::ERROR_PARSE,
        Some(HarnessError::Matrix(_)) => exit_codes::ERROR_SHAPE,
        Some(HarnessError::Io(_)) | None => exit_codes::ERROR_GENERIC,
    }
}
