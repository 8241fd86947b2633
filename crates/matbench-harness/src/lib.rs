//! # matbench-harness
//!
//! Drives the multiplication engines through timed experiments: single runs,
//! averaged repetitions, adaptive size escalation, and multi-method sweeps
//! that accumulate into a size-keyed result table for an external reporter.

pub mod adaptive;
pub mod cancel;
pub mod error;
pub mod generate;
pub mod method;
pub mod observer;
pub mod runner;
pub mod sweep;
pub mod table;
pub mod testcase;

pub use adaptive::{find_max_size, SearchOptions, SearchOutcome};
pub use cancel::CancellationToken;
pub use error::HarnessError;
pub use generate::{random_matrix, TestPair, RAND_ABS_MAX};
pub use method::{parse_selection, Method};
pub use observer::{LoggingObserver, NoOpObserver, SweepObserver};
pub use runner::{average_time, run_once, solve, BenchOptions};
pub use sweep::{series_run, SweepOptions};
pub use table::{ResultRow, ResultTable};
pub use testcase::{load_test, read_test};
