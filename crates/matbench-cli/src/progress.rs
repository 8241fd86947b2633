//! Live sweep progress display.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use matbench_harness::{Method, SweepObserver};

use crate::output::format_duration;

/// Spinner that narrates sweep and search measurements.
///
/// Implements [`SweepObserver`], so it can be handed straight to
/// `series_run` or `find_max_size`.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a progress spinner; hidden when `quiet`.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        bar.set_style(ProgressStyle::default_spinner());
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    /// Stop the spinner and clear it from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl SweepObserver for SweepProgress {
    fn on_measurement(&self, method: Method, size: usize, elapsed: Duration) {
        self.bar.set_message(format!(
            "{} n={size}: {}",
            method.label(),
            format_duration(elapsed)
        ));
    }

    fn on_method_complete(&self, method: Method, last_size: usize) {
        self.bar
            .println(format!("{} swept up to n={last_size}", method.label()));
    }
}
