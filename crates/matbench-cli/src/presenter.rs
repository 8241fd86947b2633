//! Console presentation of benchmark results.

use std::time::Duration;

use console::style;

use matbench_core::Matrix;
use matbench_harness::{Method, ResultTable, SearchOutcome};

use crate::output::format_duration;

/// Width of one method column in the printed table; fits the longest label.
const COLUMN_WIDTH: usize = 20;

/// Console presenter for runs, searches, and sweep tables.
pub struct Presenter {
    verbose: bool,
    quiet: bool,
}

impl Presenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a single timed run. Quiet mode emits `label seconds` only;
    /// verbose mode also prints the product.
    pub fn present_run(&self, method: Method, size: usize, product: &Matrix, elapsed: Duration) {
        if self.quiet {
            println!("{} {}", method.label(), elapsed.as_secs_f64());
            return;
        }
        println!(
            "{:<COLUMN_WIDTH$} n={size:<6} {}",
            method.label(),
            style(format_duration(elapsed)).green()
        );
        if self.verbose {
            println!("{product}");
        }
    }

    /// Print an adaptive-search outcome.
    pub fn present_search(&self, method: Method, outcome: &SearchOutcome) {
        if self.quiet {
            println!("{} {}", method.label(), outcome.size);
            return;
        }
        println!(
            "{}: ceiling first exceeded at n={} ({})",
            style(method.label()).bold(),
            outcome.size,
            format_duration(outcome.elapsed)
        );
    }

    /// Print the sweep table: one row per size, one column per method,
    /// `-` for unmeasured cells.
    pub fn present_table(&self, table: &ResultTable) {
        if table.is_empty() {
            println!("(no measurements)");
            return;
        }
        let header: String = Method::ALL
            .iter()
            .map(|method| format!("  {:>COLUMN_WIDTH$}", method.label()))
            .collect();
        println!("{}", style(format!("{:>8}{header}", "n")).bold());
        for row in table.rows() {
            print!("{:>8}", row.size());
            for method in Method::ALL {
                let cell = row
                    .time(method)
                    .map_or_else(|| "-".to_string(), format_duration);
                print!("  {cell:>COLUMN_WIDTH$}");
            }
            println!();
        }
    }

    /// Print an error message to stderr.
    pub fn present_error(&self, error: &str) {
        eprintln!("{} {error}", style("[ERROR]").red().bold());
    }
}
