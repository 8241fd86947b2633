//! Output formatting and result-table export.
//!
//! The exported table is the boundary artifact handed to whatever external
//! reporter turns it into a spreadsheet or plot; the reporter itself is not
//! this repository's concern.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use matbench_harness::{Method, ResultTable};

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// One exported row: size plus measured seconds per method label.
#[derive(Debug, Serialize)]
struct ReportRow {
    size: usize,
    times: BTreeMap<&'static str, f64>,
}

fn report_rows(table: &ResultTable) -> Vec<ReportRow> {
    table
        .rows()
        .map(|row| ReportRow {
            size: row.size(),
            times: Method::ALL
                .iter()
                .filter_map(|&method| {
                    row.time(method)
                        .map(|elapsed| (method.label(), elapsed.as_secs_f64()))
                })
                .collect(),
        })
        .collect()
}

/// Write the table as pretty-printed JSON.
pub fn write_json(path: &Path, table: &ResultTable) -> io::Result<()> {
    let content = serde_json::to_string_pretty(&report_rows(table)).map_err(io::Error::other)?;
    std::fs::write(path, content)
}

/// Write the table as CSV: a header line, then one line per size, times in
/// seconds, unmeasured cells left empty.
pub fn write_csv(path: &Path, table: &ResultTable) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "size")?;
    for method in Method::ALL {
        write!(file, ",{}", method.label())?;
    }
    writeln!(file)?;
    for row in table.rows() {
        write!(file, "{}", row.size())?;
        for method in Method::ALL {
            match row.time(method) {
                Some(elapsed) => write!(file, ",{}", elapsed.as_secs_f64())?,
                None => write!(file, ",")?,
            }
        }
        writeln!(file)?;
    }
    Ok(())
}

/// Export the table, picking the format from the file extension
/// (`.csv` writes CSV, anything else JSON).
pub fn write_table(path: &Path, table: &ResultTable) -> io::Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => write_csv(path, table),
        _ => write_json(path, table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_micro() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        assert_eq!(format_duration(Duration::from_millis(42)), "42.00ms");
    }

    #[test]
    fn format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_secs_f64(3.25)), "3.250s");
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    fn sample_table() -> ResultTable {
        let mut table = ResultTable::new();
        table.record(50, Method::Naive, Duration::from_millis(2));
        table.record(50, Method::StrassenPure, Duration::from_millis(4));
        table.record(100, Method::Naive, Duration::from_millis(16));
        table
    }

    #[test]
    fn json_export_contains_rows_and_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        write_json(&path, &sample_table()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"size\": 50"));
        assert!(content.contains("\"naive\""));
        assert!(content.contains("\"strassen\""));
        // Unmeasured cells are absent, not zero.
        assert!(!content.contains("strassen-cutoff-flat"));
    }

    #[test]
    fn csv_export_has_header_and_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        write_csv(&path, &sample_table()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "size,naive,strassen,strassen-cutoff,strassen-flat,strassen-cutoff-flat"
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("50,0.002,0.004,,,"));
        let second = lines.next().unwrap();
        assert!(second.starts_with("100,0.016,,,,"));
    }

    #[test]
    fn write_table_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("out.csv");
        let json_path = dir.path().join("out.json");
        write_table(&csv_path, &sample_table()).unwrap();
        write_table(&json_path, &sample_table()).unwrap();

        assert!(std::fs::read_to_string(&csv_path)
            .unwrap()
            .starts_with("size,"));
        assert!(std::fs::read_to_string(&json_path)
            .unwrap()
            .trim_start()
            .starts_with('['));
    }
}
