//! Test-case file loading.
//!
//! Format: a leading integer `n`, then `n` rows of `n` whitespace-separated
//! integers for matrix A, then `n` rows for matrix B. Blank lines are
//! skipped anywhere; tokens past the `n`-th on a row are ignored. Malformed
//! tokens, short rows, or premature end of input are parse failures.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use matbench_core::Matrix;

use crate::error::HarnessError;
use crate::generate::TestPair;

/// Largest accepted matrix size; anything bigger is rejected rather than
/// attempted, so a corrupt header cannot trigger an allocation blow-up.
pub const MAX_TEST_SIZE: usize = 1 << 12;

/// Read one test case from a text stream. The stream is left positioned
/// after the case that was read.
pub fn read_test<R: BufRead>(reader: &mut R) -> Result<TestPair, HarnessError> {
    let mut lines = NumberedLines::new(reader);

    let (line_no, header) = lines.next_non_blank()?.ok_or_else(|| HarnessError::Parse {
        line: 0,
        message: "empty input, expected a matrix size".into(),
    })?;
    let n: usize = header.trim().parse().map_err(|_| HarnessError::Parse {
        line: line_no,
        message: format!("invalid matrix size: {:?}", header.trim()),
    })?;
    if n > MAX_TEST_SIZE {
        return Err(HarnessError::Parse {
            line: line_no,
            message: format!("matrix size {n} exceeds the maximum of {MAX_TEST_SIZE}"),
        });
    }

    let a = read_matrix(&mut lines, n)?;
    let b = read_matrix(&mut lines, n)?;
    Ok(TestPair { a, b })
}

/// Read one test case from a file.
///
/// The stream is scoped to this call and closed on every exit path:
/// success, parse failure, or end of data.
pub fn load_test(path: &Path) -> Result<TestPair, HarnessError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_test(&mut reader)
}

fn read_matrix<R: BufRead>(
    lines: &mut NumberedLines<'_, R>,
    n: usize,
) -> Result<Matrix, HarnessError> {
    let mut m = Matrix::new(n, n);
    for i in 0..n {
        let (line_no, line) = lines.next_non_blank()?.ok_or_else(|| HarnessError::Parse {
            line: lines.current_line(),
            message: format!("unexpected end of input, expected row {} of {n}", i + 1),
        })?;
        let mut tokens = line.split_whitespace();
        for j in 0..n {
            let token = tokens.next().ok_or_else(|| HarnessError::Parse {
                line: line_no,
                message: format!("row has {j} values, expected {n}"),
            })?;
            m[(i, j)] = token.parse().map_err(|_| HarnessError::Parse {
                line: line_no,
                message: format!("invalid integer: {token:?}"),
            })?;
        }
    }
    Ok(m)
}

/// Line reader that tracks 1-based line numbers and skips blank lines.
struct NumberedLines<'a, R> {
    reader: &'a mut R,
    line: usize,
}

impl<'a, R: BufRead> NumberedLines<'a, R> {
    fn new(reader: &'a mut R) -> Self {
        Self { reader, line: 0 }
    }

    fn current_line(&self) -> usize {
        self.line
    }

    fn next_non_blank(&mut self) -> Result<Option<(usize, String)>, HarnessError> {
        loop {
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            if !buf.trim().is_empty() {
                return Ok(Some((self.line, buf)));
            }
        }
    }
}
