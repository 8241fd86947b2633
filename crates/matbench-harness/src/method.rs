//! The benchmarkable multiplication strategies.

use std::fmt;
use std::str::FromStr;

use crate::error::HarnessError;

/// The five benchmarkable multiplication strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Naive triple-loop product on `Matrix`.
    Naive,
    /// Strassen recursion down to the closed-form 2x2 base case.
    StrassenPure,
    /// Strassen recursion with an early fallback to naive multiplication.
    StrassenCutoff,
    /// Pure Strassen over raw 2-D buffers.
    StrassenPureFlat,
    /// Cutoff Strassen over raw 2-D buffers.
    StrassenCutoffFlat,
}

impl Method {
    /// All methods, in the column order used by result tables.
    pub const ALL: [Method; 5] = [
        Method::Naive,
        Method::StrassenPure,
        Method::StrassenCutoff,
        Method::StrassenPureFlat,
        Method::StrassenCutoffFlat,
    ];

    /// Number of methods; the width of a result row.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable label used for CLI selection and table columns.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Method::Naive => "naive",
            Method::StrassenPure => "strassen",
            Method::StrassenCutoff => "strassen-cutoff",
            Method::StrassenPureFlat => "strassen-flat",
            Method::StrassenCutoffFlat => "strassen-cutoff-flat",
        }
    }

    /// Column index of this method in a result row.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Method::Naive => 0,
            Method::StrassenPure => 1,
            Method::StrassenCutoff => 2,
            Method::StrassenPureFlat => 3,
            Method::StrassenCutoffFlat => 4,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Method {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "trivial" => Ok(Method::Naive),
            "strassen" | "strassen-pure" => Ok(Method::StrassenPure),
            "strassen-cutoff" | "cutoff" => Ok(Method::StrassenCutoff),
            "strassen-flat" | "flat" => Ok(Method::StrassenPureFlat),
            "strassen-cutoff-flat" | "cutoff-flat" => Ok(Method::StrassenCutoffFlat),
            other => Err(HarnessError::UnknownMethod(other.to_string())),
        }
    }
}

/// Resolve a CLI method selection: a single label or `all`.
pub fn parse_selection(selection: &str) -> Result<Vec<Method>, HarnessError> {
    if selection.trim().eq_ignore_ascii_case("all") {
        Ok(Method::ALL.to_vec())
    } else {
        Ok(vec![selection.parse()?])
    }
}
