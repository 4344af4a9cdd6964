//! Console rendering of a run: one trace line per visited node followed by a
//! summary block.

use std::fmt;

use crate::adaptive::Quadrature;
use crate::diagnostics::{Diagnostics, NodeRecord, NodeStatus};

const RULE_WIDTH: usize = 112;
const INTERVAL_COLUMN: usize = 32;

pub struct Report<'a> {
    pub quadrature: &'a Quadrature,
    pub exact: Option<f64>,
}

impl<'a> Report<'a> {
    pub fn new(quadrature: &'a Quadrature, exact: Option<f64>) -> Self {
        Self { quadrature, exact }
    }

    pub fn absolute_error(&self) -> Option<f64> {
        self.exact.map(|exact| (exact - self.quadrature.value).abs())
    }
}

pub fn trace_header() -> String {
    format!(
        "{rule}\n{:<5} | {:<width$} | {:<13} | {:<18} | {:<18} | STATUS\n{rule}",
        "DEPTH",
        "INTERVAL",
        "h",
        "ERROR EST",
        "TOLERANCE",
        rule = "=".repeat(RULE_WIDTH),
        width = INTERVAL_COLUMN - 8,
    )
}

pub fn trace_line(record: &NodeRecord) -> String {
    let indent = "  ".repeat(record.depth);
    let interval = format!(
        "{indent}[{:7.5}, {:7.5}]",
        record.interval.a, record.interval.b
    );
    let status = match record.status {
        NodeStatus::Accepted => " ACCEPTED ",
        NodeStatus::Subdivided => " SUBDIVIDE",
    };

    format!(
        "{:<5} | {:<width$} | h = {:9.5} | Err = {:12.3e} | Tol = {:12.3e} | {}",
        record.depth,
        interval,
        record.interval.width(),
        record.error_estimate,
        record.tolerance,
        status,
        width = INTERVAL_COLUMN - 8,
    )
}

/// The header and one line per visited node, without a summary. Used on its
/// own when a run fails.
pub struct Trace<'a>(pub &'a Diagnostics);

impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", trace_header())?;
        for record in self.0.records() {
            write!(f, "\n{}", trace_line(record))?;
        }

        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diagnostics = &self.quadrature.diagnostics;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}", Trace(diagnostics))?;
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{:^width$}", "RESULT", width = RULE_WIDTH)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Adaptive integral      : {:.12}", self.quadrature.value)?;
        match (self.exact, self.absolute_error()) {
            (Some(exact), Some(error)) => {
                writeln!(f, "Exact value            : {:.12}", exact)?;
                writeln!(f, "Absolute error         : {:.12e}", error)?;
            }
            _ => writeln!(f, "Exact value            : unknown")?,
        }
        writeln!(f, "Function evaluations   : {}", diagnostics.evaluations())?;
        writeln!(f, "Final interval count   : {}", diagnostics.accepted().len())?;
        write!(f, "{rule}")
    }
}
