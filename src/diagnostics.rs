//! Bookkeeping of an adaptive run: one record per visited node, the accepted
//! intervals in acceptance order and the evaluation counter.
//!
//! Records are appended in pre-order (a node before its children, left child
//! before right child). Nothing stored here feeds back into the algorithm.

use std::io;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::interval::Interval;

/// Evaluations charged when a node computes its own coarse estimate.
pub const COARSE_EVALUATIONS: usize = 3;
/// Evaluations charged to every node for its two half-interval estimates.
pub const FINE_EVALUATIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStatus {
    Accepted,
    Subdivided,
}

/// `(error_estimate, interval_width)` pair of the error history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorRecord {
    pub error_estimate: f64,
    pub width: f64,
}

/// Everything known about one node of the recursion tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRecord {
    pub depth: usize,
    pub interval: Interval,
    pub error_estimate: f64,
    pub tolerance: f64,
    pub status: NodeStatus,
}

impl NodeRecord {
    pub fn error_record(&self) -> ErrorRecord {
        ErrorRecord {
            error_estimate: self.error_estimate,
            width: self.interval.width(),
        }
    }
}

/// Flat CSV row of a [`NodeRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRow {
    pub depth: usize,
    pub a: f64,
    pub b: f64,
    pub width: f64,
    pub error_estimate: f64,
    pub tolerance: f64,
    pub status: NodeStatus,
}

impl From<&NodeRecord> for TraceRow {
    fn from(record: &NodeRecord) -> Self {
        TraceRow {
            depth: record.depth,
            a: record.interval.a,
            b: record.interval.b,
            width: record.interval.width(),
            error_estimate: record.error_estimate,
            tolerance: record.tolerance,
            status: record.status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    records: Vec<NodeRecord>,
    accepted: Vec<Interval>,
    evaluations: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all state so the context can be reused for another run.
    pub fn reset(&mut self) {
        self.records.clear();
        self.accepted.clear();
        self.evaluations = 0;
    }

    pub(crate) fn charge_evaluations(&mut self, count: usize) {
        self.evaluations += count;
    }

    pub(crate) fn record(&mut self, record: NodeRecord) {
        if record.status == NodeStatus::Accepted {
            self.accepted.push(record.interval);
        }
        self.records.push(record);
    }

    pub fn records(&self) -> &[NodeRecord] {
        &self.records
    }

    /// Error history in visitation order.
    pub fn error_history(&self) -> impl Iterator<Item = ErrorRecord> + '_ {
        self.records.iter().map(NodeRecord::error_record)
    }

    pub fn errors(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.error_estimate).collect()
    }

    pub fn interval_sizes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.interval.width()).collect()
    }

    /// Accepted intervals in acceptance order.
    pub fn accepted(&self) -> &[Interval] {
        &self.accepted
    }

    /// Integrand evaluations charged under the +3 coarse / +2 per node policy.
    ///
    /// This is a cost figure, not the number of distinct points sampled: the
    /// half-interval rules share endpoints with the parent.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn subdivisions(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == NodeStatus::Subdivided)
            .count()
    }

    pub fn max_depth(&self) -> usize {
        self.records.iter().map(|r| r.depth).max().unwrap_or(0)
    }

    pub fn write_csv<W>(&self, writer: W) -> Result<W, ExportError>
    where
        W: io::Write,
    {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in &self.records {
            csv_writer.serialize(TraceRow::from(record))?;
        }

        csv_writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }

    pub fn write_csv_file<P>(&self, path: P) -> Result<(), ExportError>
    where
        P: AsRef<std::path::Path>,
    {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)?;

        Ok(())
    }
}
