use thiserror::Error;

use crate::interval::Interval;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    #[error("invalid interval [{a}, {b}]: bounds must be finite and satisfy a < b")]
    InvalidInterval { a: f64, b: f64 },

    #[error("invalid tolerance {0:e}: must be finite and positive")]
    InvalidTolerance(f64),

    #[error("invalid maximum depth {0}: must be at least 1")]
    InvalidMaxDepth(usize),

    /// The integrand produced NaN or an infinity somewhere in the interval.
    #[error("non-finite estimate on {interval} at depth {depth}")]
    NonFiniteEstimate { interval: Interval, depth: usize },

    #[error(
        "did not converge on {interval} at depth {depth}: error estimate {error_estimate:.3e} >= tolerance {tolerance:.3e}"
    )]
    DidNotConverge {
        interval: Interval,
        depth: usize,
        error_estimate: f64,
        tolerance: f64,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
