//! Adaptive Simpson quadrature.
//!
//! Each node compares the Simpson estimate on its interval (the coarse
//! estimate) with the sum of the estimates on its two halves (the fine
//! estimate). The difference divided by 15 is the Richardson estimate of the
//! fine estimate's error. A node is accepted when that estimate is below its
//! tolerance, otherwise both halves are visited with half the tolerance, left
//! half first.

use log::{debug, trace, warn};

use crate::diagnostics::{Diagnostics, NodeRecord, NodeStatus, COARSE_EVALUATIONS, FINE_EVALUATIONS};
use crate::error::IntegrationError;
use crate::integral::simpson;
use crate::interval::Interval;

/// Richardson extrapolation factor of Simpson's rule, `2^4 - 1`.
pub const RICHARDSON_FACTOR: f64 = 15.;

pub const DEFAULT_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Adaptive Simpson integrator configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveSimpson {
    /// Absolute error tolerance for the whole interval.
    pub tolerance: f64,
    /// Deepest level a node may reach; a node at this depth that still fails
    /// the error criterion ends the run with [`IntegrationError::DidNotConverge`].
    pub max_depth: usize,
}

impl Default for AdaptiveSimpson {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Value of a completed run together with its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrature {
    pub value: f64,
    pub diagnostics: Diagnostics,
}

impl AdaptiveSimpson {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub fn validate(&self, interval: Interval) -> Result<(), IntegrationError> {
        if !interval.is_valid() {
            return Err(IntegrationError::InvalidInterval {
                a: interval.a,
                b: interval.b,
            });
        }

        if !(self.tolerance.is_finite() && self.tolerance > 0.) {
            return Err(IntegrationError::InvalidTolerance(self.tolerance));
        }

        if self.max_depth == 0 {
            return Err(IntegrationError::InvalidMaxDepth(self.max_depth));
        }

        Ok(())
    }

    /// Integrates `f` over `support` with a fresh diagnostics context.
    ///
    /// The diagnostics are dropped on failure; use [`Self::run_with`] to keep
    /// the trace of a run that did not converge.
    pub fn run<F>(&self, f: F, support: impl Into<Interval>) -> Result<Quadrature, IntegrationError>
    where
        F: Fn(f64) -> f64,
    {
        let mut diagnostics = Diagnostics::new();
        let value = self.run_with(f, support, &mut diagnostics)?;

        Ok(Quadrature { value, diagnostics })
    }

    /// Validates the inputs, resets `diagnostics` and integrates `f` over
    /// `support`. Whatever the outcome, `diagnostics` holds every node
    /// visited before the run ended.
    pub fn run_with<F>(
        &self,
        f: F,
        support: impl Into<Interval>,
        diagnostics: &mut Diagnostics,
    ) -> Result<f64, IntegrationError>
    where
        F: Fn(f64) -> f64,
    {
        let interval = support.into();
        self.validate(interval)?;

        diagnostics.reset();
        let value = self.integrate(&f, interval, self.tolerance, None, 0, diagnostics)?;

        debug!(
            "integrated over {} to {:.12} ({} nodes, {} accepted, {} evaluations)",
            interval,
            value,
            diagnostics.records().len(),
            diagnostics.accepted().len(),
            diagnostics.evaluations()
        );

        Ok(value)
    }

    /// The recursive step on one node.
    ///
    /// `coarse` is the Simpson estimate on `interval` when the caller already
    /// has it; otherwise it is computed here. Inputs are not validated: the
    /// caller guarantees `a < b` and `tolerance > 0`.
    pub fn integrate<F>(
        &self,
        f: &F,
        interval: Interval,
        tolerance: f64,
        coarse: Option<f64>,
        depth: usize,
        diagnostics: &mut Diagnostics,
    ) -> Result<f64, IntegrationError>
    where
        F: Fn(f64) -> f64,
    {
        let coarse = match coarse {
            Some(coarse) => coarse,
            None => {
                diagnostics.charge_evaluations(COARSE_EVALUATIONS);
                simpson(f, interval)
            }
        };

        let (left, right) = interval.bisect();
        let fine_left = simpson(f, left);
        let fine_right = simpson(f, right);
        let fine = fine_left + fine_right;
        diagnostics.charge_evaluations(FINE_EVALUATIONS);

        if !(coarse.is_finite() && fine.is_finite()) {
            return Err(IntegrationError::NonFiniteEstimate { interval, depth });
        }

        let error_estimate = (fine - coarse).abs() / RICHARDSON_FACTOR;
        let status = if error_estimate < tolerance {
            NodeStatus::Accepted
        } else {
            NodeStatus::Subdivided
        };

        trace!(
            "depth {} {} h = {:.5e} err = {:.3e} tol = {:.3e} {:?}",
            depth,
            interval,
            interval.width(),
            error_estimate,
            tolerance,
            status
        );

        diagnostics.record(NodeRecord {
            depth,
            interval,
            error_estimate,
            tolerance,
            status,
        });

        if status == NodeStatus::Accepted {
            return Ok(fine);
        }

        if depth >= self.max_depth {
            warn!(
                "giving up on {} at depth {}: error estimate {:.3e} >= tolerance {:.3e}",
                interval, depth, error_estimate, tolerance
            );
            return Err(IntegrationError::DidNotConverge {
                interval,
                depth,
                error_estimate,
                tolerance,
            });
        }

        let half_tolerance = tolerance / 2.;
        let left_value = self.integrate(f, left, half_tolerance, Some(fine_left), depth + 1, diagnostics)?;
        let right_value = self.integrate(f, right, half_tolerance, Some(fine_right), depth + 1, diagnostics)?;

        Ok(left_value + right_value)
    }
}

/// Integrates `f` over `[a, b]` to absolute tolerance `tolerance` with the
/// default maximum depth.
pub fn integrate<F>(f: F, a: f64, b: f64, tolerance: f64) -> Result<f64, IntegrationError>
where
    F: Fn(f64) -> f64,
{
    AdaptiveSimpson::new(tolerance)
        .run(f, (a, b))
        .map(|quadrature| quadrature.value)
}
