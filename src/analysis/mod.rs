//! Analysis options and the two analysis stages
//!
//! Analysis runs in two dependency-ordered stages: [`solve_reactions`]
//! classifies the supports and solves equilibrium, then [`sample_response`]
//! evaluates shear and moment on a fixed-resolution grid by superposition.

mod pattern;
mod reactions;
mod sampler;

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};

pub use pattern::BeamSupportPattern;
pub use reactions::solve_reactions;
pub use sampler::{response_at, sample_grid, sample_response};

/// Upper bound on grid intervals, whatever the options ask for
pub const MAX_GRID_INTERVALS: usize = 1_000_000;

/// How supports are matched to a closed-form rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportPolicy {
    /// Exactly one fixed support, or exactly one pin plus one roller
    Strict,
    /// First fixed support wins, else the first pin and first roller;
    /// any other supports are ignored
    FirstOfEachKind,
}

impl Default for SupportPolicy {
    fn default() -> Self {
        Self::Strict
    }
}

/// Options for beam analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Smallest allowed distance between samples
    pub min_step: f64,
    /// Number of intervals the beam is divided into (before `min_step` applies)
    pub target_intervals: usize,
    /// Decimal places sample abscissas are rounded to
    pub decimals: u32,
    /// Support classification policy
    pub support_policy: SupportPolicy,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_step: 0.01,
            target_intervals: 500,
            decimals: 4,
            support_policy: SupportPolicy::Strict,
        }
    }
}

impl AnalysisOptions {
    /// Set the minimum sample step
    pub fn with_min_step(mut self, min_step: f64) -> Self {
        self.min_step = min_step;
        self
    }

    /// Set the number of grid intervals
    pub fn with_target_intervals(mut self, target_intervals: usize) -> Self {
        self.target_intervals = target_intervals;
        self
    }

    /// Set the abscissa rounding precision
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Use the first support of each kind instead of requiring an exact pattern
    pub fn first_of_each_kind(mut self) -> Self {
        self.support_policy = SupportPolicy::FirstOfEachKind;
        self
    }

    /// Sample step for a beam of the given length
    pub fn step_for(&self, length: f64) -> f64 {
        self.min_step.max(length / self.target_intervals as f64)
    }

    /// Reject options that would produce an empty or unbounded grid
    pub fn validate(&self) -> BeamResult<()> {
        if !self.min_step.is_finite() || self.min_step <= 0.0 {
            return Err(BeamError::InvalidGeometry(format!(
                "sample step must be positive, got {}",
                self.min_step
            )));
        }
        if self.target_intervals == 0 {
            return Err(BeamError::InvalidGeometry(
                "sample grid needs at least one interval".to_string(),
            ));
        }
        if self.target_intervals > MAX_GRID_INTERVALS {
            return Err(BeamError::InvalidGeometry(format!(
                "{} sample intervals requested, at most {} allowed",
                self.target_intervals, MAX_GRID_INTERVALS
            )));
        }
        // Beyond this f64 rounding to `decimals` places stops being meaningful
        if self.decimals > 12 {
            return Err(BeamError::InvalidGeometry(format!(
                "cannot round samples to {} decimal places",
                self.decimals
            )));
        }
        // Steps finer than the rounding resolution collapse neighbouring samples
        if self.min_step * self.rounding_scale() < 1.0 - 1e-9 {
            return Err(BeamError::InvalidGeometry(format!(
                "sample step {} is finer than {} decimal places",
                self.min_step, self.decimals
            )));
        }
        Ok(())
    }

    /// Check that the grid for a beam of `length` stays within bounds
    pub fn validate_grid(&self, length: f64) -> BeamResult<()> {
        let intervals = length / self.step_for(length);
        if intervals.is_nan() || intervals > MAX_GRID_INTERVALS as f64 {
            return Err(BeamError::InvalidGeometry(format!(
                "a {} long beam at step {} needs {} samples, at most {} allowed",
                length,
                self.step_for(length),
                intervals.ceil(),
                MAX_GRID_INTERVALS
            )));
        }
        Ok(())
    }

    /// `10^decimals`, the factor abscissas are rounded against
    pub(crate) fn rounding_scale(&self) -> f64 {
        10f64.powi(self.decimals as i32)
    }
}
