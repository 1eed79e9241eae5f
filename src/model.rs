//! Beam model - geometry, supports and loads for one analysis

use serde::{Deserialize, Serialize};

use crate::analysis::{self, AnalysisOptions};
use crate::elements::Support;
use crate::error::{BeamError, BeamResult};
use crate::loads::Load;
use crate::results::{AnalysisResult, Reaction};

/// A straight beam with its supports and loads
///
/// Analysis never mutates the beam; every call recomputes the result from
/// scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Beam length
    pub length: f64,
    /// Supports in input order
    pub supports: Vec<Support>,
    /// Loads in input order
    pub loads: Vec<Load>,
}

impl Beam {
    /// Create an unloaded, unsupported beam
    pub fn new(length: f64) -> Self {
        Self {
            length,
            supports: Vec::new(),
            loads: Vec::new(),
        }
    }

    /// Pinned at 0, roller at `length`
    pub fn simply_supported(length: f64) -> Self {
        Self::new(length)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(length))
    }

    /// Fixed at 0, free at `length`
    pub fn cantilever(length: f64) -> Self {
        Self::new(length).with_support(Support::fixed(0.0))
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a support
    pub fn add_support(&mut self, support: Support) {
        self.supports.push(support);
    }

    /// Add a load
    pub fn add_load(&mut self, load: impl Into<Load>) {
        self.loads.push(load.into());
    }

    /// Add a support, builder style
    pub fn with_support(mut self, support: Support) -> Self {
        self.add_support(support);
        self
    }

    /// Add a load, builder style
    pub fn with_load(mut self, load: impl Into<Load>) -> Self {
        self.add_load(load);
        self
    }

    // ========================
    // Queries
    // ========================

    /// Total downward force of all loads
    pub fn total_load(&self) -> f64 {
        self.loads.iter().map(Load::total_force).sum()
    }

    /// Moment of all loads about `pivot`, clockwise positive
    pub fn load_moment_about(&self, pivot: f64) -> f64 {
        self.loads.iter().map(|l| l.moment_about(pivot)).sum()
    }

    /// Sorted, de-duplicated positions where the response changes character:
    /// the ends, supports, point loads, moments and distributed load extents
    pub fn critical_points(&self) -> Vec<f64> {
        let mut points = vec![0.0, self.length];
        points.extend(self.supports.iter().map(|s| s.position));
        points.extend(self.loads.iter().flat_map(Load::critical_points));
        points.sort_by(f64::total_cmp);
        points.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
        points
    }

    /// Check the beam before any computation
    pub fn validate(&self) -> BeamResult<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(BeamError::InvalidGeometry(format!(
                "beam length must be positive, got {}",
                self.length
            )));
        }

        for (i, support) in self.supports.iter().enumerate() {
            let p = support.position;
            if !p.is_finite() || !(0.0..=self.length).contains(&p) {
                return Err(BeamError::MalformedSupport(format!(
                    "support {i} ({}): position {p} is outside [0, {}]",
                    support.kind, self.length
                )));
            }
        }

        for (i, load) in self.loads.iter().enumerate() {
            load.validate(i, self.length)?;
        }

        Ok(())
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Solve support reactions only
    pub fn reactions(&self) -> BeamResult<Vec<Reaction>> {
        self.reactions_with(&AnalysisOptions::default())
    }

    /// Solve support reactions with custom options
    pub fn reactions_with(&self, options: &AnalysisOptions) -> BeamResult<Vec<Reaction>> {
        self.validate()?;
        analysis::solve_reactions(self, options.support_policy)
    }

    /// Run the analysis with default options
    pub fn analyze(&self) -> BeamResult<AnalysisResult> {
        self.analyze_with(&AnalysisOptions::default())
    }

    /// Run the analysis with custom options
    pub fn analyze_with(&self, options: &AnalysisOptions) -> BeamResult<AnalysisResult> {
        options.validate()?;
        self.validate()?;
        options.validate_grid(self.length)?;
        let reactions = analysis::solve_reactions(self, options.support_policy)?;
        analysis::sample_response(self, reactions, options)
    }
}
