//! Result types for beam analysis

use serde::{Deserialize, Serialize};

use crate::elements::SupportKind;

/// Reaction developed at a support, force positive upward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Kind of the reacting support
    pub kind: SupportKind,
    /// Support position
    pub position: f64,
    /// Vertical reaction force
    pub force_value: f64,
    /// Reaction moment, present only for fixed supports
    pub moment_value: Option<f64>,
}

impl Reaction {
    /// Create a force-only reaction
    pub fn force(kind: SupportKind, position: f64, force_value: f64) -> Self {
        Self {
            kind,
            position,
            force_value,
            moment_value: None,
        }
    }

    /// Create a reaction with a moment component
    pub fn with_moment(
        kind: SupportKind,
        position: f64,
        force_value: f64,
        moment_value: f64,
    ) -> Self {
        Self {
            kind,
            position,
            force_value,
            moment_value: Some(moment_value),
        }
    }

    /// Force and moment about `x` carried by the reaction if it lies at or left of `x`
    pub fn section_effect(&self, x: f64) -> (f64, f64) {
        if self.position <= x {
            let moment = self.force_value * (x - self.position) + self.moment_value.unwrap_or(0.0);
            (self.force_value, moment)
        } else {
            (0.0, 0.0)
        }
    }
}

/// Shear and moment at one grid point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseSample {
    pub x: f64,
    pub shear: f64,
    pub moment: f64,
}

/// Complete output of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Samples ordered by `x`, spanning `[0, length]`
    pub samples: Vec<ResponseSample>,
    /// Solved support reactions
    pub reactions: Vec<Reaction>,
    pub max_shear: f64,
    pub min_shear: f64,
    pub max_moment: f64,
    pub min_moment: f64,
}

impl AnalysisResult {
    /// Build a result from samples, reducing the extrema
    pub fn from_samples(samples: Vec<ResponseSample>, reactions: Vec<Reaction>) -> Self {
        let (max_shear, min_shear) = extrema(samples.iter().map(|s| s.shear));
        let (max_moment, min_moment) = extrema(samples.iter().map(|s| s.moment));
        Self {
            samples,
            reactions,
            max_shear,
            min_shear,
            max_moment,
            min_moment,
        }
    }

    /// Sample abscissas
    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    /// Shear at every sample
    pub fn shears(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.shear).collect()
    }

    /// Moment at every sample
    pub fn moments(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.moment).collect()
    }

    /// Sum of reaction forces
    pub fn total_reaction_force(&self) -> f64 {
        self.reactions.iter().map(|r| r.force_value).sum()
    }

    /// Sample closest to `x`
    pub fn sample_near(&self, x: f64) -> Option<&ResponseSample> {
        self.samples
            .iter()
            .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
    }

    /// Largest absolute shear and where it occurs
    pub fn governing_shear(&self) -> Option<&ResponseSample> {
        self.samples
            .iter()
            .max_by(|a, b| a.shear.abs().total_cmp(&b.shear.abs()))
    }

    /// Largest absolute moment and where it occurs
    pub fn governing_moment(&self) -> Option<&ResponseSample> {
        self.samples
            .iter()
            .max_by(|a, b| a.moment.abs().total_cmp(&b.moment.abs()))
    }
}

fn extrema(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::NEG_INFINITY, f64::INFINITY), |(max, min), v| {
        (max.max(v), min.min(v))
    })
}
