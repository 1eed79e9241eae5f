//! Concentrated moments applied to the beam

use serde::{Deserialize, Serialize};

/// A concentrated couple, positive counter-clockwise
///
/// Passing a positive applied moment from left to right lowers the internal
/// bending moment by its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentLoad {
    /// Moment magnitude
    pub magnitude: f64,
    /// Distance from the left end of the beam
    pub position: f64,
}

impl MomentLoad {
    /// Create a new applied moment
    pub fn new(magnitude: f64, position: f64) -> Self {
        Self { magnitude, position }
    }

    /// Scale the moment by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            magnitude: self.magnitude * factor,
            position: self.position,
        }
    }

    /// Moment about any pivot, clockwise positive (a couple is pivot independent)
    pub fn moment_about(&self, _pivot: f64) -> f64 {
        -self.magnitude
    }

    /// Force and moment about `x` if the couple lies at or left of `x`
    pub fn section_effect(&self, x: f64) -> (f64, f64) {
        if self.position <= x {
            (0.0, self.magnitude)
        } else {
            (0.0, 0.0)
        }
    }
}
