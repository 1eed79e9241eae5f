//! Point loads on the beam

use serde::{Deserialize, Serialize};

/// A concentrated transverse force, positive downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude
    pub magnitude: f64,
    /// Distance from the left end of the beam
    pub position: f64,
}

impl PointLoad {
    /// Create a new point load
    pub fn new(magnitude: f64, position: f64) -> Self {
        Self { magnitude, position }
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            magnitude: self.magnitude * factor,
            position: self.position,
        }
    }

    /// Moment of the load about `pivot`, clockwise positive
    pub fn moment_about(&self, pivot: f64) -> f64 {
        self.magnitude * (self.position - pivot)
    }

    /// Force and moment about `x` of the load if it lies at or left of `x`
    pub fn section_effect(&self, x: f64) -> (f64, f64) {
        if self.position <= x {
            (self.magnitude, self.magnitude * (x - self.position))
        } else {
            (0.0, 0.0)
        }
    }
}
