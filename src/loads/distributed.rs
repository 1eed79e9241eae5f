//! Distributed loads on the beam

use serde::{Deserialize, Serialize};

/// A linearly varying line load, positive downward
///
/// Intensity runs from `w1` at `x1` to `w2` at `x2`. A uniform load has
/// `w1 == w2`; a triangular load starts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Intensity at the start position
    pub w1: f64,
    /// Intensity at the end position
    pub w2: f64,
    /// Start position (distance from the left end)
    pub x1: f64,
    /// End position (distance from the left end)
    pub x2: f64,
}

/// Shape of a distributed load's intensity diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributedShape {
    /// Constant intensity
    Uniform,
    /// Zero intensity at one end
    Triangular,
    /// Non-zero, unequal intensities at both ends
    Trapezoidal,
}

impl DistributedLoad {
    /// Create a new distributed load
    pub fn new(w1: f64, w2: f64, x1: f64, x2: f64) -> Self {
        Self { w1, w2, x1, x2 }
    }

    /// Create a uniform load of intensity `w` over `[x1, x2]`
    pub fn uniform(w: f64, x1: f64, x2: f64) -> Self {
        Self::new(w, w, x1, x2)
    }

    /// Create a triangular load (zero at start, max at end)
    pub fn triangular(w_max: f64, x1: f64, x2: f64) -> Self {
        Self::new(0.0, w_max, x1, x2)
    }

    /// Check if the load is uniform (constant magnitude)
    pub fn is_uniform(&self) -> bool {
        (self.w1 - self.w2).abs() < 1e-10
    }

    /// Classify the intensity diagram
    pub fn shape(&self) -> DistributedShape {
        if self.is_uniform() {
            DistributedShape::Uniform
        } else if self.w1.abs() < 1e-10 || self.w2.abs() < 1e-10 {
            DistributedShape::Triangular
        } else {
            DistributedShape::Trapezoidal
        }
    }

    /// Loaded length
    pub fn span(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Peak intensity, used for display
    pub fn peak(&self) -> f64 {
        if self.w1.abs() >= self.w2.abs() {
            self.w1
        } else {
            self.w2
        }
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            w1: self.w1 * factor,
            w2: self.w2 * factor,
            ..*self
        }
    }

    /// Get the total force from this load
    pub fn total_force(&self) -> f64 {
        (self.w1 + self.w2) / 2.0 * self.span()
    }

    /// Position of the resultant
    pub fn centroid(&self) -> f64 {
        let (force, first_moment) = self.portion(self.span());
        if force.abs() < 1e-12 {
            (self.x1 + self.x2) / 2.0
        } else {
            self.x1 + first_moment / force
        }
    }

    /// Moment of the resultant about `pivot`, clockwise positive
    pub fn moment_about(&self, pivot: f64) -> f64 {
        let (force, first_moment) = self.portion(self.span());
        first_moment + force * (self.x1 - pivot)
    }

    /// Force and moment about `x` of the portion of the load left of `x`
    pub fn section_effect(&self, x: f64) -> (f64, f64) {
        if x < self.x1 {
            return (0.0, 0.0);
        }
        let covered = x.min(self.x2) - self.x1;
        let (force, first_moment) = self.portion(covered);
        (force, force * (x - self.x1) - first_moment)
    }

    /// Resultant and first moment about `x1` of the first `u` units of the load
    fn portion(&self, u: f64) -> (f64, f64) {
        let span = self.span();
        if span <= 0.0 || u <= 0.0 {
            return (0.0, 0.0);
        }
        let slope = (self.w2 - self.w1) / span;
        let force = self.w1 * u + slope * u * u / 2.0;
        let first_moment = self.w1 * u * u / 2.0 + slope * u * u * u / 3.0;
        (force, first_moment)
    }
}
