//! Load types applied to a beam
//!
//! Forces are positive downward. Applied moments are positive
//! counter-clockwise. Every load reports its resultant, its moment about a
//! pivot, and its effect on a cut section; the reaction solver and the
//! response sampler only ever talk to loads through these three methods.

mod distributed;
mod moment_load;
mod point_load;

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};

pub use distributed::{DistributedLoad, DistributedShape};
pub use moment_load::MomentLoad;
pub use point_load::PointLoad;

/// Any load that can act on a beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Load {
    /// Concentrated force
    Point(PointLoad),
    /// Concentrated couple
    Moment(MomentLoad),
    /// Uniform, triangular or trapezoidal line load
    Distributed(DistributedLoad),
}

impl Load {
    /// Create a point load
    pub fn point(magnitude: f64, position: f64) -> Self {
        Load::Point(PointLoad::new(magnitude, position))
    }

    /// Create an applied moment
    pub fn moment(magnitude: f64, position: f64) -> Self {
        Load::Moment(MomentLoad::new(magnitude, position))
    }

    /// Create a uniformly distributed load over `[start, end]`
    pub fn uniform(magnitude: f64, start: f64, end: f64) -> Self {
        Load::Distributed(DistributedLoad::uniform(magnitude, start, end))
    }

    /// Create a triangular load, zero at `start` rising to `magnitude` at `end`
    pub fn triangular(magnitude: f64, start: f64, end: f64) -> Self {
        Load::Distributed(DistributedLoad::triangular(magnitude, start, end))
    }

    /// Net vertical force (applied moments contribute none)
    pub fn total_force(&self) -> f64 {
        match self {
            Load::Point(p) => p.magnitude,
            Load::Moment(_) => 0.0,
            Load::Distributed(d) => d.total_force(),
        }
    }

    /// Moment about `pivot`, clockwise positive
    pub fn moment_about(&self, pivot: f64) -> f64 {
        match self {
            Load::Point(p) => p.moment_about(pivot),
            Load::Moment(m) => m.moment_about(pivot),
            Load::Distributed(d) => d.moment_about(pivot),
        }
    }

    /// Force and moment about `x` carried by the part of the load left of `x`
    pub fn section_effect(&self, x: f64) -> (f64, f64) {
        match self {
            Load::Point(p) => p.section_effect(x),
            Load::Moment(m) => m.section_effect(x),
            Load::Distributed(d) => d.section_effect(x),
        }
    }

    /// Positions where the load introduces a change in the response
    pub fn critical_points(&self) -> Vec<f64> {
        match self {
            Load::Point(p) => vec![p.position],
            Load::Moment(m) => vec![m.position],
            Load::Distributed(d) => vec![d.x1, d.x2],
        }
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            Load::Point(p) => Load::Point(p.scaled(factor)),
            Load::Moment(m) => Load::Moment(m.scaled(factor)),
            Load::Distributed(d) => Load::Distributed(d.scaled(factor)),
        }
    }

    /// Check the load against a beam of the given length
    ///
    /// `index` is the load's position in the beam's load list and is only
    /// used to name the offending record.
    pub fn validate(&self, index: usize, length: f64) -> BeamResult<()> {
        let fail =
            |reason: String| Err(BeamError::MalformedLoad(format!("load {index}: {reason}")));
        let on_beam = |x: f64| x.is_finite() && (0.0..=length).contains(&x);

        match self {
            Load::Point(PointLoad { magnitude, position })
            | Load::Moment(MomentLoad { magnitude, position }) => {
                if !magnitude.is_finite() {
                    return fail(format!("magnitude {magnitude} is not finite"));
                }
                if !on_beam(*position) {
                    return fail(format!("position {position} is outside [0, {length}]"));
                }
            }
            Load::Distributed(d) => {
                if !d.w1.is_finite() || !d.w2.is_finite() {
                    return fail("intensity is not finite".to_string());
                }
                if !on_beam(d.x1) || !on_beam(d.x2) {
                    return fail(format!("extent [{}, {}] is outside [0, {length}]", d.x1, d.x2));
                }
                if d.x1 > d.x2 {
                    return fail(format!("start {} is after end {}", d.x1, d.x2));
                }
            }
        }
        Ok(())
    }
}

impl From<PointLoad> for Load {
    fn from(load: PointLoad) -> Self {
        Load::Point(load)
    }
}

impl From<MomentLoad> for Load {
    fn from(load: MomentLoad) -> Self {
        Load::Moment(load)
    }
}

impl From<DistributedLoad> for Load {
    fn from(load: DistributedLoad) -> Self {
        Load::Distributed(load)
    }
}
