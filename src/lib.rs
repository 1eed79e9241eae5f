//! Beam Solver - shear force and bending moment diagrams for determinate beams
//!
//! Given a beam's length, supports and loads, the solver:
//! - classifies the supports (cantilever or simply supported)
//! - solves the support reactions from ΣFy = 0 and ΣM = 0
//! - samples shear V(x) and moment M(x) along the beam by superposition
//! - reduces the maximum and minimum shear and moment
//!
//! Point loads, uniform and triangular distributed loads and applied
//! moments are supported. Statically indeterminate beams are rejected with
//! [`BeamError::UnsupportedConfiguration`](error::BeamError).
//!
//! ## Sign convention
//! - Loads are positive downward, reactions positive upward
//! - Applied moments are positive counter-clockwise
//! - Positive moment is sagging (tension on the bottom fibre)
//!
//! ## Example
//! ```rust
//! use beam_solver::prelude::*;
//!
//! // 10 m simply supported span with 10 kN at midspan
//! let beam = Beam::new(10.0)
//!     .with_support(Support::pin(0.0))
//!     .with_support(Support::roller(10.0))
//!     .with_load(Load::point(10.0, 5.0));
//!
//! let result = beam.analyze().unwrap();
//! assert!((result.reactions[0].force_value - 5.0).abs() < 1e-9);
//! assert!((result.max_moment - 25.0).abs() < 1e-9);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod model;
pub mod report;
pub mod results;
pub mod wire;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{AnalysisOptions, BeamSupportPattern, SupportPolicy};
    pub use crate::elements::{Support, SupportKind};
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::loads::{DistributedLoad, Load, MomentLoad, PointLoad};
    pub use crate::model::Beam;
    pub use crate::report::CalculationReport;
    pub use crate::results::{AnalysisResult, Reaction, ResponseSample};
}

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "wasm")]
pub mod wasm;
