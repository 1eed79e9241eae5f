//! Support reactions from global equilibrium
//!
//! Only statically determinate patterns are solved:
//!
//! - Cantilever: `R = ΣF`, `M_R = -ΣM_a` about the fixed support `a`
//! - Simply supported: `R_roller = ΣM_pin / (x_roller - x_pin)`, `R_pin = ΣF - R_roller`
//!
//! Moments are clockwise positive about the reference support. Forces are
//! positive upward for reactions and positive downward for loads.

use log::{debug, warn};

use crate::elements::SupportKind;
use crate::error::{BeamError, BeamResult};
use crate::model::Beam;
use crate::results::Reaction;

use super::{BeamSupportPattern, SupportPolicy};

/// Pin and roller closer than this cannot form a stable span
const MIN_SPAN: f64 = 1e-9;

/// Solve the support reactions of a beam
///
/// Reaction forces are upward positive in both patterns, so a cantilever's
/// force equals the applied load (`+ΣF`) and its moment is `-ΣM_a`. This is
/// the sign that keeps `Σreactions = Σloads` and closes `M` to zero at the
/// free end.
///
/// The beam is assumed to be validated. When several supports of one kind
/// are present under [`SupportPolicy::FirstOfEachKind`], only the first in
/// input order participates and the rest carry no reaction.
pub fn solve_reactions(beam: &Beam, policy: SupportPolicy) -> BeamResult<Vec<Reaction>> {
    let pattern = BeamSupportPattern::classify(&beam.supports, policy);
    debug!("Support pattern: {}", pattern.name());

    let total_load = beam.total_load();

    let reactions = match pattern {
        BeamSupportPattern::Cantilever { fixed } => {
            if beam.supports.len() > 1 {
                warn!(
                    "Fixed support at x = {} takes all load; {} other support(s) ignored",
                    fixed.position,
                    beam.supports.len() - 1
                );
            }
            let moment = beam.load_moment_about(fixed.position);
            vec![Reaction::with_moment(
                SupportKind::Fixed,
                fixed.position,
                total_load,
                -moment,
            )]
        }
        BeamSupportPattern::SimplySupported { pin, roller } => {
            if beam.supports.len() > 2 {
                warn!(
                    "Using pin at x = {} and roller at x = {}; {} other support(s) ignored",
                    pin.position,
                    roller.position,
                    beam.supports.len() - 2
                );
            }
            let span = roller.position - pin.position;
            if span.abs() < MIN_SPAN {
                return Err(BeamError::InvalidGeometry(format!(
                    "pin and roller coincide at x = {}",
                    pin.position
                )));
            }
            let roller_force = beam.load_moment_about(pin.position) / span;
            let pin_force = total_load - roller_force;
            vec![
                Reaction::force(SupportKind::Pin, pin.position, pin_force),
                Reaction::force(SupportKind::Roller, roller.position, roller_force),
            ]
        }
        BeamSupportPattern::Unsupported(reason) => {
            return Err(BeamError::UnsupportedConfiguration(reason));
        }
    };

    debug!(
        "Solved {} reaction(s), total {:.6} against applied {:.6}",
        reactions.len(),
        reactions.iter().map(|r| r.force_value).sum::<f64>(),
        total_load
    );
    Ok(reactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Support;
    use crate::loads::Load;
    use approx::assert_relative_eq;

    #[test]
    fn test_midspan_point_load() {
        let beam = Beam::simply_supported(10.0).with_load(Load::point(10.0, 5.0));
        let reactions = solve_reactions(&beam, SupportPolicy::Strict).unwrap();

        assert_eq!(reactions[0].kind, SupportKind::Pin);
        assert_relative_eq!(reactions[0].force_value, 5.0, epsilon = 1e-12);
        assert_eq!(reactions[1].kind, SupportKind::Roller);
        assert_relative_eq!(reactions[1].force_value, 5.0, epsilon = 1e-12);
        assert!(reactions.iter().all(|r| r.moment_value.is_none()));
    }

    #[test]
    fn test_offset_pin_uses_lever_arm_from_pin() {
        // Pin at 2, roller at 8, 12 at x = 4: R_roller = 12 * 2 / 6 = 4
        let beam = Beam::new(10.0)
            .with_support(Support::pin(2.0))
            .with_support(Support::roller(8.0))
            .with_load(Load::point(12.0, 4.0));
        let reactions = solve_reactions(&beam, SupportPolicy::Strict).unwrap();

        assert_relative_eq!(reactions[0].force_value, 8.0, epsilon = 1e-12);
        assert_relative_eq!(reactions[1].force_value, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cantilever_tip_load() {
        let beam = Beam::cantilever(5.0).with_load(Load::point(10.0, 5.0));
        let reactions = solve_reactions(&beam, SupportPolicy::Strict).unwrap();

        assert_eq!(reactions.len(), 1);
        assert_relative_eq!(reactions[0].force_value, 10.0, epsilon = 1e-12);
        assert_relative_eq!(reactions[0].moment_value.unwrap(), -50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cantilever_fixed_at_right_end() {
        let beam = Beam::new(4.0)
            .with_support(Support::fixed(4.0))
            .with_load(Load::point(3.0, 0.0));
        let reactions = solve_reactions(&beam, SupportPolicy::Strict).unwrap();

        assert_relative_eq!(reactions[0].force_value, 3.0, epsilon = 1e-12);
        assert_relative_eq!(reactions[0].moment_value.unwrap(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_applied_moment_forms_a_couple() {
        let beam = Beam::simply_supported(10.0).with_load(Load::moment(20.0, 5.0));
        let reactions = solve_reactions(&beam, SupportPolicy::Strict).unwrap();

        assert_relative_eq!(reactions[0].force_value, 2.0, epsilon = 1e-12);
        assert_relative_eq!(reactions[1].force_value, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_pin_and_roller() {
        let beam = Beam::new(10.0)
            .with_support(Support::pin(5.0))
            .with_support(Support::roller(5.0))
            .with_load(Load::point(10.0, 2.0));
        let err = solve_reactions(&beam, SupportPolicy::Strict).unwrap_err();
        assert_eq!(err.kind(), "InvalidGeometry");
    }

    #[test]
    fn test_unsupported_pattern_is_an_error() {
        let beam = Beam::new(10.0)
            .with_support(Support::roller(0.0))
            .with_support(Support::roller(10.0))
            .with_load(Load::point(10.0, 5.0));
        let err = solve_reactions(&beam, SupportPolicy::Strict).unwrap_err();
        assert_eq!(err.kind(), "UnsupportedConfiguration");
        assert!(err.to_string().contains("roller"));
    }

    #[test]
    fn test_first_of_each_kind_ignores_extra_supports() {
        let beam = Beam::new(10.0)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(10.0))
            .with_support(Support::roller(6.0))
            .with_load(Load::point(10.0, 5.0));
        let reactions = solve_reactions(&beam, SupportPolicy::FirstOfEachKind).unwrap();

        assert_eq!(reactions.len(), 2);
        assert_relative_eq!(reactions[1].position, 10.0, epsilon = 1e-12);
        assert_relative_eq!(reactions[1].force_value, 5.0, epsilon = 1e-12);
    }
}
