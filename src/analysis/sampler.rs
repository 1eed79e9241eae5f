//! Shear and moment sampling by superposition
//!
//! Contributions are accumulated strictly from the left: every reaction or
//! load at or left of the section adds its effect, nothing to the right
//! does. Reactions push shear up, loads push it down.

use log::trace;

use crate::error::BeamResult;
use crate::model::Beam;
use crate::results::{AnalysisResult, Reaction, ResponseSample};

use super::{AnalysisOptions, MAX_GRID_INTERVALS};

/// Sample abscissas for a beam of length `length`
///
/// The first abscissa is `0` and the last is exactly `length`, whether or not
/// the step divides the length evenly.
pub fn sample_grid(length: f64, options: &AnalysisOptions) -> Vec<f64> {
    let step = options.step_for(length);
    let scale = options.rounding_scale();
    let round = |x: f64| (x * scale).round() / scale;

    let intervals = (length / step).ceil().min(MAX_GRID_INTERVALS as f64);
    let mut xs = Vec::with_capacity(intervals as usize + 2);
    let mut i = 0usize;
    loop {
        let x = i as f64 * step;
        if x > length {
            break;
        }
        xs.push(round(x));
        i += 1;
    }

    match xs.last().copied() {
        Some(last) if last == length => {}
        // Rounding pushed the final point past the end
        Some(last) if last > length => {
            if let Some(end) = xs.last_mut() {
                *end = length;
            }
        }
        _ => xs.push(length),
    }
    xs.dedup();

    trace!("Sample grid: {} points at step {}", xs.len(), step);
    xs
}

/// Shear and moment at a single section
pub fn response_at(beam: &Beam, reactions: &[Reaction], x: f64) -> ResponseSample {
    let mut shear = 0.0;
    let mut moment = 0.0;

    for reaction in reactions {
        let (f, m) = reaction.section_effect(x);
        shear += f;
        moment += m;
    }

    for load in &beam.loads {
        let (f, m) = load.section_effect(x);
        shear -= f;
        moment -= m;
    }

    ResponseSample { x, shear, moment }
}

/// Evaluate the response over the sample grid and reduce the extrema
pub fn sample_response(
    beam: &Beam,
    reactions: Vec<Reaction>,
    options: &AnalysisOptions,
) -> BeamResult<AnalysisResult> {
    let samples: Vec<ResponseSample> = sample_grid(beam.length, options)
        .into_iter()
        .map(|x| response_at(beam, &reactions, x))
        .collect();

    Ok(AnalysisResult::from_samples(samples, reactions))
}
