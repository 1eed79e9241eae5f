//! Calculation report - the worked numbers behind a result
//!
//! Lists each load with its resultant, the reactions, an equilibrium check,
//! a thinned table of samples and the response at the beam's key points.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analysis::response_at;
use crate::loads::{DistributedShape, Load};
use crate::model::Beam;
use crate::results::{AnalysisResult, ResponseSample};

/// Number of rows the sample table is thinned to (plus the final sample)
const TABLE_ROWS: usize = 10;

/// One applied load, described for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadEntry {
    pub label: String,
    pub magnitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    /// Resultant force, for distributed loads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    pub description: String,
}

/// One reaction, labelled `R_A`, `R_B`, ...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionEntry {
    pub label: String,
    pub kind: String,
    pub position: f64,
    pub force: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moment: Option<f64>,
}

/// Sum of applied forces against sum of reactions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EquilibriumCheck {
    pub applied: f64,
    pub reacted: f64,
    pub residual: f64,
}

impl EquilibriumCheck {
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        self.residual.abs() <= tolerance
    }
}

/// Full calculation report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationReport {
    pub loads: Vec<LoadEntry>,
    pub reactions: Vec<ReactionEntry>,
    pub equilibrium: EquilibriumCheck,
    pub samples: Vec<ResponseSample>,
    pub key_points: Vec<ResponseSample>,
}

impl CalculationReport {
    /// Build the report for a beam and its analysis result
    pub fn new(beam: &Beam, result: &AnalysisResult) -> Self {
        let loads = beam.loads.iter().map(describe_load).collect();

        let reactions = result
            .reactions
            .iter()
            .enumerate()
            .map(|(i, r)| ReactionEntry {
                label: format!("R_{}", reaction_letter(i)),
                kind: r.kind.as_str().to_string(),
                position: r.position,
                force: r.force_value,
                moment: r.moment_value,
            })
            .collect();

        let applied = beam.total_load();
        let reacted = result.total_reaction_force();

        let key_points = beam
            .critical_points()
            .into_iter()
            .map(|x| response_at(beam, &result.reactions, x))
            .collect();

        Self {
            loads,
            reactions,
            equilibrium: EquilibriumCheck {
                applied,
                reacted,
                residual: reacted - applied,
            },
            samples: thin_samples(&result.samples),
            key_points,
        }
    }
}

fn reaction_letter(index: usize) -> char {
    char::from_u32('A' as u32 + index as u32).unwrap_or('?')
}

fn describe_load(load: &Load) -> LoadEntry {
    match load {
        Load::Point(p) => LoadEntry {
            label: "Point Load".to_string(),
            magnitude: p.magnitude,
            position: Some(p.position),
            start: None,
            end: None,
            total: None,
            description: format!("Point load of {} at position {}", p.magnitude, p.position),
        },
        Load::Moment(m) => LoadEntry {
            label: "Moment".to_string(),
            magnitude: m.magnitude,
            position: Some(m.position),
            start: None,
            end: None,
            total: None,
            description: format!("Applied moment of {} at position {}", m.magnitude, m.position),
        },
        Load::Distributed(d) => {
            let total = d.total_force();
            let (label, intensity) = match d.shape() {
                DistributedShape::Uniform => ("UDL", format!("{}", d.w1)),
                DistributedShape::Triangular => ("Triangular", format!("0 rising to {}", d.peak())),
                DistributedShape::Trapezoidal => ("Trapezoidal", format!("{} to {}", d.w1, d.w2)),
            };
            LoadEntry {
                label: label.to_string(),
                magnitude: d.peak(),
                position: None,
                start: Some(d.x1),
                end: Some(d.x2),
                total: Some(total),
                description: format!(
                    "{} of {} over {} (total = {}, acting at {}) from {} to {}",
                    label,
                    intensity,
                    d.span(),
                    total,
                    d.centroid(),
                    d.x1,
                    d.x2
                ),
            }
        }
    }
}

/// Every `n / 10`-th sample plus the last one
fn thin_samples(samples: &[ResponseSample]) -> Vec<ResponseSample> {
    let stride = (samples.len() / TABLE_ROWS).max(1);
    let mut rows: Vec<ResponseSample> = samples.iter().step_by(stride).copied().collect();

    if let Some(last) = samples.last() {
        if rows.last().map(|r| r.x) != Some(last.x) {
            rows.push(*last);
        }
    }
    rows
}

impl fmt::Display for CalculationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Applied loads:")?;
        if self.loads.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for load in &self.loads {
            writeln!(f, "  {:<12} {}", load.label, load.description)?;
        }

        writeln!(f, "\nSupport reactions:")?;
        for r in &self.reactions {
            match r.moment {
                Some(m) => writeln!(
                    f,
                    "  {} ({} @ {:.2}): {:.3}, moment {:.3}",
                    r.label, r.kind, r.position, r.force, m
                )?,
                None => writeln!(
                    f,
                    "  {} ({} @ {:.2}): {:.3}",
                    r.label, r.kind, r.position, r.force
                )?,
            }
        }

        writeln!(
            f,
            "\nEquilibrium: applied {:.6}, reactions {:.6}, residual {:.2e}",
            self.equilibrium.applied, self.equilibrium.reacted, self.equilibrium.residual
        )?;

        writeln!(f, "\n  {:>10} {:>12} {:>12}", "x", "V", "M")?;
        for s in &self.samples {
            writeln!(f, "  {:>10.2} {:>12.2} {:>12.2}", s.x, s.shear, s.moment)?;
        }

        writeln!(f, "\nKey points:")?;
        for s in &self.key_points {
            writeln!(f, "  {:>10.2} {:>12.2} {:>12.2}", s.x, s.shear, s.moment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::Load;

    fn simple_span() -> (Beam, AnalysisResult) {
        let beam = Beam::simply_supported(10.0)
            .with_load(Load::point(10.0, 5.0))
            .with_load(Load::uniform(2.0, 0.0, 4.0));
        let result = beam.analyze().unwrap();
        (beam, result)
    }

    #[test]
    fn test_sample_table_ends_with_last_sample() {
        let (beam, result) = simple_span();
        let report = CalculationReport::new(&beam, &result);

        assert_eq!(report.samples.first().map(|s| s.x), Some(0.0));
        assert_eq!(report.samples.last().map(|s| s.x), Some(10.0));
        // 501 samples at stride 50 -> 0, 50, ..., 500 with no duplicate end
        assert_eq!(report.samples.len(), 11);
    }

    #[test]
    fn test_equilibrium_check() {
        let (beam, result) = simple_span();
        let report = CalculationReport::new(&beam, &result);
        assert!((report.equilibrium.applied - 18.0).abs() < 1e-9);
        assert!(report.equilibrium.is_balanced(1e-9));
    }

    #[test]
    fn test_load_breakdown() {
        let (beam, result) = simple_span();
        let report = CalculationReport::new(&beam, &result);

        assert_eq!(report.loads[0].label, "Point Load");
        assert_eq!(report.loads[1].label, "UDL");
        assert_eq!(report.loads[1].total, Some(8.0));
        assert_eq!(report.reactions[0].label, "R_A");
        assert_eq!(report.reactions[1].label, "R_B");
    }

    #[test]
    fn test_key_points_cover_load_positions() {
        let (beam, result) = simple_span();
        let report = CalculationReport::new(&beam, &result);
        let xs: Vec<f64> = report.key_points.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![0.0, 4.0, 5.0, 10.0]);
    }

    #[test]
    fn test_thin_short_series() {
        let samples: Vec<ResponseSample> = (0..3)
            .map(|i| ResponseSample { x: i as f64, shear: 0.0, moment: 0.0 })
            .collect();
        assert_eq!(thin_samples(&samples).len(), 3);
    }

    #[test]
    fn test_display_mentions_reactions() {
        let (beam, result) = simple_span();
        let text = CalculationReport::new(&beam, &result).to_string();
        assert!(text.contains("R_A (pin"));
        assert!(text.contains("Equilibrium"));
    }
}
