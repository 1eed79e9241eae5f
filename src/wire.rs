//! JSON boundary types
//!
//! Requests arrive as loosely typed records (`{type, magnitude, position?,
//! start?, end?}`) and are converted to the strongly typed model here, so a
//! record missing a field its tag requires is reported before any analysis
//! starts. Responses use the field names the diagram renderer expects.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisOptions;
use crate::elements::{Support, SupportKind};
use crate::error::{BeamError, BeamResult};
use crate::loads::{DistributedShape, Load};
use crate::model::Beam;
use crate::results::{AnalysisResult, Reaction};

// ========================
// Input Data Structures
// ========================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeamRequest {
    pub length: Option<f64>,
    #[serde(default)]
    pub supports: Vec<SupportData>,
    #[serde(default)]
    pub loads: Vec<LoadData>,
    #[serde(default)]
    pub options: Option<OptionsData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportData {
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadData {
    #[serde(rename = "type")]
    pub kind: String,
    pub magnitude: Option<f64>,
    #[serde(default)]
    pub position: Option<f64>,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsData {
    pub target_intervals: Option<usize>,
    pub min_step: Option<f64>,
}

impl SupportData {
    fn to_support(&self, index: usize) -> BeamResult<Support> {
        let kind = SupportKind::parse(&self.kind).ok_or_else(|| {
            BeamError::MalformedSupport(format!("support {index}: unknown type '{}'", self.kind))
        })?;
        let position = self.position.ok_or_else(|| {
            BeamError::MalformedSupport(format!("support {index} ({kind}): missing position"))
        })?;
        Ok(Support::new(kind, position))
    }
}

impl LoadData {
    fn to_load(&self, index: usize) -> BeamResult<Load> {
        let kind = self.kind.to_lowercase();
        let missing = |field: &str| {
            BeamError::MalformedLoad(format!("load {index} ({kind}): missing {field}"))
        };

        let magnitude = self.magnitude.ok_or_else(|| missing("magnitude"))?;
        match kind.as_str() {
            "point" => {
                let position = self.position.ok_or_else(|| missing("position"))?;
                Ok(Load::point(magnitude, position))
            }
            "moment" => {
                let position = self.position.ok_or_else(|| missing("position"))?;
                Ok(Load::moment(magnitude, position))
            }
            "udl" | "uniform" => {
                let start = self.start.ok_or_else(|| missing("start"))?;
                let end = self.end.ok_or_else(|| missing("end"))?;
                Ok(Load::uniform(magnitude, start, end))
            }
            "triangular" | "uvl" => {
                let start = self.start.ok_or_else(|| missing("start"))?;
                let end = self.end.ok_or_else(|| missing("end"))?;
                Ok(Load::triangular(magnitude, start, end))
            }
            _ => Err(BeamError::MalformedLoad(format!(
                "load {index}: unknown type '{}'",
                self.kind
            ))),
        }
    }
}

impl OptionsData {
    /// Apply request overrides on top of `base`
    pub fn apply(&self, base: AnalysisOptions) -> AnalysisOptions {
        let mut options = base;
        if let Some(n) = self.target_intervals {
            options = options.with_target_intervals(n);
        }
        if let Some(step) = self.min_step {
            options = options.with_min_step(step);
        }
        options
    }
}

impl BeamRequest {
    /// Convert the request into a beam, checking every record's fields
    pub fn to_beam(&self) -> BeamResult<Beam> {
        let length = self
            .length
            .ok_or_else(|| BeamError::InvalidGeometry("missing beam length".to_string()))?;

        let mut beam = Beam::new(length);
        for (i, support) in self.supports.iter().enumerate() {
            beam.add_support(support.to_support(i)?);
        }
        for (i, load) in self.loads.iter().enumerate() {
            beam.add_load(load.to_load(i)?);
        }
        Ok(beam)
    }

    /// Analysis options for this request
    pub fn options(&self, base: &AnalysisOptions) -> AnalysisOptions {
        match &self.options {
            Some(data) => data.apply(base.clone()),
            None => base.clone(),
        }
    }
}

/// Only loads the wire format can express convert: uniform loads and
/// triangles rising from zero. Other linearly varying loads are rejected.
impl TryFrom<&Beam> for BeamRequest {
    type Error = BeamError;

    fn try_from(beam: &Beam) -> BeamResult<Self> {
        let supports = beam
            .supports
            .iter()
            .map(|s| SupportData {
                kind: s.kind.as_str().to_string(),
                position: Some(s.position),
            })
            .collect();

        let loads = beam
            .loads
            .iter()
            .enumerate()
            .map(|(i, load)| match load {
                Load::Point(p) => Ok(LoadData::at("point", p.magnitude, p.position)),
                Load::Moment(m) => Ok(LoadData::at("moment", m.magnitude, m.position)),
                Load::Distributed(d) => match d.shape() {
                    DistributedShape::Uniform => Ok(LoadData::over("udl", d.w1, d.x1, d.x2)),
                    DistributedShape::Triangular if d.w1 == 0.0 => {
                        Ok(LoadData::over("triangular", d.w2, d.x1, d.x2))
                    }
                    _ => Err(BeamError::MalformedLoad(format!(
                        "load {i}: intensity {} to {} has no wire representation",
                        d.w1, d.w2
                    ))),
                },
            })
            .collect::<BeamResult<Vec<_>>>()?;

        Ok(Self {
            length: Some(beam.length),
            supports,
            loads,
            options: None,
        })
    }
}

impl LoadData {
    fn at(kind: &str, magnitude: f64, position: f64) -> Self {
        Self {
            kind: kind.to_string(),
            magnitude: Some(magnitude),
            position: Some(position),
            start: None,
            end: None,
        }
    }

    fn over(kind: &str, magnitude: f64, start: f64, end: f64) -> Self {
        Self {
            kind: kind.to_string(),
            magnitude: Some(magnitude),
            position: None,
            start: Some(start),
            end: Some(end),
        }
    }
}

// ========================
// Output Data Structures
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub x_arr: Vec<f64>,
    #[serde(rename = "V")]
    pub v: Vec<f64>,
    #[serde(rename = "M")]
    pub m: Vec<f64>,
    pub reactions: Vec<ReactionData>,
    pub max_shear: f64,
    pub min_shear: f64,
    pub max_moment: f64,
    pub min_moment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionData {
    #[serde(rename = "type")]
    pub kind: String,
    pub position: f64,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub moment: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl From<&Reaction> for ReactionData {
    fn from(r: &Reaction) -> Self {
        Self {
            kind: r.kind.as_str().to_string(),
            position: r.position,
            value: r.force_value,
            moment: r.moment_value,
        }
    }
}

impl From<&AnalysisResult> for AnalysisResponse {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            x_arr: result.xs(),
            v: result.shears(),
            m: result.moments(),
            reactions: result.reactions.iter().map(ReactionData::from).collect(),
            max_shear: result.max_shear,
            min_shear: result.min_shear,
            max_moment: result.max_moment,
            min_moment: result.min_moment,
        }
    }
}

impl From<&BeamError> for ErrorResponse {
    fn from(e: &BeamError) -> Self {
        Self {
            error: e.to_string(),
            kind: e.kind().to_string(),
        }
    }
}

/// Analyze a parsed request
pub fn analyze_request(
    request: &BeamRequest,
    base: &AnalysisOptions,
) -> BeamResult<AnalysisResponse> {
    let beam = request.to_beam()?;
    let result = beam.analyze_with(&request.options(base))?;
    Ok(AnalysisResponse::from(&result))
}

/// Analyze a JSON request and produce a JSON response
///
/// Failures are returned as an `{error, kind}` document rather than an `Err`,
/// so callers on the far side of a serialization boundary always get JSON.
pub fn analyze_json(request_json: &str) -> String {
    let outcome = serde_json::from_str::<BeamRequest>(request_json)
        .map_err(BeamError::from)
        .and_then(|request| analyze_request(&request, &AnalysisOptions::default()));

    let encoded = match outcome {
        Ok(response) => serde_json::to_string(&response),
        Err(e) => serde_json::to_string(&ErrorResponse::from(&e)),
    };

    encoded.unwrap_or_else(|e| {
        format!(r#"{{"error":"Serialization failed: {}","kind":"Serialization"}}"#, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::DistributedLoad;
    use serde_json::json;

    #[test]
    fn test_request_to_beam() {
        let request: BeamRequest = serde_json::from_value(json!({
            "length": 10,
            "supports": [{"type": "pin", "position": 0}, {"type": "roller", "position": 10}],
            "loads": [
                {"type": "point", "magnitude": 10, "position": 5},
                {"type": "udl", "magnitude": 2, "start": 1, "end": 3},
                {"type": "moment", "magnitude": 4, "position": 7},
                {"type": "triangular", "magnitude": 6, "start": 0, "end": 3}
            ]
        }))
        .unwrap();

        let beam = request.to_beam().unwrap();
        assert_eq!(beam.length, 10.0);
        assert_eq!(beam.supports, vec![Support::pin(0.0), Support::roller(10.0)]);
        assert_eq!(beam.loads[0], Load::point(10.0, 5.0));
        assert_eq!(beam.loads[1], Load::uniform(2.0, 1.0, 3.0));
        assert_eq!(beam.loads[2], Load::moment(4.0, 7.0));
        assert_eq!(beam.loads[3], Load::triangular(6.0, 0.0, 3.0));
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        let request: BeamRequest = serde_json::from_value(json!({
            "length": 10,
            "supports": [{"type": "fixed", "position": 0}],
            "loads": [{"type": "udl", "magnitude": 2, "start": 1}]
        }))
        .unwrap();
        let err = request.to_beam().unwrap_err();
        assert_eq!(err.kind(), "MalformedLoad");
        assert!(err.to_string().contains("missing end"));

        let request: BeamRequest = serde_json::from_value(json!({
            "length": 10,
            "supports": [{"type": "fixed"}]
        }))
        .unwrap();
        assert_eq!(request.to_beam().unwrap_err().kind(), "MalformedSupport");
    }

    #[test]
    fn test_unknown_types_are_malformed() {
        let request: BeamRequest = serde_json::from_value(json!({
            "length": 10,
            "supports": [{"type": "spring", "position": 0}]
        }))
        .unwrap();
        assert_eq!(request.to_beam().unwrap_err().kind(), "MalformedSupport");

        let request: BeamRequest = serde_json::from_value(json!({
            "length": 10,
            "loads": [{"type": "thermal", "magnitude": 1, "position": 0}]
        }))
        .unwrap();
        assert_eq!(request.to_beam().unwrap_err().kind(), "MalformedLoad");
    }

    #[test]
    fn test_missing_length() {
        let request = BeamRequest::default();
        assert_eq!(request.to_beam().unwrap_err().kind(), "InvalidGeometry");
    }

    #[test]
    fn test_response_field_names() {
        let output = analyze_json(
            r#"{"length":5,"supports":[{"type":"fixed","position":0}],
                "loads":[{"type":"point","magnitude":10,"position":5}]}"#,
        );
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let fields = [
            "xArr", "V", "M", "reactions", "maxShear", "minShear", "maxMoment", "minMoment",
        ];
        for field in fields {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(value["reactions"][0]["type"], "fixed");
        assert_eq!(value["reactions"][0]["value"], 10.0);
        assert_eq!(value["reactions"][0]["moment"], -50.0);
    }

    #[test]
    fn test_simple_span_reactions_omit_moment() {
        let output = analyze_json(
            r#"{"length":10,"supports":[{"type":"pin","position":0},{"type":"roller","position":10}],
                "loads":[{"type":"point","magnitude":10,"position":5}]}"#,
        );
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["reactions"][0].get("moment").is_none());
    }

    #[test]
    fn test_error_document() {
        let output = analyze_json(
            r#"{"length":10,"supports":[{"type":"pin","position":5},{"type":"roller","position":5}],
                "loads":[{"type":"point","magnitude":10,"position":2}]}"#,
        );
        let error: ErrorResponse = serde_json::from_str(&output).unwrap();
        assert_eq!(error.kind, "InvalidGeometry");

        let output = analyze_json("{not json");
        let error: ErrorResponse = serde_json::from_str(&output).unwrap();
        assert_eq!(error.kind, "Serialization");
    }

    #[test]
    fn test_request_options_override() {
        let request: BeamRequest = serde_json::from_value(json!({
            "length": 10,
            "supports": [{"type": "pin", "position": 0}, {"type": "roller", "position": 10}],
            "options": {"targetIntervals": 10, "minStep": 0.5}
        }))
        .unwrap();
        let response = analyze_request(&request, &AnalysisOptions::default()).unwrap();
        assert_eq!(response.x_arr.len(), 11);
    }

    #[test]
    fn test_beam_round_trips_through_request() {
        let beam = Beam::simply_supported(8.0)
            .with_load(Load::uniform(2.0, 0.0, 4.0))
            .with_load(Load::triangular(3.0, 4.0, 8.0));
        let request = BeamRequest::try_from(&beam).unwrap();
        assert_eq!(request.to_beam().unwrap(), beam);
    }

    #[test]
    fn test_falling_and_trapezoidal_loads_do_not_convert() {
        let falling =
            Beam::simply_supported(8.0).with_load(DistributedLoad::new(3.0, 0.0, 0.0, 4.0));
        let err = BeamRequest::try_from(&falling).unwrap_err();
        assert_eq!(err.kind(), "MalformedLoad");
        assert!(err.to_string().contains("load 0"));

        let trapezoid = Beam::simply_supported(8.0)
            .with_load(Load::point(1.0, 2.0))
            .with_load(DistributedLoad::new(1.0, 2.0, 0.0, 8.0));
        let err = BeamRequest::try_from(&trapezoid).unwrap_err();
        assert!(err.to_string().contains("load 1"));
    }

    #[test]
    fn test_oversized_interval_count_is_an_error_document() {
        let output = analyze_json(
            r#"{"length":10,"supports":[{"type":"pin","position":0},{"type":"roller","position":10}],
                "loads":[{"type":"point","magnitude":10,"position":5}],
                "options":{"targetIntervals":18446744073709551615}}"#,
        );
        let error: ErrorResponse = serde_json::from_str(&output).unwrap();
        assert_eq!(error.kind, "InvalidGeometry");
    }

    #[test]
    fn test_step_below_rounding_resolution_is_rejected() {
        let output = analyze_json(
            r#"{"length":1,"supports":[{"type":"pin","position":0},{"type":"roller","position":1}],
                "loads":[{"type":"point","magnitude":1,"position":0.5}],
                "options":{"targetIntervals":1000000,"minStep":0.000001}}"#,
        );
        let error: ErrorResponse = serde_json::from_str(&output).unwrap();
        assert_eq!(error.kind, "InvalidGeometry");
    }

    #[test]
    fn test_finest_accepted_grid_is_strictly_increasing() {
        let output = analyze_json(
            r#"{"length":1,"supports":[{"type":"pin","position":0},{"type":"roller","position":1}],
                "loads":[{"type":"point","magnitude":1,"position":0.5}],
                "options":{"targetIntervals":1000000,"minStep":0.0001}}"#,
        );
        let response: AnalysisResponse = serde_json::from_str(&output).unwrap();
        assert_eq!(response.x_arr.first(), Some(&0.0));
        assert_eq!(response.x_arr.last(), Some(&1.0));
        assert!(response.x_arr.windows(2).all(|w| w[0] < w[1]));
    }
}
