//! HTTP wrapper around the analysis engine

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::analysis::AnalysisOptions;
use crate::error::BeamError;
use crate::report::CalculationReport;
use crate::wire::{AnalysisResponse, BeamRequest, ErrorResponse};

/// Server settings, read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Defaults applied to every request before its own overrides
    pub analysis: AnalysisOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8086,
            analysis: AnalysisOptions::default(),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `BEAM_TARGET_INTERVALS` and `BEAM_MIN_STEP`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unparseable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let mut analysis = defaults.analysis;
        if let Some(n) = parse_var(&lookup, "BEAM_TARGET_INTERVALS") {
            analysis = analysis.with_target_intervals(n);
        }
        if let Some(step) = parse_var(&lookup, "BEAM_MIN_STEP") {
            analysis = analysis.with_min_step(step);
        }

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT").unwrap_or(defaults.port),
            analysis,
        }
    }

    /// Address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed socket address, if the host is an IP literal
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.bind_addr().parse().ok()
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

/// Application state
pub struct AppState {
    options: AnalysisOptions,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Build the API router
pub fn create_router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        options: config.analysis.clone(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/calculate", post(calculate))
        .route("/api/report", post(report))
        .layer(cors)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn calculate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BeamRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    log::info!(
        "Calculate: {} support(s), {} load(s)",
        request.supports.len(),
        request.loads.len()
    );
    Ok(Json(handle_calculate(&request, &state.options)?))
}

async fn report(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BeamRequest>,
) -> Result<Json<CalculationReport>, ApiError> {
    Ok(Json(handle_report(&request, &state.options)?))
}

/// Run a calculation request against the given defaults
pub fn handle_calculate(
    request: &BeamRequest,
    options: &AnalysisOptions,
) -> Result<AnalysisResponse, ApiError> {
    crate::wire::analyze_request(request, options).map_err(ApiError::from)
}

/// Build the calculation report for a request
pub fn handle_report(
    request: &BeamRequest,
    options: &AnalysisOptions,
) -> Result<CalculationReport, ApiError> {
    let beam = request.to_beam()?;
    let result = beam.analyze_with(&request.options(options))?;
    Ok(CalculationReport::new(&beam, &result))
}

/// API errors, rendered as `{error, kind}` with a 400 status
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] BeamError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn body(&self) -> ErrorResponse {
        ErrorResponse::from(&self.0)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("Rejected request: {}", self.0);
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> BeamRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ServerConfig::from_lookup(|key| match key {
            "PORT" => Some("9000".to_string()),
            "BEAM_TARGET_INTERVALS" => Some("100".to_string()),
            "BEAM_MIN_STEP" => Some("nonsense".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.analysis.target_intervals, 100);
        assert_eq!(config.analysis.min_step, 0.01);
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert!(config.socket_addr().is_some());
    }

    #[test]
    fn test_calculate_ok() {
        let response = handle_calculate(
            &request(json!({
                "length": 10,
                "supports": [{"type": "pin", "position": 0}, {"type": "roller", "position": 10}],
                "loads": [{"type": "point", "magnitude": 10, "position": 5}]
            })),
            &AnalysisOptions::default(),
        )
        .unwrap();
        assert_eq!(response.reactions.len(), 2);
        assert!((response.max_moment - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_rejects_unsupported_pattern() {
        let err = handle_calculate(
            &request(json!({
                "length": 10,
                "supports": [{"type": "roller", "position": 0}, {"type": "roller", "position": 10}],
                "loads": []
            })),
            &AnalysisOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().kind, "UnsupportedConfiguration");
    }

    #[test]
    fn test_report_for_cantilever() {
        let report = handle_report(
            &request(json!({
                "length": 5,
                "supports": [{"type": "fixed", "position": 0}],
                "loads": [{"type": "point", "magnitude": 10, "position": 5}]
            })),
            &AnalysisOptions::default(),
        )
        .unwrap();
        assert_eq!(report.reactions[0].moment, Some(-50.0));
        assert!(report.equilibrium.is_balanced(1e-9));
    }
}
