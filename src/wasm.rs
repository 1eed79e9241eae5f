//! WASM bindings for the beam solver
//!
//! Runs the analysis directly in the browser. Input and output are the same
//! JSON documents the HTTP endpoint accepts and returns.

use wasm_bindgen::prelude::*;

use crate::analysis::AnalysisOptions;
use crate::error::BeamResult;
use crate::report::CalculationReport;
use crate::wire::{self, BeamRequest, ErrorResponse};

// Use wee_alloc for smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Analyze a beam described as JSON, returning the diagram data as JSON
///
/// On failure the returned document is `{error, kind}`.
#[wasm_bindgen]
pub fn analyze(request_json: &str) -> String {
    let start = js_sys::Date::now();
    let output = wire::analyze_json(request_json);
    log::debug!("Beam analysis took {} ms", js_sys::Date::now() - start);
    output
}

/// Build the calculation report for a beam described as JSON
#[wasm_bindgen]
pub fn report(request_json: &str) -> String {
    let encoded = match build_report(request_json) {
        Ok(report) => serde_json::to_string(&report),
        Err(e) => serde_json::to_string(&ErrorResponse::from(&e)),
    };
    encoded.unwrap_or_else(|e| {
        format!(r#"{{"error":"Serialization failed: {}","kind":"Serialization"}}"#, e)
    })
}

fn build_report(request_json: &str) -> BeamResult<CalculationReport> {
    let request: BeamRequest = serde_json::from_str(request_json)?;
    let beam = request.to_beam()?;
    let result = beam.analyze_with(&request.options(&AnalysisOptions::default()))?;
    Ok(CalculationReport::new(&beam, &result))
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
