//! Beam Solver HTTP Server

use anyhow::Context;

use beam_solver::server::{create_router, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ServerConfig::from_env();
    let app = create_router(&config);
    let addr = config.bind_addr();

    log::info!(
        "Sampling defaults: min step {}, {} target intervals",
        config.analysis.min_step,
        config.analysis.target_intervals
    );
    println!("Beam Solver Server listening on http://{}", addr);
    println!("  Health check: GET  /health");
    println!("  Analysis:     POST /api/calculate");
    println!("  Report:       POST /api/report");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
