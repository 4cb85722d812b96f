use std::collections::HashMap;

use anyhow::Result;
use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use strum::IntoEnumIterator;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    allocation::{portfolio_metrics, recommended_allocation},
    analysis::{analyze, PlanRequest},
    assets::AssetClass,
    growth::{projection, Scenario, YearPoint},
};

/// Serve the calculator over HTTP. Every route is stateless: one request,
/// one full recomputation, no shared state between requests.
pub async fn start(address: String) -> Result<()> {
    let app = Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/allocation/{age}", get(allocation_handler))
        .route("/metrics", post(metrics_handler))
        .route("/projection", post(projection_handler))
        .layer(TraceLayer::new_for_http());

    info!("Listening on {}", address);
    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn analyze_handler(Json(request): Json<PlanRequest>) -> impl IntoResponse {
    match request.validate() {
        Ok(()) => Json(analyze(&request)).into_response(),
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": err })),
        )
            .into_response(),
    }
}

async fn allocation_handler(Path(age): Path<i32>) -> Json<HashMap<AssetClass, f64>> {
    Json(recommended_allocation(age))
}

async fn metrics_handler(Json(weights): Json<HashMap<AssetClass, f64>>) -> impl IntoResponse {
    let metrics = portfolio_metrics(&weights);
    Json(json!({
        "expected_return": metrics.expected_return,
        "risk": metrics.risk,
        "sharpe": metrics.sharpe(),
    }))
}

#[derive(Deserialize, Debug)]
struct ProjectionRequest {
    lump_sum: f64,
    monthly_investment: f64,
    horizon_years: u32,
}

async fn projection_handler(Json(request): Json<ProjectionRequest>) -> impl IntoResponse {
    if !(1..=40).contains(&request.horizon_years) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "Investment horizon is outside the supported 1-40 year range" })),
        )
            .into_response();
    }

    let series: HashMap<String, Vec<YearPoint>> = Scenario::iter()
        .map(|scenario| {
            (
                scenario.to_string(),
                projection(
                    scenario,
                    request.lump_sum,
                    request.monthly_investment,
                    request.horizon_years,
                )
                .collect(),
            )
        })
        .collect();

    Json(series).into_response()
}
