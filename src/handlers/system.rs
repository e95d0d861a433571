use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::models::AppState;
use crate::SERVICE_NAME;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct InfoResponse {
    service: &'static str,
    region: String,
    version: &'static str,
    endpoints: BTreeMap<&'static str, &'static str>,
}

/// `GET /health` — one minimal remote call as a liveness probe. Any
/// failure maps to an unhealthy 500.
pub async fn health_get(State(state): State<AppState>) -> impl IntoResponse {
    match state.compute.describe_regions(1).await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                region: Some(state.region().to_string()),
                service: Some(SERVICE_NAME),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "health probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "unhealthy",
                    region: None,
                    service: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

/// `GET /info` — static service metadata, no remote call.
pub async fn info_get(State(state): State<AppState>) -> impl IntoResponse {
    let endpoints = BTreeMap::from([
        (
            "/",
            "HTML dashboard of instances, networks, load balancers and images",
        ),
        ("/health", "liveness probe against the provider"),
        ("/info", "service metadata"),
    ]);
    Json(InfoResponse {
        service: SERVICE_NAME,
        region: state.region().to_string(),
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}
