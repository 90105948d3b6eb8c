use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use name_match::error::AppError;
use name_match::matching::{ComparisonRequest, ComparisonResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct CompareRequestBody {
    #[serde(flatten)]
    pub(crate) request: ComparisonRequest,
    #[serde(default)]
    pub(crate) include_explanation: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompareResponse {
    #[serde(flatten)]
    pub(crate) result: ComparisonResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) explanation: Option<Vec<String>>,
}

pub(crate) fn comparison_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/names/compare", post(compare_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    match state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            String::new(),
        ),
    }
}

pub(crate) async fn compare_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CompareRequestBody>,
) -> Result<Json<CompareResponse>, AppError> {
    let CompareRequestBody {
        request,
        include_explanation,
    } = payload;

    request.validate(&state.limits)?;
    let result = request.compare();

    debug!(
        score = result.score,
        rules = result.normalization_applied.len(),
        categories = result.difference_categories.len(),
        "compared company names"
    );

    let explanation = if include_explanation {
        Some(result.explanation())
    } else {
        None
    };

    Ok(Json(CompareResponse {
        result,
        explanation,
    }))
}
