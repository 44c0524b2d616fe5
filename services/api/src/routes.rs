use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;

use crate::infra::AppState;
use factorflow::workflows::collections::{
    collections_router, CollectionsService, NotificationDispatcher,
};
use factorflow::workflows::underwriting::{
    underwriting_router, AssessmentRepository, UnderwritingService,
};

pub(crate) fn with_decisioning_routes<R, D>(
    underwriting: Arc<UnderwritingService<R>>,
    collections: Arc<CollectionsService<D>>,
) -> axum::Router
where
    R: AssessmentRepository + 'static,
    D: NotificationDispatcher + 'static,
{
    underwriting_router(underwriting)
        .merge(collections_router(collections))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
