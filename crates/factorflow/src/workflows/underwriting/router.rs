use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{AssessmentId, FeatureKind, ScoreRequest};
use super::repository::{AssessmentRepository, RepositoryError};
use super::service::{UnderwritingError, UnderwritingService};

/// Router builder exposing HTTP endpoints for scoring and tier lookup.
pub fn underwriting_router<R>(service: Arc<UnderwritingService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/underwriting/assessments",
            post(assess_handler::<R>),
        )
        .route(
            "/api/v1/underwriting/assessments/:assessment_id",
            get(assessment_handler::<R>),
        )
        .route("/api/v1/underwriting/tiers", get(tiers_handler::<R>))
        .with_state(service)
}

pub(crate) async fn assess_handler<R>(
    State(service): State<Arc<UnderwritingService<R>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.assess(request) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(UnderwritingError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(UnderwritingError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "assessment already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn assessment_handler<R>(
    State(service): State<Arc<UnderwritingService<R>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(UnderwritingError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "assessment_id": id.0,
                "error": "assessment not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Tier and feature catalog rendered from the live scoring configuration so
/// the documented thresholds can never drift from the engine's behavior.
pub(crate) async fn tiers_handler<R>(
    State(service): State<Arc<UnderwritingService<R>>>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let config = service.engine().config();

    let tiers: Vec<_> = config
        .tiers
        .bands
        .iter()
        .map(|band| {
            json!({
                "tier": band.tier.label(),
                "min_score": band.min_score,
                "ltv": band.ltv,
                "interest_rate": band.interest_rate,
                "description": band.tier.describe(),
            })
        })
        .collect();

    let features: Vec<_> = FeatureKind::ALL
        .iter()
        .map(|kind| {
            json!({
                "name": kind.name(),
                "weight": config.weights.weight(*kind),
                "description": kind.describe(),
            })
        })
        .collect();

    let payload = json!({
        "tiers": tiers,
        "features": features,
        "auto_reject_rules": [
            format!("Business age < {} months", config.min_business_age_months),
            format!("OSINT score < {}", config.min_osint_score),
            "Total score below the Tier C floor",
        ],
    });

    (StatusCode::OK, axum::Json(payload)).into_response()
}
