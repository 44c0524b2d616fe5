use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::dispatch::NotificationDispatcher;
use super::domain::EscalateCommand;
use super::service::{CollectionsError, CollectionsService};

/// Router builder exposing HTTP endpoints for escalation and ladder lookup.
pub fn collections_router<D>(service: Arc<CollectionsService<D>>) -> Router
where
    D: NotificationDispatcher + 'static,
{
    Router::new()
        .route(
            "/api/v1/collections/escalations",
            post(escalate_handler::<D>),
        )
        .route("/api/v1/collections/ladder", get(ladder_handler::<D>))
        .with_state(service)
}

pub(crate) async fn escalate_handler<D>(
    State(service): State<Arc<CollectionsService<D>>>,
    axum::Json(command): axum::Json<EscalateCommand>,
) -> Response
where
    D: NotificationDispatcher + 'static,
{
    match service.escalate(command) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error @ CollectionsError::MissingBorrowerEmail)
        | Err(error @ CollectionsError::InvalidAmountOwed(_)) => {
            // Both variants are caller-input problems, rejected before any
            // ladder decision runs.
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

/// Ladder catalog rendered from the live table so the documented rungs can
/// never drift from the machine's behavior.
pub(crate) async fn ladder_handler<D>(
    State(service): State<Arc<CollectionsService<D>>>,
) -> Response
where
    D: NotificationDispatcher + 'static,
{
    let levels: Vec<_> = service
        .ladder()
        .steps()
        .iter()
        .map(|step| {
            json!({
                "level": u8::from(step.level),
                "name": step.name,
                "trigger": step.trigger,
                "tone": step.tone,
                "actions": step
                    .actions
                    .iter()
                    .map(|action| action.label())
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    let payload = json!({ "levels": levels });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
