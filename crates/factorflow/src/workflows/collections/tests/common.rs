use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::collections::dispatch::{
    DispatchError, NotificationDispatcher, OutboundNotification,
};
use crate::workflows::collections::domain::{EscalateCommand, EscalationLevel};
use crate::workflows::collections::machine::EscalationStateMachine;
use crate::workflows::collections::{collections_router, CollectionsService};

pub(super) fn machine() -> EscalationStateMachine {
    EscalationStateMachine::standard()
}

pub(super) fn command() -> EscalateCommand {
    EscalateCommand {
        loan_id: "loan-20240811".to_string(),
        current_level: EscalationLevel::NotEscalated,
        days_overdue: 0,
        borrower_email: "borrower@example.com".to_string(),
        borrower_phone: Some("+84901234567".to_string()),
        amount_owed: 58_000.0,
        currency: "USD".to_string(),
        borrower_name: Some("Lan Pham".to_string()),
        company_name: Some("Mekong Textiles Ltd".to_string()),
    }
}

pub(super) fn build_service() -> (
    CollectionsService<RecordingDispatcher>,
    Arc<RecordingDispatcher>,
) {
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let service = CollectionsService::new(dispatcher.clone());
    (service, dispatcher)
}

pub(super) fn router() -> axum::Router {
    let (service, _) = build_service();
    collections_router(Arc::new(service))
}

/// Captures everything handed to it and reports success.
#[derive(Default, Clone)]
pub(super) struct RecordingDispatcher {
    deliveries: Arc<Mutex<Vec<OutboundNotification>>>,
}

impl RecordingDispatcher {
    pub(super) fn deliveries(&self) -> Vec<OutboundNotification> {
        self.deliveries.lock().expect("dispatch mutex poisoned").clone()
    }
}

impl NotificationDispatcher for RecordingDispatcher {
    fn dispatch(&self, notification: OutboundNotification) -> Result<(), DispatchError> {
        self.deliveries
            .lock()
            .expect("dispatch mutex poisoned")
            .push(notification);
        Ok(())
    }
}

/// Refuses every delivery so failure handling can be observed.
pub(super) struct OfflineDispatcher;

impl NotificationDispatcher for OfflineDispatcher {
    fn dispatch(&self, _notification: OutboundNotification) -> Result<(), DispatchError> {
        Err(DispatchError::Transport("gateway offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
