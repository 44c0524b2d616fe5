use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

use factorflow::workflows::collections::{
    DispatchError, NotificationDispatcher, OutboundNotification,
};
use factorflow::workflows::underwriting::{
    AssessmentId, AssessmentRecord, AssessmentRepository, RepositoryError, ScoringConfig,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn latest_for_wallet(
        &self,
        wallet: &str,
    ) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.inputs.borrower_wallet == wallet)
            .max_by_key(|record| record.assessed_at)
            .cloned())
    }
}

/// Default delivery adapter: no transport is wired in this binary, so every
/// notification is logged and recorded as delivered. A production deployment
/// swaps in SMTP/SMS gateway implementations of `NotificationDispatcher`.
#[derive(Default, Clone)]
pub(crate) struct SimulatedDispatcher {
    sender: Option<String>,
    deliveries: Arc<Mutex<Vec<OutboundNotification>>>,
}

impl SimulatedDispatcher {
    pub(crate) fn new(sender: Option<String>) -> Self {
        Self {
            sender,
            deliveries: Arc::default(),
        }
    }

    pub(crate) fn deliveries(&self) -> Vec<OutboundNotification> {
        self.deliveries.lock().expect("dispatch mutex poisoned").clone()
    }
}

impl NotificationDispatcher for SimulatedDispatcher {
    fn dispatch(&self, notification: OutboundNotification) -> Result<(), DispatchError> {
        info!(
            channel = ?notification.channel,
            recipient = %notification.recipient,
            sender = self.sender.as_deref().unwrap_or("simulation"),
            subject = %notification.subject,
            "simulated notification delivery"
        );
        self.deliveries
            .lock()
            .expect("dispatch mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig::standard()
}
