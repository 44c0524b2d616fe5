use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::underwriting::domain::{AssessmentId, FeatureInputs, ScoreRequest};
use crate::workflows::underwriting::intake::IntakeGuard;
use crate::workflows::underwriting::repository::{
    AssessmentRecord, AssessmentRepository, RepositoryError,
};
use crate::workflows::underwriting::scoring::{RiskScoringEngine, ScoringConfig};
use crate::workflows::underwriting::{underwriting_router, UnderwritingService};

/// Strong borrower profile used across scenarios; scores 89.0 under the
/// standard rulebook.
pub(super) fn strong_request() -> ScoreRequest {
    ScoreRequest {
        borrower_wallet: "0x4b2f9a1c".to_string(),
        debtor_tax_id: Some("0301234567".to_string()),
        invoice_amount: 40_000.0,
        payment_term_days: 30,
        debtor_business_age_months: 24,
        osint_score: Some(90.0),
        wallet_age_days: Some(365),
        tx_volume_30d: Some(120_000.0),
        past_defaults: Some(0),
    }
}

/// Request with every optional signal absent so engine defaults apply.
pub(super) fn sparse_request() -> ScoreRequest {
    ScoreRequest {
        borrower_wallet: "0x4b2f9a1c".to_string(),
        debtor_tax_id: None,
        invoice_amount: 40_000.0,
        payment_term_days: 30,
        debtor_business_age_months: 24,
        osint_score: None,
        wallet_age_days: None,
        tx_volume_30d: None,
        past_defaults: None,
    }
}

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::standard()
}

pub(super) fn engine() -> RiskScoringEngine {
    RiskScoringEngine::new(scoring_config())
}

pub(super) fn inputs(request: ScoreRequest) -> FeatureInputs {
    IntakeGuard
        .inputs_from_request(request)
        .expect("fixture request validates")
}

pub(super) fn build_service() -> (
    UnderwritingService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = UnderwritingService::new(repository.clone(), scoring_config());
    (service, repository)
}

pub(super) fn router_with_service(
    service: UnderwritingService<MemoryRepository>,
) -> axum::Router {
    underwriting_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
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

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn latest_for_wallet(
        &self,
        _wallet: &str,
    ) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
