use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    AssessmentId, FeatureInputs, FeatureKind, FeatureScore, RiskScoreResult, RiskTier,
};

/// Repository record pairing the scored inputs with their outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub inputs: FeatureInputs,
    pub result: RiskScoreResult,
    pub assessed_at: DateTime<Utc>,
}

impl AssessmentRecord {
    pub fn view(&self) -> AssessmentView {
        AssessmentView {
            assessment_id: self.assessment_id.clone(),
            borrower_wallet: self.inputs.borrower_wallet.clone(),
            total_score: self.result.total_score,
            tier: self.result.tier,
            ltv: self.result.ltv,
            interest_rate: self.result.interest_rate,
            is_approved: self.result.is_approved,
            recommendation: self.result.recommendation.clone(),
            breakdown: self.result.breakdown.clone(),
            assessed_at: self.assessed_at,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn latest_for_wallet(&self, wallet: &str) -> Result<Option<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Serialized representation of an assessment for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentView {
    pub assessment_id: AssessmentId,
    pub borrower_wallet: String,
    pub total_score: f64,
    pub tier: RiskTier,
    pub ltv: u8,
    pub interest_rate: f64,
    pub is_approved: bool,
    pub recommendation: String,
    pub breakdown: BTreeMap<FeatureKind, FeatureScore>,
    pub assessed_at: DateTime<Utc>,
}
