use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{AssessmentId, ScoreRequest};
use super::intake::{IntakeGuard, ValidationError};
use super::repository::{AssessmentRecord, AssessmentRepository, RepositoryError};
use super::scoring::{RiskScoringEngine, ScoringConfig};

/// Service composing the intake guard, scoring engine, and repository.
pub struct UnderwritingService<R> {
    guard: IntakeGuard,
    engine: Arc<RiskScoringEngine>,
    repository: Arc<R>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("ra-{id:06}"))
}

impl<R> UnderwritingService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Self {
        Self {
            guard: IntakeGuard,
            engine: Arc::new(RiskScoringEngine::new(config)),
            repository,
        }
    }

    pub fn engine(&self) -> &RiskScoringEngine {
        &self.engine
    }

    /// Validate, score, and persist one request, returning the stored record.
    pub fn assess(&self, request: ScoreRequest) -> Result<AssessmentRecord, UnderwritingError> {
        let inputs = self.guard.inputs_from_request(request)?;
        let result = self.engine.score(&inputs);

        let record = AssessmentRecord {
            assessment_id: next_assessment_id(),
            inputs,
            result,
            assessed_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Fetch a stored assessment for API responses.
    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, UnderwritingError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Most recent assessment for a borrower wallet, when one exists.
    pub fn latest_for_wallet(
        &self,
        wallet: &str,
    ) -> Result<Option<AssessmentRecord>, UnderwritingError> {
        Ok(self.repository.latest_for_wallet(wallet)?)
    }
}

/// Error raised by the underwriting service.
#[derive(Debug, thiserror::Error)]
pub enum UnderwritingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
