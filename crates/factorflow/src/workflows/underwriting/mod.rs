//! Credit underwriting: the 8-feature risk scoring workflow.
//!
//! The engine is a pure function of its inputs and the injected
//! `ScoringConfig`; the surrounding intake guard, service, and router only
//! validate, persist, and expose its decisions.

pub mod domain;
pub mod intake;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentId, FeatureInputs, FeatureKind, FeatureScore, FeatureValue, RiskScoreResult,
    RiskTier, ScoreRequest,
};
pub use intake::{IntakeGuard, ValidationError};
pub use repository::{AssessmentRecord, AssessmentRepository, AssessmentView, RepositoryError};
pub use router::underwriting_router;
pub use scoring::{
    FeatureWeights, InputDefaults, RejectReason, RiskScoringEngine, ScoringConfig, TierBand,
    TierSchedule,
};
pub use service::{UnderwritingError, UnderwritingService};
