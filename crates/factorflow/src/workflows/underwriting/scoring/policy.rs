use serde::{Deserialize, Serialize};

use super::super::domain::RiskTier;
use super::config::{ScoringConfig, TierSchedule};
use super::features::FeatureSignals;

/// Hard disqualifiers that force a Tier-D outcome regardless of score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RejectReason {
    BusinessTooYoung { months: u32, minimum: u32 },
    OsintBelowFloor { score: f64, floor: f64 },
    ScoreBelowFloor { score: f64 },
}

impl RejectReason {
    pub fn summary(&self) -> String {
        match self {
            RejectReason::BusinessTooYoung { minimum, .. } => {
                format!("Business age < {minimum} months")
            }
            RejectReason::OsintBelowFloor { floor, .. } => format!("OSINT score < {floor}"),
            RejectReason::ScoreBelowFloor { .. } => "Score too low".to_string(),
        }
    }
}

pub(crate) fn classify(total: f64, schedule: &TierSchedule) -> RiskTier {
    schedule.band_for_score(total).tier
}

/// Every firing condition is collected so rejection is the union of the
/// rules, not the first match; the surfaced reason follows push order
/// (business age, then OSINT, then the score floor).
pub(crate) fn reject_reasons(
    total: f64,
    signals: &FeatureSignals,
    config: &ScoringConfig,
) -> Vec<RejectReason> {
    let mut reasons = Vec::new();

    if signals.business_age_months < config.min_business_age_months {
        reasons.push(RejectReason::BusinessTooYoung {
            months: signals.business_age_months,
            minimum: config.min_business_age_months,
        });
    }

    if let Some(score) = signals.osint_score {
        if score < config.min_osint_score {
            reasons.push(RejectReason::OsintBelowFloor {
                score,
                floor: config.min_osint_score,
            });
        }
    }

    if classify(total, &config.tiers) == RiskTier::D {
        reasons.push(RejectReason::ScoreBelowFloor { score: total });
    }

    reasons
}
