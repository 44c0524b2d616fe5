mod config;
mod features;
mod policy;

pub use config::{FeatureWeights, InputDefaults, ScoringConfig, TierBand, TierSchedule};
pub use policy::RejectReason;

use super::domain::{FeatureInputs, RiskScoreResult, RiskTier};

/// Stateless engine applying the configured rulebook to validated inputs:
/// evaluate, aggregate, classify, then auto-reject, in that order.
pub struct RiskScoringEngine {
    config: ScoringConfig,
}

impl RiskScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, inputs: &FeatureInputs) -> RiskScoreResult {
        let (breakdown, signals) = features::score_features(inputs, &self.config);

        let total_score = round2(breakdown.values().map(|feature| feature.weighted).sum());

        let scored_tier = policy::classify(total_score, &self.config.tiers);
        let reasons = policy::reject_reasons(total_score, &signals, &self.config);

        let (tier, ltv, interest_rate, is_approved) = if reasons.is_empty() {
            let terms = self.config.tiers.terms(scored_tier);
            (scored_tier, terms.ltv, terms.interest_rate, true)
        } else {
            (RiskTier::D, 0, 0.0, false)
        };

        let recommendation = if is_approved {
            format!(
                "APPROVE - Tier {}: LTV {}%, Rate {}%",
                tier.label(),
                ltv,
                interest_rate
            )
        } else {
            format!("REJECT - {}", reasons[0].summary())
        };

        RiskScoreResult {
            total_score,
            tier,
            ltv,
            interest_rate,
            is_approved,
            breakdown,
            recommendation,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
