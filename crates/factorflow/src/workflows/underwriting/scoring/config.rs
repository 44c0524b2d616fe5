use serde::{Deserialize, Serialize};

use super::super::domain::{FeatureKind, RiskTier};

/// Immutable scoring configuration injected into the engine at construction.
///
/// Weights, tier thresholds, and auto-reject cutoffs all live here so tests
/// can run the engine against alternate rulebooks without shared state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: FeatureWeights,
    pub tiers: TierSchedule,
    pub min_business_age_months: u32,
    pub min_osint_score: f64,
    pub defaults: InputDefaults,
}

impl ScoringConfig {
    /// The production rulebook: eight weights summing to 100 and the A-D
    /// tier schedule.
    pub fn standard() -> Self {
        Self {
            weights: FeatureWeights {
                wallet_age: 10,
                tx_volume_30d: 15,
                debtor_reputation: 15,
                debtor_business_age: 15,
                debtor_osint_score: 15,
                invoice_amount: 10,
                payment_term_days: 5,
                past_loan_history: 10,
            },
            tiers: TierSchedule::standard(),
            min_business_age_months: 6,
            min_osint_score: 30.0,
            defaults: InputDefaults {
                wallet_age_days: 365,
                tx_volume_30d: 10_000.0,
                osint_score: 70.0,
                reputation_score: 70.0,
                past_defaults: 0,
            },
        }
    }
}

/// Fixed per-feature weight percentages. The eight weights must sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    pub wallet_age: u8,
    pub tx_volume_30d: u8,
    pub debtor_reputation: u8,
    pub debtor_business_age: u8,
    pub debtor_osint_score: u8,
    pub invoice_amount: u8,
    pub payment_term_days: u8,
    pub past_loan_history: u8,
}

impl FeatureWeights {
    pub const fn weight(&self, kind: FeatureKind) -> u8 {
        match kind {
            FeatureKind::WalletAge => self.wallet_age,
            FeatureKind::TxVolume30d => self.tx_volume_30d,
            FeatureKind::DebtorReputation => self.debtor_reputation,
            FeatureKind::DebtorBusinessAge => self.debtor_business_age,
            FeatureKind::DebtorOsintScore => self.debtor_osint_score,
            FeatureKind::InvoiceAmount => self.invoice_amount,
            FeatureKind::PaymentTermDays => self.payment_term_days,
            FeatureKind::PastLoanHistory => self.past_loan_history,
        }
    }

    pub fn total(&self) -> u16 {
        FeatureKind::ALL
            .iter()
            .map(|kind| self.weight(*kind) as u16)
            .sum()
    }
}

/// Tier bands ordered highest-first; classification picks the first band
/// whose `min_score` the total reaches, falling through to the last band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSchedule {
    pub bands: Vec<TierBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBand {
    pub tier: RiskTier,
    pub min_score: f64,
    pub ltv: u8,
    pub interest_rate: f64,
}

impl TierSchedule {
    pub fn standard() -> Self {
        Self {
            bands: vec![
                TierBand {
                    tier: RiskTier::A,
                    min_score: 80.0,
                    ltv: 80,
                    interest_rate: 5.0,
                },
                TierBand {
                    tier: RiskTier::B,
                    min_score: 50.0,
                    ltv: 60,
                    interest_rate: 8.0,
                },
                TierBand {
                    tier: RiskTier::C,
                    min_score: 30.0,
                    ltv: 40,
                    interest_rate: 12.0,
                },
                TierBand {
                    tier: RiskTier::D,
                    min_score: 0.0,
                    ltv: 0,
                    interest_rate: 0.0,
                },
            ],
        }
    }

    pub fn band_for_score(&self, total: f64) -> &TierBand {
        self.bands
            .iter()
            .find(|band| total >= band.min_score)
            .unwrap_or_else(|| self.bands.last().expect("tier schedule is never empty"))
    }

    pub fn terms(&self, tier: RiskTier) -> &TierBand {
        self.bands
            .iter()
            .find(|band| band.tier == tier)
            .unwrap_or_else(|| self.bands.last().expect("tier schedule is never empty"))
    }
}

/// Documented fallbacks for optional inputs. A default applies only when the
/// caller omitted the signal entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    pub wallet_age_days: u32,
    pub tx_volume_30d: f64,
    pub osint_score: f64,
    pub reputation_score: f64,
    pub past_defaults: u32,
}
