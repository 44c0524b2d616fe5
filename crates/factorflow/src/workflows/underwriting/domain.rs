use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for persisted risk assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Inbound scoring request as submitted by the API or CLI caller.
///
/// `payment_term_days` and `debtor_business_age_months` default at this layer
/// so that a sparse request still reaches the engine fully populated; the
/// remaining optional signals are defaulted per-feature by the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub borrower_wallet: String,
    #[serde(default)]
    pub debtor_tax_id: Option<String>,
    pub invoice_amount: f64,
    #[serde(default = "default_payment_term_days")]
    pub payment_term_days: u32,
    #[serde(default = "default_business_age_months")]
    pub debtor_business_age_months: u32,
    #[serde(default)]
    pub osint_score: Option<f64>,
    #[serde(default)]
    pub wallet_age_days: Option<u32>,
    #[serde(default)]
    pub tx_volume_30d: Option<f64>,
    #[serde(default)]
    pub past_defaults: Option<u32>,
}

fn default_payment_term_days() -> u32 {
    30
}

fn default_business_age_months() -> u32 {
    24
}

/// Validated, immutable snapshot of everything the scoring engine consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureInputs {
    pub borrower_wallet: String,
    pub debtor_tax_id: Option<String>,
    pub invoice_amount: f64,
    pub payment_term_days: u32,
    pub debtor_business_age_months: u32,
    pub osint_score: Option<f64>,
    pub wallet_age_days: Option<u32>,
    pub tx_volume_30d: Option<f64>,
    pub past_defaults: Option<u32>,
}

/// Risk tier determining loan-to-value ratio and interest rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    A,
    B,
    C,
    D,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::A => "A",
            RiskTier::B => "B",
            RiskTier::C => "C",
            RiskTier::D => "D",
        }
    }

    pub const fn describe(self) -> &'static str {
        match self {
            RiskTier::A => "Excellent credit - lowest risk",
            RiskTier::B => "Good credit - moderate risk",
            RiskTier::C => "Fair credit - elevated risk",
            RiskTier::D => "Poor credit - rejected",
        }
    }
}

/// The eight scored features, in breakdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    #[serde(rename = "wallet_age")]
    WalletAge,
    #[serde(rename = "tx_volume_30d")]
    TxVolume30d,
    #[serde(rename = "debtor_reputation")]
    DebtorReputation,
    #[serde(rename = "debtor_business_age")]
    DebtorBusinessAge,
    #[serde(rename = "debtor_osint_score")]
    DebtorOsintScore,
    #[serde(rename = "invoice_amount")]
    InvoiceAmount,
    #[serde(rename = "payment_term_days")]
    PaymentTermDays,
    #[serde(rename = "past_loan_history")]
    PastLoanHistory,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 8] = [
        FeatureKind::WalletAge,
        FeatureKind::TxVolume30d,
        FeatureKind::DebtorReputation,
        FeatureKind::DebtorBusinessAge,
        FeatureKind::DebtorOsintScore,
        FeatureKind::InvoiceAmount,
        FeatureKind::PaymentTermDays,
        FeatureKind::PastLoanHistory,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FeatureKind::WalletAge => "wallet_age",
            FeatureKind::TxVolume30d => "tx_volume_30d",
            FeatureKind::DebtorReputation => "debtor_reputation",
            FeatureKind::DebtorBusinessAge => "debtor_business_age",
            FeatureKind::DebtorOsintScore => "debtor_osint_score",
            FeatureKind::InvoiceAmount => "invoice_amount",
            FeatureKind::PaymentTermDays => "payment_term_days",
            FeatureKind::PastLoanHistory => "past_loan_history",
        }
    }

    pub const fn describe(self) -> &'static str {
        match self {
            FeatureKind::WalletAge => "Borrower wallet age in days",
            FeatureKind::TxVolume30d => "30-day transaction volume in USD",
            FeatureKind::DebtorReputation => "Debtor historical reputation",
            FeatureKind::DebtorBusinessAge => "Debtor business age in months",
            FeatureKind::DebtorOsintScore => "OSINT verification score",
            FeatureKind::InvoiceAmount => "Invoice amount in USD",
            FeatureKind::PaymentTermDays => "Payment term in days",
            FeatureKind::PastLoanHistory => "Past default count",
        }
    }
}

/// Raw input captured alongside a feature score so breakdowns stay auditable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureValue {
    Decimal(f64),
    Count(u32),
    Text(String),
}

/// Per-feature result: normalized score, fixed weight, and the weighted
/// contribution `score * weight / 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScore {
    pub score: f64,
    pub weight: u8,
    pub weighted: f64,
    pub raw_value: FeatureValue,
    pub description: String,
}

/// Aggregate scoring outcome for one request. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScoreResult {
    pub total_score: f64,
    pub tier: RiskTier,
    pub ltv: u8,
    pub interest_rate: f64,
    pub is_approved: bool,
    pub breakdown: BTreeMap<FeatureKind, FeatureScore>,
    pub recommendation: String,
}
