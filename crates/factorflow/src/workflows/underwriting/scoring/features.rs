use std::collections::BTreeMap;

use super::super::domain::{FeatureInputs, FeatureKind, FeatureScore, FeatureValue};
use super::config::ScoringConfig;

/// Signals the auto-reject policy needs after evaluation: the resolved
/// business age and the OSINT score exactly as supplied (None stays None so
/// the defaulted value never triggers a rejection it did not earn).
pub(crate) struct FeatureSignals {
    pub business_age_months: u32,
    pub osint_score: Option<f64>,
}

pub(crate) fn score_features(
    inputs: &FeatureInputs,
    config: &ScoringConfig,
) -> (BTreeMap<FeatureKind, FeatureScore>, FeatureSignals) {
    let weights = &config.weights;
    let mut breakdown = BTreeMap::new();

    let wallet_age = inputs
        .wallet_age_days
        .unwrap_or(config.defaults.wallet_age_days);
    let wallet_age_score = ((wallet_age as f64 / 365.0) * 100.0).min(100.0);
    breakdown.insert(
        FeatureKind::WalletAge,
        entry(
            wallet_age_score,
            weights.weight(FeatureKind::WalletAge),
            FeatureValue::Count(wallet_age),
            format!("Wallet age: {wallet_age} days"),
        ),
    );

    let tx_volume = inputs
        .tx_volume_30d
        .unwrap_or(config.defaults.tx_volume_30d);
    let tx_score = if tx_volume >= 100_000.0 {
        100.0
    } else if tx_volume >= 50_000.0 {
        80.0
    } else if tx_volume >= 10_000.0 {
        60.0
    } else {
        40.0
    };
    breakdown.insert(
        FeatureKind::TxVolume30d,
        entry(
            tx_score,
            weights.weight(FeatureKind::TxVolume30d),
            FeatureValue::Decimal(tx_volume),
            format!("30-day volume: ${tx_volume:.0}"),
        ),
    );

    // No external reputation feed reaches this core; a fixed placeholder
    // keeps the weight slot occupied until one does.
    let reputation_score = config.defaults.reputation_score;
    breakdown.insert(
        FeatureKind::DebtorReputation,
        entry(
            reputation_score,
            weights.weight(FeatureKind::DebtorReputation),
            FeatureValue::Text("Good".to_string()),
            "Debtor reputation: Good".to_string(),
        ),
    );

    let business_age = inputs.debtor_business_age_months;
    let business_age_score = if business_age < 6 {
        0.0
    } else if business_age < 12 {
        40.0
    } else if business_age < 24 {
        70.0
    } else {
        100.0
    };
    breakdown.insert(
        FeatureKind::DebtorBusinessAge,
        entry(
            business_age_score,
            weights.weight(FeatureKind::DebtorBusinessAge),
            FeatureValue::Count(business_age),
            format!("Business age: {business_age} months"),
        ),
    );

    let osint = inputs.osint_score.unwrap_or(config.defaults.osint_score);
    breakdown.insert(
        FeatureKind::DebtorOsintScore,
        entry(
            osint,
            weights.weight(FeatureKind::DebtorOsintScore),
            FeatureValue::Decimal(osint),
            format!("OSINT score: {osint}"),
        ),
    );

    let invoice_amount = inputs.invoice_amount;
    let invoice_score = if invoice_amount < 50_000.0 {
        100.0
    } else if invoice_amount < 100_000.0 {
        70.0
    } else if invoice_amount < 500_000.0 {
        50.0
    } else {
        30.0
    };
    breakdown.insert(
        FeatureKind::InvoiceAmount,
        entry(
            invoice_score,
            weights.weight(FeatureKind::InvoiceAmount),
            FeatureValue::Decimal(invoice_amount),
            format!("Invoice: ${invoice_amount:.0}"),
        ),
    );

    let term = inputs.payment_term_days;
    let term_score = if term <= 30 {
        100.0
    } else if term <= 60 {
        80.0
    } else if term <= 90 {
        60.0
    } else {
        40.0
    };
    breakdown.insert(
        FeatureKind::PaymentTermDays,
        entry(
            term_score,
            weights.weight(FeatureKind::PaymentTermDays),
            FeatureValue::Count(term),
            format!("Payment term: {term} days"),
        ),
    );

    let defaults = inputs
        .past_defaults
        .unwrap_or(config.defaults.past_defaults);
    let history_score = match defaults {
        0 => 100.0,
        1 => 50.0,
        _ => 0.0,
    };
    breakdown.insert(
        FeatureKind::PastLoanHistory,
        entry(
            history_score,
            weights.weight(FeatureKind::PastLoanHistory),
            FeatureValue::Count(defaults),
            format!("Past defaults: {defaults}"),
        ),
    );

    let signals = FeatureSignals {
        business_age_months: business_age,
        osint_score: inputs.osint_score,
    };

    (breakdown, signals)
}

fn entry(score: f64, weight: u8, raw_value: FeatureValue, description: String) -> FeatureScore {
    FeatureScore {
        score,
        weight,
        weighted: score * weight as f64 / 100.0,
        raw_value,
        description,
    }
}
