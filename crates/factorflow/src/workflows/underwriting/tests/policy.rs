use super::common::*;
use crate::workflows::underwriting::domain::RiskTier;
use crate::workflows::underwriting::scoring::{RiskScoringEngine, TierBand, TierSchedule};

#[test]
fn tier_thresholds_are_boundary_exact() {
    let schedule = TierSchedule::standard();

    for (score, expected) in [
        (100.0, RiskTier::A),
        (80.0, RiskTier::A),
        (79.99, RiskTier::B),
        (50.0, RiskTier::B),
        (49.99, RiskTier::C),
        (30.0, RiskTier::C),
        (29.99, RiskTier::D),
        (0.0, RiskTier::D),
    ] {
        assert_eq!(
            schedule.band_for_score(score).tier,
            expected,
            "score {score} should classify as tier {}",
            expected.label()
        );
    }
}

#[test]
fn tier_terms_carry_ltv_and_rate() {
    let schedule = TierSchedule::standard();

    let tier_b = schedule.terms(RiskTier::B);
    assert_eq!(tier_b.ltv, 60);
    assert_close(tier_b.interest_rate, 8.0);

    let tier_d = schedule.terms(RiskTier::D);
    assert_eq!(tier_d.ltv, 0);
    assert_close(tier_d.interest_rate, 0.0);
}

#[test]
fn young_business_forces_rejection_regardless_of_score() {
    let mut request = strong_request();
    request.debtor_business_age_months = 5;

    let result = engine().score(&inputs(request));

    assert_eq!(result.tier, RiskTier::D);
    assert_eq!(result.ltv, 0);
    assert_close(result.interest_rate, 0.0);
    assert!(!result.is_approved);
    assert!(result.recommendation.contains("Business age"));
}

#[test]
fn low_osint_score_forces_rejection_even_when_total_is_high() {
    let mut request = strong_request();
    request.osint_score = Some(29.0);

    let result = engine().score(&inputs(request));

    assert!(result.total_score >= 70.0, "other features still score well");
    assert_eq!(result.tier, RiskTier::D);
    assert!(!result.is_approved);
    assert!(result.recommendation.contains("OSINT"));
}

#[test]
fn osint_score_of_zero_counts_as_supplied() {
    let mut request = strong_request();
    request.osint_score = Some(0.0);

    let result = engine().score(&inputs(request));

    assert!(!result.is_approved);
    assert_eq!(result.tier, RiskTier::D);
}

#[test]
fn defaulted_osint_never_triggers_rejection() {
    // The default (70) sits above the floor; only a supplied value can
    // disqualify.
    let result = engine().score(&inputs(sparse_request()));
    assert!(result.is_approved);
}

#[test]
fn rejection_fires_when_multiple_conditions_hold() {
    let mut request = strong_request();
    request.debtor_business_age_months = 3;
    request.osint_score = Some(10.0);

    let result = engine().score(&inputs(request));

    assert!(!result.is_approved);
    assert_eq!(result.tier, RiskTier::D);
    assert_eq!(result.ltv, 0);
    assert!(result.recommendation.starts_with("REJECT"));
}

#[test]
fn score_floor_rejects_under_a_stricter_schedule() {
    let mut config = scoring_config();
    config.tiers = TierSchedule {
        bands: vec![
            TierBand {
                tier: RiskTier::A,
                min_score: 90.0,
                ltv: 80,
                interest_rate: 5.0,
            },
            TierBand {
                tier: RiskTier::B,
                min_score: 70.0,
                ltv: 60,
                interest_rate: 8.0,
            },
            TierBand {
                tier: RiskTier::C,
                min_score: 60.0,
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
    };
    let engine = RiskScoringEngine::new(config);

    let mut request = strong_request();
    request.wallet_age_days = Some(0);
    request.tx_volume_30d = Some(5_000.0);
    request.invoice_amount = 600_000.0;
    request.payment_term_days = 120;
    request.osint_score = Some(35.0);
    request.debtor_business_age_months = 7;
    request.past_defaults = Some(2);

    let result = engine.score(&inputs(request));

    assert!(result.total_score < 60.0);
    assert_eq!(result.tier, RiskTier::D);
    assert!(!result.is_approved);
    assert!(result.recommendation.contains("Score too low"));
}

#[test]
fn tier_d_outcome_is_not_an_error() {
    let mut request = strong_request();
    request.debtor_business_age_months = 5;

    // A policy rejection still flows through the service as a stored,
    // successful assessment.
    let (service, _) = build_service();
    let record = service.assess(request).expect("policy reject is not an error");
    assert!(!record.result.is_approved);
}
