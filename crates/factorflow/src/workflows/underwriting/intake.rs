use super::domain::{FeatureInputs, ScoreRequest};

/// Validation errors raised before any scoring logic runs.
///
/// These are strictly distinguishable from a policy rejection, which is a
/// legitimate Tier-D outcome rather than an error.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("borrower wallet identifier is required")]
    MissingBorrowerWallet,
    #[error("invoice amount must be a positive number, got {0}")]
    InvalidInvoiceAmount(f64),
    #[error("payment term must be at least one day")]
    InvalidPaymentTerm,
    #[error("osint score {0} is outside the 0-100 range")]
    OsintScoreOutOfRange(f64),
    #[error("transaction volume must be a non-negative number, got {0}")]
    InvalidTransactionVolume(f64),
}

/// Guard responsible for producing validated `FeatureInputs`.
///
/// Absent optional signals pass through untouched so the engine can apply its
/// documented per-feature defaults; a supplied value is never replaced, which
/// keeps defaults from masking a disqualifying condition.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn inputs_from_request(
        &self,
        request: ScoreRequest,
    ) -> Result<FeatureInputs, ValidationError> {
        if request.borrower_wallet.trim().is_empty() {
            return Err(ValidationError::MissingBorrowerWallet);
        }

        if !request.invoice_amount.is_finite() || request.invoice_amount <= 0.0 {
            return Err(ValidationError::InvalidInvoiceAmount(request.invoice_amount));
        }

        if request.payment_term_days == 0 {
            return Err(ValidationError::InvalidPaymentTerm);
        }

        if let Some(score) = request.osint_score {
            if !score.is_finite() || !(0.0..=100.0).contains(&score) {
                return Err(ValidationError::OsintScoreOutOfRange(score));
            }
        }

        if let Some(volume) = request.tx_volume_30d {
            if !volume.is_finite() || volume < 0.0 {
                return Err(ValidationError::InvalidTransactionVolume(volume));
            }
        }

        Ok(FeatureInputs {
            borrower_wallet: request.borrower_wallet,
            debtor_tax_id: request.debtor_tax_id,
            invoice_amount: request.invoice_amount,
            payment_term_days: request.payment_term_days,
            debtor_business_age_months: request.debtor_business_age_months,
            osint_score: request.osint_score,
            wallet_age_days: request.wallet_age_days,
            tx_volume_30d: request.tx_volume_30d,
            past_defaults: request.past_defaults,
        })
    }
}
