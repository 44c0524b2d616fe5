use std::sync::Arc;

use clap::Args;

use crate::infra::{default_scoring_config, InMemoryAssessmentRepository, SimulatedDispatcher};
use factorflow::error::AppError;
use factorflow::workflows::collections::{CollectionsService, EscalateCommand, EscalationState};
use factorflow::workflows::underwriting::{ScoreRequest, UnderwritingService};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Borrower wallet identifier
    #[arg(long)]
    pub(crate) borrower_wallet: String,
    /// Invoice amount in USD
    #[arg(long)]
    pub(crate) invoice_amount: f64,
    /// Payment term in days
    #[arg(long, default_value_t = 30)]
    pub(crate) payment_term_days: u32,
    /// Debtor business age in months
    #[arg(long, default_value_t = 24)]
    pub(crate) debtor_business_age_months: u32,
    /// OSINT verification score (0-100)
    #[arg(long)]
    pub(crate) osint_score: Option<f64>,
    /// Borrower wallet age in days
    #[arg(long)]
    pub(crate) wallet_age_days: Option<u32>,
    /// 30-day transaction volume in USD
    #[arg(long)]
    pub(crate) tx_volume_30d: Option<f64>,
    /// Number of past loan defaults
    #[arg(long)]
    pub(crate) past_defaults: Option<u32>,
    /// Print the stored assessment as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the collections escalation portion of the demo
    #[arg(long)]
    pub(crate) skip_collections: bool,
    /// Print the full per-feature breakdown for each scored sample
    #[arg(long)]
    pub(crate) include_breakdown: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let service = UnderwritingService::new(repository, default_scoring_config());

    let request = ScoreRequest {
        borrower_wallet: args.borrower_wallet,
        debtor_tax_id: None,
        invoice_amount: args.invoice_amount,
        payment_term_days: args.payment_term_days,
        debtor_business_age_months: args.debtor_business_age_months,
        osint_score: args.osint_score,
        wallet_age_days: args.wallet_age_days,
        tx_volume_30d: args.tx_volume_30d,
        past_defaults: args.past_defaults,
    };

    let record = match service.assess(request) {
        Ok(record) => record,
        Err(err) => {
            println!("Request rejected: {err}");
            return Ok(());
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&record.view()) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Assessment payload unavailable: {err}"),
        }
        return Ok(());
    }

    print_assessment(&record, true);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Credit decisioning demo");

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let service = UnderwritingService::new(repository, default_scoring_config());

    println!("\nScoring a strong borrower profile");
    match service.assess(sample_request(24)) {
        Ok(record) => print_assessment(&record, args.include_breakdown),
        Err(err) => println!("  Submission rejected: {err}"),
    }

    println!("\nScoring the same profile with a 3-month-old business");
    match service.assess(sample_request(3)) {
        Ok(record) => print_assessment(&record, args.include_breakdown),
        Err(err) => println!("  Submission rejected: {err}"),
    }

    if args.skip_collections {
        return Ok(());
    }

    println!("\nCollections escalation walkthrough");
    let dispatcher = Arc::new(SimulatedDispatcher::new(None));
    let collections = CollectionsService::new(dispatcher.clone());
    let mut state = EscalationState::new();

    // Three days before due, the due date itself, then deep overdue; the
    // final call shows the level holding steady after a payment correction.
    for days_overdue in [-3_i64, 0, 8, -5] {
        let command = EscalateCommand {
            loan_id: "loan-demo-001".to_string(),
            current_level: state.level,
            days_overdue,
            borrower_email: "finance@debtor.example".to_string(),
            borrower_phone: Some("+14155550142".to_string()),
            amount_owed: 58_000.0,
            currency: "USD".to_string(),
            borrower_name: Some("Dana Ortiz".to_string()),
            company_name: Some("Mekong Textiles Ltd".to_string()),
        };

        let report = match collections.escalate(command) {
            Ok(report) => report,
            Err(err) => {
                println!("  Escalation rejected: {err}");
                continue;
            }
        };
        state.observe(report.level);

        println!(
            "- days_overdue {days_overdue:>3} -> level {} ({})",
            u8::from(report.level),
            report.level.label()
        );
        for action in &report.actions_taken {
            let recipient = action.recipient.as_deref().unwrap_or("-");
            println!(
                "    action {:?} [{:?}] recipient {recipient}",
                action.kind, action.status
            );
        }
        if let Some(preview) = &report.next_escalation {
            println!(
                "    next: level {} at {}",
                u8::from(preview.level),
                preview.trigger
            );
        }
    }

    println!(
        "\nNotifications recorded by the simulated dispatcher: {}",
        dispatcher.deliveries().len()
    );

    Ok(())
}

fn sample_request(debtor_business_age_months: u32) -> ScoreRequest {
    ScoreRequest {
        borrower_wallet: "0x77aa01dd".to_string(),
        debtor_tax_id: Some("0312345678".to_string()),
        invoice_amount: 40_000.0,
        payment_term_days: 30,
        debtor_business_age_months,
        osint_score: Some(90.0),
        wallet_age_days: Some(365),
        tx_volume_30d: Some(120_000.0),
        past_defaults: Some(0),
    }
}

fn print_assessment(
    record: &factorflow::workflows::underwriting::AssessmentRecord,
    include_breakdown: bool,
) {
    println!(
        "- {} -> score {} | tier {} | LTV {}% | rate {}% | approved {}",
        record.assessment_id.0,
        record.result.total_score,
        record.result.tier.label(),
        record.result.ltv,
        record.result.interest_rate,
        record.result.is_approved
    );
    println!("  {}", record.result.recommendation);

    if include_breakdown {
        for (kind, feature) in &record.result.breakdown {
            println!(
                "    {:<20} score {:>6.2} x {:>2}% = {:>5.2} ({})",
                kind.name(),
                feature.score,
                feature.weight,
                feature.weighted,
                feature.description
            );
        }
    }
}
