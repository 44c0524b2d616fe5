use chrono::NaiveDate;

use super::domain::{EscalationLevel, NoticeTone};
use super::ladder::EscalationStep;

/// Loan facts a rendered notice interpolates. Everything is caller-supplied;
/// rendering performs no lookups and no delivery.
#[derive(Debug, Clone)]
pub struct NoticeContext<'a> {
    pub display_name: &'a str,
    pub amount_owed: f64,
    pub currency: &'a str,
    pub due_date: NaiveDate,
    pub days_overdue: i64,
}

/// Rendered message for one escalation level.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: EscalationLevel,
    pub tone: NoticeTone,
    pub subject: String,
    pub body: String,
}

/// Render the notice for a ladder step. Pure string assembly; delivery is
/// the dispatcher's concern.
pub fn render(step: &EscalationStep, context: &NoticeContext<'_>) -> Notice {
    let NoticeContext {
        display_name,
        amount_owed,
        currency,
        due_date,
        days_overdue,
    } = context;

    let (subject, body) = match step.tone {
        NoticeTone::Friendly => (
            "Payment reminder - FactorFlow".to_string(),
            format!(
                "Dear {display_name},\n\n\
                 This is a friendly reminder that your loan payment is coming due.\n\n\
                 LOAN DETAILS:\n\
                 - Amount due: {amount_owed:.2} {currency}\n\
                 - Due date: {due_date}\n\n\
                 Please make sure the payment arrives on time.\n\n\
                 Best regards,\n\
                 FactorFlow Team"
            ),
        ),
        NoticeTone::Urgent => (
            "URGENT: Loan payment due - FactorFlow".to_string(),
            format!(
                "Dear {display_name},\n\n\
                 This is an URGENT notice that your loan payment is now DUE.\n\n\
                 LOAN DETAILS:\n\
                 - Amount due: {amount_owed:.2} {currency}\n\
                 - Due date: {due_date}\n\n\
                 Please pay immediately to avoid overdue interest.\n\n\
                 Best regards,\n\
                 FactorFlow Team"
            ),
        ),
        NoticeTone::FinalWarning => (
            format!("FINAL WARNING: Loan {days_overdue} days overdue - FactorFlow"),
            format!(
                "Dear {display_name},\n\n\
                 This is the FINAL WARNING before collection proceedings begin.\n\n\
                 LOAN DETAILS:\n\
                 - Amount due: {amount_owed:.2} {currency}\n\
                 - Due date: {due_date}\n\
                 - Days overdue: {days_overdue}\n\n\
                 Your collateral will be listed for auction unless payment is \
                 received within 7 days.\n\n\
                 Best regards,\n\
                 FactorFlow Collections Team"
            ),
        ),
        NoticeTone::Liquidation => (
            "NOTICE OF COLLATERAL LIQUIDATION - FactorFlow".to_string(),
            format!(
                "Dear {display_name},\n\n\
                 Because the loan is {days_overdue} days overdue, we are required \
                 to LIQUIDATE the pledged collateral.\n\n\
                 LOAN DETAILS:\n\
                 - Amount due: {amount_owed:.2} {currency}\n\
                 - Days overdue: {days_overdue}\n\n\
                 The collateral is being sold at auction.\n\n\
                 Best regards,\n\
                 FactorFlow Legal & Collections"
            ),
        ),
    };

    Notice {
        level: step.level,
        tone: step.tone,
        subject,
        body,
    }
}

/// Compact single-line rendition for SMS delivery.
pub fn sms_text(context: &NoticeContext<'_>) -> String {
    format!(
        "FactorFlow: payment of {:.2} {} was due {}. Please pay immediately.",
        context.amount_owed, context.currency, context.due_date
    )
}
