use std::sync::Arc;

use chrono::{Duration, Utc};

use super::domain::{
    ActionKind, ActionRecord, ActionStatus, EscalateCommand, EscalationReport,
};
use super::dispatch::{NotificationChannel, NotificationDispatcher, OutboundNotification};
use super::ladder::EscalationLadder;
use super::machine::EscalationStateMachine;
use super::notices::{self, NoticeContext};

/// Service composing the state machine, notice rendering, and the delivery
/// collaborator. The machine decides, `notices` renders, the dispatcher
/// delivers; each stage stays independently testable.
pub struct CollectionsService<D> {
    machine: EscalationStateMachine,
    dispatcher: Arc<D>,
}

impl<D> CollectionsService<D>
where
    D: NotificationDispatcher + 'static,
{
    pub fn new(dispatcher: Arc<D>) -> Self {
        Self::with_machine(EscalationStateMachine::standard(), dispatcher)
    }

    pub fn with_machine(machine: EscalationStateMachine, dispatcher: Arc<D>) -> Self {
        Self { machine, dispatcher }
    }

    pub fn ladder(&self) -> &EscalationLadder {
        self.machine.ladder()
    }

    /// Run one escalation cycle: resolve the level, render the notice, hand
    /// notifications to the dispatcher, and report every action with its
    /// status. Dispatch failures are recorded as failed actions, never
    /// raised, so the decision itself is always returned whole.
    pub fn escalate(
        &self,
        command: EscalateCommand,
    ) -> Result<EscalationReport, CollectionsError> {
        if command.borrower_email.trim().is_empty() {
            return Err(CollectionsError::MissingBorrowerEmail);
        }
        if !command.amount_owed.is_finite() || command.amount_owed < 0.0 {
            return Err(CollectionsError::InvalidAmountOwed(command.amount_owed));
        }

        let phone_on_file = command
            .borrower_phone
            .as_deref()
            .is_some_and(|phone| !phone.trim().is_empty());

        let outcome =
            self.machine
                .escalate(command.current_level, command.days_overdue, phone_on_file);

        let step = self
            .machine
            .ladder()
            .step(outcome.new_level)
            .expect("escalation always resolves to a ladder step");

        let today = Utc::now().date_naive();
        let due_date = today - Duration::days(command.days_overdue);
        let context = NoticeContext {
            display_name: command.display_name(),
            amount_owed: command.amount_owed,
            currency: &command.currency,
            due_date,
            days_overdue: command.days_overdue,
        };
        let notice = notices::render(step, &context);

        let mut actions_taken = Vec::with_capacity(outcome.actions.len());
        for planned in &outcome.actions {
            let record = match planned.kind {
                ActionKind::NotifyEmail => self.deliver(
                    planned.kind,
                    NotificationChannel::Email,
                    command.borrower_email.clone(),
                    notice.subject.clone(),
                    notice.body.clone(),
                ),
                ActionKind::NotifySms => {
                    let phone = command
                        .borrower_phone
                        .clone()
                        .expect("SMS is only planned when a phone is on file");
                    self.deliver(
                        planned.kind,
                        NotificationChannel::Sms,
                        phone,
                        notice.subject.clone(),
                        notices::sms_text(&context),
                    )
                }
                ActionKind::ListCollateralForAuction | ActionKind::TriggerLiquidation => {
                    // Execution is deferred to the marketplace collaborator.
                    ActionRecord {
                        kind: planned.kind,
                        status: ActionStatus::Pending,
                        recipient: None,
                        timestamp: Utc::now(),
                    }
                }
            };
            actions_taken.push(record);
        }

        let message = format!(
            "Escalation to Level {} ({}) completed",
            u8::from(outcome.new_level),
            step.name
        );

        Ok(EscalationReport {
            loan_id: command.loan_id,
            level: outcome.new_level,
            actions_taken,
            next_escalation: outcome.next_escalation,
            message,
        })
    }

    fn deliver(
        &self,
        kind: ActionKind,
        channel: NotificationChannel,
        recipient: String,
        subject: String,
        body: String,
    ) -> ActionRecord {
        let status = match self.dispatcher.dispatch(OutboundNotification {
            channel,
            recipient: recipient.clone(),
            subject,
            body,
        }) {
            Ok(()) => ActionStatus::Sent,
            Err(_) => ActionStatus::Failed,
        };

        ActionRecord {
            kind,
            status,
            recipient: Some(recipient),
            timestamp: Utc::now(),
        }
    }
}

/// Error raised by the collections service before any decision is made.
#[derive(Debug, thiserror::Error)]
pub enum CollectionsError {
    #[error("borrower email is required for escalation notices")]
    MissingBorrowerEmail,
    #[error("amount owed must be a non-negative number, got {0}")]
    InvalidAmountOwed(f64),
}
