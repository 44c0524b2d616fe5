use super::domain::{
    ActionKind, EscalationLevel, EscalationPreview, PlannedAction,
};
use super::ladder::EscalationLadder;

/// Outcome of one transition: the resolved level, the actions due there, and
/// a preview of the next rung when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct EscalationOutcome {
    pub previous_level: EscalationLevel,
    pub new_level: EscalationLevel,
    pub actions: Vec<PlannedAction>,
    pub next_escalation: Option<EscalationPreview>,
}

/// Monotonic escalation state machine driven by the ladder table.
///
/// `new_level = max(current, implied)`: once a level is reached it is never
/// reverted by a later call with a smaller days-overdue value, and repeated
/// calls at the ceiling re-derive the same action set.
pub struct EscalationStateMachine {
    ladder: EscalationLadder,
}

impl EscalationStateMachine {
    pub fn new(ladder: EscalationLadder) -> Self {
        Self { ladder }
    }

    pub fn standard() -> Self {
        Self::new(EscalationLadder::standard())
    }

    pub fn ladder(&self) -> &EscalationLadder {
        &self.ladder
    }

    pub fn escalate(
        &self,
        current_level: EscalationLevel,
        days_overdue: i64,
        phone_on_file: bool,
    ) -> EscalationOutcome {
        let implied = self.ladder.implied_level(days_overdue);
        let new_level = current_level.max(implied);

        let actions = self.planned_actions(new_level, phone_on_file);

        let next_escalation = new_level
            .next()
            .and_then(|next| self.ladder.step(next))
            .map(|step| EscalationPreview {
                level: step.level,
                trigger: step.trigger.to_string(),
                actions: self.planned_actions(step.level, phone_on_file),
            });

        EscalationOutcome {
            previous_level: current_level,
            new_level,
            actions,
            next_escalation,
        }
    }

    /// Actions due at a level. SMS is included only when a phone number is on
    /// file; the preview uses this same derivation so it mirrors the real
    /// transition exactly.
    fn planned_actions(&self, level: EscalationLevel, phone_on_file: bool) -> Vec<PlannedAction> {
        let Some(step) = self.ladder.step(level) else {
            return Vec::new();
        };

        step.actions
            .iter()
            .copied()
            .filter(|kind| *kind != ActionKind::NotifySms || phone_on_file)
            .map(|kind| PlannedAction {
                kind,
                recipient_required: kind.requires_recipient(),
            })
            .collect()
    }
}
