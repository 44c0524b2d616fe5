use super::domain::{ActionKind, EscalationLevel, NoticeTone};

/// One rung of the collections ladder. `max_days_overdue` is the inclusive
/// upper bound on days-overdue that still maps to this level; the last rung
/// carries `None` and catches everything beyond it.
#[derive(Debug, Clone)]
pub struct EscalationStep {
    pub level: EscalationLevel,
    pub name: &'static str,
    pub trigger: &'static str,
    pub tone: NoticeTone,
    pub max_days_overdue: Option<i64>,
    pub actions: &'static [ActionKind],
}

/// The full notification ladder. Both the live transition and the
/// next-escalation preview read from this one table, so the two can never
/// disagree about triggers or action sets.
#[derive(Debug)]
pub struct EscalationLadder {
    steps: Vec<EscalationStep>,
}

impl EscalationLadder {
    pub fn standard() -> Self {
        Self {
            steps: standard_steps(),
        }
    }

    /// Level implied purely by timing, before the monotonicity rule applies.
    pub fn implied_level(&self, days_overdue: i64) -> EscalationLevel {
        for step in &self.steps {
            match step.max_days_overdue {
                Some(max) if days_overdue <= max => return step.level,
                Some(_) => continue,
                None => return step.level,
            }
        }
        EscalationLevel::Liquidation
    }

    pub fn step(&self, level: EscalationLevel) -> Option<&EscalationStep> {
        self.steps.iter().find(|step| step.level == level)
    }

    pub fn steps(&self) -> &[EscalationStep] {
        &self.steps
    }
}

fn standard_steps() -> Vec<EscalationStep> {
    vec![
        EscalationStep {
            level: EscalationLevel::FriendlyReminder,
            name: "Friendly Reminder",
            trigger: "3 days before due date",
            tone: NoticeTone::Friendly,
            max_days_overdue: Some(-3),
            actions: &[ActionKind::NotifyEmail],
        },
        EscalationStep {
            level: EscalationLevel::UrgentNotice,
            name: "Urgent Notice",
            trigger: "due date",
            tone: NoticeTone::Urgent,
            max_days_overdue: Some(0),
            actions: &[ActionKind::NotifyEmail, ActionKind::NotifySms],
        },
        EscalationStep {
            level: EscalationLevel::FinalWarning,
            name: "Final Warning",
            trigger: "7 days overdue",
            tone: NoticeTone::FinalWarning,
            max_days_overdue: Some(7),
            actions: &[
                ActionKind::NotifyEmail,
                ActionKind::ListCollateralForAuction,
            ],
        },
        EscalationStep {
            level: EscalationLevel::Liquidation,
            name: "Liquidation",
            trigger: "14 days overdue",
            tone: NoticeTone::Liquidation,
            max_days_overdue: None,
            actions: &[ActionKind::NotifyEmail, ActionKind::TriggerLiquidation],
        },
    ]
}
