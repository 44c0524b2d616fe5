use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position on the collections notification ladder, 0 through 4.
///
/// Level 0 means no escalation has fired yet; level 4 is the ceiling. The
/// wire representation is the bare integer, and anything outside 0-4 is
/// rejected at deserialization rather than clamped.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum EscalationLevel {
    #[default]
    NotEscalated,
    FriendlyReminder,
    UrgentNotice,
    FinalWarning,
    Liquidation,
}

impl EscalationLevel {
    pub const fn label(self) -> &'static str {
        match self {
            EscalationLevel::NotEscalated => "Not Escalated",
            EscalationLevel::FriendlyReminder => "Friendly Reminder",
            EscalationLevel::UrgentNotice => "Urgent Notice",
            EscalationLevel::FinalWarning => "Final Warning",
            EscalationLevel::Liquidation => "Liquidation",
        }
    }

    pub const fn next(self) -> Option<EscalationLevel> {
        match self {
            EscalationLevel::NotEscalated => Some(EscalationLevel::FriendlyReminder),
            EscalationLevel::FriendlyReminder => Some(EscalationLevel::UrgentNotice),
            EscalationLevel::UrgentNotice => Some(EscalationLevel::FinalWarning),
            EscalationLevel::FinalWarning => Some(EscalationLevel::Liquidation),
            EscalationLevel::Liquidation => None,
        }
    }
}

impl From<EscalationLevel> for u8 {
    fn from(level: EscalationLevel) -> Self {
        match level {
            EscalationLevel::NotEscalated => 0,
            EscalationLevel::FriendlyReminder => 1,
            EscalationLevel::UrgentNotice => 2,
            EscalationLevel::FinalWarning => 3,
            EscalationLevel::Liquidation => 4,
        }
    }
}

impl TryFrom<u8> for EscalationLevel {
    type Error = InvalidLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EscalationLevel::NotEscalated),
            1 => Ok(EscalationLevel::FriendlyReminder),
            2 => Ok(EscalationLevel::UrgentNotice),
            3 => Ok(EscalationLevel::FinalWarning),
            4 => Ok(EscalationLevel::Liquidation),
            other => Err(InvalidLevelError(other)),
        }
    }
}

/// Caller supplied an escalation level outside the 0-4 ladder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("escalation level must be between 0 and 4, found {0}")]
pub struct InvalidLevelError(pub u8);

/// Caller-persisted escalation history for one loan. The level only ever
/// advances; a later call with a smaller days-overdue value never regresses
/// it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationState {
    pub level: EscalationLevel,
}

impl EscalationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly computed level, returning whether the state advanced.
    pub fn observe(&mut self, new_level: EscalationLevel) -> bool {
        if new_level > self.level {
            self.level = new_level;
            true
        } else {
            false
        }
    }
}

/// Actions a level can require. The core decides which are due; executing
/// them belongs to the dispatch and marketplace collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    NotifyEmail,
    NotifySms,
    ListCollateralForAuction,
    TriggerLiquidation,
}

impl ActionKind {
    pub const fn label(self) -> &'static str {
        match self {
            ActionKind::NotifyEmail => "email notification",
            ActionKind::NotifySms => "SMS notification",
            ActionKind::ListCollateralForAuction => "list collateral for auction",
            ActionKind::TriggerLiquidation => "trigger liquidation",
        }
    }

    pub const fn requires_recipient(self) -> bool {
        matches!(self, ActionKind::NotifyEmail | ActionKind::NotifySms)
    }
}

/// Delivery status of an executed action, set by the dispatch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Sent,
    Pending,
    Failed,
}

/// An action the state machine deems due at a level, before any dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedAction {
    pub kind: ActionKind,
    pub recipient_required: bool,
}

/// One executed (or deferred) action emitted by an escalation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub kind: ActionKind,
    pub status: ActionStatus,
    pub recipient: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Inbound escalation request: current level plus overdue timing, with the
/// contact and loan details the notice rendering needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalateCommand {
    pub loan_id: String,
    #[serde(default)]
    pub current_level: EscalationLevel,
    #[serde(default)]
    pub days_overdue: i64,
    pub borrower_email: String,
    #[serde(default)]
    pub borrower_phone: Option<String>,
    pub amount_owed: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub borrower_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl EscalateCommand {
    /// Preferred display name for notices: company first, then borrower.
    pub fn display_name(&self) -> &str {
        self.company_name
            .as_deref()
            .or(self.borrower_name.as_deref())
            .unwrap_or("Valued Customer")
    }
}

/// Escalation outcome returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationReport {
    pub loan_id: String,
    pub level: EscalationLevel,
    pub actions_taken: Vec<ActionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_escalation: Option<EscalationPreview>,
    pub message: String,
}

/// What the next rung of the ladder will do, mirrored from the same table
/// that drives the real transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationPreview {
    pub level: EscalationLevel,
    pub trigger: String,
    pub actions: Vec<PlannedAction>,
}

/// Tone applied when rendering the notice for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeTone {
    Friendly,
    Urgent,
    FinalWarning,
    Liquidation,
}
