//! Collections escalation: the overdue-loan notification ladder.
//!
//! The state machine computes `max(current, implied)` over a fixed four-rung
//! ladder and reports which actions are due; rendering and delivery are
//! separate stages connected by the `ActionRecord` contract.

pub mod dispatch;
pub mod domain;
mod ladder;
mod machine;
pub mod notices;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use dispatch::{
    DispatchError, NotificationChannel, NotificationDispatcher, OutboundNotification,
};
pub use domain::{
    ActionKind, ActionRecord, ActionStatus, EscalateCommand, EscalationLevel, EscalationPreview,
    EscalationReport, EscalationState, InvalidLevelError, NoticeTone, PlannedAction,
};
pub use ladder::{EscalationLadder, EscalationStep};
pub use machine::{EscalationOutcome, EscalationStateMachine};
pub use router::collections_router;
pub use service::{CollectionsError, CollectionsService};
