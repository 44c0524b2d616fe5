use serde::{Deserialize, Serialize};

/// Channel a notification goes out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Email,
    Sms,
}

/// Fully rendered notification handed to the delivery collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundNotification {
    pub channel: NotificationChannel,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Trait describing the outbound delivery hook (SMTP/SMS gateway adapters).
/// The escalation core only decides and renders; implementations transmit.
pub trait NotificationDispatcher: Send + Sync {
    fn dispatch(&self, notification: OutboundNotification) -> Result<(), DispatchError>;
}

/// Delivery failure reported by a dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
