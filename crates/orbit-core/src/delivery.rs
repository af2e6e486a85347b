//! Delivery client abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::payload::OutboundPayload;

/// Title and body of a push notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushMessage {
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
}

/// Receipt returned by the delivery backend for a sent push message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushReceipt {
    /// Backend-assigned message identifier.
    pub message_id: String,
    /// Notification title as accepted by the backend.
    pub title: String,
    /// Notification body as accepted by the backend.
    pub body: String,
    /// User ids the message was addressed to.
    pub user_ids: Vec<String>,
    /// Timestamp the backend recorded for the message.
    pub created_at: DateTime<Utc>,
}

/// Client trait for the external push-messaging and user-management backend.
///
/// The backend's authentication, endpoints, and delivery guarantees are
/// opaque to the domain; a failure is reported as `DomainError::Delivery`
/// and is never fatal to the process.
#[async_trait]
pub trait DeliveryClient: Send + Sync {
    /// Create a push message addressed to `user_ids`, carrying `payload` as
    /// the notification's custom data.
    async fn create_push(
        &self,
        message_id: Uuid,
        message: &PushMessage,
        user_ids: &[String],
        payload: &OutboundPayload,
    ) -> Result<PushReceipt, DomainError>;

    /// Delete the user account identified by `account_id`.
    async fn delete_account(&self, account_id: &str) -> Result<(), DomainError>;
}
