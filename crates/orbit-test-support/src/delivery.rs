//! Test delivery clients — mock `DeliveryClient` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::TimeZone;
use orbit_core::delivery::{DeliveryClient, PushMessage, PushReceipt};
use orbit_core::error::DomainError;
use orbit_core::payload::OutboundPayload;
use uuid::Uuid;

/// A push request as observed by [`RecordingDeliveryClient`].
#[derive(Debug, Clone)]
pub struct RecordedPush {
    /// The unique message id the caller assigned.
    pub message_id: Uuid,
    /// Title and body of the notification.
    pub message: PushMessage,
    /// Recipient user ids.
    pub user_ids: Vec<String>,
    /// The projected notification payload.
    pub payload: OutboundPayload,
}

/// A delivery client that records every call and always succeeds. Push
/// receipts echo the request under a fixed timestamp so assertions stay
/// deterministic.
#[derive(Debug, Default)]
pub struct RecordingDeliveryClient {
    pushes: Mutex<Vec<RecordedPush>>,
    deletions: Mutex<Vec<String>>,
}

impl RecordingDeliveryClient {
    /// Create a new recording client with no observed calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all push requests observed so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn pushes(&self) -> Vec<RecordedPush> {
        self.pushes.lock().unwrap().clone()
    }

    /// Returns a snapshot of all account ids passed to `delete_account`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn deletions(&self) -> Vec<String> {
        self.deletions.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryClient for RecordingDeliveryClient {
    async fn create_push(
        &self,
        message_id: Uuid,
        message: &PushMessage,
        user_ids: &[String],
        payload: &OutboundPayload,
    ) -> Result<PushReceipt, DomainError> {
        self.pushes.lock().unwrap().push(RecordedPush {
            message_id,
            message: message.clone(),
            user_ids: user_ids.to_vec(),
            payload: payload.clone(),
        });

        Ok(PushReceipt {
            message_id: message_id.to_string(),
            title: message.title.clone(),
            body: message.body.clone(),
            user_ids: user_ids.to_vec(),
            created_at: chrono::Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        })
    }

    async fn delete_account(&self, account_id: &str) -> Result<(), DomainError> {
        self.deletions.lock().unwrap().push(account_id.to_owned());
        Ok(())
    }
}

/// A delivery client that always returns a delivery error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingDeliveryClient;

#[async_trait]
impl DeliveryClient for FailingDeliveryClient {
    async fn create_push(
        &self,
        _message_id: Uuid,
        _message: &PushMessage,
        _user_ids: &[String],
        _payload: &OutboundPayload,
    ) -> Result<PushReceipt, DomainError> {
        Err(DomainError::Delivery("connection refused".into()))
    }

    async fn delete_account(&self, _account_id: &str) -> Result<(), DomainError> {
        Err(DomainError::Delivery("connection refused".into()))
    }
}
