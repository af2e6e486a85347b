//! Appwrite REST client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use orbit_core::delivery::{DeliveryClient, PushMessage, PushReceipt};
use orbit_core::error::DomainError;
use orbit_core::payload::OutboundPayload;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

/// Connection settings for an Appwrite project.
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    /// Base URL of the Appwrite REST API, e.g. `https://cloud.appwrite.io/v1`.
    pub endpoint: String,
    /// Appwrite project identifier.
    pub project_id: String,
    /// Server API key with messaging and users scopes.
    pub api_key: String,
}

/// Message resource as returned by the Appwrite messaging API. Only the
/// fields the receipt needs are deserialized.
#[derive(Debug, Deserialize)]
struct MessageResource {
    #[serde(rename = "$id")]
    id: String,
    #[serde(rename = "$createdAt")]
    created_at: DateTime<Utc>,
    #[serde(default)]
    users: Vec<String>,
}

/// A `DeliveryClient` backed by the Appwrite REST API.
pub struct AppwriteClient {
    client: reqwest::Client,
    config: AppwriteConfig,
}

impl AppwriteClient {
    /// Creates a client for the given project.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed, which
    /// only happens when the TLS backend fails to initialize.
    #[must_use]
    pub fn new(mut config: AppwriteConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        config.endpoint = config.endpoint.trim_end_matches('/').to_owned();

        Self { client, config }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.endpoint)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("X-Appwrite-Project", &self.config.project_id)
            .header("X-Appwrite-Key", &self.config.api_key)
            .header("Content-Type", "application/json")
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, DomainError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(DomainError::Delivery(format!(
            "appwrite returned {status}: {message}"
        )))
    }
}

/// Builds the JSON body for the Appwrite create-push call.
fn push_body(
    message_id: Uuid,
    message: &PushMessage,
    user_ids: &[String],
    payload: &OutboundPayload,
) -> Value {
    json!({
        "messageId": message_id.to_string(),
        "title": message.title,
        "body": message.body,
        "users": user_ids,
        "data": payload.clone().into_value(),
    })
}

#[async_trait]
impl DeliveryClient for AppwriteClient {
    async fn create_push(
        &self,
        message_id: Uuid,
        message: &PushMessage,
        user_ids: &[String],
        payload: &OutboundPayload,
    ) -> Result<PushReceipt, DomainError> {
        let body = push_body(message_id, message, user_ids, payload);

        let response = self
            .authed(self.client.post(self.endpoint("/messaging/messages/push")))
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Delivery(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let resource: MessageResource = response
            .json()
            .await
            .map_err(|e| DomainError::Delivery(format!("invalid message response: {e}")))?;

        tracing::info!(message_id = %resource.id, "push message created");

        Ok(PushReceipt {
            message_id: resource.id,
            title: message.title.clone(),
            body: message.body.clone(),
            user_ids: if resource.users.is_empty() {
                user_ids.to_vec()
            } else {
                resource.users
            },
            created_at: resource.created_at,
        })
    }

    async fn delete_account(&self, account_id: &str) -> Result<(), DomainError> {
        let response = self
            .authed(
                self.client
                    .delete(self.endpoint(&format!("/users/{account_id}"))),
            )
            .send()
            .await
            .map_err(|e| DomainError::Delivery(e.to_string()))?;
        Self::check_status(response).await?;

        tracing::info!(%account_id, "account deleted");

        Ok(())
    }
}
