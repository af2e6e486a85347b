//! Routes for the notifications context.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Json, Router, routing::post};
use orbit_core::delivery::{PushMessage, PushReceipt};
use orbit_notifications::application::command_handlers::handle_send_push;
use orbit_notifications::domain::commands::SendPush;
use orbit_notifications::domain::descriptor::EventDescriptor;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the send-push endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPushRequest {
    /// Notification title and body.
    pub message: PushMessage,
    /// Users the notification is addressed to.
    #[serde(default)]
    pub user_ids: Vec<String>,
    /// The event descriptor carried as the notification's custom data.
    pub data: EventDescriptor,
}

/// POST /api/v1/notifications/push
async fn send_push(
    State(state): State<AppState>,
    body: Result<Json<SendPushRequest>, JsonRejection>,
) -> Result<Json<PushReceipt>, ApiError> {
    let Json(request) = body?;

    let command = SendPush {
        correlation_id: Uuid::new_v4(),
        message: request.message,
        user_ids: request.user_ids,
        data: request.data,
    };

    let receipt = handle_send_push(&command, &state.dispatcher, state.delivery.as_ref()).await?;

    tracing::info!(
        message_id = %receipt.message_id,
        kind = %command.data.kind,
        recipients = receipt.user_ids.len(),
        "push notification sent"
    );

    Ok(Json(receipt))
}

/// Returns the router for the notifications context.
pub fn router() -> Router<AppState> {
    Router::new().route("/push", post(send_push))
}
