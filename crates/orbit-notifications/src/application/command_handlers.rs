//! Command handlers for the notifications context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: validate the command, project the event
//! descriptor, and hand the payload to the delivery client.

use orbit_core::command::Command;
use orbit_core::delivery::{DeliveryClient, PushReceipt};
use orbit_core::error::DomainError;
use uuid::Uuid;

use crate::domain::commands::SendPush;
use crate::domain::dispatch::Dispatcher;

/// Handles the `SendPush` command: validates the recipient list, projects
/// the descriptor into an outbound payload, and asks the delivery client to
/// create the push message under a fresh unique id.
///
/// A delivery failure is returned to the caller as an ordinary error; it
/// never terminates the process.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the recipient list is empty,
/// `DomainError::UnknownKind` / `DomainError::MissingVariantPayload` if the
/// descriptor is malformed, and `DomainError::Delivery` if the backend
/// rejects the message.
pub async fn handle_send_push(
    command: &SendPush,
    dispatcher: &Dispatcher,
    client: &dyn DeliveryClient,
) -> Result<PushReceipt, DomainError> {
    if command.user_ids.is_empty() {
        return Err(DomainError::Validation(
            "userIds must not be empty".to_owned(),
        ));
    }

    let payload = dispatcher.dispatch(&command.data)?;

    tracing::debug!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        kind = payload.kind(),
        recipients = command.user_ids.len(),
        "dispatched notification payload"
    );

    let message_id = Uuid::new_v4();
    client
        .create_push(message_id, &command.message, &command.user_ids, &payload)
        .await
}
