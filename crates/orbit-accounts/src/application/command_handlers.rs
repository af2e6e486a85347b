//! Command handlers for the accounts context.

use orbit_core::command::Command;
use orbit_core::delivery::DeliveryClient;
use orbit_core::error::DomainError;

use crate::domain::commands::DeleteAccount;

/// Handles the `DeleteAccount` command: validates the account id and
/// forwards the deletion to the user-management backend.
///
/// Validation runs before any backend call, so an empty account id never
/// reaches the delivery client.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the account id is empty, and
/// `DomainError::Delivery` if the backend rejects the deletion.
pub async fn handle_delete_account(
    command: &DeleteAccount,
    client: &dyn DeliveryClient,
) -> Result<(), DomainError> {
    if command.account_id.is_empty() {
        return Err(DomainError::Validation(
            "account ID cannot be empty".to_owned(),
        ));
    }

    tracing::debug!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        account_id = %command.account_id,
        "deleting account"
    );

    client.delete_account(&command.account_id).await
}
