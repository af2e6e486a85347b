//! Routes for the accounts context.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Json, Router, routing::post};
use orbit_accounts::application::command_handlers::handle_delete_account;
use orbit_accounts::domain::commands::DeleteAccount;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the delete-account endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountRequest {
    /// The account to delete.
    #[serde(default)]
    pub account_id: String,
}

/// Response body for a successful account deletion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountResponse {
    /// Whether the account was deleted.
    pub deleted: bool,
    /// The deleted account id.
    pub account_id: String,
}

/// POST /api/v1/accounts/delete
async fn delete_account(
    State(state): State<AppState>,
    body: Result<Json<DeleteAccountRequest>, JsonRejection>,
) -> Result<Json<DeleteAccountResponse>, ApiError> {
    let Json(request) = body?;

    let command = DeleteAccount {
        correlation_id: Uuid::new_v4(),
        account_id: request.account_id,
    };

    handle_delete_account(&command, state.delivery.as_ref()).await?;

    tracing::info!(account_id = %command.account_id, "account deleted");

    Ok(Json(DeleteAccountResponse {
        deleted: true,
        account_id: command.account_id,
    }))
}

/// Returns the router for the accounts context.
pub fn router() -> Router<AppState> {
    Router::new().route("/delete", post(delete_account))
}
