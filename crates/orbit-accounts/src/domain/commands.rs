//! Commands for the accounts context.

use orbit_core::command::Command;
use uuid::Uuid;

/// Command to delete a user account.
#[derive(Debug, Clone)]
pub struct DeleteAccount {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The account to delete.
    pub account_id: String,
}

impl Command for DeleteAccount {
    fn command_type(&self) -> &'static str {
        "accounts.delete_account"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
