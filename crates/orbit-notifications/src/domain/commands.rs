//! Commands for the notifications context.

use orbit_core::command::Command;
use orbit_core::delivery::PushMessage;
use uuid::Uuid;

use super::descriptor::EventDescriptor;

/// Command to send a push notification to a set of users.
#[derive(Debug, Clone)]
pub struct SendPush {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Notification title and body.
    pub message: PushMessage,
    /// Users the notification is addressed to.
    pub user_ids: Vec<String>,
    /// The event descriptor carried as the notification's custom data.
    pub data: EventDescriptor,
}

impl Command for SendPush {
    fn command_type(&self) -> &'static str {
        "notifications.send_push"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
