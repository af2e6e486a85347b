//! Wire types for inbound push-notification events.

use serde::{Deserialize, Serialize};

/// Variant payload for a new chat message notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessageData {
    /// Message identifier.
    pub id: String,
    /// User who sent the message.
    pub sent_by_user_id: String,
    /// User the message is addressed to.
    pub receiver_user_id: String,
    /// Chat the message belongs to.
    pub chat_id: String,
}

/// Variant payload for a meetup approval notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetupRequestData {
    /// Meetup request identifier.
    pub id: String,
    /// User who created the meetup request.
    pub created_by_user_id: String,
    /// User who approved the request.
    pub approver_user_id: String,
}

/// Variant payload for a conversation-update notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationData {
    /// Conversation identifier.
    pub id: String,
    /// Display name of the receiving user.
    pub receiver_name: String,
    /// User who initiated the update.
    pub sender_id: String,
}

/// Discriminated-union event descriptor as received on the wire.
///
/// The wire format carries the kind tag alongside independently optional
/// variant fields, so "kind present but matching variant absent" is
/// representable here; the dispatcher rejects it at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDescriptor {
    /// The kind tag selecting which variant this descriptor represents.
    #[serde(rename = "type")]
    pub kind: String,
    /// Variant for the `newMessage` kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_message: Option<NewMessageData>,
    /// Variant for the `meetupApproved` kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meetup_request: Option<MeetupRequestData>,
    /// Variant for the `newMeetupRequest` kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Variant for the `requestApproved` kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_deserializes_wire_json() {
        let descriptor: EventDescriptor = serde_json::from_value(json!({
            "type": "newMessage",
            "newMessage": {
                "id": "m1",
                "sentByUserId": "u1",
                "receiverUserId": "u2",
                "chatId": "c1"
            }
        }))
        .unwrap();

        assert_eq!(descriptor.kind, "newMessage");
        let message = descriptor.new_message.unwrap();
        assert_eq!(message.id, "m1");
        assert_eq!(message.sent_by_user_id, "u1");
        assert_eq!(message.receiver_user_id, "u2");
        assert_eq!(message.chat_id, "c1");
        assert!(descriptor.meetup_request.is_none());
        assert!(descriptor.conversation.is_none());
    }

    #[test]
    fn test_descriptor_tolerates_absent_variants() {
        let descriptor: EventDescriptor =
            serde_json::from_value(json!({ "type": "meetupApproved", "meetupRequest": null }))
                .unwrap();

        assert_eq!(descriptor.kind, "meetupApproved");
        assert!(descriptor.meetup_request.is_none());
    }
}
