//! Kind-tagged dispatch from event descriptors to outbound payloads.
//!
//! Each registered kind owns one [`KindProjection`] entry in a dispatch
//! table. Adding a kind means registering a new entry; no existing entry
//! is touched.

use std::collections::HashMap;

use orbit_core::error::DomainError;
use orbit_core::payload::OutboundPayload;
use serde_json::Value;

use super::descriptor::EventDescriptor;

/// Projection rule for one registered event kind.
///
/// An implementation names the descriptor field its kind requires and
/// extracts it as a JSON value. Projection is structural copy: no field is
/// renamed, reshaped, or defaulted.
pub trait KindProjection: Send + Sync {
    /// The kind tag this projection handles.
    fn kind(&self) -> &'static str;

    /// The descriptor field this kind requires.
    fn required_field(&self) -> &'static str;

    /// Extracts the variant from the descriptor, or `None` if it is absent.
    fn project(&self, descriptor: &EventDescriptor) -> Option<Value>;
}

struct NewMessage;

impl KindProjection for NewMessage {
    fn kind(&self) -> &'static str {
        "newMessage"
    }

    fn required_field(&self) -> &'static str {
        "newMessage"
    }

    fn project(&self, descriptor: &EventDescriptor) -> Option<Value> {
        descriptor.new_message.as_ref().map(|data| {
            serde_json::to_value(data).expect("NewMessageData serialization is infallible")
        })
    }
}

struct MeetupApproved;

impl KindProjection for MeetupApproved {
    fn kind(&self) -> &'static str {
        "meetupApproved"
    }

    fn required_field(&self) -> &'static str {
        "meetupRequest"
    }

    fn project(&self, descriptor: &EventDescriptor) -> Option<Value> {
        descriptor.meetup_request.as_ref().map(|data| {
            serde_json::to_value(data).expect("MeetupRequestData serialization is infallible")
        })
    }
}

struct NewMeetupRequest;

impl KindProjection for NewMeetupRequest {
    fn kind(&self) -> &'static str {
        "newMeetupRequest"
    }

    fn required_field(&self) -> &'static str {
        "requestId"
    }

    fn project(&self, descriptor: &EventDescriptor) -> Option<Value> {
        descriptor
            .request_id
            .as_ref()
            .filter(|id| !id.is_empty())
            .map(|id| Value::String(id.clone()))
    }
}

struct RequestApproved;

impl KindProjection for RequestApproved {
    fn kind(&self) -> &'static str {
        "requestApproved"
    }

    fn required_field(&self) -> &'static str {
        "conversation"
    }

    fn project(&self, descriptor: &EventDescriptor) -> Option<Value> {
        descriptor.conversation.as_ref().map(|data| {
            serde_json::to_value(data).expect("ConversationData serialization is infallible")
        })
    }
}

/// Dispatch table mapping kind tags to their projection rules.
///
/// Stateless after construction and safe to share across concurrent
/// requests.
pub struct Dispatcher {
    projections: HashMap<&'static str, Box<dyn KindProjection>>,
}

impl Dispatcher {
    /// Creates an empty dispatcher with no registered kinds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            projections: HashMap::new(),
        }
    }

    /// Creates a dispatcher with every kind the Orbit app sends registered.
    #[must_use]
    pub fn with_default_kinds() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(Box::new(NewMessage));
        dispatcher.register(Box::new(MeetupApproved));
        dispatcher.register(Box::new(NewMeetupRequest));
        dispatcher.register(Box::new(RequestApproved));
        dispatcher
    }

    /// Registers a projection for its kind, replacing any previous entry
    /// for the same tag.
    pub fn register(&mut self, projection: Box<dyn KindProjection>) {
        self.projections.insert(projection.kind(), projection);
    }

    /// Returns the registered kind tags.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.projections.keys().copied()
    }

    /// Validates the descriptor's active variant and projects it into an
    /// [`OutboundPayload`] carrying the variant's full field set plus the
    /// kind tag. Pure function of its input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownKind` if the tag matches no registered
    /// kind, and `DomainError::MissingVariantPayload` if the tag is known
    /// but its required variant field is absent.
    pub fn dispatch(&self, descriptor: &EventDescriptor) -> Result<OutboundPayload, DomainError> {
        let projection = self
            .projections
            .get(descriptor.kind.as_str())
            .ok_or_else(|| DomainError::UnknownKind(descriptor.kind.clone()))?;

        let variant =
            projection
                .project(descriptor)
                .ok_or_else(|| DomainError::MissingVariantPayload {
                    kind: descriptor.kind.clone(),
                    field: projection.required_field(),
                })?;

        Ok(OutboundPayload::new(
            &descriptor.kind,
            projection.required_field(),
            variant,
        ))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::with_default_kinds()
    }
}
