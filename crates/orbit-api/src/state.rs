//! Shared application state.

use std::sync::Arc;

use orbit_core::delivery::DeliveryClient;
use orbit_notifications::domain::dispatch::Dispatcher;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the push-messaging and user-management backend.
    pub delivery: Arc<dyn DeliveryClient>,
    /// Registry of event kinds and their projection rules.
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(delivery: Arc<dyn DeliveryClient>, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            delivery,
            dispatcher,
        }
    }
}
