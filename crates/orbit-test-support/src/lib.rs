//! Shared test mocks and utilities for the Orbit backend.

mod delivery;

pub use delivery::{FailingDeliveryClient, RecordedPush, RecordingDeliveryClient};
