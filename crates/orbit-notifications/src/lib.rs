//! Orbit — push-notification dispatch bounded context.
//!
//! Responsible for validating inbound event descriptors and projecting
//! them into backend-ready notification payloads.

pub mod application;
pub mod domain;
