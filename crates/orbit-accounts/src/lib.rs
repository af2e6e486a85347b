//! Orbit — account management bounded context.
//!
//! Responsible for validating account-deletion requests and forwarding
//! them to the user-management backend.

pub mod application;
pub mod domain;
