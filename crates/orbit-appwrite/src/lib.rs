//! Appwrite REST delivery client for the Orbit backend.
//!
//! Implements the `DeliveryClient` trait against the Appwrite messaging
//! and users APIs.

mod client;

pub use client::{AppwriteClient, AppwriteConfig};
