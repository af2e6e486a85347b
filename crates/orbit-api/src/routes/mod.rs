//! Route modules organized by bounded context.

pub mod accounts;
pub mod health;
pub mod notifications;
