//! Domain types for the accounts context.

pub mod commands;
