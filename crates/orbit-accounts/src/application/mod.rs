//! Application layer for the accounts context.

pub mod command_handlers;
