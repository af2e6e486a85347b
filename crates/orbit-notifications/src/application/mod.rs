//! Application layer for the notifications context.

pub mod command_handlers;
