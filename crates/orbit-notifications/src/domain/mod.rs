//! Domain types for the notifications context.

pub mod commands;
pub mod descriptor;
pub mod dispatch;
