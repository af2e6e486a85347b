//! Orbit Core — shared domain abstractions.
//!
//! This crate defines the fundamental types and traits that all bounded
//! contexts depend on. It contains no infrastructure code.

pub mod command;
pub mod delivery;
pub mod error;
pub mod payload;
