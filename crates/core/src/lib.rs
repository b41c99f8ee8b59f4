//! Shared types and domain errors for the escola service.

pub mod error;
pub mod types;
