//! Shared configuration, errors and constants for the `CardZen` workspace.

pub mod config;
pub mod constants;
pub mod error;
