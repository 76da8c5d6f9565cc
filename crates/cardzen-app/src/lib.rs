//! HTTP service exposing contact card generation.

pub mod app;
pub mod config;
pub mod error;
