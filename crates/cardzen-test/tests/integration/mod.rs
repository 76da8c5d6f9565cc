//! Endpoint tests grouped by route.

mod export;
mod healthcheck;
mod validate;
