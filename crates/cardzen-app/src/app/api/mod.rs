mod app_specific;
mod vcard;

use salvo::Router;

// Re-export route constants from core
pub use cardzen_core::constants::{API_ROUTE_COMPONENT, VCARD_ROUTE_COMPONENT};

/// ## Summary
/// Constructs the main API router with all handlers.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(vcard::routes())
}
