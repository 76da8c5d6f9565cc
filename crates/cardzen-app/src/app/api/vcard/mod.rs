//! Contact card export endpoints.
//!
//! Every export endpoint takes the bulk attribute object as its JSON body.

mod export;
mod validate;

use salvo::Router;

use super::VCARD_ROUTE_COMPONENT;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(VCARD_ROUTE_COMPONENT)
        .push(Router::with_path("download").post(export::download))
        .push(Router::with_path("text").post(export::text))
        .push(Router::with_path("base64").post(export::base64))
        .push(Router::with_path("uri").post(export::uri))
        .push(Router::with_path("validate").post(validate::validate))
}
