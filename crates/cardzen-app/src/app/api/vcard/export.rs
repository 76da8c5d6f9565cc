//! Handlers rendering a contact from a JSON attribute body.

use std::sync::Arc;

use salvo::http::{HeaderValue, StatusCode};
use salvo::{Depot, Request, Response, handler};

use cardzen_core::constants::VCARD_CONTENT_TYPE;
use cardzen_vcard::{ContactRecord, VcfRenderer};

use crate::config::get_renderer_from_depot;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// ## Summary
/// Serves the card as a `.vcf` attachment named after the contact.
#[handler]
pub async fn download(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some((renderer, record)) = load_contact(req, depot, res).await else {
        return;
    };

    res.render(renderer.to_download_response(&record));
}

/// Serves the raw card text inline.
#[handler]
pub async fn text(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some((renderer, record)) = load_contact(req, depot, res).await else {
        return;
    };

    let content_type = format!("{VCARD_CONTENT_TYPE}; charset=utf-8");
    write_text(res, &content_type, renderer.render_text(&record));
}

/// Serves the base64 encoding of the card.
#[handler]
pub async fn base64(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some((renderer, record)) = load_contact(req, depot, res).await else {
        return;
    };

    write_text(res, TEXT_PLAIN, renderer.to_base64(&record));
}

/// Serves the card as a `data:` URI.
#[handler]
pub async fn uri(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some((renderer, record)) = load_contact(req, depot, res).await else {
        return;
    };

    write_text(res, TEXT_PLAIN, renderer.to_data_uri(&record));
}

/// ## Summary
/// Resolves the renderer and builds a record from the request body.
///
/// ## Side Effects
/// Sets `400 Bad Request` when the body is not a JSON object and
/// `500 Internal Server Error` when no renderer is available.
async fn load_contact(
    req: &mut Request,
    depot: &Depot,
    res: &mut Response,
) -> Option<(Arc<VcfRenderer>, ContactRecord)> {
    let renderer = match get_renderer_from_depot(depot) {
        Ok(renderer) => renderer,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get renderer");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return None;
        }
    };

    let body = match req.payload().await {
        Ok(bytes) => bytes.clone(),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to read request body");
            res.status_code(StatusCode::BAD_REQUEST);
            return None;
        }
    };

    let Ok(json) = std::str::from_utf8(&body) else {
        tracing::debug!("Request body is not valid UTF-8");
        res.status_code(StatusCode::BAD_REQUEST);
        return None;
    };

    match ContactRecord::from_json(json) {
        Ok(record) => {
            tracing::debug!(
                full_name = ?record.full_name(),
                phones = record.phones().len(),
                emails = record.emails().len(),
                social = record.social().len(),
                "Parsed contact attributes"
            );
            Some((renderer, record))
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected contact attributes");
            res.status_code(StatusCode::BAD_REQUEST);
            None
        }
    }
}

fn write_text(res: &mut Response, content_type: &str, body: String) {
    if let Ok(ct_value) = HeaderValue::from_str(content_type) {
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Header addition failure is non-fatal"
        )]
        let _ = res.add_header("Content-Type", ct_value, true);
    }

    res.status_code(StatusCode::OK);

    if let Err(e) = res.write_body(body.into_bytes()) {
        tracing::error!("Failed to write response body: {}", e);
    }
}
