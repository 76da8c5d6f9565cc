//! Download response for rendered cards.

use salvo::http::{HeaderValue, StatusCode};
use salvo::Response;
use salvo::writing::Scribe;

use cardzen_core::constants::{VCARD_CONTENT_TYPE, VCARD_FILE_EXTENSION};

/// Status, headers and body for serving a card as a file attachment.
///
/// The transmission itself is left to the HTTP layer through [`Scribe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResponse {
    status: StatusCode,
    headers: Vec<(&'static str, String)>,
    body: String,
}

impl DownloadResponse {
    /// ## Summary
    /// Builds a `200 OK` attachment response named after `full_name`.
    ///
    /// The filename is not escaped; callers supply a filesystem-safe name.
    #[must_use]
    pub fn attachment(body: String, full_name: &str) -> Self {
        Self {
            status: StatusCode::OK,
            headers: vec![
                ("Content-Type", VCARD_CONTENT_TYPE.to_string()),
                (
                    "Content-Disposition",
                    format!("attachment; filename=\"{full_name}{VCARD_FILE_EXTENSION}\""),
                ),
            ],
            body,
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the value of the named header, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Scribe for DownloadResponse {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);

        for (name, value) in &self.headers {
            // Non-ASCII names are sent as raw bytes rather than dropped
            match HeaderValue::from_bytes(value.as_bytes()) {
                Ok(header_value) => {
                    if let Err(e) = res.add_header(*name, header_value, true) {
                        tracing::warn!(header = %name, error = %e, "Failed to set header");
                    }
                }
                Err(e) => {
                    tracing::warn!(header = %name, error = %e, "Invalid header value");
                }
            }
        }

        if let Err(e) = res.write_body(self.body.into_bytes()) {
            tracing::error!("Failed to write response body: {}", e);
        }
    }
}
