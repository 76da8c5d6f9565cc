//! vCard rendering.
//!
//! [`VcfRenderer`] turns a [`ContactRecord`] into vCard text and the
//! encodings derived from it.
//!
//! ## Usage
//!
//! ```rust
//! use cardzen_vcard::{ContactRecord, NoPhotoSource, RenderOptions, VcfRenderer};
//!
//! let mut record = ContactRecord::new();
//! record.set_full_name("John Doe").set_email("john@example.com", "work");
//!
//! let renderer = VcfRenderer::new(RenderOptions::default()).with_photo_source(NoPhotoSource);
//! let text = renderer.render_text(&record);
//! assert!(text.starts_with("BEGIN:VCARD\nVERSION:4.0\n"));
//! assert!(text.contains("EMAIL;TYPE=WORK:john@example.com"));
//! ```
//!
//! ## Output
//!
//! - Fixed property order, one property per line, `\n` separated
//! - No escaping and no line folding
//! - `PHOTO` only when the [`PhotoSource`] yields bytes

mod download;
mod photo;
mod serializer;

pub use download::DownloadResponse;
pub use photo::{FsPhotoSource, NoPhotoSource, PhotoSource, ScopedPhotoSource};
pub use serializer::VCARD_VERSION;

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use cardzen_core::config::VcardConfig;
use cardzen_core::constants::VCARD_DATA_URI_PREFIX;

use crate::contact::ContactRecord;

/// Switches between the historical output variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit `ROLE` with the same value as `TITLE`.
    pub emit_role: bool,
    /// Upper-case `TEL` and `EMAIL` type labels.
    pub uppercase_types: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            emit_role: true,
            uppercase_types: true,
        }
    }
}

impl From<&VcardConfig> for RenderOptions {
    fn from(config: &VcardConfig) -> Self {
        Self {
            emit_role: config.emit_role,
            uppercase_types: config.uppercase_types,
        }
    }
}

/// Renders contact records. Shareable across threads.
pub struct VcfRenderer {
    options: RenderOptions,
    photos: Box<dyn PhotoSource>,
}

impl VcfRenderer {
    /// Creates a renderer that reads photos from the filesystem.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            photos: Box::new(FsPhotoSource),
        }
    }

    /// ## Summary
    /// Builds a renderer from configuration.
    ///
    /// Photos are resolved under `photo_dir` when it is set and disabled otherwise.
    #[must_use]
    pub fn from_config(config: &VcardConfig) -> Self {
        let renderer = Self::new(RenderOptions::from(config));
        match &config.photo_dir {
            Some(dir) => renderer.with_photo_source(ScopedPhotoSource::new(dir)),
            None => renderer.with_photo_source(NoPhotoSource),
        }
    }

    #[must_use]
    pub fn with_photo_source(mut self, photos: impl PhotoSource + 'static) -> Self {
        self.photos = Box::new(photos);
        self
    }

    #[must_use]
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    #[must_use]
    pub fn render_text(&self, record: &ContactRecord) -> String {
        serializer::serialize_record(record, self.options, self.photos.as_ref())
    }

    /// Standard base64 (padded, unwrapped) of the rendered text.
    #[must_use]
    pub fn to_base64(&self, record: &ContactRecord) -> String {
        STANDARD.encode(self.render_text(record))
    }

    /// ## Summary
    /// Returns a `data:` URI embedding the rendered text.
    ///
    /// Every byte outside the RFC 3986 unreserved set is percent-encoded,
    /// so spaces become `%20` and `+` becomes `%2B`.
    #[must_use]
    pub fn to_data_uri(&self, record: &ContactRecord) -> String {
        let text = self.render_text(record);
        format!("{VCARD_DATA_URI_PREFIX}{}", urlencoding::encode(&text))
    }

    #[must_use]
    pub fn to_download_response(&self, record: &ContactRecord) -> DownloadResponse {
        DownloadResponse::attachment(
            self.render_text(record),
            record.full_name().unwrap_or_default(),
        )
    }
}

impl Default for VcfRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl fmt::Debug for VcfRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VcfRenderer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
