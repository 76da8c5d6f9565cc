//! Contact card (vCard) generation.
//!
//! ## Overview
//!
//! Contacts are collected in a [`ContactRecord`] through chainable setters or
//! a bulk JSON attribute map, then rendered by a [`VcfRenderer`] into vCard
//! 4.0 text. The text is available raw, as base64, as a `data:` URI, or as a
//! [`DownloadResponse`] ready to be written by `salvo`.
//!
//! ## Usage
//!
//! ```rust
//! use cardzen_vcard::ContactRecord;
//!
//! let mut record = ContactRecord::new();
//! record
//!     .set_full_name("Jane Doe")
//!     .set_email("jane@example.com", "work")
//!     .set_whatsapp("+1 555 000 1111");
//!
//! let text = record.render_text();
//! assert!(text.contains("URL;TYPE=WHATSAPP:https://wa.me/+15550001111"));
//! assert!(text.ends_with("END:VCARD"));
//! ```
//!
//! ## Submodules
//!
//! - [`contact`] - The record builder and bulk attribute setter
//! - [`build`] - Rendering, encodings, photo lookup and download response
//! - [`validate`] - Optional email and phone checks

pub mod build;
pub mod contact;
pub mod error;
pub mod validate;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{
    DownloadResponse, FsPhotoSource, NoPhotoSource, PhotoSource, RenderOptions,
    ScopedPhotoSource, VcfRenderer,
};
pub use contact::{ContactRecord, SocialLinks, SocialPlatform, TypedValue};
pub use error::{VcardError, VcardResult};
pub use validate::{is_valid_email, is_valid_phone_number};
