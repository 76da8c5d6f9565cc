//! Contact record builder.
//!
//! A [`ContactRecord`] collects the fields of a single contact through
//! chainable setters and is then handed to a
//! [`VcfRenderer`](crate::build::VcfRenderer). Nothing is validated when a
//! field is set; callers that care use the helpers in
//! [`validate`](crate::validate) first.
//!
//! ```rust
//! use cardzen_vcard::ContactRecord;
//!
//! let mut record = ContactRecord::new();
//! record
//!     .set_full_name("Jane Doe")
//!     .set_phone_number("+1 555 123 4567", "mobile")
//!     .set_linkedin("https://linkedin.com/in/janedoe");
//!
//! assert!(record.render_text().contains("TEL;TYPE=MOBILE:+15551234567"));
//! ```

mod attributes;
mod social;

pub use social::{SocialLinks, SocialPlatform};

use serde::{Deserialize, Serialize};

use crate::build::{DownloadResponse, VcfRenderer};

/// A value paired with its free-form type label (e.g. `HOME`, `WORK`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedValue {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TypedValue {
    #[must_use]
    pub fn new(value: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: kind.into(),
        }
    }
}

/// Fields of a single contact, in the order they are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    full_name: Option<String>,
    title: Option<String>,
    company: Option<String>,
    description: Option<String>,
    phones: Vec<TypedValue>,
    emails: Vec<TypedValue>,
    address: Option<String>,
    social: SocialLinks,
    profile_image: Option<String>,
}

impl ContactRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) -> &mut Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_company(&mut self, company: impl Into<String>) -> &mut Self {
        self.company = Some(company.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the profile image path. The file is only looked up when rendering.
    pub fn set_profile_image(&mut self, path: impl Into<String>) -> &mut Self {
        self.profile_image = Some(path.into());
        self
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> &mut Self {
        self.address = Some(address.into());
        self
    }

    /// Appends a phone number.
    pub fn set_phone_number(
        &mut self,
        phone: impl Into<String>,
        kind: impl Into<String>,
    ) -> &mut Self {
        self.phones.push(TypedValue::new(phone, kind));
        self
    }

    /// Appends an email address.
    pub fn set_email(&mut self, email: impl Into<String>, kind: impl Into<String>) -> &mut Self {
        self.emails.push(TypedValue::new(email, kind));
        self
    }

    pub fn set_social(&mut self, platform: SocialPlatform, url: impl Into<String>) -> &mut Self {
        self.social.insert(platform, url.into());
        self
    }

    pub fn set_facebook(&mut self, url: impl Into<String>) -> &mut Self {
        self.set_social(SocialPlatform::Facebook, url)
    }

    pub fn set_twitter(&mut self, url: impl Into<String>) -> &mut Self {
        self.set_social(SocialPlatform::Twitter, url)
    }

    pub fn set_linkedin(&mut self, url: impl Into<String>) -> &mut Self {
        self.set_social(SocialPlatform::Linkedin, url)
    }

    pub fn set_youtube(&mut self, url: impl Into<String>) -> &mut Self {
        self.set_social(SocialPlatform::Youtube, url)
    }

    pub fn set_instagram(&mut self, url: impl Into<String>) -> &mut Self {
        self.set_social(SocialPlatform::Instagram, url)
    }

    pub fn set_website(&mut self, url: impl Into<String>) -> &mut Self {
        self.set_social(SocialPlatform::Website, url)
    }

    pub fn set_skype(&mut self, url: impl Into<String>) -> &mut Self {
        self.set_social(SocialPlatform::Skype, url)
    }

    /// Sets the WhatsApp number; it is rendered as a `wa.me` link.
    pub fn set_whatsapp(&mut self, number: impl Into<String>) -> &mut Self {
        self.set_social(SocialPlatform::Whatsapp, number)
    }

    /// ## Summary
    /// Resets every field to its empty default. The record stays usable.
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    #[must_use]
    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    #[must_use]
    pub fn phones(&self) -> &[TypedValue] {
        &self.phones
    }

    #[must_use]
    pub fn emails(&self) -> &[TypedValue] {
        &self.emails
    }

    #[must_use]
    pub fn social(&self) -> &SocialLinks {
        &self.social
    }

    /// Renders with the default renderer (filesystem photos, default options).
    #[must_use]
    pub fn render_text(&self) -> String {
        VcfRenderer::default().render_text(self)
    }

    #[must_use]
    pub fn to_base64(&self) -> String {
        VcfRenderer::default().to_base64(self)
    }

    #[must_use]
    pub fn to_data_uri(&self) -> String {
        VcfRenderer::default().to_data_uri(self)
    }

    #[must_use]
    pub fn to_download_response(&self) -> DownloadResponse {
        VcfRenderer::default().to_download_response(self)
    }
}
