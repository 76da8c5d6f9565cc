//! Line template for contact cards.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::RenderOptions;
use super::photo::PhotoSource;
use crate::contact::{ContactRecord, SocialPlatform, TypedValue};

/// vCard version emitted on the `VERSION` line.
pub const VCARD_VERSION: &str = "4.0";

const WHATSAPP_LINK_PREFIX: &str = "https://wa.me/";

/// Renders `record` as newline-joined vCard lines.
///
/// Values are written verbatim: no escaping and no line folding.
pub(super) fn serialize_record(
    record: &ContactRecord,
    options: RenderOptions,
    photos: &dyn PhotoSource,
) -> String {
    // BEGIN:VCARD, then VERSION
    let mut lines = vec!["BEGIN:VCARD".to_string(), format!("VERSION:{VCARD_VERSION}")];

    if let Some(full_name) = present(record.full_name()) {
        // N carries the full name as-is; it is not split into components
        lines.push(format!("FN:{full_name}"));
        lines.push(format!("N:{full_name}"));
    }

    if let Some(title) = present(record.title()) {
        lines.push(format!("TITLE:{title}"));
        if options.emit_role {
            lines.push(format!("ROLE:{title}"));
        }
    }

    if let Some(company) = present(record.company()) {
        lines.push(format!("ORG:{company}"));
    }

    if let Some(description) = present(record.description()) {
        lines.push(format!("NOTE:{description}"));
    }

    for phone in record.phones() {
        lines.push(format!(
            "TEL;TYPE={}:{}",
            type_label(phone, options),
            strip_whitespace(&phone.value)
        ));
    }

    for email in record.emails() {
        lines.push(format!(
            "EMAIL;TYPE={}:{}",
            type_label(email, options),
            email.value
        ));
    }

    if let Some(address) = present(record.address()) {
        lines.push(format!("ADR:;;{address};;;"));
    }

    for (platform, url) in record.social().iter() {
        lines.push(social_line(platform, url));
    }

    if let Some(photo) = present(record.profile_image()).and_then(|p| photos.read_photo(p)) {
        lines.push(format!("PHOTO;TYPE=PNG;ENCODING=b:{}", STANDARD.encode(photo)));
    }

    // END:VCARD
    lines.push("END:VCARD".to_string());

    lines.join("\n")
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn type_label(entry: &TypedValue, options: RenderOptions) -> String {
    if options.uppercase_types {
        entry.kind.to_ascii_uppercase()
    } else {
        entry.kind.clone()
    }
}

fn social_line(platform: SocialPlatform, url: &str) -> String {
    match platform {
        SocialPlatform::Whatsapp => format!(
            "URL;TYPE={}:{WHATSAPP_LINK_PREFIX}{}",
            platform.type_label(),
            url.replace(' ', "")
        ),
        _ => format!("URL;TYPE={}:{url}", platform.type_label()),
    }
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
