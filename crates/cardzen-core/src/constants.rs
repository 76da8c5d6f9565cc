/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";

pub const VCARD_ROUTE_COMPONENT: &str = "vcard";

/// MIME type used for downloads and data URIs.
pub const VCARD_CONTENT_TYPE: &str = "text/x-vcard";

/// Prefix of every vCard data URI; the percent-encoded card follows it.
pub const VCARD_DATA_URI_PREFIX: &str =
    const_str::concat!("data:", VCARD_CONTENT_TYPE, ";charset=utf-8,");

/// Extension appended to the full name in download filenames.
pub const VCARD_FILE_EXTENSION: &str = ".vcf";
