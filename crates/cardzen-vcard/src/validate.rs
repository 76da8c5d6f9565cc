//! Optional input checks.
//!
//! Setters never call these; they exist for callers that want to reject input
//! before storing it.

use std::sync::LazyLock;

use regex::Regex;

const MAX_EMAIL_OCTETS: usize = 254;
const MAX_LOCAL_PART_OCTETS: usize = 64;

#[expect(clippy::expect_used, reason = "Pattern is a compile-time constant")]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@",
        r"(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+",
        // top-level label starts with a letter, so numeric hosts are rejected
        r"[A-Za-z](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    ))
    .expect("email pattern is valid")
});

#[expect(clippy::expect_used, reason = "Pattern is a compile-time constant")]
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\t\n\x0B\x0C\r ]+$").expect("phone pattern is valid"));

/// ## Summary
/// Returns true if `email` is a syntactically valid address.
///
/// Accepts a dot-atom local part of at most 64 octets and a dotted domain of
/// hostname labels whose last label starts with a letter, 254 octets in total.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_OCTETS {
        return false;
    }

    let Some((local, _)) = email.split_once('@') else {
        return false;
    };

    local.len() <= MAX_LOCAL_PART_OCTETS && EMAIL_PATTERN.is_match(email)
}

/// ## Summary
/// Returns true if `phone` is an optional leading `+` followed by digits and
/// ASCII whitespace.
#[must_use]
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}
