//! Bulk attribute assignment from JSON maps.

use serde_json::{Map, Value};

use super::{ContactRecord, SocialPlatform, TypedValue};
use crate::error::{VcardError, VcardResult};

impl ContactRecord {
    /// ## Summary
    /// Applies a map of attributes, dispatching each recognised key to its setter.
    ///
    /// Recognised keys are `full_name`, `title`, `company`, `description`,
    /// `address` and `profile_image` (strings), `phone` and `email` (arrays of
    /// `{"value", "type"}` objects) and `social` (an object of platform to URL).
    ///
    /// Unknown keys, unknown platforms and values of the wrong shape are skipped.
    pub fn apply_attributes(&mut self, attributes: &Map<String, Value>) -> &mut Self {
        for (key, value) in attributes {
            match key.as_str() {
                "full_name" => self.apply_text(key, value, Self::set_full_name),
                "title" => self.apply_text(key, value, Self::set_title),
                "company" => self.apply_text(key, value, Self::set_company),
                "description" => self.apply_text(key, value, Self::set_description),
                "address" => self.apply_text(key, value, Self::set_address),
                "profile_image" => self.apply_text(key, value, Self::set_profile_image),
                "phone" => {
                    for entry in typed_values(key, value) {
                        self.set_phone_number(entry.value, entry.kind);
                    }
                }
                "email" => {
                    for entry in typed_values(key, value) {
                        self.set_email(entry.value, entry.kind);
                    }
                }
                "social" => self.apply_social(value),
                _ => {
                    tracing::trace!(key = %key, "Ignoring unknown attribute");
                }
            }
        }
        self
    }

    /// ## Summary
    /// Builds a record from a JSON object of attributes.
    ///
    /// ## Errors
    /// Returns an error if `json` is not valid JSON or its top level is not an object.
    pub fn from_json(json: &str) -> VcardResult<Self> {
        let Value::Object(attributes) = serde_json::from_str::<Value>(json)? else {
            return Err(VcardError::NotAnObject);
        };

        let mut record = Self::new();
        record.apply_attributes(&attributes);
        Ok(record)
    }

    fn apply_text(&mut self, key: &str, value: &Value, setter: fn(&mut Self, String) -> &mut Self) {
        if let Value::String(text) = value {
            setter(self, text.clone());
        } else {
            tracing::trace!(key = %key, "Ignoring non-string attribute value");
        }
    }

    fn apply_social(&mut self, value: &Value) {
        let Value::Object(links) = value else {
            tracing::trace!("Ignoring non-object social attribute");
            return;
        };

        for (platform, url) in links {
            match (SocialPlatform::from_key(platform), url) {
                (Some(platform), Value::String(url)) => {
                    self.set_social(platform, url.clone());
                }
                (None, _) => {
                    tracing::trace!(platform = %platform, "Ignoring unknown social platform");
                }
                (Some(_), _) => {
                    tracing::trace!(platform = %platform, "Ignoring non-string social URL");
                }
            }
        }
    }
}

/// Extracts the well-formed `{"value", "type"}` entries of a plural attribute.
fn typed_values(key: &str, value: &Value) -> Vec<TypedValue> {
    let Value::Array(entries) = value else {
        tracing::trace!(key = %key, "Ignoring non-array attribute value");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            serde_json::from_value::<TypedValue>(entry.clone())
                .inspect_err(|e| tracing::trace!(key = %key, error = %e, "Skipping malformed entry"))
                .ok()
        })
        .collect()
}
