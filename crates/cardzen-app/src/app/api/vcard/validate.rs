use salvo::http::StatusCode;
use salvo::prelude::Json;
use salvo::{Request, Response, handler};
use serde::{Deserialize, Serialize};

use cardzen_vcard::{is_valid_email, is_valid_phone_number};

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Verdict per submitted field; fields that were not submitted are omitted.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ValidateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<bool>,
}

impl From<&ValidateRequest> for ValidateResponse {
    fn from(request: &ValidateRequest) -> Self {
        Self {
            email: request.email.as_deref().map(is_valid_email),
            phone: request.phone.as_deref().map(is_valid_phone_number),
        }
    }
}

/// ## Summary
/// Checks an email address and/or phone number without building a card.
#[handler]
pub async fn validate(req: &mut Request, res: &mut Response) {
    let request = match req.parse_json::<ValidateRequest>().await {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "Invalid validation request");
            res.status_code(StatusCode::BAD_REQUEST);
            return;
        }
    };

    res.status_code(StatusCode::OK);
    res.render(Json(ValidateResponse::from(&request)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_covers_submitted_fields() {
        let request = ValidateRequest {
            email: Some("a@b.com".to_string()),
            phone: Some("call-me".to_string()),
        };

        assert_eq!(
            ValidateResponse::from(&request),
            ValidateResponse {
                email: Some(true),
                phone: Some(false),
            }
        );
    }

    #[test]
    fn response_omits_missing_fields() {
        let request = ValidateRequest {
            email: None,
            phone: Some("+1 555 123".to_string()),
        };

        let json = serde_json::to_string(&ValidateResponse::from(&request))
            .expect("response serializes");
        assert_eq!(json, r#"{"phone":true}"#);
    }
}
