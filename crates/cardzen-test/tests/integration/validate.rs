use salvo::http::StatusCode;
use serde_json::{Value, json};

use cardzen_test::{create_test_service, post_json, test_settings};

#[test_log::test(tokio::test)]
async fn validate_reports_each_field() {
    let service = create_test_service(&test_settings(None));

    let response = post_json(
        &service,
        "/api/vcard/validate",
        &json!({"email": "a@b.com", "phone": "call-me"}),
    )
    .await
    .expect("response body");

    response.assert_status(StatusCode::OK);
    let body: Value = serde_json::from_str(&response.body).expect("JSON body");
    assert_eq!(body, json!({"email": true, "phone": false}));
}

#[test_log::test(tokio::test)]
async fn validate_omits_missing_fields() {
    let service = create_test_service(&test_settings(None));

    let response = post_json(
        &service,
        "/api/vcard/validate",
        &json!({"email": "not-an-email"}),
    )
    .await
    .expect("response body");

    response.assert_status(StatusCode::OK);
    let body: Value = serde_json::from_str(&response.body).expect("JSON body");
    assert_eq!(body, json!({"email": false}));
}
