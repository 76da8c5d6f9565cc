//! Tests for the export endpoints.
//!
//! Verifies download headers, inline encodings, photo scoping and
//! rejection of malformed bodies.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use salvo::http::StatusCode;
use serde_json::{Value, json};

use cardzen_test::{create_test_service, post_json, post_raw, test_settings};

const JANE_VCF: &str = "\
BEGIN:VCARD\n\
VERSION:4.0\n\
FN:Jane Doe\n\
N:Jane Doe\n\
TITLE:CTO\n\
ROLE:CTO\n\
TEL;TYPE=MOBILE:+15551234567\n\
EMAIL;TYPE=WORK:jane@acme.example\n\
URL;TYPE=WHATSAPP:https://wa.me/+15550001111\n\
END:VCARD";

fn jane() -> Value {
    json!({
        "full_name": "Jane Doe",
        "title": "CTO",
        "phone": [{"value": "+1 555 123 4567", "type": "mobile"}],
        "email": [{"value": "jane@acme.example", "type": "work"}],
        "social": {"whatsapp": "+1 555 000 1111", "bogus": "ignored"},
    })
}

// ============================================================================
// Download
// ============================================================================

#[test_log::test(tokio::test)]
async fn download_returns_attachment() {
    let service = create_test_service(&test_settings(None));

    let response = post_json(&service, "/api/vcard/download", &jane())
        .await
        .expect("response body");

    response.assert_status(StatusCode::OK);
    response.assert_header("Content-Type", "text/x-vcard");
    response.assert_header(
        "Content-Disposition",
        "attachment; filename=\"Jane Doe.vcf\"",
    );
    assert_eq!(response.body, JANE_VCF);
}

#[test_log::test(tokio::test)]
async fn download_without_name_uses_bare_extension() {
    let service = create_test_service(&test_settings(None));

    let response = post_json(&service, "/api/vcard/download", &json!({}))
        .await
        .expect("response body");

    response.assert_status(StatusCode::OK);
    response.assert_header("Content-Disposition", "attachment; filename=\".vcf\"");
    assert_eq!(response.body, "BEGIN:VCARD\nVERSION:4.0\nEND:VCARD");
}

// ============================================================================
// Inline encodings
// ============================================================================

#[test_log::test(tokio::test)]
async fn text_returns_raw_card() {
    let service = create_test_service(&test_settings(None));

    let response = post_json(&service, "/api/vcard/text", &jane())
        .await
        .expect("response body");

    response.assert_status(StatusCode::OK);
    response.assert_header("Content-Type", "text/x-vcard; charset=utf-8");
    assert_eq!(response.body, JANE_VCF);
}

#[test_log::test(tokio::test)]
async fn base64_decodes_to_card() {
    let service = create_test_service(&test_settings(None));

    let response = post_json(&service, "/api/vcard/base64", &jane())
        .await
        .expect("response body");

    response.assert_status(StatusCode::OK);
    let decoded = STANDARD.decode(&response.body).expect("valid base64");
    assert_eq!(String::from_utf8(decoded).expect("UTF-8"), JANE_VCF);
}

#[test_log::test(tokio::test)]
async fn uri_is_percent_encoded() {
    let service = create_test_service(&test_settings(None));

    let response = post_json(&service, "/api/vcard/uri", &jane())
        .await
        .expect("response body");

    response.assert_status(StatusCode::OK);
    assert!(
        response
            .body
            .starts_with("data:text/x-vcard;charset=utf-8,BEGIN%3AVCARD%0A")
    );
    assert!(response.body.contains("FN%3AJane%20Doe"));
    assert!(response.body.contains("%2B15551234567"));
}

// ============================================================================
// Photos
// ============================================================================

#[test_log::test(tokio::test)]
async fn photo_resolved_inside_photo_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("jane.png"), [0x89, b'P', b'N', b'G']).expect("write photo");
    let settings = test_settings(Some(&dir.path().to_string_lossy()));
    let service = create_test_service(&settings);

    let response = post_json(
        &service,
        "/api/vcard/text",
        &json!({"full_name": "Jane Doe", "profile_image": "jane.png"}),
    )
    .await
    .expect("response body");

    response.assert_status(StatusCode::OK);
    assert!(
        response
            .body
            .ends_with("\nPHOTO;TYPE=PNG;ENCODING=b:iVBORw==\nEND:VCARD")
    );
}

#[test_log::test(tokio::test)]
async fn photo_outside_photo_dir_is_omitted() {
    let dir = tempfile::tempdir().expect("temp dir");
    let nested = dir.path().join("photos");
    std::fs::create_dir(&nested).expect("create photo dir");
    std::fs::write(dir.path().join("secret.png"), b"secret").expect("write file");
    let settings = test_settings(Some(&nested.to_string_lossy()));
    let service = create_test_service(&settings);

    let response = post_json(
        &service,
        "/api/vcard/text",
        &json!({"profile_image": "../secret.png"}),
    )
    .await
    .expect("response body");

    response.assert_status(StatusCode::OK);
    assert!(!response.body.contains("PHOTO"));
}

#[test_log::test(tokio::test)]
async fn photos_disabled_without_photo_dir() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    std::fs::write(file.path(), b"png").expect("write file");
    let service = create_test_service(&test_settings(None));

    let response = post_json(
        &service,
        "/api/vcard/text",
        &json!({"profile_image": file.path().to_string_lossy()}),
    )
    .await
    .expect("response body");

    response.assert_status(StatusCode::OK);
    assert!(!response.body.contains("PHOTO"));
}

// ============================================================================
// Malformed input
// ============================================================================

#[test_log::test(tokio::test)]
async fn non_object_body_is_rejected() {
    let service = create_test_service(&test_settings(None));

    let response = post_json(&service, "/api/vcard/download", &json!(["Jane Doe"]))
        .await
        .expect("response body");

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn invalid_json_is_rejected() {
    let service = create_test_service(&test_settings(None));

    let response = post_raw(&service, "/api/vcard/text", "{\"full_name\": ")
        .await
        .expect("response body");

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn wrong_shapes_are_ignored() {
    let service = create_test_service(&test_settings(None));

    let response = post_json(
        &service,
        "/api/vcard/text",
        &json!({"full_name": 42, "phone": "555", "social": {"bogus": "x"}}),
    )
    .await
    .expect("response body");

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body, "BEGIN:VCARD\nVERSION:4.0\nEND:VCARD");
}
