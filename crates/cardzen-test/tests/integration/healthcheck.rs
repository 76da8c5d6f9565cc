use salvo::http::StatusCode;

use cardzen_test::{create_test_service, get, test_settings};

#[test_log::test(tokio::test)]
async fn healthcheck_returns_ok() {
    let service = create_test_service(&test_settings(None));

    let response = get(&service, "/api/app/healthcheck")
        .await
        .expect("response body");

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body, "OK");
}

#[test_log::test(tokio::test)]
async fn unknown_route_is_not_found() {
    let service = create_test_service(&test_settings(None));

    let response = get(&service, "/api/nope").await.expect("response body");

    response.assert_status(StatusCode::NOT_FOUND);
}
