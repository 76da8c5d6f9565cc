//! `CardZen` HTTP service - integration test support.
//!
//! Builds an in-process salvo [`Service`] with the full API router and
//! collects responses into plain values for assertions.

use salvo::http::{ReqBody, StatusCode};
use salvo::test::{ResponseExt, TestClient};
use salvo::{Router, Service};

use cardzen_app::app::api::routes;
use cardzen_app::config::{ConfigHandler, LoggingConfig, ServerConfig, Settings, VcardConfig};

pub use tracing;

/// Settings used by integration tests; photos are disabled unless `photo_dir` is given.
#[must_use]
pub fn test_settings(photo_dir: Option<&str>) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        vcard: VcardConfig {
            photo_dir: photo_dir.map(str::to_string),
            ..VcardConfig::default()
        },
    }
}

/// Creates a service wired like the binary, using `settings`.
#[must_use]
pub fn create_test_service(settings: &Settings) -> Service {
    let router = Router::new()
        .hoop(ConfigHandler::new(settings))
        .push(routes());
    Service::new(router)
}

/// Response captured from the test service.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {}",
            self.status
        );
    }

    /// Asserts that a header exists with the expected value.
    pub fn assert_header(&self, name: &str, expected: &str) {
        let value = self.header(name);
        assert!(value.is_some(), "Header '{name}' not found in response");
        assert_eq!(
            value,
            Some(expected),
            "Header '{name}' expected '{expected}' but got '{value:?}'"
        );
    }

    /// Returns the value of the named header, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// ## Summary
/// POSTs a JSON body to `path` and captures the response.
///
/// ## Errors
/// Returns an error if the response body cannot be read.
pub async fn post_json(
    service: &Service,
    path: &str,
    body: &serde_json::Value,
) -> anyhow::Result<TestResponse> {
    let url = format!("http://127.0.0.1:5800{path}");
    let res = TestClient::post(&url).json(body).send(service).await;
    capture(res).await
}

/// ## Summary
/// POSTs a raw body to `path` and captures the response.
///
/// ## Errors
/// Returns an error if the response body cannot be read.
pub async fn post_raw(service: &Service, path: &str, body: &str) -> anyhow::Result<TestResponse> {
    let url = format!("http://127.0.0.1:5800{path}");
    let res = TestClient::post(&url)
        .add_header("Content-Type", "application/json", true)
        .body(ReqBody::Once(body.to_string().into()))
        .send(service)
        .await;
    capture(res).await
}

/// ## Summary
/// GETs `path` and captures the response.
///
/// ## Errors
/// Returns an error if the response body cannot be read.
pub async fn get(service: &Service, path: &str) -> anyhow::Result<TestResponse> {
    let url = format!("http://127.0.0.1:5800{path}");
    let res = TestClient::get(&url).send(service).await;
    capture(res).await
}

async fn capture(mut res: salvo::Response) -> anyhow::Result<TestResponse> {
    let status = res.status_code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let headers = res
        .headers()
        .iter()
        .map(|(k, v)| {
            (
                k.as_str().to_string(),
                String::from_utf8_lossy(v.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = String::from_utf8_lossy(&res.take_bytes(None).await?).into_owned();

    Ok(TestResponse {
        status,
        headers,
        body,
    })
}
