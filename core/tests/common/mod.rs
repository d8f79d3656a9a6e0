//! Shared setup for the scenario suites.
//!
//! Each suite binary talks to one mock server started on a random port the
//! first time any of its tests asks for the base URL. Exporting
//! `PLACEHOLDER_BASE_URL` points the suites at another deployment instead.

#![allow(dead_code)]

use std::sync::OnceLock;

use placeholder_core::config::BASE_URL_ENV;
use placeholder_core::{ApiError, ApiHelper, Config};
use serde_json::Value;

static BASE_URL: OnceLock<String> = OnceLock::new();

pub fn base_url() -> &'static str {
    BASE_URL.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();

        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                Config::from_env().unwrap().base_url().to_string()
            }
            _ => start_mock_server(),
        }
    })
}

/// Opens a request context against the suite's server.
pub fn helper() -> ApiHelper {
    ApiHelper::open(Config::new(base_url()).unwrap())
}

fn start_mock_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// Every field of `expected` must be present in `actual` with an equal value.
pub fn assert_matches_object(actual: &Value, expected: &Value) {
    let expected = expected.as_object().expect("expected value must be an object");
    for (key, value) in expected {
        assert_eq!(
            actual.get(key),
            Some(value),
            "field `{key}` differs in {actual}"
        );
    }
}

/// The call must have failed with exactly this HTTP status.
pub fn assert_http_error(result: Result<Value, ApiError>, status: u16) {
    match result {
        Ok(value) => panic!("expected HTTP {status}, got success: {value}"),
        Err(err) => {
            assert!(
                err.to_string().contains(&format!("HTTP error! Status: {status}")),
                "unexpected error: {err}"
            );
            assert_eq!(err.status(), Some(status));
        }
    }
}

/// A collection response is a non-empty array whose first item has an `id`.
pub fn assert_non_empty_collection(value: &Value) -> &Value {
    let items = value.as_array().expect("collection must be an array");
    assert!(!items.is_empty(), "collection is empty");
    assert!(items[0].get("id").is_some(), "first item has no id");
    &items[0]
}
