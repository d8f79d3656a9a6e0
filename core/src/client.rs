//! Request building and response parsing for the placeholder service.
//!
//! # Design
//! `RequestBuilder` holds only the `Config` and carries no mutable state
//! between calls. It produces `HttpRequest` values; `parse_json` and
//! `parse_text` consume `HttpResponse` values. Neither side touches the
//! network, which keeps the status and decoding contract testable with
//! canned responses.

use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Header attached to every request.
pub const CONTENT_TYPE_JSON: (&str, &str) = ("content-type", "application/json");

/// Stateless builder of `HttpRequest` values for one base URL.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    config: Config,
}

impl RequestBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds a request for `path`, serializing `payload` as the JSON body.
    pub fn build<T: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<&T>,
    ) -> Result<HttpRequest, ApiError> {
        let body = payload
            .map(|p| serde_json::to_string(p).map_err(ApiError::Encode))
            .transpose()?;
        Ok(HttpRequest {
            method,
            url: self.config.resolve(path),
            headers: vec![(
                CONTENT_TYPE_JSON.0.to_string(),
                CONTENT_TYPE_JSON.1.to_string(),
            )],
            body,
        })
    }

    /// Builds a request without a body.
    pub fn build_empty(&self, method: HttpMethod, path: &str) -> Result<HttpRequest, ApiError> {
        self.build::<Value>(method, path, None)
    }
}

/// Fails with `ApiError::Http` unless the status is 2xx.
pub fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(ApiError::Http {
            status: response.status,
        })
    }
}

/// Checks the status, then decodes the body as JSON. An empty body is `{}`.
pub fn parse_json(response: HttpResponse) -> Result<Value, ApiError> {
    check_status(&response)?;
    if response.body.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(&response.body).map_err(ApiError::Decode)
}

/// Checks the status and returns the body as text.
pub fn parse_text(response: HttpResponse) -> Result<String, ApiError> {
    check_status(&response)?;
    Ok(response.body)
}
