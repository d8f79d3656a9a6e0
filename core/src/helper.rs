//! The request helper used by every scenario suite.
//!
//! # Design
//! `ApiHelper` is an explicitly scoped request context: `open` acquires one
//! transport bound to the configured base URL, every verb reuses it, and
//! `close` (or drop) releases it. There is no process-wide instance; suites
//! construct the helper at setup and pass it to their steps.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::{parse_json, parse_text, RequestBuilder};
use crate::config::Config;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::page::Page;

/// Reusable request context for one base URL.
#[derive(Debug)]
pub struct ApiHelper<T: Transport = UreqTransport> {
    builder: RequestBuilder,
    transport: T,
}

impl ApiHelper<UreqTransport> {
    /// Opens a context backed by a fresh ureq agent.
    pub fn open(config: Config) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> ApiHelper<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        debug!(base_url = config.base_url(), "opening request context");
        Self {
            builder: RequestBuilder::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &Config {
        self.builder.config()
    }

    pub fn get(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.builder.build_empty(HttpMethod::Get, path)?;
        info!(url = %request.url, "GET request");
        parse_json(self.dispatch(&request)?)
    }

    pub fn post<P: Serialize + ?Sized>(&self, path: &str, payload: &P) -> Result<Value, ApiError> {
        self.send_with_body(HttpMethod::Post, path, payload)
    }

    pub fn put<P: Serialize + ?Sized>(&self, path: &str, payload: &P) -> Result<Value, ApiError> {
        self.send_with_body(HttpMethod::Put, path, payload)
    }

    pub fn delete(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.builder.build_empty(HttpMethod::Delete, path)?;
        info!(url = %request.url, "DELETE request");
        parse_json(self.dispatch(&request)?)
    }

    /// Fetches an HTML page under the base URL.
    pub fn get_page(&self, path: &str) -> Result<Page, ApiError> {
        let request = self.builder.build_empty(HttpMethod::Get, path)?;
        info!(url = %request.url, "GET page");
        let html = parse_text(self.dispatch(&request)?)?;
        Ok(Page::parse(&html))
    }

    /// Releases the underlying transport.
    pub fn close(self) {
        debug!(base_url = self.config().base_url(), "closing request context");
    }

    fn send_with_body<P: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &P,
    ) -> Result<Value, ApiError> {
        let request = self.builder.build(method, path, Some(payload))?;
        info!(
            url = %request.url,
            data = request.body.as_deref().unwrap_or_default(),
            "{method} request"
        );
        parse_json(self.dispatch(&request)?)
    }

    fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self.transport.execute(request)?;
        debug!(method = %request.method, url = %request.url, status = response.status, "response received");
        Ok(response)
    }
}
