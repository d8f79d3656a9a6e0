//! Base URL configuration.

use crate::error::ApiError;

/// Environment variable that overrides the default base URL.
pub const BASE_URL_ENV: &str = "PLACEHOLDER_BASE_URL";

/// The public service the suites were written against.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Where every relative resource path is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
}

impl Config {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"));
        match host {
            Some(host) if !host.is_empty() => Ok(Self {
                base_url: trimmed.to_string(),
            }),
            _ => Err(ApiError::InvalidBaseUrl(base_url.to_string())),
        }
    }

    /// Reads `PLACEHOLDER_BASE_URL`, falling back to the public service.
    pub fn from_env() -> Result<Self, ApiError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL with exactly one separator. Absolute
    /// `http://` and `https://` URLs (e.g. scraped hrefs) pass through unchanged.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{}/", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
