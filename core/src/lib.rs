//! Request helper for the JSONPlaceholder fake-data service.
//!
//! # Overview
//! `ApiHelper` issues GET/POST/PUT/DELETE calls against one configured base
//! URL, attaches `Content-Type: application/json` to every request, and turns
//! any non-2xx status into `ApiError::Http` (`HTTP error! Status: <code>`).
//! Successful bodies come back as untyped `serde_json::Value`.
//!
//! # Design
//! - Request building and response parsing (`client`) never touch the
//!   network; a `Transport` performs the round-trip in between.
//! - The helper is an explicit scoped context (`open`/`close`), not a
//!   global singleton.
//! - Typed views (`Album`, `Post`, ...) and `IdSlot` exist for the scenario
//!   suites under `tests/`; the helper never constructs them.

pub mod client;
pub mod config;
pub mod error;
pub mod helper;
pub mod http;
pub mod ids;
pub mod page;
pub mod types;

pub use client::{check_status, parse_json, parse_text, RequestBuilder};
pub use config::Config;
pub use error::ApiError;
pub use helper::ApiHelper;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use ids::IdSlot;
pub use page::Page;
pub use types::{view, Album, Comment, Photo, Post, Resource, ResourceView, Todo};
