//! HTTP transport types described as plain data.
//!
//! # Design
//! The client crate never touches the network: it builds `HttpRequest`
//! values and parses `HttpResponse` values, and the caller runs the actual
//! round-trip with whatever transport it has (a browser fetch, ureq, a test
//! harness). Keeping the exchange as plain owned data makes every client
//! operation deterministic and testable without a server.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TaskClient::build_*` methods; the caller executes it and hands
/// the resulting [`HttpResponse`] back to the matching `parse_*` method.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
