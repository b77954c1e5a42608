use crate::domain::errors::ClientResult;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// HTTP methods the remote API contract uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request descriptor, constructed fresh per call and never shared.
///
/// `url` must be absolute; the caller forms it from the base URL and the
/// resource path. `query` is ordered and encoded in the order given.
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ResourceRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A normalized 2xx outcome; non-2xx outcomes surface as errors
#[derive(Debug, Clone)]
pub struct ResourceResponse {
    pub status: u16,
    pub body: Vec<u8>,
    /// Paging cursor from the `After-Cursor` response header, when present
    pub after_cursor: Option<String>,
}

/// Port for the shared request executor every resource service delegates to.
///
/// Implementations perform exactly one authenticated round trip per call:
/// no retries, no backoff, no internal state beyond the shared transport.
/// Implementations must be safe for concurrent use.
#[async_trait]
pub trait ResourceExecutor: Send + Sync {
    async fn execute(&self, request: ResourceRequest) -> ClientResult<ResourceResponse>;
}
