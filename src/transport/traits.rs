//! Trait abstraction for the submission transport to enable mocking in tests

use crate::form::FieldMap;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Request methods understood by the transport.
///
/// [`Method::Get`] sends the field set as query-style parameters; every
/// other method sends it as the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Lowercase wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Patch => "patch",
            Method::Delete => "delete",
        }
    }

    /// Whether the field set travels as query parameters instead of a body
    pub fn sends_params(self) -> bool {
        matches!(self, Method::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown request method name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown request method {0:?}")]
pub struct ParseMethodError(pub String);

impl FromStr for Method {
    type Err = ParseMethodError;

    /// Accepts exactly the lowercase names; matching is case-sensitive
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            "put" => Ok(Method::Put),
            "patch" => Ok(Method::Patch),
            "delete" => Ok(Method::Delete),
            other => Err(ParseMethodError(other.to_string())),
        }
    }
}

/// A single submission exchange handed to the transport.
#[derive(Debug, Clone, Serialize)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    /// Field set as query-style parameters, for get-style methods
    pub params: Option<FieldMap>,
    /// Field set as the request body, for every other method
    pub body: Option<FieldMap>,
    /// Extra per-request headers from the caller
    pub headers: IndexMap<String, String>,
}

impl TransportRequest {
    /// Request with no payload or extra headers
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: None,
            body: None,
            headers: IndexMap::new(),
        }
    }
}

/// What the transport resolved with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportResponse {
    pub status: u16,
    pub data: Value,
}

/// How the transport failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// The server responded with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16, data: Option<Value> },

    /// The request never produced a response.
    #[error("connection failed: {0}")]
    Connection(String),
}

impl TransportError {
    /// Response payload attached to the failure, if any
    pub fn response_data(&self) -> Option<&Value> {
        match self {
            TransportError::Status { data, .. } => data.as_ref(),
            TransportError::Connection(_) => None,
        }
    }
}

/// Transport capability performing the actual network exchange.
///
/// The submission coordinator is agnostic to the transport's identity; an
/// alternate implementation can be injected at construction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request and resolve with the server's response
    async fn send(&self, request: TransportRequest)
        -> Result<TransportResponse, TransportError>;
}
