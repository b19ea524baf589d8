//! The request/response boundary.
//!
//! [`RestBase`](crate::rest::RestBase) shapes every call into an
//! [`ApiRequest`] and hands it to a [`Transport`]. The default transport is a
//! blocking `reqwest` client; tests and callers with their own HTTP stack can
//! plug in anything that implements the trait.

use std::fmt;

use reqwest::{StatusCode, header::HeaderMap};
use serde_json::Value;

/// HTTP verbs used by the budgeting API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
        }
    }

    /// Methods that carry a JSON body.
    pub fn is_write(self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

/// A fully resolved request.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL, without query string.
    pub url: String,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Raw response: the status and the undecoded body text.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

pub trait Transport: Send + Sync {
    fn execute(&self, request: ApiRequest) -> crate::Result<ApiResponse>;
}

/// Default transport over `reqwest::blocking`.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    http: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: reqwest::blocking::Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: ApiRequest) -> crate::Result<ApiResponse> {
        let mut req = self
            .http
            .request(request.method.into(), &request.url)
            .headers(request.headers);
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(body) = &request.body {
            req = req.body(serde_json::to_vec(body)?);
        }

        let resp = req.send()?;
        let status = resp.status();
        let body = resp.text()?;
        Ok(ApiResponse { status, body })
    }
}
