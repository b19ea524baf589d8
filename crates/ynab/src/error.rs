//! Errors returned by the client.
//!
//! Every remote failure is reported as [`Http`] with the raw response body;
//! the library does not try to interpret the service's error payloads.
//!
//!  [`Http`]: Error::Http
use reqwest::{StatusCode, header::InvalidHeaderValue};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The service answered with a status outside the success set.
    #[error("{body}")]
    Http { status: StatusCode, body: String },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid access token: {0}")]
    InvalidToken(#[from] InvalidHeaderValue),
    #[error("account is not bound to a transactions client")]
    Detached,
    #[error("{0} has no id")]
    MissingId(&'static str),
}

impl Error {
    /// Returns the HTTP status for [`Error::Http`], `None` otherwise.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
