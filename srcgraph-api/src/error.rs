//! Errors returned by the API client.

use reqwest::StatusCode;
use srcgraph_core::SpecError;
use thiserror::Error;

/// Errors returned by API operations.
///
/// Spec and transport failures are passed through unchanged so callers can
/// inspect the original cause.
#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Spec(#[from] SpecError),

  #[error(transparent)]
  Transport(#[from] reqwest::Error),

  #[error(transparent)]
  Url(#[from] url::ParseError),

  #[error("failed to decode response from {url}")]
  Decode {
    url: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("Authentication failed (HTTP {status}). Please check your Sourcegraph access token.")]
  Unauthorized { status: StatusCode },

  #[error("{0} not found")]
  NotFound(String),

  #[error("Unexpected error: HTTP {status} - {message}")]
  Status { status: StatusCode, message: String },

  #[error("comment ID not specified")]
  MissingCommentId,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
