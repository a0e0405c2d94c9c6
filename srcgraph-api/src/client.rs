//! # Sourcegraph HTTP Client
//!
//! HTTP client implementation for Sourcegraph API interactions, handling
//! authentication, URL construction from named routes, and response parsing.

use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use srcgraph_core::{ClientConfig, Route, RouteVars};
use tracing::debug;
use url::Url;

use crate::consts;
use crate::endpoints::pulls::PullRequests;
use crate::endpoints::repos::Repos;
use crate::endpoints::units::Units;
use crate::endpoints::users::Users;
use crate::error::{Error, Result};

/// Represents a Sourcegraph API client
#[derive(Debug, Clone)]
pub struct Client {
  pub(crate) http: reqwest::Client,
  pub(crate) config: ClientConfig,
}

impl Client {
  /// Create a new client for the configured endpoint
  pub fn new(config: ClientConfig) -> Self {
    Self::with_http_client(reqwest::Client::new(), config)
  }

  /// Create a client that sends requests through an existing `reqwest`
  /// client (custom timeouts, proxies, TLS settings)
  pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
    Self { http, config }
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// Pull request endpoints
  pub fn pull_requests(&self) -> PullRequests<'_> {
    PullRequests { client: self }
  }

  /// Repository endpoints
  pub fn repos(&self) -> Repos<'_> {
    Repos { client: self }
  }

  /// User endpoints
  pub fn users(&self) -> Users<'_> {
    Users { client: self }
  }

  /// Source unit endpoints
  pub fn units(&self) -> Units<'_> {
    Units { client: self }
  }

  /// Resolve a named route and its variables to an absolute URL. Route
  /// values arrive percent-encoded, so they cannot add a query or fragment.
  pub fn url(&self, route: Route, vars: &RouteVars) -> Result<Url> {
    let path = route.path(vars)?;
    Ok(Url::parse(&format!("{}{}", self.config.base(), path))?)
  }

  /// Start a request with the standard headers and credentials applied
  pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
    let builder = self
      .http
      .request(method, url)
      .header(ACCEPT, consts::ACCEPT)
      .header(USER_AGENT, consts::USER_AGENT);

    match &self.config.token {
      Some(token) => builder.header(AUTHORIZATION, format!("token {token}")),
      None => builder,
    }
  }

  /// Send a request and decode the JSON response body.
  ///
  /// An empty body decodes as JSON `null`, so `T = ()` accepts `204 No
  /// Content`.
  pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
    let (url, body) = self.execute(builder).await?;
    let text = if body.trim().is_empty() { "null" } else { body.as_str() };

    serde_json::from_str::<T>(text).map_err(|source| Error::Decode {
      url: url.to_string(),
      source,
    })
  }

  async fn execute(&self, builder: RequestBuilder) -> Result<(Url, String)> {
    let request = builder.build()?;
    let method = request.method().clone();
    let url = request.url().clone();
    debug!(%method, %url, "Sending request");

    let response = self.http.execute(request).await?;
    let status = response.status();
    debug!(%method, %url, %status, "Received response");

    let body = response.text().await?;

    match status {
      status if status.is_success() => Ok((url, body)),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Unauthorized { status }),
      StatusCode::NOT_FOUND => Err(Error::NotFound(url.path().to_string())),
      status => Err(Error::Status {
        status,
        message: api_error_message(&body),
      }),
    }
  }
}

/// Pull the `message` field out of an API error body, falling back to the raw
/// body text.
fn api_error_message(body: &str) -> String {
  serde_json::from_str::<serde_json::Value>(body)
    .ok()
    .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(str::to_string))
    .unwrap_or_else(|| body.to_string())
}
