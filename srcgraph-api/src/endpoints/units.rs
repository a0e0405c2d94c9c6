//! # Source Unit Endpoints

use std::future::Future;

use reqwest::Method;
use srcgraph_core::{Route, RouteSpec, RouteVars, UnitSpec};
use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::models::SourceUnit;
use crate::options::UnitListOptions;

/// Source unit operations
pub trait UnitsService {
  /// Fetch a source unit
  fn get(&self, unit: &UnitSpec) -> impl Future<Output = Result<SourceUnit>> + Send;

  /// List source units across repositories
  fn list(&self, opt: &UnitListOptions) -> impl Future<Output = Result<Vec<SourceUnit>>> + Send;
}

/// [`UnitsService`] over HTTP
#[derive(Debug, Clone, Copy)]
pub struct Units<'a> {
  pub(crate) client: &'a Client,
}

impl UnitsService for Units<'_> {
  #[instrument(skip(self), level = "debug")]
  async fn get(&self, unit: &UnitSpec) -> Result<SourceUnit> {
    let url = self.client.url(Route::Unit, &unit.route_vars())?;
    self.client.send(self.client.request(Method::GET, url)).await
  }

  #[instrument(skip(self), level = "debug")]
  async fn list(&self, opt: &UnitListOptions) -> Result<Vec<SourceUnit>> {
    let url = self.client.url(Route::Units, &RouteVars::new())?;
    self.client.send(self.client.request(Method::GET, url).query(opt)).await
  }
}
