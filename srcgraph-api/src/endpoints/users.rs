//! # User Endpoints

use std::future::Future;

use reqwest::Method;
use srcgraph_core::{PersonSpec, Route, RouteSpec, RouteVars};
use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::models::User;
use crate::options::UserListOptions;

/// User operations
pub trait UsersService {
  /// Fetch a user by login, email or UID
  fn get(&self, person: &PersonSpec) -> impl Future<Output = Result<User>> + Send;

  /// List users
  fn list(&self, opt: &UserListOptions) -> impl Future<Output = Result<Vec<User>>> + Send;
}

/// [`UsersService`] over HTTP
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
  pub(crate) client: &'a Client,
}

impl UsersService for Users<'_> {
  #[instrument(skip(self, person), fields(person = %person), level = "debug")]
  async fn get(&self, person: &PersonSpec) -> Result<User> {
    let url = self.client.url(Route::User, &person.route_vars())?;
    self.client.send(self.client.request(Method::GET, url)).await
  }

  #[instrument(skip(self), level = "debug")]
  async fn list(&self, opt: &UserListOptions) -> Result<Vec<User>> {
    let url = self.client.url(Route::Users, &RouteVars::new())?;
    self.client.send(self.client.request(Method::GET, url).query(opt)).await
  }
}
