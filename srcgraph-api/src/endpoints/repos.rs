//! # Repository Endpoints

use std::future::Future;

use reqwest::Method;
use srcgraph_core::{RepoSpec, Route, RouteSpec, RouteVars};
use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::models::Repo;
use crate::options::RepoListOptions;

/// Repository operations
pub trait ReposService {
  /// Fetch a repository
  fn get(&self, repo: &RepoSpec) -> impl Future<Output = Result<Repo>> + Send;

  /// List repositories
  fn list(&self, opt: &RepoListOptions) -> impl Future<Output = Result<Vec<Repo>>> + Send;
}

/// [`ReposService`] over HTTP
#[derive(Debug, Clone, Copy)]
pub struct Repos<'a> {
  pub(crate) client: &'a Client,
}

impl ReposService for Repos<'_> {
  #[instrument(skip(self), level = "debug")]
  async fn get(&self, repo: &RepoSpec) -> Result<Repo> {
    let url = self.client.url(Route::Repo, &repo.route_vars())?;
    self.client.send(self.client.request(Method::GET, url)).await
  }

  #[instrument(skip(self), level = "debug")]
  async fn list(&self, opt: &RepoListOptions) -> Result<Vec<Repo>> {
    let url = self.client.url(Route::Repos, &RouteVars::new())?;
    self.client.send(self.client.request(Method::GET, url).query(opt)).await
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{method, path, query_param, query_param_is_missing};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::client::tests::test_client;

  #[tokio::test]
  async fn test_get_repo() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/repos/github.com/gorilla/mux"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "URI": "github.com/gorilla/mux",
          "Name": "mux",
          "Description": "A powerful URL router",
          "Language": "Go"
      })))
      .mount(&mock_server)
      .await;

    let repo = client.repos().get(&RepoSpec::new("github.com/gorilla/mux")?).await?;
    assert_eq!(repo.uri, "github.com/gorilla/mux");
    assert_eq!(repo.language.as_deref(), Some("Go"));

    Ok(())
  }

  #[tokio::test]
  async fn test_list_repos_with_query() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/repos"))
      .and(query_param("query", "mux"))
      .and(query_param("page", "3"))
      .and(query_param_is_missing("per_page"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
          { "URI": "github.com/gorilla/mux" }
      ])))
      .expect(1)
      .mount(&mock_server)
      .await;

    let mut opt = RepoListOptions {
      query: Some("mux".into()),
      ..RepoListOptions::default()
    };
    opt.list.page = Some(3);
    let repos = client.repos().list(&opt).await?;
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].spec()?, RepoSpec::new("github.com/gorilla/mux")?);

    Ok(())
  }
}
