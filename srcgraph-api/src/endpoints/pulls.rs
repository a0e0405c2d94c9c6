//! # Pull Request Endpoints
//!
//! Fetching and listing pull requests, and managing review comments on them.

use std::future::Future;

use reqwest::Method;
use serde::de::IgnoredAny;
use srcgraph_core::{PullRequestCommentSpec, PullRequestSpec, RepoSpec, Route, RouteSpec};
use tracing::instrument;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::models::{PullRequest, PullRequestComment};
use crate::options::{PullRequestListCommentsOptions, PullRequestListOptions};

/// Pull request operations
pub trait PullRequestsService {
  /// Fetch a pull request
  fn get(&self, pull: &PullRequestSpec) -> impl Future<Output = Result<PullRequest>> + Send;

  /// List pull requests for a repository
  fn list_by_repo(
    &self,
    repo: &RepoSpec,
    opt: &PullRequestListOptions,
  ) -> impl Future<Output = Result<Vec<PullRequest>>> + Send;

  /// List review comments on a pull request
  fn list_comments(
    &self,
    pull: &PullRequestSpec,
    opt: &PullRequestListCommentsOptions,
  ) -> impl Future<Output = Result<Vec<PullRequestComment>>> + Send;

  /// Create a comment on a pull request
  fn create_comment(
    &self,
    pull: &PullRequestSpec,
    comment: &PullRequestComment,
  ) -> impl Future<Output = Result<PullRequestComment>> + Send;

  /// Update an existing comment. The comment must carry its ID.
  fn edit_comment(
    &self,
    pull: &PullRequestSpec,
    comment: &PullRequestComment,
  ) -> impl Future<Output = Result<PullRequestComment>> + Send;

  /// Delete a comment
  fn delete_comment(&self, pull: &PullRequestSpec, comment_id: u64) -> impl Future<Output = Result<()>> + Send;
}

/// [`PullRequestsService`] over HTTP
#[derive(Debug, Clone, Copy)]
pub struct PullRequests<'a> {
  pub(crate) client: &'a Client,
}

impl PullRequestsService for PullRequests<'_> {
  #[instrument(skip(self), level = "debug")]
  async fn get(&self, pull: &PullRequestSpec) -> Result<PullRequest> {
    let url = self.client.url(Route::RepoPullRequest, &pull.route_vars())?;
    self.client.send(self.client.request(Method::GET, url)).await
  }

  #[instrument(skip(self), level = "debug")]
  async fn list_by_repo(&self, repo: &RepoSpec, opt: &PullRequestListOptions) -> Result<Vec<PullRequest>> {
    let url = self.client.url(Route::RepoPullRequests, &repo.route_vars())?;
    self.client.send(self.client.request(Method::GET, url).query(opt)).await
  }

  #[instrument(skip(self), level = "debug")]
  async fn list_comments(
    &self,
    pull: &PullRequestSpec,
    opt: &PullRequestListCommentsOptions,
  ) -> Result<Vec<PullRequestComment>> {
    let url = self.client.url(Route::RepoPullRequestComments, &pull.route_vars())?;
    self.client.send(self.client.request(Method::GET, url).query(opt)).await
  }

  #[instrument(skip(self, comment), level = "debug")]
  async fn create_comment(&self, pull: &PullRequestSpec, comment: &PullRequestComment) -> Result<PullRequestComment> {
    let url = self.client.url(Route::RepoPullRequestComments, &pull.route_vars())?;
    self.client.send(self.client.request(Method::POST, url).json(comment)).await
  }

  #[instrument(skip(self, comment), fields(comment_id = ?comment.id), level = "debug")]
  async fn edit_comment(&self, pull: &PullRequestSpec, comment: &PullRequestComment) -> Result<PullRequestComment> {
    let comment_id = comment.id.ok_or(Error::MissingCommentId)?;
    let spec = PullRequestCommentSpec::new(pull.clone(), comment_id);
    let url = self.client.url(Route::RepoPullRequestComment, &spec.route_vars())?;
    self.client.send(self.client.request(Method::PATCH, url).json(comment)).await
  }

  #[instrument(skip(self), level = "debug")]
  async fn delete_comment(&self, pull: &PullRequestSpec, comment_id: u64) -> Result<()> {
    let spec = PullRequestCommentSpec::new(pull.clone(), comment_id);
    let url = self.client.url(Route::RepoPullRequestComment, &spec.route_vars())?;
    self
      .client
      .send::<IgnoredAny>(self.client.request(Method::DELETE, url))
      .await?;
    Ok(())
  }
}
