//! Response models returned by the Sourcegraph API.
//!
//! Pull requests and their comments are mirrored from GitHub and keep
//! GitHub's snake_case field names. Sourcegraph-native resources use the
//! API's PascalCase names.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use srcgraph_core::{PersonSpec, PullRequestSpec, RepoRevSpec, RepoSpec, SpecError, UnitSpec};

/// A GitHub account attached to a pull request or comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
  pub login: String,
  #[serde(default)]
  pub id: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_url: Option<String>,
}

/// Head or base branch of a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestBranch {
  #[serde(default)]
  pub label: Option<String>,
  #[serde(rename = "ref", default)]
  pub ref_name: Option<String>,
  #[serde(default)]
  pub sha: Option<String>,
}

/// A pull request returned by the Sourcegraph API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
  pub number: u32,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
  #[serde(default)]
  pub state: Option<String>,
  #[serde(default)]
  pub html_url: Option<String>,
  #[serde(default)]
  pub user: Option<GitHubUser>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub merged: Option<bool>,
  #[serde(default)]
  pub created_at: Option<String>,
  #[serde(default)]
  pub updated_at: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub head: Option<PullRequestBranch>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub base: Option<PullRequestBranch>,
}

impl PullRequest {
  /// Reconstruct the spec identifying this pull request.
  ///
  /// The repository is recovered from `html_url`: the host and the first two
  /// path segments, e.g. `https://github.com/a/b/pull/5` gives `github.com/a/b`.
  /// This depends on the upstream URL shape and fails if it changes.
  pub fn spec(&self) -> Result<PullRequestSpec, SpecError> {
    const KIND: &str = "pull request";

    let html_url = self
      .html_url
      .as_deref()
      .ok_or_else(|| SpecError::invalid(KIND, "", "pull request has no html_url"))?;
    let without_scheme = html_url
      .strip_prefix("https://")
      .or_else(|| html_url.strip_prefix("http://"))
      .unwrap_or(html_url);

    let segments: Vec<&str> = without_scheme.split('/').take(3).collect();
    if segments.len() < 3 || segments.iter().any(|s| s.is_empty()) {
      return Err(SpecError::invalid(
        KIND,
        html_url,
        "expected host and two path segments in html_url",
      ));
    }

    Ok(PullRequestSpec::new(RepoSpec::new(segments.join("/"))?, self.number))
  }
}

/// A review comment on a pull request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestComment {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub path: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub position: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub commit_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user: Option<GitHubUser>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<String>,
  /// Draft comments stay unpublished until the review is submitted
  #[serde(rename = "Published", default)]
  pub published: bool,
}

impl PullRequestComment {
  /// A new comment with the given body, ready to be created
  pub fn with_body(body: impl Into<String>) -> Self {
    Self {
      body: Some(body.into()),
      ..Self::default()
    }
  }
}

/// A repository known to Sourcegraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Repo {
  #[serde(rename = "URI")]
  pub uri: String,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub default_branch: Option<String>,
  #[serde(default)]
  pub language: Option<String>,
  #[serde(default)]
  pub fork: bool,
  #[serde(default)]
  pub private: bool,
}

impl Repo {
  pub fn spec(&self) -> Result<RepoSpec, SpecError> {
    RepoSpec::new(self.uri.clone())
  }
}

/// A Sourcegraph user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
  #[serde(rename = "UID", default)]
  pub uid: u32,
  #[serde(default)]
  pub login: String,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(rename = "AvatarURL", default)]
  pub avatar_url: Option<String>,
  #[serde(default)]
  pub domain: Option<String>,
  #[serde(default)]
  pub is_organization: bool,
}

impl User {
  /// The most specific spec for this user: UID when known, otherwise login.
  pub fn spec(&self) -> Result<PersonSpec, SpecError> {
    match NonZeroU32::new(self.uid) {
      Some(uid) => Ok(PersonSpec::Uid(uid)),
      None => PersonSpec::from_login(self.login.clone()),
    }
  }
}

/// A source unit (package, module, ...) built at a specific commit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceUnit {
  pub repo: String,
  #[serde(rename = "CommitID")]
  pub commit_id: String,
  pub unit_type: String,
  pub unit: String,
  #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
  pub data: serde_json::Value,
}

impl SourceUnit {
  /// Spec for this unit, pinned to the commit it was built at
  pub fn spec(&self) -> Result<UnitSpec, SpecError> {
    let repo_rev = RepoRevSpec::new(RepoSpec::new(self.repo.clone())?).with_rev(self.commit_id.clone())?;
    UnitSpec::new(repo_rev, self.unit_type.clone(), self.unit.clone())
  }
}
