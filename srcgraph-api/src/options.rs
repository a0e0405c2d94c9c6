//! Query-string options for list endpoints.
//!
//! Options serialize into the request's query string; `None` fields are left
//! out.

use serde::{Serialize, Serializer};

/// Pagination shared by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub page: Option<u32>,
  #[serde(rename = "per_page", skip_serializing_if = "Option::is_none")]
  pub per_page: Option<u32>,
}

/// Pull request state filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
  Open,
  Closed,
  All,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequestListOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub state: Option<PullRequestState>,
  #[serde(flatten)]
  pub list: ListOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequestListCommentsOptions {
  #[serde(flatten)]
  pub list: ListOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepoListOptions {
  /// Free-text filter on repository URI and name
  #[serde(skip_serializing_if = "Option::is_none")]
  pub query: Option<String>,
  #[serde(flatten)]
  pub list: ListOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserListOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub query: Option<String>,
  #[serde(flatten)]
  pub list: ListOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnitListOptions {
  /// Restrict to units in these repositories, each `uri` or `uri@rev`
  #[serde(
    rename = "repo_revs",
    skip_serializing_if = "Vec::is_empty",
    serialize_with = "comma_separated"
  )]
  pub repo_revs: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub unit_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub query: Option<String>,
  #[serde(flatten)]
  pub list: ListOptions,
}

/// Query strings cannot carry sequences, so lists travel comma-joined.
fn comma_separated<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(&values.join(","))
}
