//! Repository specs: `host/owner/name`, optionally pinned to a revision with
//! `@rev` or `@rev===commit`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{RouteSpec, RouteVars, keys, required_var};
use crate::error::SpecError;

const REPO_KIND: &str = "repo";
const REPO_REV_KIND: &str = "repo revision";

/// Separates a revision from the resolved commit ID in the `Rev` route var.
const COMMIT_SEPARATOR: &str = "===";

/// Identifies a repository by its URI, e.g. `github.com/gorilla/mux`.
///
/// The URI is non-empty and has no `@`, which introduces the revision in the
/// text form of [`RepoRevSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoSpec {
  uri: String,
}

impl RepoSpec {
  pub fn new(uri: impl Into<String>) -> Result<Self, SpecError> {
    let uri = uri.into();
    if uri.is_empty() {
      return Err(SpecError::invalid(REPO_KIND, uri, "empty URI"));
    }
    if uri.contains('@') {
      return Err(SpecError::invalid(REPO_KIND, uri, "URI cannot contain `@`"));
    }
    Ok(Self { uri })
  }

  pub fn uri(&self) -> &str {
    &self.uri
  }
}

impl fmt::Display for RepoSpec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.uri)
  }
}

impl FromStr for RepoSpec {
  type Err = SpecError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::new(s)
  }
}

impl TryFrom<String> for RepoSpec {
  type Error = SpecError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl From<RepoSpec> for String {
  fn from(spec: RepoSpec) -> Self {
    spec.uri
  }
}

impl RouteSpec for RepoSpec {
  fn route_vars(&self) -> RouteVars {
    RouteVars::from([(keys::REPO_SPEC.to_string(), self.uri.clone())])
  }

  fn from_route_vars(vars: &RouteVars) -> Result<Self, SpecError> {
    required_var(vars, REPO_KIND, keys::REPO_SPEC).and_then(Self::new)
  }
}

/// A repository at a specific revision.
///
/// `commit_id` is only carried alongside a `rev`; the text and route forms
/// have no way to express a commit without a revision. A revision never
/// contains `===`, so the `Rev` route variable splits unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoRevSpec {
  repo: RepoSpec,
  rev: Option<String>,
  commit_id: Option<String>,
}

impl RepoRevSpec {
  /// A repository spec with no revision (the default branch).
  pub fn new(repo: RepoSpec) -> Self {
    Self {
      repo,
      rev: None,
      commit_id: None,
    }
  }

  pub fn with_rev(mut self, rev: impl Into<String>) -> Result<Self, SpecError> {
    let rev = rev.into();
    if rev.is_empty() {
      return Err(SpecError::invalid(REPO_REV_KIND, rev, "empty revision"));
    }
    if rev.contains(COMMIT_SEPARATOR) {
      return Err(SpecError::invalid(
        REPO_REV_KIND,
        rev,
        format!("revision cannot contain `{COMMIT_SEPARATOR}`"),
      ));
    }
    self.rev = Some(rev);
    Ok(self)
  }

  /// Pin the revision to a resolved commit. Requires a revision.
  pub fn with_commit_id(mut self, commit_id: impl Into<String>) -> Result<Self, SpecError> {
    let commit_id = commit_id.into();
    if self.rev.is_none() {
      return Err(SpecError::invalid(REPO_REV_KIND, commit_id, "commit ID without a revision"));
    }
    if commit_id.is_empty() {
      return Err(SpecError::invalid(REPO_REV_KIND, commit_id, "empty commit ID"));
    }
    self.commit_id = Some(commit_id);
    Ok(self)
  }

  pub fn repo(&self) -> &RepoSpec {
    &self.repo
  }

  pub fn rev(&self) -> Option<&str> {
    self.rev.as_deref()
  }

  pub fn commit_id(&self) -> Option<&str> {
    self.commit_id.as_deref()
  }

  /// The `Rev` route variable: `rev` or `rev===commit`.
  fn rev_component(&self) -> Option<String> {
    let rev = self.rev.as_deref()?;
    Some(match self.commit_id.as_deref() {
      Some(commit) => format!("{rev}{COMMIT_SEPARATOR}{commit}"),
      None => rev.to_string(),
    })
  }

  fn with_rev_component(repo: RepoSpec, input: &str, component: &str) -> Result<Self, SpecError> {
    let (rev, commit) = match component.split_once(COMMIT_SEPARATOR) {
      Some((rev, commit)) => (rev, Some(commit)),
      None => (component, None),
    };
    if commit.is_some_and(str::is_empty) {
      return Err(SpecError::invalid(REPO_REV_KIND, input, "empty commit ID"));
    }

    let spec = Self::new(repo)
      .with_rev(rev)
      .map_err(|_| SpecError::invalid(REPO_REV_KIND, input, "empty revision"))?;
    match commit {
      Some(commit) => spec.with_commit_id(commit),
      None => Ok(spec),
    }
  }
}

impl fmt::Display for RepoRevSpec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.rev_component() {
      Some(rev) => write!(f, "{}@{rev}", self.repo),
      None => write!(f, "{}", self.repo),
    }
  }
}

impl FromStr for RepoRevSpec {
  type Err = SpecError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.split_once('@') {
      Some((uri, component)) => Self::with_rev_component(uri.parse()?, s, component),
      None => Ok(Self::new(s.parse()?)),
    }
  }
}

impl TryFrom<String> for RepoRevSpec {
  type Error = SpecError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<RepoRevSpec> for String {
  fn from(spec: RepoRevSpec) -> Self {
    spec.to_string()
  }
}

impl From<RepoSpec> for RepoRevSpec {
  fn from(repo: RepoSpec) -> Self {
    Self::new(repo)
  }
}

impl RouteSpec for RepoRevSpec {
  fn route_vars(&self) -> RouteVars {
    let mut vars = self.repo.route_vars();
    if let Some(rev) = self.rev_component() {
      vars.insert(keys::REV.to_string(), rev);
    }
    vars
  }

  fn from_route_vars(vars: &RouteVars) -> Result<Self, SpecError> {
    let repo = RepoSpec::from_route_vars(vars)?;
    match vars.get(keys::REV).filter(|rev| !rev.is_empty()) {
      Some(component) => Self::with_rev_component(repo, component, component),
      None => Ok(Self::new(repo)),
    }
  }
}
