//! Pull request, pull request comment and issue specs.

use serde::{Deserialize, Serialize};

use super::{RepoSpec, RouteSpec, RouteVars, keys, numeric_var};
use crate::error::SpecError;

/// Identifies a pull request by its base repository and sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PullRequestSpec {
  pub repo: RepoSpec,
  pub number: u32,
}

impl PullRequestSpec {
  pub fn new(repo: RepoSpec, number: u32) -> Self {
    Self { repo, number }
  }

  /// The issue sharing this pull request's repository and number.
  pub fn issue_spec(&self) -> IssueSpec {
    IssueSpec {
      repo: self.repo.clone(),
      number: self.number,
    }
  }
}

impl RouteSpec for PullRequestSpec {
  fn route_vars(&self) -> RouteVars {
    let mut vars = self.repo.route_vars();
    vars.insert(keys::PULL.to_string(), self.number.to_string());
    vars
  }

  fn from_route_vars(vars: &RouteVars) -> Result<Self, SpecError> {
    let repo = RepoSpec::from_route_vars(vars)?;
    let number = numeric_var(vars, "pull request", keys::PULL)?;
    Ok(Self { repo, number })
  }
}

/// Identifies a comment on a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PullRequestCommentSpec {
  pub pull: PullRequestSpec,
  pub comment: u64,
}

impl PullRequestCommentSpec {
  pub fn new(pull: PullRequestSpec, comment: u64) -> Self {
    Self { pull, comment }
  }
}

impl RouteSpec for PullRequestCommentSpec {
  fn route_vars(&self) -> RouteVars {
    let mut vars = self.pull.route_vars();
    vars.insert(keys::COMMENT_ID.to_string(), self.comment.to_string());
    vars
  }

  fn from_route_vars(vars: &RouteVars) -> Result<Self, SpecError> {
    let pull = PullRequestSpec::from_route_vars(vars)?;
    let comment = numeric_var(vars, "pull request comment", keys::COMMENT_ID)?;
    Ok(Self { pull, comment })
  }
}

/// Identifies an issue by repository and number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueSpec {
  pub repo: RepoSpec,
  pub number: u32,
}

impl RouteSpec for IssueSpec {
  fn route_vars(&self) -> RouteVars {
    let mut vars = self.repo.route_vars();
    vars.insert(keys::ISSUE.to_string(), self.number.to_string());
    vars
  }

  fn from_route_vars(vars: &RouteVars) -> Result<Self, SpecError> {
    let repo = RepoSpec::from_route_vars(vars)?;
    let number = numeric_var(vars, "issue", keys::ISSUE)?;
    Ok(Self { repo, number })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pull(uri: &str, number: u32) -> PullRequestSpec {
    PullRequestSpec::new(RepoSpec::new(uri).unwrap(), number)
  }

  #[test]
  fn test_pull_request_route_vars() {
    let vars = pull("a/b", 5).route_vars();
    assert_eq!(vars.len(), 2);
    assert_eq!(vars["RepoSpec"], "a/b");
    assert_eq!(vars["Pull"], "5");
  }

  #[test]
  fn test_comment_route_vars_extend_pull_vars() {
    let spec = PullRequestCommentSpec::new(pull("a/b", 5), 7);
    let vars = spec.route_vars();
    assert_eq!(vars.len(), 3);
    assert_eq!(vars["RepoSpec"], "a/b");
    assert_eq!(vars["Pull"], "5");
    assert_eq!(vars["CommentID"], "7");
  }

  #[test]
  fn test_unmarshal_is_left_inverse_of_route_vars() {
    let pr = pull("github.com/gorilla/mux", 123);
    assert_eq!(PullRequestSpec::from_route_vars(&pr.route_vars()).unwrap(), pr);

    let comment = PullRequestCommentSpec::new(pr.clone(), 9_876_543_210);
    assert_eq!(
      PullRequestCommentSpec::from_route_vars(&comment.route_vars()).unwrap(),
      comment
    );

    let issue = pr.issue_spec();
    assert_eq!(IssueSpec::from_route_vars(&issue.route_vars()).unwrap(), issue);
  }

  #[test]
  fn test_unmarshal_missing_pull() {
    let vars = RepoSpec::new("a/b").unwrap().route_vars();
    let err = PullRequestSpec::from_route_vars(&vars).unwrap_err();
    assert_eq!(err.kind(), "pull request");
  }

  #[test]
  fn test_unmarshal_non_numeric_pull() {
    let mut vars = RepoSpec::new("a/b").unwrap().route_vars();
    vars.insert("Pull".into(), "five".into());
    assert!(PullRequestSpec::from_route_vars(&vars).is_err());
  }

  #[test]
  fn test_unmarshal_propagates_repo_error() {
    let vars = RouteVars::from([("Pull".to_string(), "5".to_string())]);
    let err = PullRequestSpec::from_route_vars(&vars).unwrap_err();
    assert_eq!(err, SpecError::missing_var("repo", "RepoSpec"));
  }

  #[test]
  fn test_unmarshal_comment_requires_comment_id() {
    let vars = pull("a/b", 5).route_vars();
    let err = PullRequestCommentSpec::from_route_vars(&vars).unwrap_err();
    assert_eq!(err.kind(), "pull request comment");
  }

  #[test]
  fn test_issue_spec_shares_repo_and_number() {
    let issue = pull("a/b", 5).issue_spec();
    assert_eq!(issue.repo.uri(), "a/b");
    assert_eq!(issue.number, 5);
    assert_eq!(issue.route_vars()["Issue"], "5");
  }
}
