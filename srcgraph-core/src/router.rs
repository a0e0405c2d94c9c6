//! # Route Table
//!
//! Named API routes and their path templates. A template placeholder is
//! either `{Name}`, which must be present in the route variables, or
//! `{@Name}`, which renders as `@value` when present and as nothing
//! otherwise. Values are percent-encoded on substitution. Repository URIs,
//! revisions and unit names keep their slashes; every other value is a single
//! path segment.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::SpecError;
use crate::spec::{RouteVars, keys};

/// Escaped in every substituted value. `%` is included so a value is never
/// read as already encoded, and backslash because URL parsers treat it as `/`.
const PATH_VALUE: &AsciiSet = &CONTROLS
  .add(b' ')
  .add(b'"')
  .add(b'#')
  .add(b'%')
  .add(b'<')
  .add(b'>')
  .add(b'?')
  .add(b'\\')
  .add(b'^')
  .add(b'`')
  .add(b'{')
  .add(b'|')
  .add(b'}');

/// Escaped in values that must stay a single path segment.
const SEGMENT_VALUE: &AsciiSet = &PATH_VALUE.add(b'/');

/// A named route of the Sourcegraph REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
  Repos,
  Repo,
  RepoPullRequests,
  RepoPullRequest,
  RepoPullRequestComments,
  RepoPullRequestComment,
  RepoIssue,
  Users,
  User,
  Units,
  Unit,
}

impl Route {
  /// The path template for this route.
  pub const fn template(self) -> &'static str {
    match self {
      Self::Repos => "/repos",
      Self::Repo => "/repos/{RepoSpec}",
      Self::RepoPullRequests => "/repos/{RepoSpec}/.pulls",
      Self::RepoPullRequest => "/repos/{RepoSpec}/.pulls/{Pull}",
      Self::RepoPullRequestComments => "/repos/{RepoSpec}/.pulls/{Pull}/.comments",
      Self::RepoPullRequestComment => "/repos/{RepoSpec}/.pulls/{Pull}/.comments/{CommentID}",
      Self::RepoIssue => "/repos/{RepoSpec}/.issues/{Issue}",
      Self::Users => "/users",
      Self::User => "/users/{PersonSpec}",
      Self::Units => "/.units",
      Self::Unit => "/repos/{RepoSpec}{@Rev}/.units/{UnitType}/{Unit}",
    }
  }

  /// Substitute route variables into this route's template, producing a
  /// percent-encoded path.
  ///
  /// Extra variables are ignored; a missing required variable is an error.
  /// So is a value holding a `.` or `..` segment: URL parsers resolve those,
  /// which would address a different route.
  pub fn path(self, vars: &RouteVars) -> Result<String, SpecError> {
    let template = self.template();
    let mut path = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
      path.push_str(&rest[..open]);
      let Some(close) = rest[open..].find('}') else {
        return Err(SpecError::invalid("route", template, "unterminated placeholder"));
      };
      let placeholder = &rest[open + 1..open + close];

      match placeholder.strip_prefix('@') {
        Some(name) => {
          if let Some(value) = vars.get(name).filter(|v| !v.is_empty()) {
            path.push('@');
            path.push_str(&encode_value(name, value)?);
          }
        }
        None => match vars.get(placeholder).filter(|v| !v.is_empty()) {
          Some(value) => path.push_str(&encode_value(placeholder, value)?),
          None => return Err(SpecError::missing_var("route", placeholder)),
        },
      }

      rest = &rest[open + close + 1..];
    }
    path.push_str(rest);

    Ok(path)
  }
}

fn keeps_slashes(name: &str) -> bool {
  matches!(name, keys::REPO_SPEC | keys::REV | keys::UNIT)
}

fn is_dot_segment(segment: &str) -> bool {
  matches!(segment, "." | "..")
}

fn encode_value(name: &str, value: &str) -> Result<String, SpecError> {
  let keep_slashes = keeps_slashes(name);
  let has_dot_segment = if keep_slashes {
    value.split('/').any(is_dot_segment)
  } else {
    is_dot_segment(value)
  };
  if has_dot_segment {
    return Err(SpecError::invalid(
      "route",
      value,
      format!("route variable `{name}` contains a `.` or `..` path segment"),
    ));
  }

  let set = if keep_slashes { PATH_VALUE } else { SEGMENT_VALUE };
  Ok(utf8_percent_encode(value, set).to_string())
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(self, f)
  }
}

#[cfg(test)]
mod tests {
  use test_case::test_case;

  use super::*;
  use crate::spec::{PersonSpec, PullRequestCommentSpec, PullRequestSpec, RepoRevSpec, RepoSpec, RouteSpec, UnitSpec};

  fn repo(uri: &str) -> RepoSpec {
    RepoSpec::new(uri).unwrap()
  }

  fn user_path(login: &str) -> Result<String, SpecError> {
    Route::User.path(&PersonSpec::parse(login).unwrap().route_vars())
  }

  #[test]
  fn test_static_routes() {
    assert_eq!(Route::Repos.path(&RouteVars::new()).unwrap(), "/repos");
    assert_eq!(Route::Units.path(&RouteVars::new()).unwrap(), "/.units");
  }

  #[test]
  fn test_pull_request_comment_path() {
    let spec = PullRequestCommentSpec::new(PullRequestSpec::new(repo("github.com/a/b"), 5), 7);
    let path = Route::RepoPullRequestComment.path(&spec.route_vars()).unwrap();
    assert_eq!(path, "/repos/github.com/a/b/.pulls/5/.comments/7");
  }

  #[test]
  fn test_extra_vars_are_ignored() {
    let spec = PullRequestCommentSpec::new(PullRequestSpec::new(repo("a/b"), 1), 2);
    let path = Route::RepoPullRequest.path(&spec.route_vars()).unwrap();
    assert_eq!(path, "/repos/a/b/.pulls/1");
  }

  #[test]
  fn test_missing_required_var() {
    let vars = repo("a/b").route_vars();
    let err = Route::RepoPullRequest.path(&vars).unwrap_err();
    assert!(err.to_string().contains("`Pull`"));
  }

  #[test]
  fn test_optional_rev() {
    let repo_rev = RepoRevSpec::new(repo("a/b"));
    let unit = UnitSpec::new(repo_rev.clone(), "GoPackage", "pkg").unwrap();
    assert_eq!(
      Route::Unit.path(&unit.route_vars()).unwrap(),
      "/repos/a/b/.units/GoPackage/pkg"
    );

    let pinned_rev = repo_rev.with_rev("v1").and_then(|spec| spec.with_commit_id("abc")).unwrap();
    let pinned = UnitSpec::new(pinned_rev, "GoPackage", "pkg").unwrap();
    assert_eq!(
      Route::Unit.path(&pinned.route_vars()).unwrap(),
      "/repos/a/b@v1===abc/.units/GoPackage/pkg"
    );
  }

  #[test]
  fn test_user_path() {
    assert_eq!(user_path("$3").unwrap(), "/users/$3");
    assert_eq!(user_path("a@a.com").unwrap(), "/users/a@a.com");
  }

  #[test_case("a?b", "/users/a%3Fb" ; "query delimiter")]
  #[test_case("a#b", "/users/a%23b" ; "fragment delimiter")]
  #[test_case("a/b", "/users/a%2Fb" ; "slash stays in segment")]
  #[test_case("100%", "/users/100%25" ; "percent")]
  #[test_case("a b", "/users/a%20b" ; "space")]
  #[test_case("a\\b", "/users/a%5Cb" ; "backslash")]
  #[test_case(".a", "/users/.a" ; "leading dot")]
  fn test_segment_values_are_encoded(login: &str, expected: &str) {
    assert_eq!(user_path(login).unwrap(), expected);
  }

  #[test_case("." ; "dot")]
  #[test_case(".." ; "dot dot")]
  fn test_dot_segment_rejected(login: &str) {
    let err = user_path(login).unwrap_err();
    assert_eq!(err.kind(), "route");
  }

  #[test]
  fn test_repo_uri_keeps_slashes() {
    let spec = PullRequestSpec::new(repo("example.com/a b/c?d"), 1);
    let path = Route::RepoPullRequest.path(&spec.route_vars()).unwrap();
    assert_eq!(path, "/repos/example.com/a%20b/c%3Fd/.pulls/1");
  }

  #[test_case("github.com/a/.." ; "trailing dot dot")]
  #[test_case("github.com/./b" ; "inner dot")]
  fn test_repo_uri_dot_segment_rejected(uri: &str) {
    let err = Route::Repo.path(&repo(uri).route_vars()).unwrap_err();
    assert_eq!(err.kind(), "route");
  }

  #[test]
  fn test_rev_and_unit_are_encoded() {
    let repo_rev = RepoRevSpec::new(repo("a/b")).with_rev("feature/x#1").unwrap();
    let unit = UnitSpec::new(repo_rev, "Go Package", "cmd/tool").unwrap();
    assert_eq!(
      Route::Unit.path(&unit.route_vars()).unwrap(),
      "/repos/a/b@feature/x%231/.units/Go%20Package/cmd/tool"
    );
  }
}
