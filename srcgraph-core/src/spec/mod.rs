//! # Specs
//!
//! A spec is a compact identifier for a remote resource. Every spec projects
//! into [`RouteVars`] for URL construction and can be rebuilt from them.
//! Composite specs extend the route variables of the spec they wrap rather
//! than replacing them, so a comment spec's map is its pull request's map plus
//! one more key.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::SpecError;

mod person;
mod pull;
mod repo;
mod unit;

pub use person::{Email, Login, PersonSpec};
pub use pull::{IssueSpec, PullRequestCommentSpec, PullRequestSpec};
pub use repo::{RepoRevSpec, RepoSpec};
pub use unit::UnitSpec;

/// String-keyed variables substituted into a route's path template.
pub type RouteVars = BTreeMap<String, String>;

/// Route variable keys recognized by the route table.
pub mod keys {
  pub const REPO_SPEC: &str = "RepoSpec";
  pub const REV: &str = "Rev";
  pub const PULL: &str = "Pull";
  pub const COMMENT_ID: &str = "CommentID";
  pub const ISSUE: &str = "Issue";
  pub const PERSON_SPEC: &str = "PersonSpec";
  pub const UNIT_TYPE: &str = "UnitType";
  pub const UNIT: &str = "Unit";
}

/// A spec that can be projected into route variables and rebuilt from them.
///
/// `from_route_vars(&spec.route_vars())` must return a value equal to `spec`.
pub trait RouteSpec: Sized {
  /// Route variables identifying this resource. Never fails.
  fn route_vars(&self) -> RouteVars;

  /// Rebuild the spec from route variables, typically produced by
  /// [`RouteSpec::route_vars`].
  fn from_route_vars(vars: &RouteVars) -> Result<Self, SpecError>;
}

/// Look up a required, non-empty route variable.
pub(crate) fn required_var<'a>(vars: &'a RouteVars, kind: &'static str, key: &str) -> Result<&'a str, SpecError> {
  match vars.get(key).map(String::as_str) {
    Some(value) if !value.is_empty() => Ok(value),
    _ => Err(SpecError::missing_var(kind, key)),
  }
}

/// Look up a required route variable and parse it as a number.
pub(crate) fn numeric_var<T: FromStr>(vars: &RouteVars, kind: &'static str, key: &str) -> Result<T, SpecError> {
  let raw = required_var(vars, kind, key)?;
  raw
    .parse::<T>()
    .map_err(|_| SpecError::invalid(kind, raw, format!("route variable `{key}` is not a number")))
}
