//! Source unit specs.

use serde::{Deserialize, Serialize};

use super::{RepoRevSpec, RouteSpec, RouteVars, keys, required_var};
use crate::error::SpecError;

const KIND: &str = "unit";

/// Identifies a source unit (a package, module or similar build unit) within a
/// repository revision. Unit type and name are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UnitSpecFields")]
pub struct UnitSpec {
  repo_rev: RepoRevSpec,
  unit_type: String,
  unit: String,
}

#[derive(Deserialize)]
struct UnitSpecFields {
  repo_rev: RepoRevSpec,
  unit_type: String,
  unit: String,
}

impl UnitSpec {
  pub fn new(repo_rev: RepoRevSpec, unit_type: impl Into<String>, unit: impl Into<String>) -> Result<Self, SpecError> {
    let unit_type = unit_type.into();
    let unit = unit.into();
    if unit_type.is_empty() {
      return Err(SpecError::invalid(KIND, unit, "empty unit type"));
    }
    if unit.is_empty() {
      return Err(SpecError::invalid(KIND, unit_type, "empty unit name"));
    }
    Ok(Self {
      repo_rev,
      unit_type,
      unit,
    })
  }

  pub fn repo_rev(&self) -> &RepoRevSpec {
    &self.repo_rev
  }

  pub fn unit_type(&self) -> &str {
    &self.unit_type
  }

  pub fn unit(&self) -> &str {
    &self.unit
  }
}

impl TryFrom<UnitSpecFields> for UnitSpec {
  type Error = SpecError;

  fn try_from(fields: UnitSpecFields) -> Result<Self, Self::Error> {
    Self::new(fields.repo_rev, fields.unit_type, fields.unit)
  }
}

impl RouteSpec for UnitSpec {
  fn route_vars(&self) -> RouteVars {
    let mut vars = self.repo_rev.route_vars();
    vars.insert(keys::UNIT_TYPE.to_string(), self.unit_type.clone());
    vars.insert(keys::UNIT.to_string(), self.unit.clone());
    vars
  }

  fn from_route_vars(vars: &RouteVars) -> Result<Self, SpecError> {
    let repo_rev = RepoRevSpec::from_route_vars(vars)?;
    let unit_type = required_var(vars, KIND, keys::UNIT_TYPE)?;
    let unit = required_var(vars, KIND, keys::UNIT)?;
    Self::new(repo_rev, unit_type, unit)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::spec::RepoSpec;

  fn repo(uri: &str) -> RepoSpec {
    RepoSpec::new(uri).unwrap()
  }

  #[test]
  fn test_unit_route_vars_round_trip() {
    let repo_rev = RepoRevSpec::new(repo("github.com/a/b")).with_rev("main").unwrap();
    let spec = UnitSpec::new(repo_rev, "GoPackage", "github.com/a/b/cmd").unwrap();
    let vars = spec.route_vars();
    assert_eq!(vars["RepoSpec"], "github.com/a/b");
    assert_eq!(vars["Rev"], "main");
    assert_eq!(vars["UnitType"], "GoPackage");
    assert_eq!(vars["Unit"], "github.com/a/b/cmd");
    assert_eq!(UnitSpec::from_route_vars(&vars).unwrap(), spec);
  }

  #[test]
  fn test_unit_requires_type_and_name() {
    let mut vars = repo("a/b").route_vars();
    vars.insert("UnitType".into(), "GoPackage".into());
    let err = UnitSpec::from_route_vars(&vars).unwrap_err();
    assert!(err.to_string().contains("`Unit`"));
  }

  #[test]
  fn test_new_rejects_empty_parts() {
    let repo_rev = RepoRevSpec::new(repo("a/b"));
    assert!(UnitSpec::new(repo_rev.clone(), "", "pkg").is_err());
    assert!(UnitSpec::new(repo_rev, "GoPackage", "").is_err());
  }

  #[test]
  fn test_deserialize_validates() {
    let spec: UnitSpec =
      serde_json::from_str(r#"{"repo_rev":"a/b@v1","unit_type":"GoPackage","unit":"pkg"}"#).unwrap();
    assert_eq!(spec.repo_rev().rev(), Some("v1"));
    assert_eq!(spec.unit(), "pkg");

    let empty = r#"{"repo_rev":"a/b","unit_type":"","unit":"pkg"}"#;
    assert!(serde_json::from_str::<UnitSpec>(empty).is_err());
  }
}
