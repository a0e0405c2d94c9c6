//! `srcgraph spec`: parse specs offline and show how they address the API.

use anyhow::Result;
use clap::Subcommand;
use serde_json::json;
use srcgraph_core::{
  PersonSpec, PullRequestCommentSpec, PullRequestSpec, RepoRevSpec, RepoSpec, Route, RouteSpec, UnitSpec,
};

use super::Outcome;

#[derive(Subcommand, Debug)]
pub enum SpecCommand {
  /// Parse a person spec: 'login', 'email@example.com' or '$uid'
  Person {
    /// The person spec
    spec: PersonSpec,
  },

  /// Build a pull request spec
  Pull {
    /// Repository URI, e.g. github.com/gorilla/mux
    repo: RepoSpec,
    /// Pull request number
    number: u32,
  },

  /// Build a pull request comment spec
  Comment {
    /// Repository URI
    repo: RepoSpec,
    /// Pull request number
    number: u32,
    /// Comment ID
    comment: u64,
  },

  /// Build a source unit spec
  Unit {
    /// Repository URI with optional '@rev' or '@rev===commit'
    repo: RepoRevSpec,
    /// Unit type, e.g. GoPackage
    unit_type: String,
    /// Unit name
    unit: String,
  },
}

/// Describe a spec without contacting the API
pub fn handle(command: SpecCommand) -> Result<Outcome> {
  let value = match command {
    SpecCommand::Person { spec } => {
      let kind = match &spec {
        PersonSpec::Login(_) => "login",
        PersonSpec::Email(_) => "email",
        PersonSpec::Uid(_) => "uid",
      };
      json!({
          "kind": kind,
          "spec": spec.to_string(),
          "route_vars": spec.route_vars(),
          "path": Route::User.path(&spec.route_vars())?,
      })
    }
    SpecCommand::Pull { repo, number } => {
      let spec = PullRequestSpec::new(repo, number);
      describe(&spec, Route::RepoPullRequest)?
    }
    SpecCommand::Comment { repo, number, comment } => {
      let spec = PullRequestCommentSpec::new(PullRequestSpec::new(repo, number), comment);
      describe(&spec, Route::RepoPullRequestComment)?
    }
    SpecCommand::Unit { repo, unit_type, unit } => {
      let spec = UnitSpec::new(repo, unit_type, unit)?;
      describe(&spec, Route::Unit)?
    }
  };

  Ok(Outcome::Json(value))
}

fn describe<S: RouteSpec>(spec: &S, route: Route) -> Result<serde_json::Value> {
  let vars = spec.route_vars();
  Ok(json!({
      "route": route.to_string(),
      "route_vars": vars,
      "path": route.path(&vars)?,
  }))
}
