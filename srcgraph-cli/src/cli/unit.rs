//! `srcgraph unit`: source units.

use anyhow::{Context, Result};
use clap::Subcommand;
use srcgraph_api::{UnitListOptions, UnitsService};
use srcgraph_core::{RepoRevSpec, UnitSpec};

use super::pull::PageArgs;
use super::{Outcome, json};

#[derive(Subcommand, Debug)]
pub enum UnitCommand {
  /// Show a source unit
  Get {
    /// Repository URI with optional '@rev' or '@rev===commit'
    repo: RepoRevSpec,
    /// Unit type, e.g. GoPackage
    unit_type: String,
    /// Unit name
    unit: String,
  },

  /// List source units
  #[command(alias = "ls")]
  List {
    /// Restrict to a repository (repeatable), optionally '@rev'
    #[arg(long = "repo-rev")]
    repo_revs: Vec<RepoRevSpec>,
    /// Restrict to a unit type
    #[arg(long = "type")]
    unit_type: Option<String>,
    /// Free-text filter
    #[arg(long, short = 'q')]
    query: Option<String>,
    #[command(flatten)]
    page: PageArgs,
  },
}

pub async fn handle<S: UnitsService>(service: &S, command: UnitCommand) -> Result<Outcome> {
  match command {
    UnitCommand::Get { repo, unit_type, unit } => {
      let spec = UnitSpec::new(repo, unit_type, unit)?;
      let found = service.get(&spec).await.with_context(|| {
        format!(
          "Failed to fetch unit {} {} in {}",
          spec.unit_type(),
          spec.unit(),
          spec.repo_rev()
        )
      })?;
      json(&found)
    }
    UnitCommand::List {
      repo_revs,
      unit_type,
      query,
      page,
    } => {
      let opt = UnitListOptions {
        repo_revs: repo_revs.iter().map(ToString::to_string).collect(),
        unit_type,
        query,
        list: page.into(),
      };
      let units = service.list(&opt).await.context("Failed to list source units")?;
      json(&units)
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use srcgraph_api::{Result as ApiResult, SourceUnit};

  use super::*;

  #[derive(Default)]
  struct FakeUnits {
    last_list: Mutex<Option<UnitListOptions>>,
  }

  impl UnitsService for FakeUnits {
    async fn get(&self, unit: &UnitSpec) -> ApiResult<SourceUnit> {
      Ok(SourceUnit {
        repo: unit.repo_rev().repo().uri().to_string(),
        commit_id: "abc".into(),
        unit_type: unit.unit_type().to_string(),
        unit: unit.unit().to_string(),
        data: serde_json::Value::Null,
      })
    }

    async fn list(&self, opt: &UnitListOptions) -> ApiResult<Vec<SourceUnit>> {
      *self.last_list.lock().unwrap() = Some(opt.clone());
      Ok(Vec::new())
    }
  }

  #[tokio::test]
  async fn test_get_unit() {
    let outcome = handle(&FakeUnits::default(), UnitCommand::Get {
      repo: "github.com/a/b@main".parse().unwrap(),
      unit_type: "GoPackage".into(),
      unit: "pkg".into(),
    })
    .await
    .unwrap();
    let Outcome::Json(value) = outcome else {
      panic!("expected JSON outcome");
    };
    assert_eq!(value["Repo"], "github.com/a/b");
    assert_eq!(value["Unit"], "pkg");
  }

  #[tokio::test]
  async fn test_list_formats_repo_revs() {
    let fake = FakeUnits::default();
    handle(&fake, UnitCommand::List {
      repo_revs: vec!["a/b".parse().unwrap(), "c/d@v1===f00".parse().unwrap()],
      unit_type: None,
      query: None,
      page: PageArgs::default(),
    })
    .await
    .unwrap();

    let opt = fake.last_list.lock().unwrap().clone().unwrap();
    assert_eq!(opt.repo_revs, vec!["a/b", "c/d@v1===f00"]);
  }
}
