//! `srcgraph repo`: repositories.

use anyhow::{Context, Result};
use clap::Subcommand;
use srcgraph_api::{RepoListOptions, ReposService};
use srcgraph_core::RepoSpec;

use super::pull::PageArgs;
use super::{Outcome, json};

#[derive(Subcommand, Debug)]
pub enum RepoCommand {
  /// Show a repository
  Get {
    /// Repository URI, e.g. github.com/gorilla/mux
    repo: RepoSpec,
  },

  /// List repositories
  #[command(alias = "ls")]
  List {
    /// Filter by URI or name
    #[arg(long, short = 'q')]
    query: Option<String>,
    #[command(flatten)]
    page: PageArgs,
  },
}

pub async fn handle<S: ReposService>(service: &S, command: RepoCommand) -> Result<Outcome> {
  match command {
    RepoCommand::Get { repo } => {
      let found = service
        .get(&repo)
        .await
        .with_context(|| format!("Failed to fetch repository {repo}"))?;
      json(&found)
    }
    RepoCommand::List { query, page } => {
      let opt = RepoListOptions {
        query,
        list: page.into(),
      };
      let repos = service.list(&opt).await.context("Failed to list repositories")?;
      json(&repos)
    }
  }
}
