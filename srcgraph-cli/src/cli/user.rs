//! `srcgraph user`: users, addressed by person spec.

use anyhow::{Context, Result};
use clap::Subcommand;
use srcgraph_api::{UserListOptions, UsersService};
use srcgraph_core::PersonSpec;

use super::pull::PageArgs;
use super::{Outcome, json};

#[derive(Subcommand, Debug)]
pub enum UserCommand {
  /// Show a user
  Get {
    /// 'login', 'email@example.com' or '$uid'
    person: PersonSpec,
  },

  /// List users
  #[command(alias = "ls")]
  List {
    /// Filter by login or name
    #[arg(long, short = 'q')]
    query: Option<String>,
    #[command(flatten)]
    page: PageArgs,
  },
}

pub async fn handle<S: UsersService>(service: &S, command: UserCommand) -> Result<Outcome> {
  match command {
    UserCommand::Get { person } => {
      let user = service
        .get(&person)
        .await
        .with_context(|| format!("Failed to fetch user {person}"))?;
      json(&user)
    }
    UserCommand::List { query, page } => {
      let opt = UserListOptions {
        query,
        list: page.into(),
      };
      let users = service.list(&opt).await.context("Failed to list users")?;
      json(&users)
    }
  }
}
