//! `srcgraph pull`: pull requests and their review comments.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use srcgraph_api::{
  ListOptions, PullRequestComment, PullRequestListCommentsOptions, PullRequestListOptions, PullRequestState,
  PullRequestsService,
};
use srcgraph_core::{PullRequestSpec, RepoSpec};

use super::{Outcome, json};

#[derive(Subcommand, Debug)]
pub enum PullCommand {
  /// Show a pull request
  Get {
    /// Repository URI, e.g. github.com/gorilla/mux
    repo: RepoSpec,
    /// Pull request number
    number: u32,
  },

  /// List pull requests in a repository
  #[command(alias = "ls")]
  List {
    /// Repository URI
    repo: RepoSpec,
    /// Only show pull requests in this state
    #[arg(long, value_enum)]
    state: Option<StateArg>,
    #[command(flatten)]
    page: PageArgs,
  },

  /// List review comments on a pull request
  Comments {
    repo: RepoSpec,
    number: u32,
    #[command(flatten)]
    page: PageArgs,
  },

  /// Add a comment to a pull request
  Comment {
    repo: RepoSpec,
    number: u32,
    /// Comment text
    #[arg(long, short = 'm')]
    body: String,
  },

  /// Replace the text of an existing comment
  EditComment {
    repo: RepoSpec,
    number: u32,
    comment_id: u64,
    /// New comment text
    #[arg(long, short = 'm')]
    body: String,
  },

  /// Delete a comment
  DeleteComment {
    repo: RepoSpec,
    number: u32,
    comment_id: u64,
  },
}

/// Pull request state filter
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateArg {
  Open,
  Closed,
  All,
}

impl From<StateArg> for PullRequestState {
  fn from(state: StateArg) -> Self {
    match state {
      StateArg::Open => Self::Open,
      StateArg::Closed => Self::Closed,
      StateArg::All => Self::All,
    }
  }
}

/// Pagination flags shared by list commands
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
  /// Page number, starting at 1
  #[arg(long)]
  pub page: Option<u32>,
  /// Results per page
  #[arg(long)]
  pub per_page: Option<u32>,
}

impl From<PageArgs> for ListOptions {
  fn from(args: PageArgs) -> Self {
    Self {
      page: args.page,
      per_page: args.per_page,
    }
  }
}

pub async fn handle<S: PullRequestsService>(service: &S, command: PullCommand) -> Result<Outcome> {
  match command {
    PullCommand::Get { repo, number } => {
      let spec = PullRequestSpec::new(repo, number);
      let pr = service
        .get(&spec)
        .await
        .with_context(|| format!("Failed to fetch pull request #{number}"))?;
      json(&pr)
    }
    PullCommand::List { repo, state, page } => {
      let opt = PullRequestListOptions {
        state: state.map(Into::into),
        list: page.into(),
      };
      let prs = service
        .list_by_repo(&repo, &opt)
        .await
        .with_context(|| format!("Failed to list pull requests for {repo}"))?;
      json(&prs)
    }
    PullCommand::Comments { repo, number, page } => {
      let spec = PullRequestSpec::new(repo, number);
      let opt = PullRequestListCommentsOptions { list: page.into() };
      let comments = service
        .list_comments(&spec, &opt)
        .await
        .context("Failed to list pull request comments")?;
      json(&comments)
    }
    PullCommand::Comment { repo, number, body } => {
      let spec = PullRequestSpec::new(repo, number);
      let created = service
        .create_comment(&spec, &PullRequestComment::with_body(body))
        .await
        .context("Failed to create comment")?;
      json(&created)
    }
    PullCommand::EditComment {
      repo,
      number,
      comment_id,
      body,
    } => {
      let spec = PullRequestSpec::new(repo, number);
      let comment = PullRequestComment {
        id: Some(comment_id),
        ..PullRequestComment::with_body(body)
      };
      let updated = service
        .edit_comment(&spec, &comment)
        .await
        .with_context(|| format!("Failed to edit comment {comment_id}"))?;
      json(&updated)
    }
    PullCommand::DeleteComment {
      repo,
      number,
      comment_id,
    } => {
      let spec = PullRequestSpec::new(repo, number);
      service
        .delete_comment(&spec, comment_id)
        .await
        .with_context(|| format!("Failed to delete comment {comment_id}"))?;
      Ok(Outcome::Done(format!("Deleted comment {comment_id} on pull request #{number}")))
    }
  }
}
