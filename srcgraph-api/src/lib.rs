//! # Sourcegraph API Client
//!
//! Provides Sourcegraph REST API integration for repositories, pull requests,
//! users and source units. Every resource is reached through a service trait
//! so callers can substitute a test double for the HTTP-backed
//! implementation.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod options;

// Re-export the client
pub use client::Client;
// Re-export service traits and their HTTP-backed implementations
pub use endpoints::pulls::{PullRequests, PullRequestsService};
pub use endpoints::repos::{Repos, ReposService};
pub use endpoints::units::{Units, UnitsService};
pub use endpoints::users::{Users, UsersService};
pub use error::{Error, Result};
// Re-export models
pub use models::{GitHubUser, PullRequest, PullRequestBranch, PullRequestComment, Repo, SourceUnit, User};
pub use options::{
  ListOptions, PullRequestListCommentsOptions, PullRequestListOptions, PullRequestState, RepoListOptions,
  UnitListOptions, UserListOptions,
};
// Re-export the spec types callers need to address resources
pub use srcgraph_core::{
  ClientConfig, PersonSpec, PullRequestCommentSpec, PullRequestSpec, RepoRevSpec, RepoSpec, RouteSpec, UnitSpec,
};
