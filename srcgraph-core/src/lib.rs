//! # srcgraph Core Library
//!
//! Compact, round-trippable identifiers ("specs") for Sourcegraph resources,
//! the route variables they project into, the named route table used to
//! build request URLs, and the layered client configuration. Nothing in this
//! crate performs I/O beyond reading the optional config file.

pub mod config;
pub mod error;
pub mod router;
pub mod spec;

// Re-export main types for client and CLI consumers
pub use config::{ClientConfig, ConfigError, ConfigFile, DEFAULT_BASE_URL, ENV_SRC_TOKEN, ENV_SRC_URL, Overrides};
pub use error::SpecError;
pub use router::Route;
pub use spec::{
  Email, IssueSpec, Login, PersonSpec, PullRequestCommentSpec, PullRequestSpec, RepoRevSpec, RepoSpec, RouteSpec, RouteVars,
  UnitSpec,
};
