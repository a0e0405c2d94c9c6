//! # Command Line Interface
//!
//! Defines the CLI structure and dispatches subcommands to their handlers.

mod pull;
mod repo;
mod spec;
mod unit;
mod user;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde_json::Value;
use srcgraph_api::Client;
use srcgraph_core::{ClientConfig, Overrides};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::output::{print_info, print_success, to_pretty_json};

pub use pull::PullCommand;
pub use repo::RepoCommand;
pub use spec::SpecCommand;
pub use unit::UnitCommand;
pub use user::UserCommand;

/// Top-level CLI command for the srcgraph tool
#[derive(Parser, Debug)]
#[command(name = "srcgraph")]
#[command(about = "A command line client for the Sourcegraph API")]
#[command(
  long_about = "srcgraph talks to the Sourcegraph REST API.\n\n\
        Resources are addressed with compact specs: repositories as 'host/owner/name'\n\
        (optionally '@rev'), people as 'login', 'email@example.com' or '$uid'."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  #[command(flatten)]
  pub connection: ConnectionArgs,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Endpoint and credentials. Unset flags fall back to the environment and
/// then to the config file.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
  /// Sourcegraph API endpoint
  #[arg(long, global = true, env = "SRC_URL", hide_env_values = true)]
  pub url: Option<String>,

  /// API access token
  #[arg(long, global = true, env = "SRC_TOKEN", hide_env_values = true)]
  pub token: Option<String>,
}

/// Subcommands for the srcgraph tool
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Parse a spec and show its route variables (no network access)
  #[command(subcommand)]
  Spec(SpecCommand),

  #[command(flatten)]
  Api(ApiCommand),
}

/// Subcommands that talk to the API
#[derive(Subcommand, Debug)]
pub enum ApiCommand {
  /// Pull request operations
  #[command(subcommand, alias = "pr")]
  Pull(PullCommand),

  /// Repository operations
  #[command(subcommand)]
  Repo(RepoCommand),

  /// User operations
  #[command(subcommand)]
  User(UserCommand),

  /// Source unit operations
  #[command(subcommand)]
  Unit(UnitCommand),
}

/// What a handler produced
#[derive(Debug, PartialEq)]
pub enum Outcome {
  /// A value to print as JSON
  Json(Value),
  /// A one-line confirmation
  Done(String),
}

/// Run the parsed command line
pub fn handle_cli(cli: Cli) -> Result<()> {
  let outcome = match cli.command {
    Commands::Spec(command) => spec::handle(command)?,
    Commands::Api(command) => {
      let config = ClientConfig::load(Overrides {
        url: cli.connection.url,
        token: cli.connection.token,
      })
      .context("Failed to load configuration")?;
      debug!(url = %config.base_url, "Using Sourcegraph endpoint");

      let client = Client::new(config);
      let rt = Runtime::new().context("Failed to create async runtime")?;
      rt.block_on(dispatch(&client, command))?
    }
  };

  match outcome {
    Outcome::Json(Value::Array(items)) if items.is_empty() => print_info("No results found"),
    Outcome::Json(value) => println!("{}", to_pretty_json(&value)?),
    Outcome::Done(message) => print_success(&message),
  }
  Ok(())
}

async fn dispatch(client: &Client, command: ApiCommand) -> Result<Outcome> {
  match command {
    ApiCommand::Pull(command) => pull::handle(&client.pull_requests(), command).await,
    ApiCommand::Repo(command) => repo::handle(&client.repos(), command).await,
    ApiCommand::User(command) => user::handle(&client.users(), command).await,
    ApiCommand::Unit(command) => unit::handle(&client.units(), command).await,
  }
}

/// Serialize a handler result for printing
pub(crate) fn json<T: serde::Serialize>(value: &T) -> Result<Outcome> {
  Ok(Outcome::Json(
    serde_json::to_value(value).context("Failed to serialize response")?,
  ))
}
