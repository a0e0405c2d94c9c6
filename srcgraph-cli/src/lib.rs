//! # srcgraph CLI Library
//!
//! Command definitions and handlers for the `srcgraph` command line tool.
//! Handlers depend on the API service traits rather than the concrete client
//! so they can be exercised against test doubles.

pub mod cli;
pub mod output;
