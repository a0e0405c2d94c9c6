//! # Sourcegraph API Endpoints
//!
//! One service trait per resource type, each with an implementation backed
//! by [`crate::Client`]. Code that only needs to talk to a resource should
//! depend on the trait so tests can supply a double.

pub mod pulls;
pub mod repos;
pub mod units;
pub mod users;
