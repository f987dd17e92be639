//! CLI module
//!
//! Command-line interface for the gateway.
//!
//! # Commands
//!
//! - `search` - Search an entity by free text
//! - `get` - Fetch one record by id
//! - `ping` - Probe upstream reachability
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, EntityArg};
pub use runner::Runner;
pub use server::serve;
