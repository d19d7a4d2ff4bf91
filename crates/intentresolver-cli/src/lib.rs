#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod adapters;
pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod scenario;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap, effective_settings};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
pub use scenario::{RememberedChoice, Scenario};
