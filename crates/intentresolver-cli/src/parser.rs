//! Main CLI parser and top-level argument handling.
//!
//! Global options here override the scenario file's settings.

use clap::Parser;
use intentresolver_core::{SettingsUpdate, UserHandle};

use crate::commands::Commands;

/// Command-line interface for driving the resolver core over scenario files.
#[derive(Parser, Debug)]
#[command(name = "intentresolver")]
#[command(about = "Resolve, filter and rank intent targets from a scenario file")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Uid of the app that launched the resolver
    #[arg(long, global = true, env = "INTENTRESOLVER_UID")]
    pub uid: Option<u32>,

    /// User id to resolve for (-2 is the current user, -1 all users)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub user: Option<i32>,

    /// Only rank this many leading candidates
    #[arg(long = "top-k", global = true, env = "INTENTRESOLVER_TOP_K")]
    pub top_k: Option<usize>,

    /// Only match filters in the default category
    #[arg(long = "default-only", global = true, value_name = "BOOL")]
    pub default_only: Option<bool>,

    /// Ask for the filter that matched each candidate
    #[arg(long = "resolved-filter", global = true, value_name = "BOOL")]
    pub resolved_filter: Option<bool>,

    /// Ask for activity metadata
    #[arg(long = "metadata", global = true, value_name = "BOOL")]
    pub metadata: Option<bool>,

    /// Skip the priority filter
    #[arg(long = "keep-low-priority", global = true)]
    pub keep_low_priority: bool,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings overrides given on the command line.
    pub fn settings_update(&self) -> SettingsUpdate {
        SettingsUpdate {
            launched_from_uid: self.uid.map(Some),
            referrer_package: None,
            target_user: self.user.map(|id| Some(UserHandle(id))),
            top_k: self.top_k.map(Some),
            resolved_filter: self.resolved_filter,
            activity_metadata: self.metadata,
            default_only: self.default_only,
        }
    }
}
