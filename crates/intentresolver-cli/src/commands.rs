//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;

/// Every command reads one scenario file.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve and filter candidates
    Candidates {
        /// Path to the scenario JSON file
        scenario: PathBuf,
    },

    /// Resolve, filter and rank candidates
    Rank {
        /// Path to the scenario JSON file
        scenario: PathBuf,
    },

    /// Show the activity remembered for the target intent
    LastChosen {
        /// Path to the scenario JSON file
        scenario: PathBuf,
    },

    /// Remember a candidate as the user's choice and save it to the scenario
    Remember {
        /// Path to the scenario JSON file
        scenario: PathBuf,
        /// Chosen component, as package/class (package/.Class is accepted)
        component: String,
    },
}
