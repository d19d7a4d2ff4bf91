//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from the platform and
//! from the ranking model. They contain no implementation details and use
//! only domain types.
//!
//! # Design Rules
//!
//! - No platform binding types in any signature
//! - Ports are synchronous; callers run them on a worker thread
//! - The scorer's asynchrony is expressed through a one-shot callback only

pub mod component_scorer;
pub mod package_manager;
pub mod permission;

use thiserror::Error;

pub use component_scorer::{ComponentScorer, ComputeCallback};
pub use package_manager::{LastChosenQuery, LastChosenRecord, PackageManagerPort};
pub use permission::{CandidatePolicy, DefaultCandidatePolicy, PermissionChecker, PermissionResult};

/// Errors raised by the platform behind a port.
///
/// These indicate a genuine communication problem with the platform and are
/// never recovered inside the core.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The remote service call failed.
    #[error("Remote call failed: {0}")]
    Remote(String),

    /// The platform has no record of the requested entity.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, etc.).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Platform operation failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),
}
