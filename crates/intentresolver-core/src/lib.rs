#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ACTION_SEND, ACTION_VIEW, ActivityInfo, ApplicationInfo, ComponentName, FilterOutcome, Intent,
    IntentFilter, IntentFlags, ParseComponentError, QueryFlags, QueryOptions, ResolveInfo,
    ResolvedComponentInfo, UserHandle,
};
pub use ports::{
    CandidatePolicy, ComponentScorer, ComputeCallback, CoreError, DefaultCandidatePolicy,
    LastChosenQuery, LastChosenRecord, PackageManagerPort, PermissionChecker, PermissionResult,
    PlatformError,
};
pub use services::{
    ComponentPermissionPolicy, RankState, RankingEngine, ResolverListController,
};
pub use settings::{
    ControllerSettings, DEFAULT_LAUNCHED_FROM_UID, FIRST_APPLICATION_UID, SettingsError,
    SettingsUpdate, validate_settings,
};

// Used by integration tests only
#[cfg(test)]
use mockall as _;
