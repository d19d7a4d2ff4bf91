//! Core services - the resolver's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain types.
//! They don't know about concrete platform implementations.

pub mod filter;
pub mod merge;
pub mod ranking;

mod list_controller;
mod permission_policy;

pub use filter::{filter_ineligible_activities, filter_low_priority};
pub use list_controller::ResolverListController;
pub use merge::add_resolve_list_dedupe;
pub use permission_policy::{
    ComponentPermissionPolicy, FIRST_APP_ZYGOTE_ISOLATED_UID, LAST_ISOLATED_UID, PER_USER_RANGE,
    ROOT_UID, SYSTEM_UID,
};
pub use ranking::{RankError, RankState, RankingEngine};
