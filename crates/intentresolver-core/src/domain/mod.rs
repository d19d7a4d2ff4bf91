//! Core domain types.
//!
//! These types model what the platform resolver hands back and what the
//! ranking pipeline operates on. They carry no behavior beyond accessors and
//! small derivations.
//!
//! # Structure
//!
//! - `component` - Component and user identity
//! - `intent` - Intents, launch flags and intent filters
//! - `resolve_info` - Platform resolution records
//! - `query` - Package manager query flags and caller options
//! - `candidate` - Merged candidates and filter outcomes

mod candidate;
mod component;
mod intent;
mod query;
mod resolve_info;

pub use candidate::{FilterOutcome, ResolvedComponentInfo};
pub use component::{ComponentName, ParseComponentError, UserHandle};
pub use intent::{ACTION_SEND, ACTION_VIEW, Intent, IntentFilter, IntentFlags};
pub use query::{QueryFlags, QueryOptions};
pub use resolve_info::{ActivityInfo, ApplicationInfo, ResolveInfo};
