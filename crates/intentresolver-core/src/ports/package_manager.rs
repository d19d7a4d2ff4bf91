//! Package manager port.
//!
//! This is the platform resolution service: it answers which activities can
//! handle an intent and remembers the user's last choice. The core never
//! talks to the platform directly.

use super::PlatformError;
use crate::domain::{ComponentName, Intent, IntentFilter, QueryFlags, ResolveInfo, UserHandle};

/// Lookup key for the remembered last-chosen activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastChosenQuery {
    pub intent: Intent,
    pub resolved_type: Option<String>,
    pub flags: QueryFlags,
}

/// A choice to remember for future resolutions of similar intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastChosenRecord {
    pub intent: Intent,
    pub resolved_type: Option<String>,
    pub flags: QueryFlags,
    /// Filter that matched the chosen activity.
    pub filter: IntentFilter,
    /// Match quality of that filter.
    pub match_quality: i32,
    /// The chosen component, taken from the intent.
    pub component: Option<ComponentName>,
}

/// Port for querying the platform resolver.
///
/// Implementations are called from a worker thread and may block.
pub trait PackageManagerPort: Send + Sync {
    /// Resolve `intent` for `user`.
    ///
    /// The returned list never contains two records for the same component.
    /// An empty list means nothing can handle the intent.
    fn query_intent_activities_as_user(
        &self,
        intent: &Intent,
        flags: QueryFlags,
        user: UserHandle,
    ) -> Vec<ResolveInfo>;

    /// Read the activity remembered for a query, if any.
    fn last_chosen_activity(
        &self,
        query: &LastChosenQuery,
    ) -> Result<Option<ResolveInfo>, PlatformError>;

    /// Remember a choice.
    fn set_last_chosen_activity(&self, record: &LastChosenRecord) -> Result<(), PlatformError>;
}
