//! Package manager answering from a scenario's resolution table.

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use intentresolver_core::{
    ComponentName, Intent, LastChosenQuery, LastChosenRecord, PackageManagerPort, PlatformError,
    QueryFlags, ResolveInfo, UserHandle,
};
use tracing::debug;

use crate::scenario::RememberedChoice;

/// Resolves intents by action against a fixed table and keeps the last
/// choice in memory so it can be written back to the scenario.
#[derive(Debug, Default)]
pub struct ScenarioPackageManager {
    resolutions: BTreeMap<String, Vec<ResolveInfo>>,
    remembered: Mutex<Option<RememberedChoice>>,
}

impl ScenarioPackageManager {
    pub const fn new(
        resolutions: BTreeMap<String, Vec<ResolveInfo>>,
        remembered: Option<RememberedChoice>,
    ) -> Self {
        Self {
            resolutions,
            remembered: Mutex::new(remembered),
        }
    }

    /// The currently remembered choice.
    pub fn remembered(&self) -> Option<RememberedChoice> {
        self.remembered.lock().ok().and_then(|guard| guard.clone())
    }

    fn results_for(&self, intent: &Intent) -> &[ResolveInfo] {
        intent
            .action
            .as_deref()
            .and_then(|action| self.resolutions.get(action))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl PackageManagerPort for ScenarioPackageManager {
    fn query_intent_activities_as_user(
        &self,
        intent: &Intent,
        flags: QueryFlags,
        user: UserHandle,
    ) -> Vec<ResolveInfo> {
        let default_only = flags.contains(QueryFlags::MATCH_DEFAULT_ONLY);
        let mut seen = HashSet::new();

        let results: Vec<ResolveInfo> = self
            .results_for(intent)
            .iter()
            .filter(|info| !default_only || info.is_default)
            .filter(|info| seen.insert(info.component_name()))
            .map(|info| {
                let mut info = info.clone();
                if !flags.contains(QueryFlags::GET_RESOLVED_FILTER) {
                    info.filter = None;
                }
                if !flags.contains(QueryFlags::GET_META_DATA) {
                    info.activity_info.metadata = None;
                }
                info
            })
            .collect();

        debug!(
            action = intent.action.as_deref().unwrap_or("-"),
            %user,
            results = results.len(),
            "Answered scenario query"
        );
        results
    }

    fn last_chosen_activity(
        &self,
        query: &LastChosenQuery,
    ) -> Result<Option<ResolveInfo>, PlatformError> {
        let Some(choice) = self.remembered() else {
            return Ok(None);
        };
        if choice.action != query.intent.action {
            return Ok(None);
        }

        let component: ComponentName = choice
            .component
            .parse()
            .map_err(|_| PlatformError::NotFound(choice.component.clone()))?;

        let default_only = query.flags.contains(QueryFlags::MATCH_DEFAULT_ONLY);
        let found = self
            .results_for(&query.intent)
            .iter()
            .find(|info| {
                info.activity_info.is_component(&component) && (!default_only || info.is_default)
            })
            .cloned();

        if found.is_none() {
            debug!(%component, "Remembered component no longer resolves");
        }
        Ok(found)
    }

    fn set_last_chosen_activity(&self, record: &LastChosenRecord) -> Result<(), PlatformError> {
        let component = record
            .component
            .as_ref()
            .ok_or_else(|| PlatformError::NotFound("chosen component".to_string()))?;

        let mut remembered = self
            .remembered
            .lock()
            .map_err(|_| PlatformError::Remote("last-chosen store is poisoned".to_string()))?;
        *remembered = Some(RememberedChoice {
            action: record.intent.action.clone(),
            component: component.to_string(),
            filter: record.filter.clone(),
            match_quality: record.match_quality,
        });

        debug!(%component, "Remembered last choice");
        Ok(())
    }
}
