//! Candidate components and filter results.

use serde::Serialize;

use super::component::ComponentName;
use super::intent::Intent;
use super::resolve_info::ResolveInfo;

/// One candidate target: a unique component plus every (intent, resolution)
/// pair that matched it, in the order they were merged.
///
/// A candidate always holds at least one match. Matches are only ever
/// appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedComponentInfo {
    pub name: ComponentName,
    intents: Vec<Intent>,
    resolve_infos: Vec<ResolveInfo>,
    pinned: bool,
}

impl ResolvedComponentInfo {
    /// Create a candidate from its first match.
    pub fn new(name: ComponentName, intent: Intent, info: ResolveInfo) -> Self {
        Self {
            name,
            intents: vec![intent],
            resolve_infos: vec![info],
            pinned: false,
        }
    }

    /// Append another match.
    pub fn add(&mut self, intent: Intent, info: ResolveInfo) {
        self.intents.push(intent);
        self.resolve_infos.push(info);
    }

    /// Number of matches.
    pub fn count(&self) -> usize {
        self.intents.len()
    }

    pub fn intent_at(&self, index: usize) -> Option<&Intent> {
        self.intents.get(index)
    }

    pub fn resolve_info_at(&self, index: usize) -> Option<&ResolveInfo> {
        self.resolve_infos.get(index)
    }

    /// The first recorded match. Filters treat it as authoritative.
    pub fn first_resolve_info(&self) -> &ResolveInfo {
        &self.resolve_infos[0]
    }

    /// Iterate matches in insertion order.
    pub fn matches(&self) -> impl Iterator<Item = (&Intent, &ResolveInfo)> {
        self.intents.iter().zip(&self.resolve_infos)
    }

    /// Position of the first match for `intent`.
    pub fn find_intent(&self, intent: &Intent) -> Option<usize> {
        self.intents.iter().position(|i| i == intent)
    }

    /// Position of the first match for `info`.
    pub fn find_resolve_info(&self, info: &ResolveInfo) -> Option<usize> {
        self.resolve_infos.iter().position(|r| r == info)
    }

    pub const fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }
}

/// Result of a filtering pass over a candidate batch.
///
/// The batch itself is always filtered in place; this says whether anything
/// was removed and, when the caller asked for it, carries the batch as it
/// was before the first removal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterOutcome {
    /// Nothing was removed.
    #[default]
    Unchanged,
    /// Candidates were removed; no snapshot was requested.
    Modified,
    /// Candidates were removed; this is the batch before filtering.
    Preserved(Vec<ResolvedComponentInfo>),
}

impl FilterOutcome {
    pub const fn is_modified(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// The pre-filter snapshot, if one was taken.
    pub fn into_original(self) -> Option<Vec<ResolvedComponentInfo>> {
        match self {
            Self::Preserved(original) => Some(original),
            Self::Unchanged | Self::Modified => None,
        }
    }
}
