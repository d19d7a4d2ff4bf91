//! Table-driven relevance scorer.
//!
//! Orders candidates the way the resolver's stock comparator does: targets
//! in another user's profile go last, pinned candidates go first, and the
//! rest follow the score table from highest to lowest.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::thread;

use intentresolver_core::{
    ComponentName, ComponentScorer, ComputeCallback, ResolvedComponentInfo, UserHandle,
};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct TableScorer {
    scores: HashMap<ComponentName, f32>,
    selections: Mutex<Vec<ComponentName>>,
    destroyed: AtomicBool,
}

impl TableScorer {
    pub const fn new(scores: HashMap<ComponentName, f32>) -> Self {
        Self {
            scores,
            selections: Mutex::new(Vec::new()),
            destroyed: AtomicBool::new(false),
        }
    }

    /// Components fed back through `update_model`, oldest first.
    pub fn selections(&self) -> Vec<ComponentName> {
        self.selections
            .lock()
            .map(|selections| selections.clone())
            .unwrap_or_default()
    }

    /// Whether the controller has released this scorer.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(AtomicOrdering::Acquire)
    }

    fn is_other_profile(rci: &ResolvedComponentInfo) -> bool {
        rci.first_resolve_info().target_user_id != UserHandle::CURRENT
    }
}

impl ComponentScorer for TableScorer {
    fn compute(&self, targets: &[ResolvedComponentInfo], on_computed: ComputeCallback) {
        let size = targets.len();
        // Completion always arrives off the caller's thread.
        let spawned = thread::Builder::new()
            .name("table-scorer".to_string())
            .spawn(move || {
                debug!(size, "Scores ready");
                on_computed();
            });

        if let Err(err) = spawned {
            // Callback dropped with the closure: the caller sees an interruption.
            warn!(error = %err, "Failed to start scorer thread");
        }
    }

    fn compare(&self, lhs: &ResolvedComponentInfo, rhs: &ResolvedComponentInfo) -> Ordering {
        Self::is_other_profile(lhs)
            .cmp(&Self::is_other_profile(rhs))
            .then_with(|| rhs.is_pinned().cmp(&lhs.is_pinned()))
            .then_with(|| self.score(&rhs.name).total_cmp(&self.score(&lhs.name)))
    }

    fn score(&self, name: &ComponentName) -> f32 {
        self.scores.get(name).copied().unwrap_or(0.0)
    }

    fn update_model(&self, name: &ComponentName) {
        debug!(component = %name, "Model updated with selection");
        if let Ok(mut selections) = self.selections.lock() {
            selections.push(name.clone());
        }
    }

    fn update_chooser_counts(&self, package_name: &str, user_id: i32, action: &str) {
        debug!(package_name, user_id, action, "Chooser count updated");
    }

    fn destroy(&self) {
        self.destroyed.store(true, AtomicOrdering::Release);
        debug!("Table scorer destroyed");
    }
}
