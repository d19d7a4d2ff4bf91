//! Pinning and blocking from the scenario's component lists.

use std::collections::HashSet;

use intentresolver_core::{CandidatePolicy, ComponentName};

#[derive(Debug, Clone, Default)]
pub struct ScenarioPolicy {
    pinned: HashSet<ComponentName>,
    blocked: HashSet<ComponentName>,
}

impl ScenarioPolicy {
    pub const fn new(pinned: HashSet<ComponentName>, blocked: HashSet<ComponentName>) -> Self {
        Self { pinned, blocked }
    }
}

impl CandidatePolicy for ScenarioPolicy {
    fn is_component_pinned(&self, name: &ComponentName) -> bool {
        self.pinned.contains(name)
    }

    fn is_component_filtered(&self, name: &ComponentName) -> bool {
        self.blocked.contains(name)
    }
}
