//! Scenario files.
//!
//! A scenario is a JSON snapshot of everything the platform would answer for
//! one resolver session: what each intent action resolves to, how the ranking
//! model scores components, which permissions the caller holds and what the
//! user picked last time.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

use intentresolver_core::{
    ComponentName, ComponentPermissionPolicy, Intent, IntentFilter, ResolveInfo, SettingsUpdate,
};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// A remembered last choice, as stored in the scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberedChoice {
    /// Action of the intent the choice was made for.
    pub action: Option<String>,
    /// Chosen component in `package/class` form.
    pub component: String,
    #[serde(default)]
    pub filter: IntentFilter,
    #[serde(default)]
    pub match_quality: i32,
}

/// One resolver session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// The intent being resolved.
    pub target: Intent,

    /// Intents to query. The target alone when empty.
    pub intents: Vec<Intent>,

    /// Settings layered over the defaults; CLI flags win over these.
    pub settings: SettingsUpdate,

    /// Platform answers, keyed by intent action, in the order returned.
    pub resolutions: BTreeMap<String, Vec<ResolveInfo>>,

    /// Ranking model scores keyed by `package/class`.
    pub scores: BTreeMap<String, f32>,

    /// Permissions held, keyed by uid.
    pub grants: BTreeMap<u32, Vec<String>>,

    /// Components the user pinned, as `package/class`.
    pub pinned: Vec<String>,

    /// Components hidden by policy, as `package/class`.
    pub blocked: Vec<String>,

    pub last_chosen: Option<RememberedChoice>,
}

impl Scenario {
    /// Read a scenario from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| CliError::Scenario(format!("{}: {e}", path.display())))
    }

    /// Write the scenario back as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| CliError::Io(format!("{}: {e}", path.display())))
    }

    /// The intents to query, in order.
    pub fn queries(&self) -> Vec<Intent> {
        if self.intents.is_empty() {
            vec![self.target.clone()]
        } else {
            self.intents.clone()
        }
    }

    pub fn score_table(&self) -> Result<HashMap<ComponentName, f32>, CliError> {
        self.scores
            .iter()
            .map(|(name, score)| Ok((parse_component(name)?, *score)))
            .collect()
    }

    pub fn pinned_components(&self) -> Result<HashSet<ComponentName>, CliError> {
        self.pinned.iter().map(|name| parse_component(name)).collect()
    }

    pub fn blocked_components(&self) -> Result<HashSet<ComponentName>, CliError> {
        self.blocked.iter().map(|name| parse_component(name)).collect()
    }

    /// Permission rules over this scenario's grant table.
    pub fn permission_policy(&self) -> ComponentPermissionPolicy {
        let mut policy = ComponentPermissionPolicy::new();
        for (uid, permissions) in &self.grants {
            for permission in permissions {
                policy.grant(*uid, permission.as_str());
            }
        }
        policy
    }
}

/// Parse a `package/class` component name from scenario or command input.
pub fn parse_component(name: &str) -> Result<ComponentName, CliError> {
    name.parse()
        .map_err(|e: intentresolver_core::ParseComponentError| CliError::Scenario(e.to_string()))
}
