//! Resolution records returned by the platform package manager.
//!
//! These are read-only from the core's point of view: the merger copies them
//! into candidates, the filters inspect them, nothing mutates them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::component::{ComponentName, UserHandle};
use super::intent::IntentFilter;

/// Application that owns an activity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationInfo {
    pub package_name: String,
    /// Kernel uid the application runs as.
    pub uid: u32,
    pub enabled: bool,
}

/// Manifest information about one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityInfo {
    /// Fully qualified class name.
    pub name: String,
    pub package_name: String,
    /// Permission a caller must hold to launch this activity.
    pub permission: Option<String>,
    /// Whether components outside the owning app may launch it.
    pub exported: bool,
    pub enabled: bool,
    /// `<meta-data>` entries; only populated when metadata was requested.
    pub metadata: Option<BTreeMap<String, String>>,
    pub application_info: ApplicationInfo,
}

impl Default for ActivityInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            package_name: String::new(),
            permission: None,
            exported: true,
            enabled: true,
            metadata: None,
            application_info: ApplicationInfo::default(),
        }
    }
}

impl ActivityInfo {
    /// Identity of this activity.
    pub fn component_name(&self) -> ComponentName {
        ComponentName::new(self.package_name.clone(), self.name.clone())
    }

    /// True when `component` names this activity, without allocating.
    pub fn is_component(&self, component: &ComponentName) -> bool {
        self.package_name == component.package_name && self.name == component.class_name
    }
}

/// One platform resolution result: "this activity can handle that intent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveInfo {
    pub activity_info: ActivityInfo,
    /// Priority of the matching filter; higher wins.
    pub priority: i32,
    /// Order among the user's preferred activities.
    pub preferred_order: i32,
    /// Whether the matching filter declared the default category.
    pub is_default: bool,
    /// Match quality reported by the filter match.
    pub match_quality: i32,
    /// User the target activity belongs to.
    pub target_user_id: UserHandle,
    /// Filter that matched; only populated when the resolved filter was
    /// requested.
    pub filter: Option<IntentFilter>,
    /// Package to load labels and icons from, when it differs from the owner.
    pub resolve_package_name: Option<String>,
}

impl Default for ResolveInfo {
    fn default() -> Self {
        Self {
            activity_info: ActivityInfo::default(),
            priority: 0,
            preferred_order: 0,
            is_default: false,
            match_quality: 0,
            target_user_id: UserHandle::CURRENT,
            filter: None,
            resolve_package_name: None,
        }
    }
}

impl ResolveInfo {
    /// Create a record for the given activity with default match metadata.
    pub fn for_activity(activity_info: ActivityInfo) -> Self {
        Self {
            activity_info,
            ..Self::default()
        }
    }

    /// Identity of the resolved activity.
    pub fn component_name(&self) -> ComponentName {
        self.activity_info.component_name()
    }

    /// The (priority, default) tier used by the low-priority filter.
    pub const fn tier(&self) -> (i32, bool) {
        (self.priority, self.is_default)
    }
}
