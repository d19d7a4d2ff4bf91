//! Reference implementation of the component permission rules.

use std::collections::{HashMap, HashSet};

use crate::ports::{PermissionChecker, PermissionResult};

/// Uid of the superuser.
pub const ROOT_UID: u32 = 0;
/// Uid of the system server.
pub const SYSTEM_UID: u32 = 1000;
/// Number of uids reserved per user; `uid % PER_USER_RANGE` is the app id.
pub const PER_USER_RANGE: u32 = 100_000;
/// First app id handed to app-zygote isolated processes.
pub const FIRST_APP_ZYGOTE_ISOLATED_UID: u32 = 90_000;
/// Last app id of the isolated process range.
pub const LAST_ISOLATED_UID: u32 = 99_999;

/// Applies the platform's component launch rules against a grant table.
///
/// Rules apply in order, all on app ids so they hold in every user:
///
/// 1. Root and system may launch anything.
/// 2. Isolated processes may launch nothing, not even their own app's components.
/// 3. The same app may launch its own components.
/// 4. Nobody else may launch a component that is not exported.
/// 5. An exported component without a declared permission is open; otherwise
///    the caller must hold the permission.
#[derive(Debug, Clone, Default)]
pub struct ComponentPermissionPolicy {
    grants: HashMap<u32, HashSet<String>>,
}

impl ComponentPermissionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant `permission` to `uid`.
    #[must_use]
    pub fn with_grant(mut self, uid: u32, permission: impl Into<String>) -> Self {
        self.grant(uid, permission);
        self
    }

    pub fn grant(&mut self, uid: u32, permission: impl Into<String>) {
        self.grants.entry(uid).or_default().insert(permission.into());
    }

    fn holds(&self, uid: u32, permission: &str) -> bool {
        self.grants
            .get(&uid)
            .is_some_and(|granted| granted.contains(permission))
    }

    const fn app_id(uid: u32) -> u32 {
        uid % PER_USER_RANGE
    }

    const fn is_isolated(uid: u32) -> bool {
        let app_id = Self::app_id(uid);
        app_id >= FIRST_APP_ZYGOTE_ISOLATED_UID && app_id <= LAST_ISOLATED_UID
    }

    const fn is_same_app(uid1: u32, uid2: u32) -> bool {
        Self::app_id(uid1) == Self::app_id(uid2)
    }
}

impl PermissionChecker for ComponentPermissionPolicy {
    fn check_component_permission(
        &self,
        permission: Option<&str>,
        caller_uid: u32,
        owning_uid: u32,
        exported: bool,
    ) -> PermissionResult {
        let app_id = Self::app_id(caller_uid);
        if app_id == ROOT_UID || app_id == SYSTEM_UID {
            return PermissionResult::Granted;
        }
        if Self::is_isolated(caller_uid) {
            return PermissionResult::Denied;
        }
        if Self::is_same_app(caller_uid, owning_uid) {
            return PermissionResult::Granted;
        }
        if !exported {
            return PermissionResult::Denied;
        }
        match permission {
            None => PermissionResult::Granted,
            Some(permission) if self.holds(caller_uid, permission) => PermissionResult::Granted,
            Some(_) => PermissionResult::Denied,
        }
    }
}
