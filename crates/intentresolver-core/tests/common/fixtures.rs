//! Test fixtures for creating resolution data.
//!
//! Components are numbered: component `i` lives in package `foo.bar.component{i}`
//! and is resolved by intents with action `intentAction{i}`.

#![allow(dead_code)]

use intentresolver_core::{
    ActivityInfo, ApplicationInfo, ComponentName, Intent, ResolveInfo, ResolvedComponentInfo,
    UserHandle,
};

/// A user other than the current one.
pub const USER_SOMEONE_ELSE: UserHandle = UserHandle(10);

/// Uid of the app that owns every fixture component.
pub const OWNER_UID: u32 = 10_100;

pub fn component_name(i: usize) -> ComponentName {
    let name = format!("component{i}");
    ComponentName::new(format!("foo.bar.{name}"), name)
}

pub fn resolver_intent(i: usize) -> Intent {
    Intent::new(format!("intentAction{i}"))
}

pub fn activity_info(name: &ComponentName) -> ActivityInfo {
    ActivityInfo {
        name: name.class_name.clone(),
        package_name: name.package_name.clone(),
        permission: None,
        exported: true,
        enabled: true,
        metadata: None,
        application_info: ApplicationInfo {
            package_name: name.package_name.clone(),
            uid: OWNER_UID,
            enabled: true,
        },
    }
}

pub fn resolve_info(i: usize, user: UserHandle) -> ResolveInfo {
    resolve_info_for(&component_name(i), user)
}

pub fn resolve_info_for(name: &ComponentName, user: UserHandle) -> ResolveInfo {
    ResolveInfo {
        target_user_id: user,
        ..ResolveInfo::for_activity(activity_info(name))
    }
}

/// Resolution record with an explicit (priority, default) tier.
pub fn resolve_info_with_tier(i: usize, priority: i32, is_default: bool) -> ResolveInfo {
    ResolveInfo {
        priority,
        is_default,
        ..resolve_info(i, UserHandle::CURRENT)
    }
}

pub fn resolved_component_info(i: usize) -> ResolvedComponentInfo {
    ResolvedComponentInfo::new(
        component_name(i),
        resolver_intent(i),
        resolve_info(i, UserHandle::CURRENT),
    )
}

pub fn resolved_component_info_with_other_id(i: usize) -> ResolvedComponentInfo {
    ResolvedComponentInfo::new(
        component_name(i),
        resolver_intent(i),
        resolve_info(i, USER_SOMEONE_ELSE),
    )
}

/// Candidates `0..n` in order.
pub fn batch(n: usize) -> Vec<ResolvedComponentInfo> {
    (0..n).map(resolved_component_info).collect()
}

/// Package names of a batch, for order assertions.
pub fn packages(batch: &[ResolvedComponentInfo]) -> Vec<String> {
    batch.iter().map(|rci| rci.name.package_name.clone()).collect()
}
