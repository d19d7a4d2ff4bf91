//! Controller settings and validation.
//!
//! Settings describe who is asking for candidates and how many ranked
//! results they need. These are pure domain types with no infrastructure
//! dependencies; adapters decide where they are loaded from.

use serde::{Deserialize, Serialize};

use crate::domain::{QueryOptions, UserHandle};

/// Uid of the first regular application on a device.
pub const FIRST_APPLICATION_UID: u32 = 10_000;

/// Uid assumed for the caller when none is configured.
pub const DEFAULT_LAUNCHED_FROM_UID: u32 = FIRST_APPLICATION_UID;

/// Controller settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ControllerSettings {
    /// Uid of the app that launched the resolver; used for permission checks.
    pub launched_from_uid: Option<u32>,

    /// Package that sent the intent, forwarded to the scorer.
    pub referrer_package: Option<String>,

    /// User whose activities are queried.
    pub target_user: Option<UserHandle>,

    /// Only rank this many leading candidates (full sort when unset).
    pub top_k: Option<usize>,

    /// Which optional data to request from the package manager.
    pub query: QueryOptions,
}

impl ControllerSettings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            launched_from_uid: Some(DEFAULT_LAUNCHED_FROM_UID),
            referrer_package: None,
            target_user: Some(UserHandle::CURRENT),
            top_k: None,
            query: QueryOptions {
                resolved_filter: true,
                activity_metadata: false,
                default_only: true,
            },
        }
    }

    /// Get the effective caller uid (with default fallback).
    #[must_use]
    pub const fn effective_launched_from_uid(&self) -> u32 {
        match self.launched_from_uid {
            Some(uid) => uid,
            None => DEFAULT_LAUNCHED_FROM_UID,
        }
    }

    /// Get the effective target user (with default fallback).
    #[must_use]
    pub const fn effective_target_user(&self) -> UserHandle {
        match self.target_user {
            Some(user) => user,
            None => UserHandle::CURRENT,
        }
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(uid) = other.launched_from_uid {
            self.launched_from_uid = uid;
        }
        if let Some(ref referrer) = other.referrer_package {
            self.referrer_package.clone_from(referrer);
        }
        if let Some(user) = other.target_user {
            self.target_user = user;
        }
        if let Some(top_k) = other.top_k {
            self.top_k = top_k;
        }
        if let Some(resolved_filter) = other.resolved_filter {
            self.query.resolved_filter = resolved_filter;
        }
        if let Some(activity_metadata) = other.activity_metadata {
            self.query.activity_metadata = activity_metadata;
        }
        if let Some(default_only) = other.default_only {
            self.query.default_only = default_only;
        }
    }
}

/// Partial settings update.
///
/// Nullable fields are `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = set field to None/null
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub launched_from_uid: Option<Option<u32>>,
    pub referrer_package: Option<Option<String>>,
    pub target_user: Option<Option<UserHandle>>,
    pub top_k: Option<Option<usize>>,
    pub resolved_filter: Option<bool>,
    pub activity_metadata: Option<bool>,
    pub default_only: Option<bool>,
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Top-k must be at least 1 when set, got {0}")]
    InvalidTopK(usize),

    #[error("Target user must be a real user, current or all, got {0}")]
    InvalidTargetUser(i32),

    #[error("Referrer package cannot be empty")]
    EmptyReferrerPackage,
}

/// Validate settings values.
pub fn validate_settings(settings: &ControllerSettings) -> Result<(), SettingsError> {
    if settings.top_k == Some(0) {
        return Err(SettingsError::InvalidTopK(0));
    }

    if let Some(user) = settings.target_user {
        if user.id() < 0 && !user.is_pseudo() {
            return Err(SettingsError::InvalidTargetUser(user.id()));
        }
    }

    if settings
        .referrer_package
        .as_ref()
        .is_some_and(|p| p.trim().is_empty())
    {
        return Err(SettingsError::EmptyReferrerPackage);
    }

    Ok(())
}
