//! Permission checking port.

use crate::domain::ComponentName;

/// Outcome of a component permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionResult {
    Granted,
    Denied,
}

impl PermissionResult {
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Port deciding whether a caller may launch a component.
pub trait PermissionChecker: Send + Sync {
    /// Check whether `caller_uid` may launch a component owned by
    /// `owning_uid` that requires `permission` and is (or is not) exported.
    fn check_component_permission(
        &self,
        permission: Option<&str>,
        caller_uid: u32,
        owning_uid: u32,
        exported: bool,
    ) -> PermissionResult;
}

/// Caller-specific hooks over the candidate list.
///
/// The plain resolver pins nothing and blocks nothing; a chooser supplies its
/// own policy for both.
pub trait CandidatePolicy: Send + Sync {
    /// Whether the user pinned this component to the top of the list.
    fn is_component_pinned(&self, _name: &ComponentName) -> bool {
        false
    }

    /// Whether policy hides this component regardless of permissions.
    fn is_component_filtered(&self, _name: &ComponentName) -> bool {
        false
    }
}

/// Policy that pins nothing and filters nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCandidatePolicy;

impl CandidatePolicy for DefaultCandidatePolicy {}
