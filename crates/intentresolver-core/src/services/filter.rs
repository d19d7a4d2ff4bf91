//! Eligibility and priority filtering of candidate batches.
//!
//! Both filters look only at a candidate's first recorded match. Later
//! matches merged from other intents do not affect the decision.

use tracing::{debug, trace};

use crate::domain::{FilterOutcome, ResolvedComponentInfo};
use crate::ports::{CandidatePolicy, PermissionChecker};

/// Record that a removal is about to happen, snapshotting the batch on the
/// first one if the caller wants the original back.
fn note_removal(outcome: &mut FilterOutcome, batch: &[ResolvedComponentInfo], preserve: bool) {
    if matches!(outcome, FilterOutcome::Unchanged) {
        *outcome = if preserve {
            FilterOutcome::Preserved(batch.to_vec())
        } else {
            FilterOutcome::Modified
        };
    }
}

/// Remove candidates the caller may not launch or that policy hides.
///
/// Walks the batch from the back so removal never shifts an unvisited index.
/// Survivors keep their relative order.
pub fn filter_ineligible_activities(
    batch: &mut Vec<ResolvedComponentInfo>,
    launched_from_uid: u32,
    permissions: &dyn PermissionChecker,
    policy: &dyn CandidatePolicy,
    preserve_original: bool,
) -> FilterOutcome {
    let mut outcome = FilterOutcome::Unchanged;

    for i in (0..batch.len()).rev() {
        let rci = &batch[i];
        let activity = &rci.first_resolve_info().activity_info;
        let granted = permissions
            .check_component_permission(
                activity.permission.as_deref(),
                launched_from_uid,
                activity.application_info.uid,
                activity.exported,
            )
            .is_granted();

        if !granted || policy.is_component_filtered(&rci.name) {
            note_removal(&mut outcome, batch, preserve_original);
            let removed = batch.remove(i);
            debug!(
                component = %removed.name,
                granted,
                "Removed ineligible candidate"
            );
        }
    }

    outcome
}

/// Keep only the leading run of candidates sharing the first candidate's
/// (priority, default) tier.
///
/// An empty batch is returned unchanged.
pub fn filter_low_priority(
    batch: &mut Vec<ResolvedComponentInfo>,
    preserve_original: bool,
) -> FilterOutcome {
    let Some(first) = batch.first() else {
        return FilterOutcome::Unchanged;
    };
    let r0 = first.first_resolve_info();
    let reference = r0.tier();

    let cutoff = batch.iter().skip(1).position(|rci| {
        let ri = rci.first_resolve_info();
        trace!(
            "{}={}/{} vs {}={}/{}",
            r0.activity_info.name,
            r0.priority,
            r0.is_default,
            ri.activity_info.name,
            ri.priority,
            ri.is_default
        );
        ri.tier() != reference
    });

    let Some(offset) = cutoff else {
        return FilterOutcome::Unchanged;
    };

    let keep = offset + 1;
    let mut outcome = FilterOutcome::Unchanged;
    note_removal(&mut outcome, batch, preserve_original);
    debug!(kept = keep, removed = batch.len() - keep, "Removed low priority candidates");
    batch.truncate(keep);
    outcome
}
