//! Merging of resolution results from several source intents.

use crate::domain::{ComponentName, Intent, ResolveInfo, ResolvedComponentInfo};

/// Merge the resolutions of `intent` into `into`.
///
/// Each record is matched against the candidates that were in `into` before
/// this call; a record for a known component is appended to that candidate,
/// anything else becomes a new candidate whose pinned state comes from
/// `is_pinned`. Records from `from` are never merged with each other, so a
/// duplicate component inside one result list produces two candidates.
pub fn add_resolve_list_dedupe<F>(
    into: &mut Vec<ResolvedComponentInfo>,
    intent: &Intent,
    from: &[ResolveInfo],
    is_pinned: F,
) where
    F: Fn(&ComponentName) -> bool,
{
    // Only scan what existed before; the platform guarantees no dupes in `from`.
    let into_count = into.len();

    for new_info in from {
        let existing = into[..into_count]
            .iter_mut()
            .find(|rci| new_info.activity_info.is_component(&rci.name));

        match existing {
            Some(rci) => rci.add(intent.clone(), new_info.clone()),
            None => {
                let name = new_info.component_name();
                let pinned = is_pinned(&name);
                let mut rci = ResolvedComponentInfo::new(name, intent.clone(), new_info.clone());
                rci.set_pinned(pinned);
                into.push(rci);
            }
        }
    }
}
