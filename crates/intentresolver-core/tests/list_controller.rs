//! Integration tests for the resolver list controller.
//!
//! The package manager is mocked with mockall; scorers are the hand-written
//! fakes in `common::scorers`.

mod common;

use std::sync::Arc;

use mockall::mock;

use common::fixtures::{
    batch, component_name, packages, resolve_info, resolve_info_for, resolve_info_with_tier,
    resolver_intent,
};
use common::scorers::{Completion, TableScorer};
use intentresolver_core::{
    ACTION_VIEW, CandidatePolicy, ComponentName, ComponentPermissionPolicy, FilterOutcome, Intent,
    IntentFilter, IntentFlags, LastChosenQuery, LastChosenRecord, PackageManagerPort,
    PlatformError, QueryFlags, QueryOptions, RankState, ResolveInfo, ResolvedComponentInfo,
    ResolverListController, UserHandle,
};

mock! {
    pub PackageManager {}

    impl PackageManagerPort for PackageManager {
        fn query_intent_activities_as_user(
            &self,
            intent: &Intent,
            flags: QueryFlags,
            user: UserHandle,
        ) -> Vec<ResolveInfo>;

        fn last_chosen_activity(
            &self,
            query: &LastChosenQuery,
        ) -> Result<Option<ResolveInfo>, PlatformError>;

        fn set_last_chosen_activity(&self, record: &LastChosenRecord) -> Result<(), PlatformError>;
    }
}

const CALLER_UID: u32 = 1234;

fn controller_with(pm: MockPackageManager, scorer: Arc<TableScorer>) -> ResolverListController {
    ResolverListController::new(
        Arc::new(pm),
        resolver_intent(0),
        "com.example.referrer",
        CALLER_UID,
        scorer,
    )
}

fn scores(pairs: &[(usize, f32)]) -> Arc<TableScorer> {
    Arc::new(TableScorer::new(pairs.iter().map(|&(i, s)| (component_name(i), s))))
}

struct PinPackage(String);

impl CandidatePolicy for PinPackage {
    fn is_component_pinned(&self, name: &ComponentName) -> bool {
        name.package_name == self.0
    }

    fn is_component_filtered(&self, name: &ComponentName) -> bool {
        name.package_name.ends_with("blocked")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Retrieval
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_resolvers_merged_across_intents() {
    let mut pm = MockPackageManager::new();
    pm.expect_query_intent_activities_as_user()
        .withf(|intent, _, _| intent.action.as_deref() == Some("intentAction0"))
        .times(1)
        .returning(|_, _, _| {
            vec![
                resolve_info(1, UserHandle::CURRENT),
                resolve_info(2, UserHandle::CURRENT),
            ]
        });
    pm.expect_query_intent_activities_as_user()
        .withf(|intent, _, _| intent.action.as_deref() == Some("intentAction1"))
        .times(1)
        .returning(|_, _, _| {
            vec![
                resolve_info(2, UserHandle::CURRENT),
                resolve_info(3, UserHandle::CURRENT),
            ]
        });

    let controller = controller_with(pm, scores(&[]));
    let intents = [resolver_intent(0), resolver_intent(1)];
    let resolved = controller.get_resolvers_for_intent_as_user(
        QueryOptions::default(),
        &intents,
        UserHandle::SYSTEM,
    );

    assert_eq!(
        packages(&resolved),
        vec!["foo.bar.component1", "foo.bar.component2", "foo.bar.component3"]
    );
    let merged = &resolved[1];
    assert_eq!(merged.count(), 2);
    assert_eq!(merged.intent_at(0), Some(&intents[0]));
    assert_eq!(merged.intent_at(1), Some(&intents[1]));
}

#[test]
fn test_query_flags_follow_options_and_intent() {
    let options = QueryOptions {
        resolved_filter: true,
        activity_metadata: false,
        default_only: true,
    };
    let base = options.base_flags();

    let mut pm = MockPackageManager::new();
    pm.expect_query_intent_activities_as_user()
        .withf(move |intent, flags, user| {
            *user == UserHandle(10)
                && intent.action.as_deref() == Some("intentAction0")
                && *flags == base
        })
        .times(1)
        .returning(|_, _, _| Vec::new());
    pm.expect_query_intent_activities_as_user()
        .withf(move |intent, flags, _| {
            intent.is_web_intent() && *flags == base | QueryFlags::MATCH_INSTANT
        })
        .times(1)
        .returning(|_, _, _| Vec::new());
    pm.expect_query_intent_activities_as_user()
        .withf(move |intent, flags, _| {
            intent.flags.contains(IntentFlags::ACTIVITY_MATCH_EXTERNAL)
                && flags.contains(QueryFlags::MATCH_INSTANT | QueryFlags::MATCH_DEFAULT_ONLY)
        })
        .times(1)
        .returning(|_, _, _| Vec::new());

    let controller = controller_with(pm, scores(&[]));
    let intents = [
        resolver_intent(0),
        Intent::new(ACTION_VIEW).with_data("https://example.com"),
        Intent::new("external").with_flags(IntentFlags::ACTIVITY_MATCH_EXTERNAL),
    ];

    let resolved = controller.get_resolvers_for_intent_as_user(options, &intents, UserHandle(10));
    assert!(resolved.is_empty());
}

#[test]
fn test_pinned_state_comes_from_policy() {
    let mut pm = MockPackageManager::new();
    pm.expect_query_intent_activities_as_user()
        .returning(|_, _, _| {
            vec![
                resolve_info(0, UserHandle::CURRENT),
                resolve_info(1, UserHandle::CURRENT),
            ]
        });

    let controller = controller_with(pm, scores(&[]))
        .with_policy(Arc::new(PinPackage("foo.bar.component1".to_string())));
    let resolved = controller.get_resolvers_for_intent_as_user(
        QueryOptions::default(),
        &[resolver_intent(0)],
        UserHandle::CURRENT,
    );

    assert!(!resolved[0].is_pinned());
    assert!(resolved[1].is_pinned());
    assert!(controller.is_component_pinned(&component_name(1)));
    assert!(!controller.is_component_pinned(&component_name(0)));
}

#[test]
fn test_add_resolve_list_dedupe_via_controller() {
    let controller = controller_with(MockPackageManager::new(), scores(&[]));
    let mut into = Vec::new();

    controller.add_resolve_list_dedupe(
        &mut into,
        &resolver_intent(0),
        &[resolve_info(0, UserHandle::CURRENT)],
    );
    controller.add_resolve_list_dedupe(
        &mut into,
        &resolver_intent(1),
        &[resolve_info(0, UserHandle::CURRENT), resolve_info(1, UserHandle::CURRENT)],
    );

    assert_eq!(into.len(), 2);
    assert_eq!(into[0].count(), 2);
    assert_eq!(into[0].intent_at(1), Some(&resolver_intent(1)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Filtering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_filter_ineligible_with_permission_policy() {
    let permissions = ComponentPermissionPolicy::new().with_grant(CALLER_UID, "granted.PERM");
    let controller = controller_with(MockPackageManager::new(), scores(&[]))
        .with_permission_checker(Arc::new(permissions));

    let mut candidates = batch(4);
    let restrict = |rci: &mut ResolvedComponentInfo, permission: &str| {
        let mut info = rci.first_resolve_info().clone();
        info.activity_info.permission = Some(permission.to_string());
        *rci = ResolvedComponentInfo::new(
            rci.name.clone(),
            rci.intent_at(0).cloned().unwrap_or_default(),
            info,
        );
    };
    restrict(&mut candidates[1], "missing.PERM");
    restrict(&mut candidates[2], "granted.PERM");
    let before = candidates.clone();

    let outcome = controller.filter_ineligible_activities(&mut candidates, true);

    assert_eq!(outcome, FilterOutcome::Preserved(before));
    assert_eq!(
        packages(&candidates),
        vec!["foo.bar.component0", "foo.bar.component2", "foo.bar.component3"]
    );
}

#[test]
fn test_filter_ineligible_respects_policy_block() {
    let controller = controller_with(MockPackageManager::new(), scores(&[]))
        .with_policy(Arc::new(PinPackage(String::new())));

    let blocked = ComponentName::new("com.example.blocked", "com.example.blocked.Main");
    let mut candidates = batch(2);
    candidates.insert(
        1,
        ResolvedComponentInfo::new(
            blocked.clone(),
            resolver_intent(9),
            resolve_info_for(&blocked, UserHandle::CURRENT),
        ),
    );

    let outcome = controller.filter_ineligible_activities(&mut candidates, false);

    assert_eq!(outcome, FilterOutcome::Modified);
    assert_eq!(packages(&candidates), vec!["foo.bar.component0", "foo.bar.component1"]);
}

#[test]
fn test_filter_ineligible_unexported_foreign_component() {
    let controller = controller_with(MockPackageManager::new(), scores(&[]));
    let mut candidates = batch(2);
    let mut hidden = candidates[0].first_resolve_info().clone();
    hidden.activity_info.exported = false;
    candidates[0] =
        ResolvedComponentInfo::new(candidates[0].name.clone(), resolver_intent(0), hidden);

    controller.filter_ineligible_activities(&mut candidates, false);

    assert_eq!(packages(&candidates), vec!["foo.bar.component1"]);
}

#[test]
fn test_filter_low_priority_via_controller() {
    let controller = controller_with(MockPackageManager::new(), scores(&[]));
    let mut into = Vec::new();
    controller.add_resolve_list_dedupe(
        &mut into,
        &resolver_intent(0),
        &[
            resolve_info_with_tier(0, 5, true),
            resolve_info_with_tier(1, 5, true),
            resolve_info_with_tier(2, 3, false),
            resolve_info_with_tier(3, 3, false),
        ],
    );

    let outcome = controller.filter_low_priority(&mut into, false);

    assert!(outcome.is_modified());
    assert_eq!(packages(&into), vec!["foo.bar.component0", "foo.bar.component1"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Ranking and scorer passthrough
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_sort_waits_for_background_compute() {
    let scorer = scores(&[(0, 0.1), (1, 0.7), (2, 0.4), (3, 0.9)]);
    let mut controller = controller_with(MockPackageManager::new(), scorer.clone());
    let mut candidates = batch(4);

    controller.sort(&mut candidates);

    assert_eq!(
        packages(&candidates),
        vec![
            "foo.bar.component3",
            "foo.bar.component1",
            "foo.bar.component2",
            "foo.bar.component0"
        ]
    );
    assert_eq!(controller.rank_state(), RankState::Computed);
    assert_eq!(*scorer.computed_sizes.lock().unwrap(), vec![4]);
}

#[test]
fn test_compute_happens_once_per_controller() {
    let scorer = scores(&[(0, 0.1), (1, 0.7), (2, 0.4), (3, 0.9)]);
    let mut controller = controller_with(MockPackageManager::new(), scorer.clone());

    let mut first = batch(4);
    controller.top_k(&mut first, 2);
    let mut second = batch(3);
    controller.sort(&mut second);

    assert_eq!(scorer.compute_count(), 1);
    assert_eq!(
        packages(&second),
        vec!["foo.bar.component1", "foo.bar.component2", "foo.bar.component0"]
    );
}

#[test]
fn test_abandoned_compute_leaves_batch_unranked() {
    let scorer = Arc::new(TableScorer::with_completion(
        [(component_name(2), 1.0)],
        Completion::Abandon,
    ));
    let mut controller = controller_with(MockPackageManager::new(), scorer.clone());
    let mut candidates = batch(3);
    let before = candidates.clone();

    controller.sort(&mut candidates);
    assert_eq!(candidates, before);

    controller.top_k(&mut candidates, 1);
    assert_eq!(candidates, before);

    assert_eq!(controller.rank_state(), RankState::Uncomputed);
    assert_eq!(scorer.compute_count(), 2);
}

#[test]
fn test_scorer_passthrough() {
    let scorer = scores(&[(1, 0.75)]);
    let controller = controller_with(MockPackageManager::new(), scorer.clone());

    assert_eq!(controller.score(&component_name(1)), Some(0.75));
    assert_eq!(controller.score(&component_name(5)), Some(0.0));

    controller.update_model(&component_name(1));
    controller.update_chooser_counts("foo.bar.component1", 0, "android.intent.action.SEND");

    assert_eq!(*scorer.model_updates.lock().unwrap(), vec![component_name(1)]);
    assert_eq!(
        *scorer.chooser_counts.lock().unwrap(),
        vec![(
            "foo.bar.component1".to_string(),
            0,
            "android.intent.action.SEND".to_string()
        )]
    );
}

#[test]
fn test_destroy_releases_scorer_once() {
    let scorer = scores(&[(0, 0.1), (1, 0.9)]);
    let mut controller = controller_with(MockPackageManager::new(), scorer.clone());

    controller.destroy();
    controller.destroy();
    assert_eq!(scorer.destroy_count(), 1);

    let mut candidates = batch(2);
    controller.sort(&mut candidates);
    controller.top_k(&mut candidates, 1);
    controller.update_model(&component_name(1));

    assert_eq!(packages(&candidates), vec!["foo.bar.component0", "foo.bar.component1"]);
    assert_eq!(controller.score(&component_name(1)), None);
    assert_eq!(scorer.compute_count(), 0);
    assert!(scorer.model_updates.lock().unwrap().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Last chosen
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_last_chosen_uses_target_intent() {
    let mut pm = MockPackageManager::new();
    pm.expect_last_chosen_activity()
        .withf(|query| {
            query.intent == resolver_intent(0)
                && query.resolved_type.is_none()
                && query.flags == QueryFlags::MATCH_DEFAULT_ONLY
        })
        .times(1)
        .returning(|_| Ok(Some(resolve_info(4, UserHandle::CURRENT))));

    let controller = controller_with(pm, scores(&[]));
    let chosen = controller.last_chosen().unwrap();

    assert_eq!(chosen.map(|info| info.component_name()), Some(component_name(4)));
}

#[test]
fn test_last_chosen_error_propagates() {
    let mut pm = MockPackageManager::new();
    pm.expect_last_chosen_activity()
        .returning(|_| Err(PlatformError::Remote("binder died".to_string())));

    let controller = controller_with(pm, scores(&[]));

    assert!(matches!(controller.last_chosen(), Err(PlatformError::Remote(_))));
}

#[test]
fn test_set_last_chosen_records_component() {
    let chosen = component_name(3);
    let expected = chosen.clone();

    let mut pm = MockPackageManager::new();
    pm.expect_set_last_chosen_activity()
        .withf(move |record| {
            record.component.as_ref() == Some(&expected)
                && record.resolved_type.as_deref() == Some("text/plain")
                && record.flags == QueryFlags::MATCH_DEFAULT_ONLY
                && record.match_quality == 0x0010_8000
                && record.filter.has_action("intentAction3")
        })
        .times(1)
        .returning(|_| Ok(()));

    let controller = controller_with(pm, scores(&[]));
    let intent = resolver_intent(3).with_type("text/plain").with_component(chosen);

    controller
        .set_last_chosen(&intent, IntentFilter::for_action("intentAction3"), 0x0010_8000)
        .unwrap();
}
