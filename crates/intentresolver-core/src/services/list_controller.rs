//! Resolver list controller.
//!
//! The façade the resolver UI talks to: it retrieves candidates from the
//! package manager, filters them and ranks them. Every operation here runs on
//! a worker thread; ranking blocks until the scorer is done.

use std::sync::Arc;

use tracing::debug;

use super::filter;
use super::merge::add_resolve_list_dedupe;
use super::permission_policy::ComponentPermissionPolicy;
use super::ranking::{RankState, RankingEngine};
use crate::domain::{
    ComponentName, FilterOutcome, Intent, IntentFilter, QueryFlags, QueryOptions, ResolveInfo,
    ResolvedComponentInfo, UserHandle,
};
use crate::ports::{
    CandidatePolicy, ComponentScorer, DefaultCandidatePolicy, LastChosenQuery, LastChosenRecord,
    PackageManagerPort, PermissionChecker, PlatformError,
};

/// Retrieves, filters and sorts the resolver's candidate list.
///
/// # Example
///
/// ```ignore
/// let mut controller = ResolverListController::new(pm, target, "com.example", uid, scorer);
/// let mut batch = controller.get_resolvers_for_intent_as_user(options, &intents, user);
/// controller.filter_ineligible_activities(&mut batch, false);
/// controller.filter_low_priority(&mut batch, false);
/// controller.sort(&mut batch);
/// ```
pub struct ResolverListController {
    package_manager: Arc<dyn PackageManagerPort>,
    permissions: Arc<dyn PermissionChecker>,
    policy: Arc<dyn CandidatePolicy>,
    target_intent: Intent,
    referrer_package: String,
    launched_from_uid: u32,
    ranking: RankingEngine,
}

impl ResolverListController {
    /// Create a controller with the default permission rules and a policy
    /// that pins and blocks nothing.
    pub fn new(
        package_manager: Arc<dyn PackageManagerPort>,
        target_intent: Intent,
        referrer_package: impl Into<String>,
        launched_from_uid: u32,
        scorer: Arc<dyn ComponentScorer>,
    ) -> Self {
        Self {
            package_manager,
            permissions: Arc::new(ComponentPermissionPolicy::default()),
            policy: Arc::new(DefaultCandidatePolicy),
            target_intent,
            referrer_package: referrer_package.into(),
            launched_from_uid,
            ranking: RankingEngine::new(scorer),
        }
    }

    /// Replace the permission checker.
    #[must_use]
    pub fn with_permission_checker(mut self, permissions: Arc<dyn PermissionChecker>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Replace the pinning/blocking policy.
    #[must_use]
    pub fn with_policy(mut self, policy: Arc<dyn CandidatePolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub const fn target_intent(&self) -> &Intent {
        &self.target_intent
    }

    pub fn referrer_package(&self) -> &str {
        &self.referrer_package
    }

    pub const fn launched_from_uid(&self) -> u32 {
        self.launched_from_uid
    }

    pub const fn rank_state(&self) -> RankState {
        self.ranking.state()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Last chosen
    // ─────────────────────────────────────────────────────────────────────────

    /// The activity the user last picked for the target intent.
    pub fn last_chosen(&self) -> Result<Option<ResolveInfo>, PlatformError> {
        let query = LastChosenQuery {
            intent: self.target_intent.clone(),
            resolved_type: self.target_intent.resolve_type_if_needed().map(str::to_string),
            flags: QueryFlags::MATCH_DEFAULT_ONLY,
        };
        self.package_manager.last_chosen_activity(&query)
    }

    /// Remember the user's pick. `intent` must carry the chosen component.
    pub fn set_last_chosen(
        &self,
        intent: &Intent,
        filter: IntentFilter,
        match_quality: i32,
    ) -> Result<(), PlatformError> {
        let record = LastChosenRecord {
            intent: intent.clone(),
            resolved_type: intent.resolve_type().map(str::to_string),
            flags: QueryFlags::MATCH_DEFAULT_ONLY,
            filter,
            match_quality,
            component: intent.component.clone(),
        };
        self.package_manager.set_last_chosen_activity(&record)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Retrieval and filtering
    // ─────────────────────────────────────────────────────────────────────────

    /// Every way `user` can resolve any of `intents`, merged per component.
    ///
    /// Web intents and intents asking to match external components also
    /// match instant apps.
    pub fn get_resolvers_for_intent_as_user(
        &self,
        options: QueryOptions,
        intents: &[Intent],
        user: UserHandle,
    ) -> Vec<ResolvedComponentInfo> {
        let base_flags = options.base_flags();
        let mut resolved = Vec::new();

        for intent in intents {
            let flags = QueryFlags::for_intent(base_flags, intent);
            let infos = self
                .package_manager
                .query_intent_activities_as_user(intent, flags, user);
            debug!(
                action = intent.action.as_deref().unwrap_or("-"),
                flags = flags.bits(),
                %user,
                results = infos.len(),
                "Queried resolvers"
            );
            add_resolve_list_dedupe(&mut resolved, intent, &infos, |name| {
                self.policy.is_component_pinned(name)
            });
        }

        resolved
    }

    /// Merge `from` into `into` as resolutions of `intent`.
    pub fn add_resolve_list_dedupe(
        &self,
        into: &mut Vec<ResolvedComponentInfo>,
        intent: &Intent,
        from: &[ResolveInfo],
    ) {
        add_resolve_list_dedupe(into, intent, from, |name| self.policy.is_component_pinned(name));
    }

    /// Whether the user pinned this component.
    pub fn is_component_pinned(&self, name: &ComponentName) -> bool {
        self.policy.is_component_pinned(name)
    }

    /// Remove candidates the launching uid may not start, or that policy hides.
    pub fn filter_ineligible_activities(
        &self,
        batch: &mut Vec<ResolvedComponentInfo>,
        preserve_original: bool,
    ) -> FilterOutcome {
        filter::filter_ineligible_activities(
            batch,
            self.launched_from_uid,
            self.permissions.as_ref(),
            self.policy.as_ref(),
            preserve_original,
        )
    }

    /// Keep only the leading run of equal-priority candidates.
    pub fn filter_low_priority(
        &self,
        batch: &mut Vec<ResolvedComponentInfo>,
        preserve_original: bool,
    ) -> FilterOutcome {
        filter::filter_low_priority(batch, preserve_original)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ranking
    // ─────────────────────────────────────────────────────────────────────────

    /// Sort the whole batch by relevance. See [`RankingEngine::sort`].
    pub fn sort(&mut self, batch: &mut [ResolvedComponentInfo]) {
        self.ranking.sort(batch);
    }

    /// Bring the `k` most relevant candidates to the front. See
    /// [`RankingEngine::top_k`].
    pub fn top_k(&mut self, batch: &mut Vec<ResolvedComponentInfo>, k: usize) {
        self.ranking.top_k(batch, k);
    }

    /// Relevance score of a component, or `None` once the scorer is gone.
    pub fn score(&self, name: &ComponentName) -> Option<f32> {
        self.ranking.scorer().map(|scorer| scorer.score(name))
    }

    /// Tell the scorer the user picked `name`.
    pub fn update_model(&self, name: &ComponentName) {
        match self.ranking.scorer() {
            Some(scorer) => scorer.update_model(name),
            None => debug!(component = %name, "Scorer destroyed; model update dropped"),
        }
    }

    /// Record a launch in the scorer's usage statistics.
    pub fn update_chooser_counts(&self, package_name: &str, user_id: i32, action: &str) {
        match self.ranking.scorer() {
            Some(scorer) => scorer.update_chooser_counts(package_name, user_id, action),
            None => debug!(package_name, "Scorer destroyed; chooser count update dropped"),
        }
    }

    /// Release the scorer. Safe to call more than once; only the first call
    /// reaches the scorer.
    pub fn destroy(&mut self) {
        if let Some(scorer) = self.ranking.release() {
            scorer.destroy();
        }
    }
}
