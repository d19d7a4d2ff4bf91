//! CLI bootstrap - the composition root.
//!
//! This is the only place where adapters are wired into the controller.
//! Handlers receive a fully composed [`CliContext`].

use std::sync::Arc;

use intentresolver_core::{
    ControllerSettings, CoreError, ResolverListController, SettingsUpdate, validate_settings,
};
use tracing::debug;

use crate::adapters::{ScenarioPackageManager, ScenarioPolicy, TableScorer};
use crate::error::CliError;
use crate::scenario::Scenario;

/// Fully composed context for one CLI command.
///
/// Dropping the context releases the scorer, whichever command ran.
pub struct CliContext {
    /// The scenario the adapters were built from.
    pub scenario: Scenario,
    /// Effective settings: defaults, then the scenario, then CLI flags.
    pub settings: ControllerSettings,
    pub controller: ResolverListController,
    pub package_manager: Arc<ScenarioPackageManager>,
    pub scorer: Arc<TableScorer>,
}

impl CliContext {
    /// Access the controller.
    pub const fn controller(&self) -> &ResolverListController {
        &self.controller
    }
}

impl Drop for CliContext {
    fn drop(&mut self) {
        self.controller.destroy();
    }
}

/// Resolve effective settings for a scenario.
///
/// Layers, lowest first: built-in defaults, the scenario's `settings`
/// block, then `overrides` from the command line.
pub fn effective_settings(
    scenario: &Scenario,
    overrides: &SettingsUpdate,
) -> Result<ControllerSettings, CoreError> {
    let mut settings = ControllerSettings::with_defaults();
    settings.merge(&scenario.settings);
    settings.merge(overrides);
    validate_settings(&settings)?;
    Ok(settings)
}

/// Bootstrap the controller for a scenario.
pub fn bootstrap(scenario: Scenario, overrides: &SettingsUpdate) -> Result<CliContext, CliError> {
    let settings = effective_settings(&scenario, overrides)?;

    let package_manager = Arc::new(ScenarioPackageManager::new(
        scenario.resolutions.clone(),
        scenario.last_chosen.clone(),
    ));
    let scorer = Arc::new(TableScorer::new(scenario.score_table()?));
    let policy = ScenarioPolicy::new(scenario.pinned_components()?, scenario.blocked_components()?);

    let controller = ResolverListController::new(
        package_manager.clone(),
        scenario.target.clone(),
        settings.referrer_package.clone().unwrap_or_default(),
        settings.effective_launched_from_uid(),
        scorer.clone(),
    )
    .with_permission_checker(Arc::new(scenario.permission_policy()))
    .with_policy(Arc::new(policy));

    debug!(
        uid = settings.effective_launched_from_uid(),
        user = %settings.effective_target_user(),
        intents = scenario.queries().len(),
        "Controller ready"
    );

    Ok(CliContext {
        scenario,
        settings,
        controller,
        package_manager,
        scorer,
    })
}
