//! Remember command handler.

use std::path::Path;

use intentresolver_core::{ComponentName, CoreError, IntentFilter};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::candidates;
use crate::scenario::parse_component;

/// Record `component` as the user's pick for the target intent.
///
/// The component must be one of the filtered candidates. Its first match
/// supplies the filter and match quality that are remembered; the scorer is
/// told about the selection too.
pub fn remember(ctx: &CliContext, component: &str) -> Result<ComponentName, CliError> {
    let name = parse_component(component).map_err(|e| CliError::Arguments(e.to_string()))?;

    let batch = candidates::resolve(ctx, true);
    let chosen = batch
        .iter()
        .find(|rci| rci.name == name)
        .ok_or_else(|| CliError::Arguments(format!("{name} is not a candidate")))?;

    let info = chosen.first_resolve_info();
    let target = &ctx.scenario.target;
    let filter = info.filter.clone().unwrap_or_else(|| {
        target
            .action
            .as_deref()
            .map(IntentFilter::for_action)
            .unwrap_or_default()
    });

    let controller = ctx.controller();
    controller
        .set_last_chosen(&target.clone().with_component(name.clone()), filter, info.match_quality)
        .map_err(|e| CliError::from(CoreError::from(e)))?;

    controller.update_model(&name);
    controller.update_chooser_counts(
        &name.package_name,
        ctx.settings.effective_target_user().id(),
        target.action.as_deref().unwrap_or_default(),
    );

    Ok(name)
}

/// Execute the remember command and save the choice back to `path`.
pub fn execute(ctx: &mut CliContext, path: &Path, component: &str) -> Result<(), CliError> {
    let name = remember(ctx, component)?;

    ctx.scenario.last_chosen = ctx.package_manager.remembered();
    ctx.scenario.save(path)?;

    println!("Remembered {} in {}", name.flatten_to_short_string(), path.display());
    Ok(())
}
