//! Last-chosen command handler.

use intentresolver_core::{CoreError, ResolveInfo};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_json;

/// Look up the activity remembered for the scenario's target intent.
pub fn lookup(ctx: &CliContext) -> Result<Option<ResolveInfo>, CliError> {
    ctx.controller()
        .last_chosen()
        .map_err(|e| CliError::from(CoreError::from(e)))
}

/// Execute the last-chosen command.
pub fn execute(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    let chosen = lookup(ctx)?;

    if json {
        return print_json(&chosen);
    }

    let action = ctx.scenario.target.action.as_deref().unwrap_or("(no action)");
    match chosen {
        Some(info) => {
            println!("{}", info.component_name().flatten_to_short_string());
            if let Some(filter) = &info.filter {
                println!("  filter actions: {}", filter.actions.join(", "));
            }
            println!("  match quality: {:#x}", info.match_quality);
        }
        None => println!("No activity remembered for {action}."),
    }
    Ok(())
}
