//! Candidates command handler.

use intentresolver_core::ResolvedComponentInfo;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{CandidateRow, print_json, print_rows};

/// Query, merge and filter the scenario's intents.
///
/// The priority filter is skipped when `keep_low_priority` is set.
pub fn resolve(ctx: &CliContext, keep_low_priority: bool) -> Vec<ResolvedComponentInfo> {
    let controller = ctx.controller();
    let mut batch = controller.get_resolvers_for_intent_as_user(
        ctx.settings.query,
        &ctx.scenario.queries(),
        ctx.settings.effective_target_user(),
    );

    controller.filter_ineligible_activities(&mut batch, false);
    if !keep_low_priority {
        controller.filter_low_priority(&mut batch, false);
    }
    batch
}

/// Execute the candidates command.
pub fn execute(ctx: &CliContext, keep_low_priority: bool, json: bool) -> Result<(), CliError> {
    let batch = resolve(ctx, keep_low_priority);
    let rows: Vec<CandidateRow> = batch
        .iter()
        .enumerate()
        .map(|(i, rci)| CandidateRow::new(i + 1, rci, None))
        .collect();

    if json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No activities can handle this intent.");
        return Ok(());
    }

    println!("Found {} candidate(s):\n", rows.len());
    print_rows(&rows);
    Ok(())
}
