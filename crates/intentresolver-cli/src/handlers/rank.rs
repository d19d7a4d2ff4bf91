//! Rank command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::candidates;
use crate::presentation::{CandidateRow, print_json, print_rows};

/// Resolve, filter and rank, returning the rows to display.
///
/// With a top-k setting only the `k` best candidates are returned; their
/// relative order is then fixed with a sort.
pub fn rank(ctx: &mut CliContext, keep_low_priority: bool) -> Vec<CandidateRow> {
    let mut batch = candidates::resolve(ctx, keep_low_priority);

    match ctx.settings.top_k {
        Some(k) if k < batch.len() => {
            ctx.controller.top_k(&mut batch, k);
            batch.truncate(k);
            ctx.controller.sort(&mut batch);
        }
        _ => ctx.controller.sort(&mut batch),
    }

    batch
        .iter()
        .enumerate()
        .map(|(i, rci)| CandidateRow::new(i + 1, rci, ctx.controller.score(&rci.name)))
        .collect()
}

/// Execute the rank command.
pub fn execute(ctx: &mut CliContext, keep_low_priority: bool, json: bool) -> Result<(), CliError> {
    let rows = rank(ctx, keep_low_priority);

    if json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No activities can handle this intent.");
        return Ok(());
    }

    print_rows(&rows);
    Ok(())
}
