//! Candidate rows for table and JSON output.

use intentresolver_core::ResolvedComponentInfo;
use serde::Serialize;

use super::tables::{print_separator, truncate_string};
use crate::error::CliError;

/// One displayed candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRow {
    pub rank: usize,
    pub component: String,
    pub user: i32,
    pub priority: i32,
    pub is_default: bool,
    pub pinned: bool,
    pub matches: usize,
    /// Relevance score; absent until candidates are ranked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl CandidateRow {
    /// Describe the candidate at 1-based `rank`.
    pub fn new(rank: usize, rci: &ResolvedComponentInfo, score: Option<f32>) -> Self {
        let info = rci.first_resolve_info();
        Self {
            rank,
            component: rci.name.flatten_to_short_string(),
            user: info.target_user_id.id(),
            priority: info.priority,
            is_default: info.is_default,
            pinned: rci.is_pinned(),
            matches: rci.count(),
            score,
        }
    }
}

/// Print rows as an aligned table.
pub fn print_rows(rows: &[CandidateRow]) {
    println!(
        "{:<4} {:<44} {:<6} {:<8} {:<7} {:<6} {:<7} Score",
        "#", "Component", "User", "Priority", "Default", "Pinned", "Matches"
    );
    print_separator(96);

    for row in rows {
        let score = row
            .score
            .map_or_else(|| "--".to_string(), |score| format!("{score:.3}"));
        println!(
            "{:<4} {:<44} {:<6} {:<8} {:<7} {:<6} {:<7} {}",
            row.rank,
            truncate_string(&row.component, 43),
            row.user,
            row.priority,
            if row.is_default { "yes" } else { "no" },
            if row.pinned { "yes" } else { "no" },
            row.matches,
            score
        );
    }
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
