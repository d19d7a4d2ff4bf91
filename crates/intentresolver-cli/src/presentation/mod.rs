//! Terminal output for candidate lists.

mod rows;
mod tables;

pub use rows::{CandidateRow, print_json, print_rows};
pub use tables::{print_separator, truncate_string};
