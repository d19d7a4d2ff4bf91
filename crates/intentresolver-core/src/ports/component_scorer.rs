//! Component scorer port.
//!
//! A scorer ranks candidates by how likely the user is to pick them. The core
//! only orchestrates it: it asks for a ranking once, waits for it, then uses
//! the scorer's comparison to order candidates.

use std::cmp::Ordering;

use crate::domain::{ComponentName, ResolvedComponentInfo};

/// One-shot completion signal handed to [`ComponentScorer::compute`].
///
/// The scorer calls it exactly once when its ranking is ready. Dropping it
/// without calling it tells the waiting caller the computation was abandoned.
pub type ComputeCallback = Box<dyn FnOnce() + Send + 'static>;

/// Port for a relevance scorer.
///
/// # Contract
///
/// - [`compute`](Self::compute) may finish on another thread; it must
///   eventually invoke or drop the callback.
/// - [`compare`](Self::compare) is a total order once the ranking is
///   computed. `Less` means the left candidate ranks higher (sorts first).
/// - [`destroy`](Self::destroy) is called at most once by the controller;
///   no other method is called afterwards.
pub trait ComponentScorer: Send + Sync {
    /// Start computing a ranking over `targets`.
    fn compute(&self, targets: &[ResolvedComponentInfo], on_computed: ComputeCallback);

    /// Three-way comparison between two candidates.
    fn compare(&self, lhs: &ResolvedComponentInfo, rhs: &ResolvedComponentInfo) -> Ordering;

    /// Relevance score for a component; higher is more relevant.
    fn score(&self, name: &ComponentName) -> f32;

    /// The user picked `name`; feed it back into the model.
    fn update_model(&self, name: &ComponentName);

    /// Record a launch for usage statistics.
    fn update_chooser_counts(&self, package_name: &str, user_id: i32, action: &str);

    /// Release any resources held by the scorer.
    fn destroy(&self);
}
