//! Fake scorers.
//!
//! `TableScorer` finishes its computation on a spawned thread, so tests using
//! it go through the same cross-thread completion path a real ranker would.

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::thread;
use std::time::Duration;

use intentresolver_core::{ComponentName, ComponentScorer, ComputeCallback, ResolvedComponentInfo};

/// How the fake finishes a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Call the callback on a background thread after a short delay.
    Background,
    /// Drop the callback on a background thread without calling it.
    Abandon,
}

/// Scores come from a table keyed by component; unknown components score 0.
/// Higher scores rank first; equal scores compare equal.
pub struct TableScorer {
    scores: HashMap<ComponentName, f32>,
    completion: Completion,
    pub computes: AtomicUsize,
    pub computed_sizes: Mutex<Vec<usize>>,
    pub model_updates: Mutex<Vec<ComponentName>>,
    pub chooser_counts: Mutex<Vec<(String, i32, String)>>,
    pub destroyed: AtomicUsize,
}

impl TableScorer {
    pub fn new(scores: impl IntoIterator<Item = (ComponentName, f32)>) -> Self {
        Self::with_completion(scores, Completion::Background)
    }

    pub fn with_completion(
        scores: impl IntoIterator<Item = (ComponentName, f32)>,
        completion: Completion,
    ) -> Self {
        Self {
            scores: scores.into_iter().collect(),
            completion,
            computes: AtomicUsize::new(0),
            computed_sizes: Mutex::new(Vec::new()),
            model_updates: Mutex::new(Vec::new()),
            chooser_counts: Mutex::new(Vec::new()),
            destroyed: AtomicUsize::new(0),
        }
    }

    pub fn compute_count(&self) -> usize {
        self.computes.load(AtomicOrdering::SeqCst)
    }

    pub fn destroy_count(&self) -> usize {
        self.destroyed.load(AtomicOrdering::SeqCst)
    }
}

impl ComponentScorer for TableScorer {
    fn compute(&self, targets: &[ResolvedComponentInfo], on_computed: ComputeCallback) {
        self.computes.fetch_add(1, AtomicOrdering::SeqCst);
        self.computed_sizes.lock().unwrap().push(targets.len());

        match self.completion {
            Completion::Background => {
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(5));
                    on_computed();
                });
            }
            Completion::Abandon => {
                thread::spawn(move || drop(on_computed));
            }
        }
    }

    fn compare(&self, lhs: &ResolvedComponentInfo, rhs: &ResolvedComponentInfo) -> Ordering {
        self.score(&rhs.name).total_cmp(&self.score(&lhs.name))
    }

    fn score(&self, name: &ComponentName) -> f32 {
        self.scores.get(name).copied().unwrap_or(0.0)
    }

    fn update_model(&self, name: &ComponentName) {
        self.model_updates.lock().unwrap().push(name.clone());
    }

    fn update_chooser_counts(&self, package_name: &str, user_id: i32, action: &str) {
        self.chooser_counts
            .lock()
            .unwrap()
            .push((package_name.to_string(), user_id, action.to_string()));
    }

    fn destroy(&self) {
        self.destroyed.fetch_add(1, AtomicOrdering::SeqCst);
    }
}
