//! Ranking engine: drives the scorer once, then sorts or selects the top k.
//!
//! # Invariant
//!
//! The scorer's ranking is computed at most once per engine. Every later
//! sort or top-k reuses it, even for a different batch.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, error};

use crate::domain::ResolvedComponentInfo;
use crate::ports::ComponentScorer;

/// Progress of the one-time ranking computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankState {
    Uncomputed,
    Computing,
    Computed,
}

/// Reasons a ranking attempt was abandoned. Never surfaced to callers.
#[derive(Debug, Error)]
pub enum RankError {
    /// The completion callback was dropped before it fired.
    #[error("Ranking computation was interrupted")]
    Interrupted,

    /// The scorer has already been released.
    #[error("Scorer has already been destroyed")]
    ScorerReleased,
}

/// Heap entry ordered so the lowest ranked candidate is at the top.
struct LowestFirst<'a> {
    candidate: ResolvedComponentInfo,
    scorer: &'a dyn ComponentScorer,
}

impl PartialEq for LowestFirst<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LowestFirst<'_> {}

impl PartialOrd for LowestFirst<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LowestFirst<'_> {
    // `BinaryHeap` pops the greatest element, and the scorer orders higher
    // ranked candidates as `Less`, so the greatest is the lowest ranked.
    fn cmp(&self, other: &Self) -> Ordering {
        self.scorer.compare(&self.candidate, &other.candidate)
    }
}

/// Orders candidate batches using a [`ComponentScorer`].
pub struct RankingEngine {
    scorer: Option<Arc<dyn ComponentScorer>>,
    state: RankState,
}

impl RankingEngine {
    pub fn new(scorer: Arc<dyn ComponentScorer>) -> Self {
        Self {
            scorer: Some(scorer),
            state: RankState::Uncomputed,
        }
    }

    pub const fn state(&self) -> RankState {
        self.state
    }

    /// The scorer, unless it has been released.
    pub fn scorer(&self) -> Option<&Arc<dyn ComponentScorer>> {
        self.scorer.as_ref()
    }

    /// Detach the scorer. Later compute attempts become no-ops.
    pub fn release(&mut self) -> Option<Arc<dyn ComponentScorer>> {
        self.scorer.take()
    }

    /// Ask the scorer to rank `batch` and block until it reports completion.
    ///
    /// Must run on a worker thread, never inside an async runtime.
    fn compute(&mut self, batch: &[ResolvedComponentInfo]) -> Result<(), RankError> {
        let Some(scorer) = self.scorer.clone() else {
            return Err(RankError::ScorerReleased);
        };

        let previous = self.state;
        self.state = RankState::Computing;

        let (finished_tx, finished_rx) = oneshot::channel::<()>();
        scorer.compute(
            batch,
            Box::new(move || {
                // The waiter may have given up already; nothing to do then.
                let _ = finished_tx.send(());
            }),
        );

        if finished_rx.blocking_recv().is_err() {
            self.state = previous;
            return Err(RankError::Interrupted);
        }

        self.state = RankState::Computed;
        Ok(())
    }

    /// Compute if needed, returning the scorer to rank with.
    ///
    /// Failures are logged here and reported as `None`: the batch is then
    /// left in whatever order it already had.
    fn ensure_computed(
        &mut self,
        batch: &[ResolvedComponentInfo],
        operation: &str,
    ) -> Option<Arc<dyn ComponentScorer>> {
        if self.state != RankState::Computed {
            match self.compute(batch) {
                Ok(()) => {}
                Err(RankError::ScorerReleased) => {
                    debug!("Comparator has already been destroyed; skipped.");
                    return None;
                }
                Err(err @ RankError::Interrupted) => {
                    error!("Compute & {operation} was interrupted: {err}");
                    return None;
                }
            }
        }
        self.scorer.clone()
    }

    /// Stable sort of the whole batch by the scorer's comparison.
    pub fn sort(&mut self, batch: &mut [ResolvedComponentInfo]) {
        let started = Instant::now();
        let Some(scorer) = self.ensure_computed(batch, "sort") else {
            return;
        };

        batch.sort_by(|lhs, rhs| scorer.compare(lhs, rhs));

        debug!(
            elapsed = ?started.elapsed(),
            size = batch.len(),
            "Sorted candidates"
        );
    }

    /// Move the `k` highest ranked candidates to the front of `batch`.
    ///
    /// The prefix holds the right set, ordered by heap drain rather than by a
    /// full sort; callers that need a sorted prefix should use [`sort`].
    /// Falls back to [`sort`] when `k` covers the whole batch and does nothing
    /// for an empty batch or `k == 0`.
    ///
    /// [`sort`]: Self::sort
    pub fn top_k(&mut self, batch: &mut Vec<ResolvedComponentInfo>, k: usize) {
        if batch.is_empty() || k == 0 {
            return;
        }
        if batch.len() <= k {
            self.sort(batch);
            return;
        }

        let started = Instant::now();
        let Some(scorer) = self.ensure_computed(batch, "top-k") else {
            return;
        };
        let scorer = scorer.as_ref();

        let size = batch.len();
        let tail = batch.split_off(size - k);
        let head = std::mem::take(batch);

        // Top of this heap has lowest rank.
        let mut heap: BinaryHeap<LowestFirst<'_>> = tail
            .into_iter()
            .map(|candidate| LowestFirst { candidate, scorer })
            .collect();

        // Output slots are filled from the back; `placed` is that sequence.
        let mut placed = Vec::with_capacity(size);
        for candidate in head.into_iter().rev() {
            let ranks_higher = heap
                .peek()
                .is_some_and(|lowest| scorer.compare(&candidate, &lowest.candidate).is_lt());

            if ranks_higher {
                if let Some(evicted) = heap.pop() {
                    placed.push(evicted.candidate);
                }
                heap.push(LowestFirst { candidate, scorer });
            } else {
                placed.push(candidate);
            }
        }

        // Remaining heap entries are the top k; they take the front slots.
        while let Some(entry) = heap.pop() {
            placed.push(entry.candidate);
        }

        placed.reverse();
        *batch = placed;

        debug!(
            elapsed = ?started.elapsed(),
            k,
            size,
            "Selected top candidates"
        );
    }
}
