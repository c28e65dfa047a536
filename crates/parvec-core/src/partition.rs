//! Deterministic partition planning for worker-parallel reductions
//!
//! A [`PartitionPlan`] assigns a contiguous index range of the input to every
//! worker. The assignment is load-balanced to within one element and is fully
//! deterministic: independent processes computing a plan for the same
//! `(total, workers)` pair derive identical slice boundaries, so no further
//! coordination is needed to agree on offsets.

use std::ops::Range;

/// Per-worker element counts for one reduction, immutable after construction.
///
/// Worker `0` is the coordinator; its range always starts at offset zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionPlan {
    counts: Vec<usize>,
}

impl PartitionPlan {
    /// Compute the balanced plan for `total` elements over `workers` workers.
    ///
    /// Each worker receives `total / workers` elements; the first
    /// `total % workers` workers receive one extra. The front-loaded
    /// tie-break is part of the contract — downstream offset arithmetic
    /// relies on it.
    ///
    /// # Panics
    ///
    /// Panics if `workers` is zero. A plan without workers is a programming
    /// error, not a data condition.
    pub fn balanced(total: usize, workers: usize) -> Self {
        assert!(workers > 0, "partition plan requires at least one worker");

        let base = total / workers;
        let remainder = total % workers;
        let counts = (0..workers)
            .map(|rank| if rank < remainder { base + 1 } else { base })
            .collect();

        log::debug!("partition plan: total={total} workers={workers} counts={counts:?}");
        Self { counts }
    }

    /// Per-worker element counts, indexed by rank.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Element count assigned to `rank`.
    pub fn count_of(&self, rank: usize) -> usize {
        self.counts[rank]
    }

    /// Start offset of `rank`'s slice in the full input.
    pub fn offset_of(&self, rank: usize) -> usize {
        self.counts[..rank].iter().sum()
    }

    /// The contiguous index range assigned to `rank`.
    pub fn range_of(&self, rank: usize) -> Range<usize> {
        let start = self.offset_of(rank);
        start..start + self.counts[rank]
    }

    /// Number of participating workers.
    pub fn worker_count(&self) -> usize {
        self.counts.len()
    }

    /// Total element count across all workers.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
