//! Relative ranking of score pairs
//!
//! - `human`: thresholded DA ranks (1 = as good or better)
//! - `metric`: minimum-rank ranks of metric scores, plus orientation

pub mod human;
pub mod metric;

pub use human::{derive_human_ranks, derive_human_ranks_from_scores, DEFAULT_THRESHOLD};
pub use metric::{derive_metric_ranks, metric_quality_ranks, MetricOrientation};

use std::cmp::Ordering;

/// Relative ranks of the two members of a pair, `(rank(s1), rank(s2))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankPair(pub u8, pub u8);

impl RankPair {
    pub const TIED: RankPair = RankPair(1, 1);
    pub const FIRST_BETTER: RankPair = RankPair(1, 2);
    pub const SECOND_BETTER: RankPair = RankPair(2, 1);

    /// How rank(s1) compares to rank(s2)
    pub fn ordering(self) -> Ordering {
        self.0.cmp(&self.1)
    }

    pub fn is_tied(self) -> bool {
        self.0 == self.1
    }

    pub fn reversed(self) -> RankPair {
        RankPair(self.1, self.0)
    }
}
