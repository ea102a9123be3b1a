//! Metric Rank Deriver
//!
//! Metric scores are ranked with the "min" tie method: the lower score gets
//! rank 1, equal scores share rank 1. No threshold is applied.

use super::RankPair;
use serde::{Deserialize, Serialize};

/// Which direction of the metric means "better translation"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricOrientation {
    /// BLEU, chrF, COMET, ...
    #[default]
    HigherIsBetter,
    /// TER and other error rates. Compares raw min-ranks against human ranks.
    LowerIsBetter,
}

/// Minimum-rank ranking of two metric scores
pub fn derive_metric_ranks(score_a: f64, score_b: f64) -> RankPair {
    if score_a < score_b {
        RankPair(1, 2)
    } else if score_a > score_b {
        RankPair(2, 1)
    } else {
        RankPair(1, 1)
    }
}

/// Metric ranks expressed like human ranks (1 = better)
pub fn metric_quality_ranks(score_a: f64, score_b: f64, orientation: MetricOrientation) -> RankPair {
    let ranks = derive_metric_ranks(score_a, score_b);
    match orientation {
        MetricOrientation::HigherIsBetter => ranks.reversed(),
        MetricOrientation::LowerIsBetter => ranks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_rank_convention() {
        assert_eq!(derive_metric_ranks(3.0, 5.0), RankPair(1, 2));
        assert_eq!(derive_metric_ranks(5.0, 3.0), RankPair(2, 1));
        assert_eq!(derive_metric_ranks(4.0, 4.0), RankPair(1, 1));
    }

    #[test]
    fn test_tiny_difference_is_significant() {
        assert_eq!(derive_metric_ranks(0.5, 0.5 + 1e-12), RankPair(1, 2));
    }

    #[test]
    fn test_orientation() {
        assert_eq!(
            metric_quality_ranks(5.0, 3.0, MetricOrientation::HigherIsBetter),
            RankPair::FIRST_BETTER
        );
        assert_eq!(
            metric_quality_ranks(5.0, 3.0, MetricOrientation::LowerIsBetter),
            RankPair::SECOND_BETTER
        );
        assert!(metric_quality_ranks(0.7, 0.7, MetricOrientation::HigherIsBetter).is_tied());
    }

    #[test]
    fn test_orientation_serde() {
        let parsed: MetricOrientation = serde_json::from_str("\"lower_is_better\"").unwrap();
        assert_eq!(parsed, MetricOrientation::LowerIsBetter);
        assert_eq!(
            serde_json::to_string(&MetricOrientation::HigherIsBetter).unwrap(),
            "\"higher_is_better\""
        );
    }
}
