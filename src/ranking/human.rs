//! Human Rank Deriver
//!
//! Turns two direct-assessment scores into a relative ranking. Differences
//! smaller than the threshold are not considered meaningful and produce a tie.
//!
//! Rank 1 always means "as good or better".

use super::RankPair;
use crate::error::TauError;

/// Default significance threshold on a 0-100 DA scale
pub const DEFAULT_THRESHOLD: f64 = 25.0;

/// Relative ranking of two human scores
///
/// Tied when the scores are equal or `|a - b| < threshold`. A difference of
/// exactly `threshold` is significant.
///
/// # Example
/// ```rust
/// use darr_tau::ranking::{derive_human_ranks, RankPair};
///
/// assert_eq!(derive_human_ranks(90.0, 40.0, 25.0), RankPair(1, 2));
/// assert_eq!(derive_human_ranks(50.0, 55.0, 25.0), RankPair(1, 1));
/// ```
pub fn derive_human_ranks(score_a: f64, score_b: f64, threshold: f64) -> RankPair {
    if score_a == score_b || (score_a - score_b).abs() < threshold {
        return RankPair::TIED;
    }

    if score_a > score_b {
        RankPair::FIRST_BETTER
    } else {
        RankPair::SECOND_BETTER
    }
}

/// Slice form of [`derive_human_ranks`]
///
/// # Errors
/// `TauError::InvalidPair` unless `scores` holds exactly two values.
pub fn derive_human_ranks_from_scores(scores: &[f64], threshold: f64) -> Result<RankPair, TauError> {
    match scores {
        [a, b] => Ok(derive_human_ranks(*a, *b, threshold)),
        _ => Err(TauError::InvalidPair { len: scores.len() }),
    }
}
