//! Error types for the da-RR computation
//!
//! The pure core returns `TauError`. The DataFrame boundary returns
//! `anyhow::Result` and wraps these, so callers can `downcast_ref::<TauError>()`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TauError {
    /// Human rank derivation needs exactly two scores
    #[error("expected exactly 2 scores for a rank pair, got {len}")]
    InvalidPair { len: usize },

    #[error("threshold must be a non-negative number, got {0}")]
    InvalidThreshold(f64),

    #[error("NaN {column} score at row {index}")]
    NanScore { index: usize, column: &'static str },

    /// Zero denominator: every pair was unclassified, or no group had two records
    #[error("no comparable pairs: concordant + discordant + ties == 0 ({unclassified} unclassified)")]
    NoComparablePairs { unclassified: usize },

    #[error("at least one group-by column is required")]
    EmptyGroupBy,
}
