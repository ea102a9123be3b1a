//! da-RR Kendall's Tau
//!
//! Segment-level agreement between an automatic metric and human direct
//! assessment (DA) scores, as used in the WMT metrics shared tasks.
//!
//! Module layout:
//! - `ranking/`: human (thresholded) and metric (min-rank) rank pairs
//! - `classify`: concordant / discordant / tie tables, one per policy
//! - `comparator`: grouping, pair enumeration, counts and tau
//! - `data`: input records, DataFrame conversion
//! - `config`: comparator configuration (serde / JSON)
//! - `utils/`: pair enumeration and column projection helpers

pub mod error;
pub mod ranking;
pub mod classify;
pub mod utils;
pub mod data;
pub mod config;
pub mod comparator;

// Re-export commonly used types
pub use error::TauError;
pub use ranking::{derive_human_ranks, derive_metric_ranks, MetricOrientation, RankPair, DEFAULT_THRESHOLD};
pub use classify::{classify, ComparisonPolicy, ComparisonTable, PairClass};
pub use data::{records_from_frame, GroupKey, Record};
pub use config::ComparatorConfig;
pub use comparator::{aggregate, kendalls_tau_darr, PairCounts, RankComparator, TauResult};
