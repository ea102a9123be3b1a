//! Utility modules for the da-RR computation
//!
//! - Pairs: unordered index-pair enumeration within a group
//! - Frame helpers: column projection and validation for DataFrame input

pub mod frame_helpers;
pub mod pairs;

// Re-export commonly used items
pub use frame_helpers::{require_columns, select_comparison_columns};
pub use pairs::{index_pairs, pair_count};
