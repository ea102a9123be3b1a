//! Rank Comparator - groups records, classifies every pair and computes tau
//!
//! da-RR Kendall's tau (Ma et al. 2019, WMT19 metrics shared task):
//!
//! ```text
//!          |Concordant| - |Discordant|
//!   tau = ----------------------------------------
//!          |Concordant| + |Discordant| + |Ties|
//! ```
//!
//! Pairs are only formed inside a group (same item, same annotator), so
//! scores from different annotators are never compared directly.
//! Groups are independent; the parallel path merges per-group counts.

use crate::classify::{ComparisonTable, PairClass};
use crate::config::ComparatorConfig;
use crate::data::{records_from_frame, GroupKey, Record};
use crate::error::TauError;
use crate::ranking::{derive_human_ranks, metric_quality_ranks};
use crate::utils::index_pairs;
use anyhow::Context;
use polars::prelude::DataFrame;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use tracing::{debug, trace};

/// Per-class pair counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCounts {
    pub concordant: usize,
    pub discordant: usize,
    pub ties: usize,
    /// Not part of the tau formula
    pub unclassified: usize,
}

impl PairCounts {
    pub fn record(&mut self, class: PairClass) {
        match class {
            PairClass::Concordant => self.concordant += 1,
            PairClass::Discordant => self.discordant += 1,
            PairClass::Tie => self.ties += 1,
            PairClass::Unclassified => self.unclassified += 1,
        }
    }

    /// Every pair seen, classified or not
    pub fn total(&self) -> usize {
        self.comparable() + self.unclassified
    }

    /// Tau denominator
    pub fn comparable(&self) -> usize {
        self.concordant + self.discordant + self.ties
    }

    /// # Errors
    /// `TauError::NoComparablePairs` when the denominator is zero.
    pub fn tau(&self) -> Result<f64, TauError> {
        let denominator = self.comparable();
        if denominator == 0 {
            return Err(TauError::NoComparablePairs { unclassified: self.unclassified });
        }
        Ok((self.concordant as f64 - self.discordant as f64) / denominator as f64)
    }
}

impl Add for PairCounts {
    type Output = PairCounts;

    fn add(self, rhs: PairCounts) -> PairCounts {
        PairCounts {
            concordant: self.concordant + rhs.concordant,
            discordant: self.discordant + rhs.discordant,
            ties: self.ties + rhs.ties,
            unclassified: self.unclassified + rhs.unclassified,
        }
    }
}

impl AddAssign for PairCounts {
    fn add_assign(&mut self, rhs: PairCounts) {
        *self = *self + rhs;
    }
}

impl Sum for PairCounts {
    fn sum<I: Iterator<Item = PairCounts>>(iter: I) -> Self {
        iter.fold(PairCounts::default(), Add::add)
    }
}

/// Tau with the counts it was computed from
///
/// Serializes to `{"tau", "concordant", "discordant", "ties"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TauResult {
    pub tau: f64,
    pub concordant: usize,
    pub discordant: usize,
    pub ties: usize,
}

impl TauResult {
    pub fn from_counts(counts: &PairCounts) -> Result<Self, TauError> {
        Ok(Self {
            tau: counts.tau()?,
            concordant: counts.concordant,
            discordant: counts.discordant,
            ties: counts.ties,
        })
    }
}

/// Main comparator
pub struct RankComparator {
    config: ComparatorConfig,
    table: ComparisonTable,
}

impl Default for RankComparator {
    fn default() -> Self {
        let config = ComparatorConfig::default();
        let table = config.policy.table();
        Self { config, table }
    }
}

impl RankComparator {
    /// # Errors
    /// Rejects a negative/NaN threshold or an empty group-by list.
    pub fn new(config: ComparatorConfig) -> Result<Self, TauError> {
        config.validate()?;
        let table = config.policy.table();
        Ok(Self { config, table })
    }

    /// Classify one pair of records (s1 = `first`, s2 = `second`)
    pub fn classify_pair(&self, first: &Record, second: &Record) -> PairClass {
        let human = derive_human_ranks(first.human_score, second.human_score, self.config.threshold);
        let metric = metric_quality_ranks(
            first.metric_score,
            second.metric_score,
            self.config.metric_orientation,
        );
        self.table.classify(human, metric)
    }

    /// Counts for the pairs of a single group, in row order
    pub fn count_group(&self, group: &[&Record]) -> PairCounts {
        let mut counts = PairCounts::default();
        for (i, j) in index_pairs(group.len()) {
            counts.record(self.classify_pair(group[i], group[j]));
        }
        counts
    }

    /// Global counts over all groups
    pub fn count_pairs(&self, records: &[Record]) -> Result<PairCounts, TauError> {
        check_scores(records)?;
        let groups: Vec<Vec<&Record>> = group_records(records).into_values().collect();

        let counts: PairCounts = if self.config.parallel {
            groups.par_iter()
                .map(|group| self.count_group(group))
                .reduce(PairCounts::default, Add::add)
        } else {
            groups.iter().map(|group| self.count_group(group)).sum()
        };

        debug!(
            records = records.len(),
            groups = groups.len(),
            pairs = counts.total(),
            concordant = counts.concordant,
            discordant = counts.discordant,
            ties = counts.ties,
            unclassified = counts.unclassified,
            "classified da-RR pairs"
        );

        Ok(counts)
    }

    /// Per-group counts, sorted by group key
    pub fn group_counts(&self, records: &[Record]) -> Result<Vec<(GroupKey, PairCounts)>, TauError> {
        check_scores(records)?;
        let mut per_group: Vec<(GroupKey, PairCounts)> = group_records(records)
            .into_iter()
            .map(|(key, group)| {
                let counts = self.count_group(&group);
                trace!(group = ?key, pairs = counts.total(), "group counted");
                (key.clone(), counts)
            })
            .collect();

        per_group.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(per_group)
    }

    /// Compute tau over in-memory records
    ///
    /// # Errors
    /// - `TauError::NanScore` for a NaN score
    /// - `TauError::NoComparablePairs` when no pair is concordant, discordant or tied
    pub fn compare_records(&self, records: &[Record]) -> Result<TauResult, TauError> {
        let counts = self.count_pairs(records)?;
        TauResult::from_counts(&counts)
    }

    /// Compute tau over a DataFrame using the configured column names
    ///
    /// # Example
    /// ```rust
    /// use darr_tau::RankComparator;
    /// use polars::prelude::*;
    ///
    /// let df = df![
    ///     "question_id" => &["q1", "q1"],
    ///     "user_id" => &["u1", "u1"],
    ///     "ranking" => &[90.0, 40.0],
    ///     "score" => &[5.0, 3.0],
    /// ]?;
    ///
    /// let result = RankComparator::default().compare_frame(&df)?;
    /// assert_eq!(result.concordant, 1);
    /// assert_eq!(result.tau, 1.0);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn compare_frame(&self, df: &DataFrame) -> anyhow::Result<TauResult> {
        let records = records_from_frame(
            df,
            &self.config.group_by,
            &self.config.human_col,
            &self.config.metric_col,
        )?;

        self.compare_records(&records)
            .with_context(|| format!("da-RR tau over {} rows", df.height()))
    }
}

/// Tau over records with the default policy, orientation and the given threshold
pub fn aggregate(records: &[Record], threshold: f64) -> Result<TauResult, TauError> {
    let config = ComparatorConfig::default().with_threshold(threshold);
    RankComparator::new(config)?.compare_records(records)
}

/// Tau over a DataFrame
pub fn kendalls_tau_darr(df: &DataFrame, config: ComparatorConfig) -> anyhow::Result<TauResult> {
    RankComparator::new(config)?.compare_frame(df)
}

fn check_scores(records: &[Record]) -> Result<(), TauError> {
    for (index, record) in records.iter().enumerate() {
        if record.human_score.is_nan() {
            return Err(TauError::NanScore { index, column: "human" });
        }
        if record.metric_score.is_nan() {
            return Err(TauError::NanScore { index, column: "metric" });
        }
    }
    Ok(())
}

/// Partition records by group key, keeping input order inside each group
fn group_records(records: &[Record]) -> FxHashMap<&GroupKey, Vec<&Record>> {
    let mut groups: FxHashMap<&GroupKey, Vec<&Record>> = FxHashMap::default();
    for record in records {
        groups.entry(&record.group_key).or_default().push(record);
    }
    groups
}
