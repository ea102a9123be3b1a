//! Pair Classifier
//!
//! Maps a (human ranks, metric ranks) pair onto concordant / discordant / tie.
//! Each `ComparisonPolicy` owns an immutable table of
//! `(human ordering, metric ordering) -> PairClass` rows; rows are tried in
//! order and a pair matching no row is `Unclassified`.
//!
//! Orderings compare rank(s1) with rank(s2), so `Less` means s1 is judged better.
//!
//! ```text
//!                      metric
//!               s1 < s2   s1 = s2   s1 > s2
//! human s1 < s2  Conc      Tie       Disc
//!       s1 = s2  -         -         -
//!       s1 > s2  Disc      Tie       Conc
//! ```
//! (default soft-penalization table)

use crate::ranking::RankPair;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering::{self, Equal, Greater, Less};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairClass {
    Concordant,
    Discordant,
    Tie,
    /// Matched no row; excluded from tau
    Unclassified,
}

/// Selects the comparison table used by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPolicy {
    /// A metric tie against a human preference counts as a tie
    #[default]
    SoftPenalization,
    /// A metric tie against a human preference counts as discordant
    Strict,
    /// Ties on either side count as ties; agreeing ties are concordant
    SymmetricTies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRule {
    pub human: Ordering,
    pub metric: Ordering,
    pub outcome: PairClass,
}

const fn rule(human: Ordering, metric: Ordering, outcome: PairClass) -> ComparisonRule {
    ComparisonRule { human, metric, outcome }
}

use PairClass::{Concordant as C, Discordant as D, Tie as T};

static SOFT_PENALIZATION: [ComparisonRule; 6] = [
    rule(Less, Less, C),
    rule(Less, Equal, T),
    rule(Less, Greater, D),
    rule(Greater, Less, D),
    rule(Greater, Equal, T),
    rule(Greater, Greater, C),
];

static STRICT: [ComparisonRule; 6] = [
    rule(Less, Less, C),
    rule(Less, Equal, D),
    rule(Less, Greater, D),
    rule(Greater, Less, D),
    rule(Greater, Equal, D),
    rule(Greater, Greater, C),
];

static SYMMETRIC_TIES: [ComparisonRule; 9] = [
    rule(Less, Less, C),
    rule(Less, Equal, T),
    rule(Less, Greater, D),
    rule(Equal, Less, T),
    rule(Equal, Equal, C),
    rule(Equal, Greater, T),
    rule(Greater, Less, D),
    rule(Greater, Equal, T),
    rule(Greater, Greater, C),
];

/// Borrowed view of one policy's rows
#[derive(Debug, Clone, Copy)]
pub struct ComparisonTable {
    rules: &'static [ComparisonRule],
}

impl ComparisonTable {
    pub fn rules(&self) -> &'static [ComparisonRule] {
        self.rules
    }

    pub fn classify(&self, human: RankPair, metric: RankPair) -> PairClass {
        let (h, m) = (human.ordering(), metric.ordering());
        self.rules
            .iter()
            .find(|r| r.human == h && r.metric == m)
            .map_or(PairClass::Unclassified, |r| r.outcome)
    }
}

impl ComparisonPolicy {
    pub fn table(self) -> ComparisonTable {
        let rules: &'static [ComparisonRule] = match self {
            ComparisonPolicy::SoftPenalization => &SOFT_PENALIZATION,
            ComparisonPolicy::Strict => &STRICT,
            ComparisonPolicy::SymmetricTies => &SYMMETRIC_TIES,
        };
        ComparisonTable { rules }
    }
}

/// Classify with the default soft-penalization policy
pub fn classify(human: RankPair, metric: RankPair) -> PairClass {
    ComparisonPolicy::default().table().classify(human, metric)
}
