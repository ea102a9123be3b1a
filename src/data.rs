//! Input records
//!
//! A `Record` is one judged item: its composite group key (typically
//! question id + annotator id), the human DA score and the metric score.
//! `records_from_frame` builds them from a Polars DataFrame.

use crate::error::TauError;
use crate::utils::frame_helpers::{
    group_key_col, select_comparison_columns, HUMAN_SCORE_COL, METRIC_SCORE_COL, SOURCE_ROW_COL,
};
use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Composite group key; two parts (item, annotator) stay on the stack
pub type GroupKey = SmallVec<[String; 2]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub group_key: GroupKey,
    pub human_score: f64,
    pub metric_score: f64,
}

impl Record {
    pub fn new<K, S>(group_key: K, human_score: f64, metric_score: f64) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group_key: group_key.into_iter().map(Into::into).collect(),
            human_score,
            metric_score,
        }
    }
}

/// Convert a DataFrame into records
///
/// Group-key columns are cast to strings, score columns to f64. Rows with a
/// null group key are skipped.
///
/// # Errors
/// Returns error if:
/// - A named column is missing
/// - A score column cannot be cast to f64
/// - A score is null
/// - A score is NaN (`TauError::NanScore`)
///
/// Row numbers in errors are positions in `df`, counting dropped rows.
pub fn records_from_frame(
    df: &DataFrame,
    group_by: &[String],
    human_col: &str,
    metric_col: &str,
) -> Result<Vec<Record>> {
    let projected = select_comparison_columns(df, group_by, human_col, metric_col, "da-RR input")?;

    let key_cols = (0..group_by.len())
        .map(|i| {
            projected.column(&group_key_col(i))
                .and_then(|c| c.str())
                .with_context(|| format!("Group key column '{}' is not string-castable", group_by[i]))
        })
        .collect::<Result<Vec<_>>>()?;

    let human = projected.column(HUMAN_SCORE_COL)?.f64()
        .with_context(|| format!("Human score column '{}' is not numeric", human_col))?;
    let metric = projected.column(METRIC_SCORE_COL)?.f64()
        .with_context(|| format!("Metric score column '{}' is not numeric", metric_col))?;
    let source_rows = projected.column(SOURCE_ROW_COL)?.u64()?;

    let mut records = Vec::with_capacity(projected.height());
    for idx in 0..projected.height() {
        let row = source_rows.get(idx)
            .with_context(|| format!("Missing source row index at position {}", idx))? as usize;

        let group_key = key_cols.iter()
            .enumerate()
            .map(|(i, keys)| {
                keys.get(idx)
                    .map(str::to_string)
                    .with_context(|| format!("Null group key in '{}' at row {}", group_by[i], row))
            })
            .collect::<Result<GroupKey>>()?;

        let human_score = human.get(idx)
            .with_context(|| format!("Null or non-numeric '{}' value at row {}", human_col, row))?;
        let metric_score = metric.get(idx)
            .with_context(|| format!("Null or non-numeric '{}' value at row {}", metric_col, row))?;

        if human_score.is_nan() {
            return Err(TauError::NanScore { index: row, column: "human" }.into());
        }
        if metric_score.is_nan() {
            return Err(TauError::NanScore { index: row, column: "metric" }.into());
        }

        records.push(Record { group_key, human_score, metric_score });
    }

    Ok(records)
}
