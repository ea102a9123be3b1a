//! LazyFrame materialization helpers with column validation
//!
//! Provides safe, explicit patterns for pulling the comparison columns out of
//! a caller's DataFrame so a typo in a column name fails loudly.

use polars::prelude::*;
use anyhow::{Context, Result, anyhow};
use std::collections::HashSet;
use tracing::warn;

/// Internal column names used after projection
pub const HUMAN_SCORE_COL: &str = "__human_score";
pub const METRIC_SCORE_COL: &str = "__metric_score";
/// Row position in the caller's DataFrame, kept through the null-key filter
pub const SOURCE_ROW_COL: &str = "__source_row";

pub fn group_key_col(position: usize) -> String {
    format!("__group_key_{}", position)
}

/// Check that every required column exists in `df`
///
/// # Errors
/// Names the first missing column and lists the available ones.
pub fn require_columns(df: &DataFrame, columns: &[&str], context: &str) -> Result<()> {
    let actual_cols: HashSet<String> = df.get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    for &expected in columns {
        if !actual_cols.contains(expected) {
            return Err(anyhow!(
                "{}: Missing expected column '{}'. Available columns: {:?}",
                context, expected, actual_cols
            ));
        }
    }

    Ok(())
}

/// Materialize LazyFrame with explicit column expressions and validation
///
/// # Arguments
/// * `lazy` - LazyFrame to materialize
/// * `exprs` - Projection (already aliased)
/// * `expected` - Output column names that must be present
/// * `context` - Context for error messages (e.g., "da-RR input")
pub fn materialize_with_columns(
    lazy: &LazyFrame,
    exprs: &[Expr],
    expected: &[&str],
    context: &str,
) -> Result<DataFrame> {
    let df = lazy
        .clone()
        .select(exprs)
        .collect()
        .with_context(|| format!("{}: Failed to materialize columns {:?}", context, expected))?;

    require_columns(&df, expected, context)?;
    Ok(df)
}

/// Project the group keys (as strings) and both scores (as f64)
///
/// Rows with a null in any group-key column are dropped, matching the usual
/// group-by semantics of dataframe libraries. `__source_row` keeps the
/// original row number of each surviving row.
///
/// # Returns
/// DataFrame with columns `__group_key_0..n`, `__human_score`, `__metric_score`,
/// `__source_row`
pub fn select_comparison_columns(
    df: &DataFrame,
    group_by: &[String],
    human_col: &str,
    metric_col: &str,
    context: &str,
) -> Result<DataFrame> {
    let mut source_cols: Vec<&str> = group_by.iter().map(String::as_str).collect();
    source_cols.push(human_col);
    source_cols.push(metric_col);
    require_columns(df, &source_cols, context)?;

    let key_names: Vec<String> = (0..group_by.len()).map(group_key_col).collect();

    let mut exprs: Vec<Expr> = group_by.iter()
        .zip(&key_names)
        .map(|(name, alias)| col(name.as_str()).cast(DataType::String).alias(alias.as_str()))
        .collect();
    exprs.push(col(human_col).cast(DataType::Float64).alias(HUMAN_SCORE_COL));
    exprs.push(col(metric_col).cast(DataType::Float64).alias(METRIC_SCORE_COL));
    exprs.push(col(SOURCE_ROW_COL).cast(DataType::UInt64));

    let mut expected: Vec<&str> = key_names.iter().map(String::as_str).collect();
    expected.push(HUMAN_SCORE_COL);
    expected.push(METRIC_SCORE_COL);
    expected.push(SOURCE_ROW_COL);

    let indexed = df.clone().lazy().with_row_index(SOURCE_ROW_COL, None);
    let projected = materialize_with_columns(&indexed, &exprs, &expected, context)?;

    let Some(keys_present) = key_names.iter()
        .map(|name| col(name.as_str()).is_not_null())
        .reduce(|acc, e| acc.and(e))
    else {
        return Ok(projected);
    };

    let before = projected.height();
    let filtered = projected
        .lazy()
        .filter(keys_present)
        .collect()
        .with_context(|| format!("{}: Failed to drop rows with null group keys", context))?;

    let dropped = before - filtered.height();
    if dropped > 0 {
        warn!(dropped, context, "dropped rows with null group keys");
    }

    Ok(filtered)
}
