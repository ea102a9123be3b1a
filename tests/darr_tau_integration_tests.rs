//! da-RR Integration Tests
//!
//! Runs the full DataFrame -> records -> tau pipeline on small DA tables
//! whose counts can be checked by hand.

use approx::assert_relative_eq;
use darr_tau::{
    kendalls_tau_darr, ComparatorConfig, ComparisonPolicy, MetricOrientation, RankComparator,
    TauError,
};
use polars::prelude::*;

/// Two annotators scoring the same three translations of one question
fn two_annotator_frame() -> DataFrame {
    df![
        "question_id" => &["q1", "q1", "q1", "q1", "q1", "q1"],
        "user_id" => &["alice", "alice", "alice", "bob", "bob", "bob"],
        "ranking" => &[95i64, 60, 20, 80, 75, 10],
        "score" => &[0.81, 0.64, 0.42, 0.55, 0.70, 0.70],
    ].unwrap()
}

#[test]
fn test_two_annotators() {
    let result = RankComparator::default().compare_frame(&two_annotator_frame()).unwrap();

    // alice: (95,60) c, (95,20) c, (60,20) c
    // bob:   (80,75) unclassified, (80,10) metric 0.55 < 0.70 -> d, (75,10) metric tie -> t
    assert_eq!(result.concordant, 3);
    assert_eq!(result.discordant, 1);
    assert_eq!(result.ties, 1);
    assert_relative_eq!(result.tau, 2.0 / 5.0);
}

#[test]
fn test_strict_policy_on_same_table() {
    let config = ComparatorConfig::default().with_policy(ComparisonPolicy::Strict);
    let result = kendalls_tau_darr(&two_annotator_frame(), config).unwrap();

    assert_eq!(result.concordant, 3);
    assert_eq!(result.discordant, 2);
    assert_eq!(result.ties, 0);
    assert_relative_eq!(result.tau, 1.0 / 5.0);
}

#[test]
fn test_symmetric_ties_policy_on_same_table() {
    let config = ComparatorConfig::default().with_policy(ComparisonPolicy::SymmetricTies);
    let result = kendalls_tau_darr(&two_annotator_frame(), config).unwrap();

    // bob's (80,75) human tie vs metric order now counts as a tie
    assert_eq!(result.concordant, 3);
    assert_eq!(result.discordant, 1);
    assert_eq!(result.ties, 2);
    assert_relative_eq!(result.tau, 2.0 / 6.0);
}

#[test]
fn test_error_metric_orientation() {
    // TER-like metric: lower is better
    let df = df![
        "question_id" => &["q1", "q1"],
        "user_id" => &["u1", "u1"],
        "ranking" => &[90.0, 40.0],
        "ter" => &[0.2, 0.6],
    ].unwrap();

    let config = ComparatorConfig::default()
        .with_columns(["question_id", "user_id"], "ranking", "ter")
        .with_metric_orientation(MetricOrientation::LowerIsBetter);
    let result = kendalls_tau_darr(&df, config).unwrap();

    assert_eq!(result.concordant, 1);
    assert_relative_eq!(result.tau, 1.0);
}

#[test]
fn test_custom_columns_and_threshold() {
    let df = df![
        "segment" => &[1i32, 1, 1],
        "da" => &[70.0, 60.0, 50.0],
        "comet" => &[0.3, 0.2, 0.1],
    ].unwrap();

    let config = ComparatorConfig::default()
        .with_columns(["segment"], "da", "comet")
        .with_threshold(10.0);
    let result = kendalls_tau_darr(&df, config).unwrap();

    // 70-60 and 60-50 sit exactly on the threshold and still count
    assert_eq!(result.concordant, 3);
    assert_relative_eq!(result.tau, 1.0);
}

#[test]
fn test_all_human_ties_is_an_error() {
    let df = df![
        "question_id" => &["q1", "q1"],
        "user_id" => &["u1", "u1"],
        "ranking" => &[50.0, 55.0],
        "score" => &[5.0, 3.0],
    ].unwrap();

    let err = RankComparator::default().compare_frame(&df).unwrap_err();

    assert_eq!(
        err.downcast_ref::<TauError>(),
        Some(&TauError::NoComparablePairs { unclassified: 1 })
    );
}

#[test]
fn test_missing_column_names_it() {
    let df = df![
        "question_id" => &["q1"],
        "ranking" => &[50.0],
        "score" => &[5.0],
    ].unwrap();

    let err = RankComparator::default().compare_frame(&df).unwrap_err();
    assert!(format!("{:#}", err).contains("user_id"));
}

#[test]
fn test_result_json_shape() {
    let result = RankComparator::default().compare_frame(&two_annotator_frame()).unwrap();
    let json = serde_json::to_value(result).unwrap();

    assert_eq!(json["concordant"], 3);
    assert_eq!(json["discordant"], 1);
    assert_eq!(json["ties"], 1);
    assert!(json["tau"].is_f64());
}

#[test]
fn test_repeated_runs_are_identical() {
    let df = two_annotator_frame();
    let comparator = RankComparator::default();

    let first = comparator.compare_frame(&df).unwrap();
    let second = comparator.compare_frame(&df).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_null_key_rows_are_left_out() {
    // Row 1 would form a discordant pair with both neighbours if it were kept
    let df = df![
        "question_id" => &[Some("q1"), None, Some("q1")],
        "user_id" => &["u1", "u1", "u1"],
        "ranking" => &[90.0, 0.0, 40.0],
        "score" => &[0.9, 0.95, 0.3],
    ].unwrap();

    let result = RankComparator::default().compare_frame(&df).unwrap();

    assert_eq!(result.concordant, 1);
    assert_eq!(result.discordant, 0);
    assert_eq!(result.ties, 0);
    assert_relative_eq!(result.tau, 1.0);
}

#[test]
fn test_nan_human_score_names_its_row() {
    let df = df![
        "question_id" => &[None, Some("q1"), Some("q1")],
        "user_id" => &["u1", "u1", "u1"],
        "ranking" => &[50.0, f64::NAN, 90.0],
        "score" => &[5.0, 3.0, 1.0],
    ].unwrap();

    let err = RankComparator::default().compare_frame(&df).unwrap_err();

    assert_eq!(
        err.downcast_ref::<TauError>(),
        Some(&TauError::NanScore { index: 1, column: "human" })
    );
}
