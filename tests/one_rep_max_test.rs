// ABOUTME: Tests for Epley, Brzycki, and Mayhew one-rep-max estimation
// ABOUTME: Covers reference values, invalid input, the Brzycki rep limit, and formula advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::assert_close;
use pierre_intelligence::algorithms::one_rep_max::parse_lift_input;
use pierre_intelligence::{FormulaRecommendation, OneRepMaxAlgorithm, OneRepMaxEstimate};
use pierre_strength::errors::ErrorCode;
use serde_json::json;

#[test]
fn test_reference_estimates_for_100_by_5() {
    let estimate = OneRepMaxEstimate::estimate(100.0, 5).unwrap();

    assert_close(estimate.epley, 116.667, 1e-3);
    assert_close(estimate.brzycki.unwrap(), 112.5, 1e-9);
    // 100 * 100 / (52.2 + 41.9 * e^(-0.275))
    assert_close(estimate.mayhew, 119.01, 0.01);
}

#[test]
fn test_single_rep_brzycki_returns_the_lift() {
    let estimate = OneRepMaxEstimate::estimate(140.0, 1).unwrap();
    assert_close(estimate.brzycki.unwrap(), 140.0, 1e-9);
    assert!(estimate.epley > 140.0);
    assert!(estimate.mayhew > 140.0);
}

#[test]
fn test_invalid_input_produces_no_estimate() {
    assert!(OneRepMaxEstimate::estimate(0.0, 5).is_none());
    assert!(OneRepMaxEstimate::estimate(-20.0, 5).is_none());
    assert!(OneRepMaxEstimate::estimate(100.0, 0).is_none());
    assert!(OneRepMaxEstimate::estimate(f64::NAN, 5).is_none());
    assert!(OneRepMaxEstimate::estimate(f64::INFINITY, 5).is_none());
}

#[test]
fn test_brzycki_defined_just_below_rep_limit() {
    let estimate = OneRepMaxEstimate::estimate(100.0, 36).unwrap();
    assert_close(estimate.brzycki.unwrap(), 3600.0, 1e-9);
}

#[test]
fn test_brzycki_undefined_at_and_above_rep_limit() {
    for reps in [37, 38, 50] {
        let estimate = OneRepMaxEstimate::estimate(100.0, reps).unwrap();
        assert!(estimate.brzycki.is_none(), "reps = {reps}");
        assert!(estimate.get(OneRepMaxAlgorithm::Brzycki).is_none());
        assert!(estimate.epley.is_finite());
        assert!(estimate.mayhew.is_finite());
        assert_eq!(estimate.iter().count(), 2);
    }
}

#[test]
fn test_estimate_get_matches_fields() {
    let estimate = OneRepMaxEstimate::estimate(80.0, 8).unwrap();
    assert_eq!(estimate.get(OneRepMaxAlgorithm::Epley), Some(estimate.epley));
    assert_eq!(estimate.get(OneRepMaxAlgorithm::Brzycki), estimate.brzycki);
    assert_eq!(estimate.get(OneRepMaxAlgorithm::Mayhew), Some(estimate.mayhew));

    let algorithms: Vec<OneRepMaxAlgorithm> = estimate.iter().map(|(a, _)| a).collect();
    assert_eq!(algorithms, OneRepMaxAlgorithm::ALL.to_vec());
}

#[test]
fn test_calculate_per_algorithm() {
    assert_close(
        OneRepMaxAlgorithm::Epley.calculate(90.0, 10).unwrap(),
        120.0,
        1e-9,
    );
    assert_close(
        OneRepMaxAlgorithm::Brzycki.calculate(90.0, 10).unwrap(),
        120.0,
        1e-9,
    );
    assert!(OneRepMaxAlgorithm::Mayhew.calculate(90.0, 0).is_none());
}

#[test]
fn test_algorithm_parsing_and_names() {
    assert_eq!(
        "EPLEY".parse::<OneRepMaxAlgorithm>().unwrap(),
        OneRepMaxAlgorithm::Epley
    );
    assert_eq!(
        " mayhew ".parse::<OneRepMaxAlgorithm>().unwrap(),
        OneRepMaxAlgorithm::Mayhew
    );
    let error = "lombardi".parse::<OneRepMaxAlgorithm>().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    assert_eq!(OneRepMaxAlgorithm::Brzycki.name(), "brzycki");
    assert_eq!(OneRepMaxAlgorithm::Brzycki.to_string(), "Brzycki");
    assert!(OneRepMaxAlgorithm::Mayhew.formula().contains("0.055"));
}

#[test]
fn test_recommendation_brackets() {
    let brzycki_only = FormulaRecommendation::Single {
        algorithm: OneRepMaxAlgorithm::Brzycki,
    };
    let either = FormulaRecommendation::Either {
        first: OneRepMaxAlgorithm::Brzycki,
        second: OneRepMaxAlgorithm::Epley,
    };
    let mayhew_only = FormulaRecommendation::Single {
        algorithm: OneRepMaxAlgorithm::Mayhew,
    };

    assert_eq!(FormulaRecommendation::for_reps(1), brzycki_only);
    assert_eq!(FormulaRecommendation::for_reps(3), brzycki_only);
    assert_eq!(FormulaRecommendation::for_reps(4), either);
    assert_eq!(FormulaRecommendation::for_reps(6), either);
    assert_eq!(FormulaRecommendation::for_reps(7), mayhew_only);
    assert_eq!(FormulaRecommendation::for_reps(40), mayhew_only);
}

#[test]
fn test_recommendation_presentation() {
    let either = FormulaRecommendation::for_reps(5);
    assert!(either.recommends(OneRepMaxAlgorithm::Epley));
    assert!(either.recommends(OneRepMaxAlgorithm::Brzycki));
    assert!(!either.recommends(OneRepMaxAlgorithm::Mayhew));
    assert_eq!(
        either.advisory_text(),
        "Brzycki and Epley are equally accurate for this rep range"
    );

    let high = FormulaRecommendation::for_reps(12);
    assert_eq!(high.algorithms(), vec![OneRepMaxAlgorithm::Mayhew]);
    assert_eq!(
        high.advisory_text(),
        "Mayhew is the most accurate formula for this rep range"
    );
}

#[test]
fn test_recommendation_serialization() {
    let value = serde_json::to_value(FormulaRecommendation::for_reps(2)).unwrap();
    assert_eq!(value, json!({"kind": "single", "algorithm": "brzycki"}));

    let value = serde_json::to_value(FormulaRecommendation::for_reps(5)).unwrap();
    assert_eq!(
        value,
        json!({"kind": "either", "first": "brzycki", "second": "epley"})
    );
}

#[test]
fn test_parse_lift_input() {
    assert_eq!(parse_lift_input("100", "5"), Some((100.0, 5)));
    assert_eq!(parse_lift_input(" 82.5 ", " 3 "), Some((82.5, 3)));
    assert_eq!(parse_lift_input("82,5", "3"), Some((82.5, 3)));
}

#[test]
fn test_parse_lift_input_rejects_invalid_fields() {
    assert_eq!(parse_lift_input("", "5"), None);
    assert_eq!(parse_lift_input("100", ""), None);
    assert_eq!(parse_lift_input("heavy", "5"), None);
    assert_eq!(parse_lift_input("100", "5.5"), None);
    assert_eq!(parse_lift_input("-100", "5"), None);
    assert_eq!(parse_lift_input("100", "-5"), None);
    assert_eq!(parse_lift_input("0", "5"), None);
    assert_eq!(parse_lift_input("100", "0"), None);
}
