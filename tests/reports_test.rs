// ABOUTME: Integration tests for the day and training report entry points
// ABOUTME: Covers exact report templates, rejection conventions and unknown activity handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stride_metrics::calculator::MetricsCalculator;
use stride_metrics::config::MetricsConfig;
use stride_metrics::formatters::{format_output, OutputFormat};
use stride_metrics::models::{ActivityType, UserProfile};
use stride_metrics::reports::{
    day_action_info, summarize_day, summarize_training, training_info, TrainingOutcome,
};

fn profile() -> UserProfile {
    UserProfile::new(75.0, 1.75)
}

fn calculator() -> MetricsCalculator {
    MetricsCalculator::default()
}

// === Day reports ===

#[test]
fn test_day_report_text() {
    let report = day_action_info("1000,30m", &profile(), &calculator());
    assert_eq!(
        report,
        "Количество шагов: 1000.\nДистанция составила 0.65 км.\nВы сожгли 79.59 ккал."
    );
}

#[test]
fn test_day_report_uses_walking_formula() {
    let summary = summarize_day("6000,1h", &profile(), &calculator()).unwrap();
    let expected = calculator().walking_calories(6000, 75.0, 1.75, chrono::TimeDelta::hours(1));
    assert!((summary.calories - expected).abs() < 1e-9);
    assert!((summary.distance_km - 3.9).abs() < 1e-9);
}

#[test]
fn test_day_report_rejections_are_empty() {
    for data in [
        "0,10m",
        "-3,10m",
        "1000,notaduration",
        "abc,10m",
        "1000",
        "1000,Бег,10m",
        "",
    ] {
        assert_eq!(
            day_action_info(data, &profile(), &calculator()),
            "",
            "expected {data:?} to be rejected"
        );
    }
}

// === Training reports ===

#[test]
fn test_running_report_text() {
    let report = training_info("6000,Бег,1h", &profile(), &calculator());
    assert_eq!(
        report,
        "Тип тренировки: Бег\nДлительность: 1.00 ч.\nДистанция: 3.90 км.\nСкорость: 3.90 км/ч\nСожгли калорий: 3765.00"
    );
}

#[test]
fn test_walking_report_text() {
    let report = training_info("6000,Ходьба,1h", &profile(), &calculator());
    assert_eq!(
        report,
        "Тип тренировки: Ходьба\nДлительность: 1.00 ч.\nДистанция: 3.90 км.\nСкорость: 3.90 км/ч\nСожгли калорий: 172.62"
    );
}

#[test]
fn test_running_label_and_formula() {
    let outcome = summarize_training("1000,Бег,40m", &profile(), &calculator()).unwrap();
    let TrainingOutcome::Known(summary) = outcome else {
        panic!("expected a known activity");
    };
    assert_eq!(summary.activity, ActivityType::Running);
    assert_eq!(summary.activity.label(), "Бег");

    let expected =
        calculator().running_calories(1000, 75.0, chrono::TimeDelta::minutes(40));
    assert!((summary.calories - expected).abs() < 1e-9);
    assert!((summary.distance_km - 0.65).abs() < 1e-12);
}

#[test]
fn test_english_aliases_report_canonical_label() {
    let report = training_info("6000,Running,1h", &profile(), &calculator());
    assert!(report.starts_with("Тип тренировки: Бег\n"));

    let report = training_info("6000,Walking,1h", &profile(), &calculator());
    assert!(report.starts_with("Тип тренировки: Ходьба\n"));
}

#[test]
fn test_unknown_activity_message() {
    assert_eq!(
        training_info("1000,Плавание,10m", &profile(), &calculator()),
        "неизвестный тип тренировки"
    );
    // Label matching is exact
    assert_eq!(
        training_info("1000,бег,10m", &profile(), &calculator()),
        "неизвестный тип тренировки"
    );
}

#[test]
fn test_training_rejections_return_error_text() {
    assert_eq!(
        training_info("0,Бег,10m", &profile(), &calculator()),
        "step count must be positive, got 0"
    );
    assert_eq!(
        training_info("1000,10m", &profile(), &calculator()),
        "invalid record: expected 3 fields, got 2"
    );
    assert!(training_info("1000,Бег,soon", &profile(), &calculator())
        .starts_with("invalid duration \"soon\""));
}

#[test]
fn test_zero_duration_training() {
    let outcome = summarize_training("1000,Бег,0s", &profile(), &calculator()).unwrap();
    let TrainingOutcome::Known(summary) = outcome else {
        panic!("expected a known activity");
    };
    assert!(summary.mean_speed_kmh.abs() < f64::EPSILON);
    // (18 * 0 - 20) * 75
    assert!((summary.calories + 1500.0).abs() < 1e-9);
}

#[test]
fn test_configured_stride_changes_report() {
    let calculator = MetricsCalculator::new(MetricsConfig::default().with_stride_length(0.8));
    let report = day_action_info("1000,30m", &profile(), &calculator);
    assert!(report.contains("Дистанция составила 0.80 км."));
}

// === Output formats ===

#[test]
fn test_json_output_for_training() {
    let outcome = summarize_training("6000,Бег,1h", &profile(), &calculator()).unwrap();
    let output = format_output(&outcome, OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output.data).unwrap();

    assert_eq!(json["status"], "known");
    assert_eq!(json["activity"], "running");
    assert!((json["distance_km"].as_f64().unwrap() - 3.9).abs() < 1e-9);
}

#[test]
fn test_text_output_matches_entry_point() {
    let outcome = summarize_training("6000,Ходьба,1h", &profile(), &calculator()).unwrap();
    let output = format_output(&outcome, OutputFormat::Text).unwrap();
    assert_eq!(
        output.data,
        training_info("6000,Ходьба,1h", &profile(), &calculator())
    );
}
