//! End-to-end tests from raw readings to validated forecasts.

use tempcast_aggregate::{Bar, aggregate};
use tempcast_predict::{
    AnalysisConfig, Forecaster, Model, analyze, best_by_mae, rolling_predictions, validate,
    validate_all,
};
use tempcast_types::{Granularity, Reading};

/// Hourly-ish readings for 2000..2008 with a steady warming trend.
fn warming_readings() -> Vec<Reading> {
    let mut readings = Vec::new();
    for year in 2000..2008 {
        let base = 8.0 + f64::from(year - 2000) * 0.5;
        for month in 1..=12 {
            let seasonal = if (4..=9).contains(&month) { 6.0 } else { -6.0 };
            readings.push(Reading::new(
                format!("{year}-{month:02}-01T00:00:00Z"),
                base + seasonal,
            ));
        }
    }
    // Reverse so aggregation has to sort
    readings.reverse();
    readings
}

fn yearly_bars() -> Vec<Bar> {
    aggregate(&warming_readings(), Granularity::Yearly)
}

#[test]
fn test_yearly_bars_follow_the_trend() {
    let bars = yearly_bars();

    assert_eq!(bars.len(), 8);
    for (i, bar) in bars.iter().enumerate() {
        let expected = 8.0 + i as f64 * 0.5;
        assert!((bar.close - expected).abs() < 1e-10);
        assert_eq!(bar.reading_count, 12);
        assert!(bar.low <= bar.open.min(bar.close));
        assert!(bar.open.max(bar.close) <= bar.high);
    }
}

#[test]
fn test_linear_model_extrapolates_trend() {
    let bars = yearly_bars();
    let prediction = Model::Linear.predict(&bars);

    assert!(prediction.is_valid());
    assert!((prediction.value - 12.0).abs() < 1e-9);
    assert!((prediction.confidence - 1.0).abs() < 1e-9);
}

#[test]
fn test_validation_over_aggregated_bars() {
    let bars = yearly_bars();

    let linear = validate(&bars, &Model::Linear, 2);
    assert_eq!(linear.attempt_count, 6);
    assert!(linear.mean_absolute_error < 1e-9);

    // Moving average lags a rising series by a full window
    let average = validate(&bars, &Model::moving_average(3), 1);
    assert_eq!(average.attempt_count, 7);
    assert!(average.mean_absolute_error > 0.4);

    let validations = validate_all(&bars, 3);
    let best = best_by_mae(&validations).unwrap();
    assert_ne!(best.model, Model::moving_average(3));
}

#[test]
fn test_rolling_aligns_with_validation() {
    let bars = yearly_bars();
    let predictions = rolling_predictions(&bars, &Model::Heuristic, 2);

    assert_eq!(predictions.len(), bars.len() - 2);
    for (prediction, bar) in predictions.iter().zip(&bars[2..]) {
        assert!((prediction.value - bar.close).abs() < 1e-9);
    }
}

#[test]
fn test_monthly_analysis_report() {
    let readings = warming_readings();
    let bars = aggregate(&readings, Granularity::Monthly);
    let config = AnalysisConfig::default()
        .with_granularity(Granularity::Monthly)
        .with_window(12);

    let report = analyze(&bars, &config);

    assert_eq!(report.bar_count, 96);
    assert_eq!(report.next_period.as_ref().unwrap().label, "2008-01-01");
    assert_eq!(report.validations.len(), 3);
    assert_eq!(report.rolling[1].predictions.len(), 95);
    assert!(report.recommendation.is_some());
}
