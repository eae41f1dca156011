//! Integration tests for the forecasting surface.
use float_cmp::assert_approx_eq;
use h2plan::error::CoreError;
use h2plan::forecast::{FixedAccuracy, Forecaster, TrendModel};
use h2plan::history::HISTORICAL_DEMAND;
use h2plan::units::Dimensionless;
use rstest::rstest;

/// The fit over the built-in table must reproduce the pinned golden pair.
#[test]
fn test_golden_trend_model() {
    let model = TrendModel::fit(&HISTORICAL_DEMAND).unwrap();

    // slope = (12*53_405_000 - 78*7_980_000) / (12*650 - 78^2), etc.
    assert_approx_eq!(f64, model.slope, 18_420_000.0 / 1716.0, epsilon = 1e-9);
    assert_approx_eq!(f64, model.intercept, 85_117_500.0 / 143.0, epsilon = 1e-9);
}

/// A full forecast through the public API, with the accuracy figure pinned.
#[rstest]
#[case(1)]
#[case(7)]
#[case(12)]
fn test_forecast_end_to_end(#[case] month: u32) {
    let mut forecaster =
        Forecaster::new(&HISTORICAL_DEMAND).with_accuracy_source(FixedAccuracy(93.0));
    let result = forecaster.forecast(month).unwrap();

    let model = TrendModel::fit(&HISTORICAL_DEMAND).unwrap();
    assert_approx_eq!(
        f64,
        result.energy_need.value(),
        model.slope * f64::from(month) + model.intercept,
        epsilon = 1e-9
    );
    assert_eq!(result.prediction_accuracy, Dimensionless(93.0));
    assert!(result.hydrogen_production >= 0);
    assert!(result.percentage_increase.0 >= 0.0);
}

#[rstest]
#[case(0)]
#[case(13)]
fn test_forecast_out_of_range_month(#[case] month: u32) {
    let mut forecaster = Forecaster::new(&HISTORICAL_DEMAND);
    assert!(matches!(
        forecaster.forecast(month).unwrap_err(),
        CoreError::InvalidInput(_)
    ));
}

#[test]
fn test_degenerate_history() {
    use h2plan::history::HistoricalPoint;
    use h2plan::units::Energy;

    let history: Vec<_> = (0..5)
        .map(|_| HistoricalPoint {
            month: 1,
            energy: Energy(650_000.0),
        })
        .collect();
    assert_eq!(
        TrendModel::fit(&history).unwrap_err(),
        CoreError::DegenerateModel
    );
}
