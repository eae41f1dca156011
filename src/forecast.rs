//! Trend-based forecasting of energy demand and required hydrogen production.
//!
//! A linear trend is fitted to the monthly demand history with ordinary least
//! squares and projected to the requested month. The projected demand is then
//! backed into the hydrogen production rate the plant would need to meet it,
//! expressed as tons per day and as a percentage increase over the plant's
//! baseline capacity.
use crate::error::{CoreError, ensure_finite};
use crate::history::{HistoricalPoint, MONTHS_PER_YEAR};
use crate::units::{Dimensionless, Energy};
use rand::Rng;
use std::thread::sleep;
use std::time::Duration;

/// Baseline electrolyzer capacity of the plant (tons of hydrogen per day)
pub const BASELINE_CAPACITY: f64 = 80.0;

/// Specific energy of electrolysis (kW per kg of hydrogen)
pub const ENERGY_PER_KG_HYDROGEN: f64 = 20.0;

/// Kilograms per ton
const KG_PER_TON: f64 = 1000.0;

/// Operating days per month
const OPERATING_DAYS_PER_MONTH: f64 = 30.0;

/// A linear trend fitted to the (month, energy) history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendModel {
    /// Energy increase per month
    pub slope: f64,
    /// Energy at month zero
    pub intercept: f64,
}

impl TrendModel {
    /// Fit a linear trend to the history with ordinary least squares.
    ///
    /// Fails with [`CoreError::DegenerateModel`] if the least-squares
    /// denominator is zero, which happens when all month values are identical
    /// (or the history is empty).
    pub fn fit(history: &[HistoricalPoint]) -> Result<Self, CoreError> {
        let n = history.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_x2 = 0.0;
        for point in history {
            ensure_finite("energy", point.energy.value())?;
            let x = point.month as f64;
            let y = point.energy.value();
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_x2 += x * x;
        }

        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator == 0.0 {
            return Err(CoreError::DegenerateModel);
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;
        Ok(Self { slope, intercept })
    }

    /// Project the energy demand for the given month index.
    pub fn predict(&self, month: u32) -> Energy {
        Energy(self.slope * month as f64 + self.intercept)
    }
}

/// Source of the prediction-accuracy figure attached to forecast results.
///
/// The figure is presentation-only: it carries no statistical meaning and is
/// never derived from the fit residuals. It sits behind this trait so that
/// tests can pin it instead of asserting on a random draw.
pub trait AccuracySource {
    /// Produce an accuracy percentage in the range [90, 100)
    fn sample(&mut self) -> Dimensionless;
}

/// Draws the accuracy figure uniformly from [90, 100) with the thread RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformAccuracy;

impl AccuracySource for UniformAccuracy {
    fn sample(&mut self) -> Dimensionless {
        Dimensionless(rand::rng().random_range(90.0..100.0))
    }
}

/// Always reports the same accuracy figure
#[derive(Debug, Clone, Copy)]
pub struct FixedAccuracy(pub f64);

impl AccuracySource for FixedAccuracy {
    fn sample(&mut self) -> Dimensionless {
        Dimensionless(self.0)
    }
}

/// The outcome of a single forecast request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastResult {
    /// Projected energy demand for the requested month
    pub energy_need: Energy,
    /// Accuracy percentage in [90, 100); cosmetic, not a statistical estimate
    pub prediction_accuracy: Dimensionless,
    /// Hydrogen production required to meet the projected demand (tons per
    /// day, rounded to the nearest integer)
    pub hydrogen_production: i64,
    /// Increase over the baseline capacity (percent, clamped at zero)
    pub percentage_increase: Dimensionless,
}

/// Forecasts energy demand and the hydrogen production required to meet it.
///
/// The trend model is refitted from the history on every request; the history
/// is tiny and constant, so nothing is cached between calls. Each forecaster
/// owns its accuracy source, so concurrent forecasts are fully independent.
#[derive(Debug)]
pub struct Forecaster<'a, A> {
    history: &'a [HistoricalPoint],
    accuracy: A,
    latency: Option<Duration>,
}

impl<'a> Forecaster<'a, UniformAccuracy> {
    /// Create a forecaster over the given history with randomised accuracy.
    pub fn new(history: &'a [HistoricalPoint]) -> Self {
        Self {
            history,
            accuracy: UniformAccuracy,
            latency: None,
        }
    }
}

impl<'a, A: AccuracySource> Forecaster<'a, A> {
    /// Replace the source of the accuracy figure.
    pub fn with_accuracy_source<B: AccuracySource>(self, accuracy: B) -> Forecaster<'a, B> {
        Forecaster {
            history: self.history,
            accuracy,
            latency: self.latency,
        }
    }

    /// Delay each forecast by `latency`, simulating a remote prediction
    /// service. Off by default, so tests run synchronously.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Forecast the energy demand for `month` and the hydrogen production
    /// required to meet it.
    ///
    /// Fails with [`CoreError::InvalidInput`] if `month` is outside 1..=12
    /// and with [`CoreError::DegenerateModel`] if the history cannot be
    /// fitted.
    pub fn forecast(&mut self, month: u32) -> Result<ForecastResult, CoreError> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(CoreError::InvalidInput(format!(
                "month must be between 1 and {MONTHS_PER_YEAR} (got {month})"
            )));
        }

        if let Some(latency) = self.latency {
            sleep(latency);
        }

        let model = TrendModel::fit(self.history)?;
        let predicted = model.predict(month);

        // Monthly energy budget of the plant at its baseline capacity (kW)
        let monthly_capacity_energy =
            BASELINE_CAPACITY * KG_PER_TON * ENERGY_PER_KG_HYDROGEN * OPERATING_DAYS_PER_MONTH;
        let multiplier = predicted.value() / monthly_capacity_energy;
        let hydrogen_production = (BASELINE_CAPACITY * multiplier).round() as i64;

        // A forecast below the baseline never reports a negative increase
        let percentage_increase = ((hydrogen_production as f64 - BASELINE_CAPACITY)
            / BASELINE_CAPACITY
            * 100.0)
            .max(0.0);

        Ok(ForecastResult {
            energy_need: predicted,
            prediction_accuracy: self.accuracy.sample(),
            hydrogen_production,
            percentage_increase: Dimensionless(percentage_increase),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HISTORICAL_DEMAND;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    /// Golden fit for the built-in history, pinned from the normal equations
    const EXPECTED_SLOPE: f64 = 10_734.265_734_265_734;
    const EXPECTED_INTERCEPT: f64 = 595_227.272_727_272_7;

    fn flat_history(energy: f64) -> Vec<HistoricalPoint> {
        (1..=MONTHS_PER_YEAR)
            .map(|month| HistoricalPoint {
                month,
                energy: Energy(energy),
            })
            .collect()
    }

    #[test]
    fn test_fit_golden_values() {
        let model = TrendModel::fit(&HISTORICAL_DEMAND).unwrap();
        assert_approx_eq!(f64, model.slope, EXPECTED_SLOPE, epsilon = 1e-6);
        assert_approx_eq!(f64, model.intercept, EXPECTED_INTERCEPT, epsilon = 1e-6);
    }

    #[test]
    fn test_predict_is_linear_in_month() {
        let model = TrendModel::fit(&HISTORICAL_DEMAND).unwrap();
        for month in 1..MONTHS_PER_YEAR {
            let step = model.predict(month + 1).value() - model.predict(month).value();
            assert_approx_eq!(f64, step, model.slope, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_fit_identical_months_is_degenerate() {
        let history = [
            HistoricalPoint {
                month: 3,
                energy: Energy(100.0),
            },
            HistoricalPoint {
                month: 3,
                energy: Energy(200.0),
            },
        ];
        assert_eq!(
            TrendModel::fit(&history).unwrap_err(),
            CoreError::DegenerateModel
        );
    }

    #[test]
    fn test_fit_empty_history_is_degenerate() {
        assert_eq!(TrendModel::fit(&[]).unwrap_err(), CoreError::DegenerateModel);
    }

    #[test]
    fn test_fit_rejects_non_finite_energy() {
        let mut history = flat_history(100.0);
        history[4].energy = Energy(f64::NAN);
        assert!(matches!(
            TrendModel::fit(&history).unwrap_err(),
            CoreError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_fit_flat_history_has_zero_slope() {
        let model = TrendModel::fit(&flat_history(500.0)).unwrap();
        assert_approx_eq!(f64, model.slope, 0.0, epsilon = 1e-9);
        assert_approx_eq!(f64, model.intercept, 500.0, epsilon = 1e-9);
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    #[case(u32::MAX)]
    fn test_forecast_rejects_out_of_range_month(#[case] month: u32) {
        let mut forecaster = Forecaster::new(&HISTORICAL_DEMAND);
        assert!(matches!(
            forecaster.forecast(month).unwrap_err(),
            CoreError::InvalidInput(_)
        ));
    }

    #[rstest]
    #[case(1)]
    #[case(6)]
    #[case(12)]
    fn test_forecast_valid_months(#[case] month: u32) {
        let mut forecaster =
            Forecaster::new(&HISTORICAL_DEMAND).with_accuracy_source(FixedAccuracy(95.0));
        let result = forecaster.forecast(month).unwrap();

        let model = TrendModel::fit(&HISTORICAL_DEMAND).unwrap();
        assert_eq!(result.energy_need, model.predict(month));
        assert_eq!(result.prediction_accuracy, Dimensionless(95.0));
        assert!(result.hydrogen_production >= 0);
        assert!(result.percentage_increase >= Dimensionless(0.0));
    }

    #[test]
    fn test_forecast_is_idempotent() {
        let mut forecaster =
            Forecaster::new(&HISTORICAL_DEMAND).with_accuracy_source(FixedAccuracy(92.5));
        let first = forecaster.forecast(6).unwrap();
        let second = forecaster.forecast(6).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_forecast_below_baseline_clamps_increase() {
        // The built-in history projects far below the 80 tons/day baseline
        let mut forecaster =
            Forecaster::new(&HISTORICAL_DEMAND).with_accuracy_source(FixedAccuracy(90.0));
        let result = forecaster.forecast(12).unwrap();
        assert!(result.hydrogen_production < BASELINE_CAPACITY as i64);
        assert_eq!(result.percentage_increase, Dimensionless(0.0));
    }

    #[test]
    fn test_forecast_with_zero_latency() {
        let mut forecaster = Forecaster::new(&HISTORICAL_DEMAND)
            .with_accuracy_source(FixedAccuracy(90.0))
            .with_latency(Duration::ZERO);
        assert!(forecaster.forecast(1).is_ok());
    }

    #[test]
    fn test_uniform_accuracy_within_range() {
        let mut source = UniformAccuracy;
        for _ in 0..100 {
            let accuracy = source.sample();
            assert!(accuracy >= Dimensionless(90.0));
            assert!(accuracy < Dimensionless(100.0));
        }
    }
}
