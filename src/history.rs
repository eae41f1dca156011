//! The fixed monthly energy-demand history used by the forecaster.
use crate::units::Energy;

/// Number of months covered by the historical table
pub const MONTHS_PER_YEAR: u32 = 12;

/// A single month's observed energy demand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalPoint {
    /// Calendar month (1 = January, ..., 12 = December)
    pub month: u32,
    /// Observed electrical energy demand for the month (kW)
    pub energy: Energy,
}

/// Twelve months of observed energy demand, one entry per calendar month in
/// ascending order.
///
/// Fixed at build time and never mutated; the forecaster refits its trend
/// model from this table on every request.
pub const HISTORICAL_DEMAND: [HistoricalPoint; MONTHS_PER_YEAR as usize] = [
    HistoricalPoint {
        month: 1,
        energy: Energy(560_000.0),
    },
    HistoricalPoint {
        month: 2,
        energy: Energy(575_000.0),
    },
    HistoricalPoint {
        month: 3,
        energy: Energy(600_000.0),
    },
    HistoricalPoint {
        month: 4,
        energy: Energy(680_000.0),
    },
    HistoricalPoint {
        month: 5,
        energy: Energy(720_000.0),
    },
    HistoricalPoint {
        month: 6,
        energy: Energy(730_000.0),
    },
    HistoricalPoint {
        month: 7,
        energy: Energy(660_000.0),
    },
    HistoricalPoint {
        month: 8,
        energy: Energy(650_000.0),
    },
    HistoricalPoint {
        month: 9,
        energy: Energy(720_000.0),
    },
    HistoricalPoint {
        month: 10,
        energy: Energy(710_000.0),
    },
    HistoricalPoint {
        month: 11,
        energy: Energy(705_000.0),
    },
    HistoricalPoint {
        month: 12,
        energy: Energy(670_000.0),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_historical_demand_months_ascending() {
        for (i, point) in HISTORICAL_DEMAND.iter().enumerate() {
            assert_eq!(point.month, i as u32 + 1);
        }
    }
}
