//! Fixed-value estimator for testing

use crate::RemainingTimeEstimator;
use std::time::Duration;

/// Estimator answering both queries with preset values, ignoring the
/// query timestamp entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedEstimator {
    charge: Option<Duration>,
    discharge: Option<Duration>,
}

impl FixedEstimator {
    /// No estimate for either query
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(charge: Option<Duration>, discharge: Option<Duration>) -> Self {
        Self { charge, discharge }
    }

    /// Charge estimate only
    pub fn charge_in(d: Duration) -> Self {
        Self {
            charge: Some(d),
            discharge: None,
        }
    }

    /// Discharge estimate only
    pub fn discharge_in(d: Duration) -> Self {
        Self {
            charge: None,
            discharge: Some(d),
        }
    }
}

impl RemainingTimeEstimator for FixedEstimator {
    fn charge_time_remaining(&self, _now_micros: i64) -> Option<Duration> {
        self.charge
    }

    fn discharge_time_remaining(&self, _now_micros: i64) -> Option<Duration> {
        self.discharge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_estimator_returns_presets() {
        let est = FixedEstimator::charge_in(Duration::from_secs(120));
        assert_eq!(est.charge_time_remaining(0), Some(Duration::from_secs(120)));
        assert_eq!(est.discharge_time_remaining(0), None);

        let est = FixedEstimator::none();
        assert_eq!(est.charge_time_remaining(42), None);
        assert_eq!(est.discharge_time_remaining(42), None);
    }
}
