//! Rate-history estimator
//!
//! Tracks percentage movement between recorded readings and keeps a rolling
//! window of per-minute rates, separately for charging and draining. A
//! projection is the averaged window rate extrapolated from the last known
//! level; when the window is empty or the device is moving the wrong way
//! for the query, there is no estimate.

use crate::RemainingTimeEstimator;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use voltview_power::PowerSnapshot;

const MICROS_PER_MINUTE: f64 = 60_000_000.0;

/// Estimator tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Rolling window size per direction
    #[serde(default = "default_max_samples")]
    pub max_samples: usize,

    /// Minimum spacing between readings that may produce a rate sample
    #[serde(default = "default_min_interval_secs")]
    pub min_sample_interval_secs: u64,

    /// Rates above this (percent per minute) are discarded as sensor noise
    #[serde(default = "default_max_rate")]
    pub max_rate_percent_per_minute: f64,
}

fn default_max_samples() -> usize {
    20
}

fn default_min_interval_secs() -> u64 {
    30
}

fn default_max_rate() -> f64 {
    3.0
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            max_samples: default_max_samples(),
            min_sample_interval_secs: default_min_interval_secs(),
            max_rate_percent_per_minute: default_max_rate(),
        }
    }
}

/// Last reading the estimator anchored a projection to
#[derive(Debug, Clone, Copy)]
struct Reading {
    at_micros: i64,
    percent: u32,
    plugged: bool,
}

/// Remaining-time estimator backed by a rolling rate history.
///
/// Feed it readings with [`record`](Self::record) as snapshots arrive; it
/// holds everything in memory and never persists.
#[derive(Debug)]
pub struct RateEstimator {
    config: EstimatorConfig,
    drain_rates: VecDeque<f64>,
    charge_rates: VecDeque<f64>,
    last_reading: Option<Reading>,
}

impl RateEstimator {
    pub fn new() -> Self {
        Self::with_config(EstimatorConfig::default())
    }

    pub fn with_config(config: EstimatorConfig) -> Self {
        Self {
            config,
            drain_rates: VecDeque::new(),
            charge_rates: VecDeque::new(),
            last_reading: None,
        }
    }

    /// Feed one snapshot reading taken at `now_micros`.
    ///
    /// A reading closer to the previous one than the configured minimum
    /// spacing is ignored, and a plug-state change discards the anchor
    /// reading so no rate is computed across the transition.
    pub fn record(&mut self, snapshot: &PowerSnapshot, now_micros: i64) {
        let percent = snapshot.percent();
        let plugged = snapshot.is_plugged();

        let Some(prev) = self.last_reading else {
            self.last_reading = Some(Reading {
                at_micros: now_micros,
                percent,
                plugged,
            });
            return;
        };

        if plugged != prev.plugged {
            tracing::debug!(
                plugged,
                "plug state changed, restarting rate tracking from this reading"
            );
            self.last_reading = Some(Reading {
                at_micros: now_micros,
                percent,
                plugged,
            });
            return;
        }

        let elapsed = now_micros.saturating_sub(prev.at_micros);
        if elapsed < (self.config.min_sample_interval_secs as i64).saturating_mul(1_000_000) {
            return;
        }

        let minutes = elapsed as f64 / MICROS_PER_MINUTE;
        let delta = percent as f64 - prev.percent as f64;
        let rate = delta.abs() / minutes;

        if delta != 0.0 {
            if rate > self.config.max_rate_percent_per_minute {
                tracing::debug!(rate, "discarding implausible rate sample");
            } else if delta < 0.0 {
                Self::push(&mut self.drain_rates, rate, self.config.max_samples);
            } else {
                Self::push(&mut self.charge_rates, rate, self.config.max_samples);
            }
        }

        self.last_reading = Some(Reading {
            at_micros: now_micros,
            percent,
            plugged,
        });
    }

    fn push(window: &mut VecDeque<f64>, rate: f64, cap: usize) {
        while window.len() >= cap {
            window.pop_front();
        }
        window.push_back(rate);
    }

    fn mean(window: &VecDeque<f64>) -> Option<f64> {
        if window.is_empty() {
            return None;
        }
        let avg = window.iter().sum::<f64>() / window.len() as f64;
        (avg > 0.0).then_some(avg)
    }

    /// Level extrapolated from the anchor reading to `now_micros`
    fn projected_percent(&self, reading: Reading, rate: f64, now_micros: i64, rising: bool) -> f64 {
        let minutes = now_micros.saturating_sub(reading.at_micros).max(0) as f64 / MICROS_PER_MINUTE;
        if rising {
            (reading.percent as f64 + rate * minutes).min(100.0)
        } else {
            (reading.percent as f64 - rate * minutes).max(0.0)
        }
    }
}

impl Default for RateEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RemainingTimeEstimator for RateEstimator {
    fn charge_time_remaining(&self, now_micros: i64) -> Option<Duration> {
        let reading = self.last_reading?;
        if !reading.plugged {
            return None;
        }

        let rate = Self::mean(&self.charge_rates)?;
        let remaining = 100.0 - self.projected_percent(reading, rate, now_micros, true);
        if remaining <= 0.0 {
            return None;
        }

        Some(Duration::from_secs_f64(remaining / rate * 60.0))
    }

    fn discharge_time_remaining(&self, now_micros: i64) -> Option<Duration> {
        let reading = self.last_reading?;
        if reading.plugged {
            return None;
        }

        let rate = Self::mean(&self.drain_rates)?;
        let remaining = self.projected_percent(reading, rate, now_micros, false);
        if remaining <= 0.0 {
            return None;
        }

        Some(Duration::from_secs_f64(remaining / rate * 60.0))
    }
}
