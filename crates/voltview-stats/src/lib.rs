//! Remaining-time estimation
//!
//! Projects how long until the battery is full (while charging) or empty
//! (while draining) from recorded snapshot readings. The projection is a
//! capability trait so presentation code can run against the rate-history
//! estimator, a fixed stub, or anything else that can answer the two
//! queries.
//!
//! Timestamps are monotonic microsecond counts supplied by the caller, so
//! the estimator itself never consults a clock.

pub mod history;
pub mod mock;

pub use history::{EstimatorConfig, RateEstimator};
pub use mock::FixedEstimator;

use std::time::Duration;

/// The two time-remaining queries the presentation layer needs.
///
/// `None` means "no reliable estimate" - the caller is expected to drop the
/// duration clause from whatever it is rendering, never to substitute a
/// made-up value.
pub trait RemainingTimeEstimator {
    /// Projected time until the battery is full
    fn charge_time_remaining(&self, now_micros: i64) -> Option<Duration>;

    /// Projected time until the battery is empty
    fn discharge_time_remaining(&self, now_micros: i64) -> Option<Duration>;
}
