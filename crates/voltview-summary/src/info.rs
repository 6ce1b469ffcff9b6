//! Summary construction
//!
//! The decision pipeline: derive the discharging flag from the plug signal,
//! pick the status label, attach a remaining-time line when one can be
//! claimed, and render the percentage. Every label is chosen from exactly
//! one template; a missing estimate drops the duration clause rather than
//! inventing one.

use crate::format::format_duration;
use crate::templates::{fill, Templates, UsageLabelSource};
use std::time::Duration;
use voltview_power::{ChargeStatus, PowerSnapshot};
use voltview_stats::RemainingTimeEstimator;

/// The finished summary, handed to the presentation layer as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryInfo {
    /// Whether the device is running on battery (plug signal only; the raw
    /// status code can lag behind an unplug)
    pub discharging: bool,
    /// Rounded charge level, e.g. "73%"
    pub battery_percent_string: String,
    /// Status line: full / charging (with or without estimate) / plain
    /// reading of the status code while discharging
    pub status_label: String,
    /// Charging-side label, populated regardless of current state
    pub charge_label: String,
    /// Remaining-time line while discharging, absent without an estimate
    pub remaining_label: Option<String>,
}

/// Builds [`BatteryInfo`] values from a snapshot and an estimator.
///
/// Presentation flags are set up front, then [`build`](Self::build) may be
/// called any number of times; it is pure apart from the estimator's two
/// read-only queries.
pub struct SummaryBuilder<'a> {
    templates: &'a Templates,
    usage_source: Option<&'a dyn UsageLabelSource>,
    short_string: bool,
    based_on_usage: bool,
    usage_threshold: Option<Duration>,
}

impl<'a> SummaryBuilder<'a> {
    pub fn new(templates: &'a Templates) -> Self {
        Self {
            templates,
            usage_source: None,
            short_string: false,
            based_on_usage: false,
            usage_threshold: None,
        }
    }

    /// Use the terser phrasing variants
    pub fn short_string(mut self, short: bool) -> Self {
        self.short_string = short;
        self
    }

    /// Prefer usage-informed wording for the remaining-time line
    pub fn based_on_usage(mut self, based_on_usage: bool) -> Self {
        self.based_on_usage = based_on_usage;
        self
    }

    /// Only attempt usage-informed wording for estimates at least this long
    pub fn usage_threshold(mut self, threshold: Duration) -> Self {
        self.usage_threshold = Some(threshold);
        self
    }

    /// Override where enhanced templates come from (defaults to the
    /// template set's own enhanced entries)
    pub fn usage_source(mut self, source: &'a dyn UsageLabelSource) -> Self {
        self.usage_source = Some(source);
        self
    }

    /// Compute the summary for one snapshot at `now_micros`.
    ///
    /// The snapshot's `scale` must be positive; a zero scale faults in the
    /// percentage division rather than producing a fabricated value.
    pub fn build(
        &self,
        snapshot: &PowerSnapshot,
        estimator: &dyn RemainingTimeEstimator,
        now_micros: i64,
    ) -> BatteryInfo {
        let discharging = !snapshot.is_plugged();
        let battery_percent_string = format!("{}%", snapshot.percent());

        // Charge-side label first: the plugged-in status label reuses it.
        let charge_estimate = estimator
            .charge_time_remaining(now_micros)
            .filter(|d| !d.is_zero());
        let charge_label = match charge_estimate {
            Some(d) => fill(&self.templates.charging_duration, &format_duration(d)),
            None => self.templates.charging.clone(),
        };

        // Full wins over the charging pair and suppresses its duration
        // clause; while discharging the raw status code reads out plainly.
        let status_label = if snapshot.status == ChargeStatus::Full {
            self.templates.status_full.clone()
        } else if !discharging {
            charge_label.clone()
        } else {
            self.templates.status_text(snapshot.status).to_string()
        };

        let remaining_label = if discharging {
            self.remaining_label(estimator, now_micros)
        } else {
            None
        };

        BatteryInfo {
            discharging,
            battery_percent_string,
            status_label,
            charge_label,
            remaining_label,
        }
    }

    /// Remaining-time line for the discharging case. Wording is selected by
    /// `based_on_usage` alone; `short_string` never changes the branch, only
    /// the phrasing of whichever template won.
    fn remaining_label(
        &self,
        estimator: &dyn RemainingTimeEstimator,
        now_micros: i64,
    ) -> Option<String> {
        let estimate = estimator.discharge_time_remaining(now_micros)?;
        if estimate.is_zero() {
            return None;
        }
        let rendered = format_duration(estimate);

        if self.based_on_usage && self.meets_threshold(estimate) {
            let source: &dyn UsageLabelSource = self.usage_source.unwrap_or(self.templates);
            if let Some(template) = source.remaining_template(self.short_string) {
                return Some(fill(&template, &rendered));
            }
            tracing::debug!("no enhanced template available, falling back to plain wording");
        }

        let template = if self.short_string {
            &self.templates.remaining_short
        } else {
            &self.templates.remaining
        };
        Some(fill(template, &rendered))
    }

    fn meets_threshold(&self, estimate: Duration) -> bool {
        self.usage_threshold.is_none_or(|t| estimate >= t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltview_power::PlugSource;
    use voltview_stats::FixedEstimator;

    fn snapshot(plugged: PlugSource, level: u32, status: ChargeStatus) -> PowerSnapshot {
        PowerSnapshot::new(plugged, level, 100, status)
    }

    #[test]
    fn test_percent_string_rounds_against_scale() {
        let templates = Templates::default();
        let snap = PowerSnapshot::new(PlugSource::None, 66, 200, ChargeStatus::Discharging);
        let info = SummaryBuilder::new(&templates).build(&snap, &FixedEstimator::none(), 0);

        assert_eq!(info.battery_percent_string, "33%");
    }

    #[test]
    fn test_stale_charging_status_while_unplugged() {
        // unplugged but the battery still says "Charging": plug wins for the
        // flag, the raw code reads out in the status line
        let templates = Templates::default();
        let snap = snapshot(PlugSource::None, 40, ChargeStatus::Charging);
        let info = SummaryBuilder::new(&templates).build(&snap, &FixedEstimator::none(), 0);

        assert!(info.discharging);
        assert_eq!(info.status_label, templates.status_charging);
        assert_eq!(info.remaining_label, None);
    }

    #[test]
    fn test_discharging_status_codes_read_out_plainly() {
        let templates = Templates::default();
        for (status, expected) in [
            (ChargeStatus::Discharging, "Discharging"),
            (ChargeStatus::NotCharging, "Not charging"),
            (ChargeStatus::Unknown, "Unknown"),
        ] {
            let snap = snapshot(PlugSource::None, 40, status);
            let info = SummaryBuilder::new(&templates).build(&snap, &FixedEstimator::none(), 0);
            assert_eq!(info.status_label, expected);
        }
    }

    #[test]
    fn test_zero_duration_estimates_are_no_estimates() {
        let templates = Templates::default();

        let snap = snapshot(PlugSource::Ac, 50, ChargeStatus::Charging);
        let est = FixedEstimator::charge_in(Duration::ZERO);
        let info = SummaryBuilder::new(&templates).build(&snap, &est, 0);
        assert_eq!(info.charge_label, templates.charging);

        let snap = snapshot(PlugSource::None, 50, ChargeStatus::Discharging);
        let est = FixedEstimator::discharge_in(Duration::ZERO);
        let info = SummaryBuilder::new(&templates).build(&snap, &est, 0);
        assert_eq!(info.remaining_label, None);
    }

    #[test]
    fn test_remaining_label_only_while_discharging() {
        let templates = Templates::default();
        let est = FixedEstimator::new(
            Some(Duration::from_secs(600)),
            Some(Duration::from_secs(600)),
        );

        let info = SummaryBuilder::new(&templates).build(
            &snapshot(PlugSource::Usb, 50, ChargeStatus::Charging),
            &est,
            0,
        );
        assert_eq!(info.remaining_label, None);

        let info = SummaryBuilder::new(&templates).build(
            &snapshot(PlugSource::None, 50, ChargeStatus::Discharging),
            &est,
            0,
        );
        assert!(info.remaining_label.is_some());
    }
}
