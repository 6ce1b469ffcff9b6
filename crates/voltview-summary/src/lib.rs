//! Battery summary core
//!
//! Turns a power snapshot and a time-remaining estimate into the labels a
//! presentation layer shows: charging/discharging state, a textual status,
//! and an optional remaining-time line. This crate holds the only real
//! decision logic in the system - which of the mutually exclusive label
//! templates applies - while snapshot acquisition and estimation live in
//! `voltview-power` and `voltview-stats`.
//!
//! # Example
//!
//! ```
//! use voltview_power::{ChargeStatus, PlugSource, PowerSnapshot};
//! use voltview_stats::FixedEstimator;
//! use voltview_summary::{SummaryBuilder, Templates};
//!
//! let templates = Templates::default();
//! let snapshot = PowerSnapshot::new(PlugSource::Ac, 50, 100, ChargeStatus::Charging);
//! let info = SummaryBuilder::new(&templates)
//!     .short_string(true)
//!     .build(&snapshot, &FixedEstimator::none(), 0);
//!
//! assert!(!info.discharging);
//! assert_eq!(info.battery_percent_string, "50%");
//! ```

pub mod format;
pub mod info;
pub mod templates;

pub use format::format_duration;
pub use info::{BatteryInfo, SummaryBuilder};
pub use templates::{TemplateError, Templates, UsageLabelSource};
