//! Label templates
//!
//! The template set the summary builder selects from. Duration-bearing
//! entries carry a `{duration}` placeholder filled at build time. The
//! built-in set is English; a TOML file can override any subset of keys,
//! unnamed keys keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use voltview_power::ChargeStatus;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Source of usage-informed remaining-label templates.
///
/// Returns `None` when no usage-history data backs an enhanced estimate;
/// the builder then falls back to the plain wording.
pub trait UsageLabelSource {
    fn remaining_template(&self, short: bool) -> Option<String>;
}

/// The full template set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Templates {
    /// Status shown when the battery reports itself full
    #[serde(default = "default_status_full")]
    pub status_full: String,

    /// Plain readings of the raw status code, shown while discharging
    #[serde(default = "default_status_charging")]
    pub status_charging: String,
    #[serde(default = "default_status_discharging")]
    pub status_discharging: String,
    #[serde(default = "default_status_not_charging")]
    pub status_not_charging: String,
    #[serde(default = "default_status_unknown")]
    pub status_unknown: String,

    /// Plugged in, no completion estimate
    #[serde(default = "default_charging")]
    pub charging: String,
    /// Plugged in with a completion estimate
    #[serde(default = "default_charging_duration")]
    pub charging_duration: String,

    /// Remaining-time line, long and short variants
    #[serde(default = "default_remaining")]
    pub remaining: String,
    #[serde(default = "default_remaining_short")]
    pub remaining_short: String,

    /// Usage-informed variants; absent means enhanced wording is unavailable
    #[serde(default = "default_remaining_enhanced")]
    pub remaining_enhanced: Option<String>,
    #[serde(default = "default_remaining_short_enhanced")]
    pub remaining_short_enhanced: Option<String>,
}

fn default_status_full() -> String {
    "Battery full".into()
}

fn default_status_charging() -> String {
    "Charging".into()
}

fn default_status_discharging() -> String {
    "Discharging".into()
}

fn default_status_not_charging() -> String {
    "Not charging".into()
}

fn default_status_unknown() -> String {
    "Unknown".into()
}

fn default_charging() -> String {
    "Charging".into()
}

fn default_charging_duration() -> String {
    "Charging - {duration} left".into()
}

fn default_remaining() -> String {
    "About {duration} remaining".into()
}

fn default_remaining_short() -> String {
    "{duration} left".into()
}

fn default_remaining_enhanced() -> Option<String> {
    Some("About {duration} remaining based on your usage".into())
}

fn default_remaining_short_enhanced() -> Option<String> {
    Some("{duration} left based on your usage".into())
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            status_full: default_status_full(),
            status_charging: default_status_charging(),
            status_discharging: default_status_discharging(),
            status_not_charging: default_status_not_charging(),
            status_unknown: default_status_unknown(),
            charging: default_charging(),
            charging_duration: default_charging_duration(),
            remaining: default_remaining(),
            remaining_short: default_remaining_short(),
            remaining_enhanced: default_remaining_enhanced(),
            remaining_short_enhanced: default_remaining_short_enhanced(),
        }
    }
}

impl Templates {
    /// Load a template file, keeping defaults for keys the file omits
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let contents = std::fs::read_to_string(path)?;
        let templates: Self = toml::from_str(&contents)?;
        tracing::info!("Loaded templates from {}", path.display());
        Ok(templates)
    }

    /// Plain reading of a raw status code
    pub fn status_text(&self, status: ChargeStatus) -> &str {
        match status {
            ChargeStatus::Full => &self.status_full,
            ChargeStatus::Charging => &self.status_charging,
            ChargeStatus::Discharging => &self.status_discharging,
            ChargeStatus::NotCharging => &self.status_not_charging,
            ChargeStatus::Unknown => &self.status_unknown,
        }
    }
}

impl UsageLabelSource for Templates {
    fn remaining_template(&self, short: bool) -> Option<String> {
        if short {
            self.remaining_short_enhanced.clone()
        } else {
            self.remaining_enhanced.clone()
        }
    }
}

/// Fill the `{duration}` placeholder
pub(crate) fn fill(template: &str, duration: &str) -> String {
    template.replace("{duration}", duration)
}
