//! Battery snapshot model
//!
//! One point-in-time reading of the power subsystem: plug source, charge
//! level and scale, and the raw charge status string reported by the kernel.

use crate::Result;
use serde::{Deserialize, Serialize};

/// Where charging power is currently drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlugSource {
    /// Unplugged, running on battery
    #[default]
    None,
    /// Wall adapter
    Ac,
    Usb,
    Wireless,
    Dock,
}

impl PlugSource {
    /// Map a power-supply `type` attribute to a plug source.
    ///
    /// Returns `None` for types that are not charging inputs ("Battery"
    /// itself, or anything unrecognized).
    pub fn from_supply_type(supply_type: &str) -> Option<Self> {
        match supply_type.trim() {
            "Mains" => Some(PlugSource::Ac),
            "Wireless" => Some(PlugSource::Wireless),
            "Dock" => Some(PlugSource::Dock),
            s if s.starts_with("USB") => Some(PlugSource::Usb),
            _ => None,
        }
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            PlugSource::None => "none",
            PlugSource::Ac => "ac",
            PlugSource::Usb => "usb",
            PlugSource::Wireless => "wireless",
            PlugSource::Dock => "dock",
        }
    }
}

/// Charge status as reported by the battery itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    #[default]
    Unknown,
    Charging,
    Discharging,
    NotCharging,
    Full,
}

impl ChargeStatus {
    /// Parse the kernel `status` attribute string
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Charging" => ChargeStatus::Charging,
            "Discharging" => ChargeStatus::Discharging,
            "Not charging" => ChargeStatus::NotCharging,
            "Full" => ChargeStatus::Full,
            _ => ChargeStatus::Unknown,
        }
    }

    /// Kernel string form
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeStatus::Unknown => "Unknown",
            ChargeStatus::Charging => "Charging",
            ChargeStatus::Discharging => "Discharging",
            ChargeStatus::NotCharging => "Not charging",
            ChargeStatus::Full => "Full",
        }
    }
}

/// One reading of the power subsystem.
///
/// Invariants: `level <= scale` and `scale > 0`. Sources enforce both before
/// handing a snapshot out; consumers may divide by `scale` without checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerSnapshot {
    pub plugged: PlugSource,
    pub level: u32,
    pub scale: u32,
    pub status: ChargeStatus,
}

impl PowerSnapshot {
    pub fn new(plugged: PlugSource, level: u32, scale: u32, status: ChargeStatus) -> Self {
        Self {
            plugged,
            level,
            scale,
            status,
        }
    }

    /// Charge level as a rounded percentage (0-100).
    ///
    /// Divides by `scale`; a zero scale is a contract violation by the
    /// source that built the snapshot and faults here.
    pub fn percent(&self) -> u32 {
        let level = self.level as u64;
        let scale = self.scale as u64;
        ((level * 100 + scale / 2) / scale) as u32
    }

    /// Whether any charging input is attached
    pub fn is_plugged(&self) -> bool {
        self.plugged != PlugSource::None
    }
}

/// Anything that can produce a battery snapshot on demand
pub trait SnapshotSource {
    fn snapshot(&self) -> Result<PowerSnapshot>;
}
