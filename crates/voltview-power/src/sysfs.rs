//! Linux sysfs snapshot source
//!
//! Reads battery state from the kernel power-supply class. Each supply
//! directory advertises its kind in a `type` attribute; the battery entry
//! carries level and status, the remaining entries are charging inputs
//! whose `online` attribute tells us what the device is plugged into.

use crate::snapshot::{ChargeStatus, PlugSource, PowerSnapshot, SnapshotSource};
use crate::{PowerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the power-supply class
pub const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// Snapshot source backed by the sysfs power-supply class
pub struct SysfsPowerSource {
    battery_path: PathBuf,
    /// Charging inputs found at scan time, in directory order
    supplies: Vec<(PlugSource, PathBuf)>,
}

impl SysfsPowerSource {
    /// Scan the default power-supply root
    pub fn new() -> Result<Self> {
        Self::with_root(Path::new(POWER_SUPPLY_ROOT))
    }

    /// Scan a custom root (tests point this at a fixture tree)
    pub fn with_root(root: &Path) -> Result<Self> {
        let mut battery_path = None;
        let mut supplies = Vec::new();

        if root.exists() {
            for entry in fs::read_dir(root)? {
                let entry = entry?;
                let path = entry.path();

                let Ok(supply_type) = fs::read_to_string(path.join("type")) else {
                    continue;
                };
                let supply_type = supply_type.trim();

                if supply_type == "Battery" {
                    if battery_path.is_none() {
                        tracing::info!("Found battery at {}", path.display());
                        battery_path = Some(path);
                    }
                } else if let Some(source) = PlugSource::from_supply_type(supply_type) {
                    tracing::info!("Found {} supply at {}", source.as_str(), path.display());
                    supplies.push((source, path));
                }
            }
        }

        let battery_path = battery_path.ok_or_else(|| PowerError::NoBattery(root.to_path_buf()))?;
        supplies.sort_by(|a, b| a.1.cmp(&b.1));

        Ok(Self {
            battery_path,
            supplies,
        })
    }

    /// Read integer from a sysfs attribute file
    fn read_int(path: &Path) -> Option<u32> {
        fs::read_to_string(path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }

    /// Level and scale, preferring the percentage `capacity` attribute and
    /// falling back to raw charge counters.
    fn read_level(&self) -> Result<(u32, u32)> {
        if let Some(capacity) = Self::read_int(&self.battery_path.join("capacity")) {
            return Ok((capacity, 100));
        }

        let now = Self::read_int(&self.battery_path.join("charge_now"));
        let full = Self::read_int(&self.battery_path.join("charge_full"));
        match (now, full) {
            (Some(now), Some(full)) if full > 0 => Ok((now, full)),
            _ => Err(PowerError::MissingAttribute("capacity")),
        }
    }

    /// First charging input reporting itself online
    fn read_plugged(&self) -> PlugSource {
        for (source, path) in &self.supplies {
            if let Ok(online) = fs::read_to_string(path.join("online")) {
                if online.trim() == "1" {
                    return *source;
                }
            }
        }
        PlugSource::None
    }
}

impl SnapshotSource for SysfsPowerSource {
    fn snapshot(&self) -> Result<PowerSnapshot> {
        let (mut level, scale) = self.read_level()?;

        if level > scale {
            tracing::warn!("battery reports level {} above scale {}, clamping", level, scale);
            level = scale;
        }

        let status = fs::read_to_string(self.battery_path.join("status"))
            .map(|s| ChargeStatus::parse(&s))
            .unwrap_or(ChargeStatus::Unknown);

        let plugged = self.read_plugged();

        Ok(PowerSnapshot {
            plugged,
            level,
            scale,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Fixture power-supply tree builder
    struct FixtureTree {
        root: TempDir,
    }

    impl FixtureTree {
        fn new() -> Self {
            Self {
                root: TempDir::new().expect("Failed to create temp directory"),
            }
        }

        fn supply(&self, name: &str, attrs: &[(&str, &str)]) -> &Self {
            let dir = self.root.path().join(name);
            fs::create_dir_all(&dir).unwrap();
            for (attr, value) in attrs {
                fs::write(dir.join(attr), format!("{}\n", value)).unwrap();
            }
            self
        }

        fn source(&self) -> Result<SysfsPowerSource> {
            SysfsPowerSource::with_root(self.root.path())
        }
    }

    #[test]
    fn test_no_battery() {
        let tree = FixtureTree::new();
        tree.supply("AC", &[("type", "Mains"), ("online", "1")]);

        assert!(matches!(
            tree.source(),
            Err(PowerError::NoBattery(_))
        ));
    }

    #[test]
    fn test_snapshot_from_capacity() {
        let tree = FixtureTree::new();
        tree.supply(
            "BAT0",
            &[("type", "Battery"), ("capacity", "73"), ("status", "Discharging")],
        );

        let snap = tree.source().unwrap().snapshot().unwrap();
        assert_eq!(snap.level, 73);
        assert_eq!(snap.scale, 100);
        assert_eq!(snap.status, ChargeStatus::Discharging);
        assert_eq!(snap.plugged, PlugSource::None);
    }

    #[test]
    fn test_snapshot_falls_back_to_charge_counters() {
        let tree = FixtureTree::new();
        tree.supply(
            "BAT0",
            &[
                ("type", "Battery"),
                ("charge_now", "1500000"),
                ("charge_full", "3000000"),
                ("status", "Charging"),
            ],
        );

        let snap = tree.source().unwrap().snapshot().unwrap();
        assert_eq!(snap.level, 1_500_000);
        assert_eq!(snap.scale, 3_000_000);
        assert_eq!(snap.percent(), 50);
    }

    #[test]
    fn test_snapshot_missing_level_attributes() {
        let tree = FixtureTree::new();
        tree.supply("BAT0", &[("type", "Battery"), ("status", "Charging")]);

        assert!(matches!(
            tree.source().unwrap().snapshot(),
            Err(PowerError::MissingAttribute("capacity"))
        ));
    }

    #[test]
    fn test_online_mains_wins_over_offline_usb() {
        let tree = FixtureTree::new();
        tree.supply("AC", &[("type", "Mains"), ("online", "1")]);
        tree.supply("BAT0", &[("type", "Battery"), ("capacity", "40"), ("status", "Charging")]);
        tree.supply("USB0", &[("type", "USB"), ("online", "0")]);

        let snap = tree.source().unwrap().snapshot().unwrap();
        assert_eq!(snap.plugged, PlugSource::Ac);
    }

    #[test]
    fn test_unplugged_when_all_supplies_offline() {
        let tree = FixtureTree::new();
        tree.supply("AC", &[("type", "Mains"), ("online", "0")]);
        tree.supply("BAT0", &[("type", "Battery"), ("capacity", "40"), ("status", "Discharging")]);

        let snap = tree.source().unwrap().snapshot().unwrap();
        assert_eq!(snap.plugged, PlugSource::None);
    }

    #[test]
    fn test_level_clamped_to_scale() {
        let tree = FixtureTree::new();
        tree.supply(
            "BAT0",
            &[("type", "Battery"), ("capacity", "104"), ("status", "Full")],
        );

        let snap = tree.source().unwrap().snapshot().unwrap();
        assert_eq!(snap.level, 100);
        assert_eq!(snap.percent(), 100);
    }

    #[test]
    fn test_missing_status_reads_unknown() {
        let tree = FixtureTree::new();
        tree.supply("BAT0", &[("type", "Battery"), ("capacity", "50")]);

        let snap = tree.source().unwrap().snapshot().unwrap();
        assert_eq!(snap.status, ChargeStatus::Unknown);
    }
}
