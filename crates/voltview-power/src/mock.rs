//! Mock snapshot source for testing without real hardware
//!
//! # Usage
//!
//! ```
//! use voltview_power::mock::MockPowerSource;
//! use voltview_power::{ChargeStatus, PlugSource, PowerSnapshot, SnapshotSource};
//!
//! let source = MockPowerSource::discharging(85);
//! assert_eq!(source.snapshot().unwrap().percent(), 85);
//!
//! source.set(PowerSnapshot::new(PlugSource::Ac, 85, 100, ChargeStatus::Charging));
//! assert!(source.snapshot().unwrap().is_plugged());
//! ```

use crate::snapshot::{ChargeStatus, PlugSource, PowerSnapshot, SnapshotSource};
use crate::Result;
use std::sync::RwLock;

/// Snapshot source returning a settable in-memory reading
#[derive(Debug)]
pub struct MockPowerSource {
    snapshot: RwLock<PowerSnapshot>,
}

impl MockPowerSource {
    pub fn new(snapshot: PowerSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }

    /// Unplugged battery at `percent` on a 0-100 scale
    pub fn discharging(percent: u32) -> Self {
        Self::new(PowerSnapshot::new(
            PlugSource::None,
            percent,
            100,
            ChargeStatus::Discharging,
        ))
    }

    /// AC-powered battery at `percent` on a 0-100 scale
    pub fn charging(percent: u32) -> Self {
        Self::new(PowerSnapshot::new(
            PlugSource::Ac,
            percent,
            100,
            ChargeStatus::Charging,
        ))
    }

    /// Replace the reading subsequent `snapshot()` calls return
    pub fn set(&self, snapshot: PowerSnapshot) {
        if let Ok(mut current) = self.snapshot.write() {
            *current = snapshot;
        }
    }
}

impl SnapshotSource for MockPowerSource {
    fn snapshot(&self) -> Result<PowerSnapshot> {
        Ok(self
            .snapshot
            .read()
            .map(|s| *s)
            .unwrap_or(PowerSnapshot::new(
                PlugSource::None,
                0,
                100,
                ChargeStatus::Unknown,
            )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_set_replaces_reading() {
        let source = MockPowerSource::discharging(60);
        assert_eq!(source.snapshot().unwrap().percent(), 60);
        assert!(!source.snapshot().unwrap().is_plugged());

        source.set(PowerSnapshot::new(
            PlugSource::Usb,
            90,
            100,
            ChargeStatus::Charging,
        ));
        let snap = source.snapshot().unwrap();
        assert_eq!(snap.plugged, PlugSource::Usb);
        assert_eq!(snap.percent(), 90);
    }
}
