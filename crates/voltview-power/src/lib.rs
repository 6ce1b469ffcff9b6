//! Power snapshot layer
//!
//! Provides the battery snapshot model and the sources that produce it:
//! a Linux sysfs-backed source reading the kernel power-supply class, and
//! a mock source for development and testing without hardware.
//!
//! # Example
//!
//! ```no_run
//! use voltview_power::{SnapshotSource, SysfsPowerSource};
//!
//! fn main() -> Result<(), voltview_power::PowerError> {
//!     let source = SysfsPowerSource::new()?;
//!     let snapshot = source.snapshot()?;
//!     println!("battery at {}%", snapshot.percent());
//!     Ok(())
//! }
//! ```

pub mod mock;
pub mod snapshot;
pub mod sysfs;

pub use snapshot::{ChargeStatus, PlugSource, PowerSnapshot, SnapshotSource};
pub use sysfs::SysfsPowerSource;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PowerError {
    #[error("no battery found under {0}")]
    NoBattery(PathBuf),

    #[error("battery attribute missing: {0}")]
    MissingAttribute(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Power layer Result type
pub type Result<T> = std::result::Result<T, PowerError>;
