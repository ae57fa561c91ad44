//! Domain layer - readout values and conversions
//!
//! Everything here is plain data and arithmetic. It knows nothing about
//! the RP2040 peripherals that produce the values, so it is tested on the
//! host.

pub mod calibration;
pub mod memory;
pub mod readout;
pub mod reset;
pub mod volume;

pub use calibration::TemperatureCalibration;
pub use memory::{HeapUsage, MemoryInfo, StackUsage};
pub use readout::{
    CpuFrequency, PinLevel, PinReading, TemperatureReading, UniqueId, Uptime, UNIQUE_ID_LEN,
};
pub use reset::{ResetCause, ResetFlags, WatchdogReason};
pub use volume::{
    FileListing, FileName, VolumeLayout, VolumeStats, MAX_FILE_NAME_LEN, MAX_LISTED_FILES,
};
