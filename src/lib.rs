//! RP2040 Status Readout Library
//!
//! A one-shot diagnostic readout for RP2040 boards: memory, clock, unique
//! ID, temperature, GPIO levels, flash filesystem, uptime, reset cause and
//! root file listing, printed as text.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - Readout values (CpuFrequency, VolumeStats, ResetCause, ...)   │
//! │  - TemperatureCalibration service                               │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - SystemPort, MemoryPort, SensorPort                           │
//! │  - GpioPort, StatusLed, FilesystemPort                          │
//! │  - ConsolePort: where the report is printed                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters (firmware feature)                  │
//! │  - Rp2040System, HeapMonitor, Rp2040TempSensor                  │
//! │  - PinBank, LedPin, FlashVolume (littlefs)                      │
//! │  - UsbCdcConsole, DefmtConsole                                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`StatusReadout`] runs the fixed readout sequence over any set of
//! adapters, so the whole sequence is tested on the host with mocks.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

// Must come first so the logging macros are visible to every module
mod fmt;

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod readout;

/// Adapters - RP2040 implementations (firmware only)
#[cfg(feature = "firmware")]
pub mod adapters;

pub use config::ReadoutConfig;
pub use error::ReadoutError;
pub use readout::{Board, ReadoutSummary, StatusReadout, BANNER, END_MARKER};

// Re-export key domain types
pub use domain::{
    CpuFrequency, FileListing, HeapUsage, MemoryInfo, PinLevel, PinReading, ResetCause, ResetFlags,
    StackUsage, TemperatureCalibration, TemperatureReading, UniqueId, Uptime, VolumeStats,
};

// Re-export key port traits
pub use ports::{ConsolePort, FilesystemPort, GpioPort, MemoryPort, SensorPort, StatusLed, SystemPort};

#[cfg(feature = "firmware")]
pub use adapters::{
    DefmtConsole, FlashVolume, HeapMonitor, LedPin, PinBank, Rp2040System, Rp2040TempSensor,
    UsbCdcConsole,
};
