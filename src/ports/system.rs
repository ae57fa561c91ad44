//! System port - clocks, identity, uptime and reset state of the chip

use crate::domain::{CpuFrequency, ResetFlags, UniqueId, Uptime};
use core::fmt;

/// Error type for system queries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemError {
    /// Reading the flash chip's unique ID failed
    UniqueIdUnavailable,
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::UniqueIdUnavailable => f.write_str("unique ID unavailable"),
        }
    }
}

/// Port for chip-level status queries
pub trait SystemPort {
    /// Configured system clock
    fn cpu_frequency(&self) -> CpuFrequency;

    /// Factory-programmed unique identifier
    fn unique_id(&mut self) -> Result<UniqueId, SystemError>;

    /// Time since boot
    fn uptime(&self) -> Uptime;

    /// Raw flags describing the last reset
    fn reset_flags(&self) -> ResetFlags;
}
