//! Readout error type
//!
//! Wraps the port errors so every step can use `?`. GPIO failures never
//! reach this type; the scan swallows them.

use crate::ports::{ConsoleError, FilesystemError, SensorError, SystemError};
use core::fmt;

/// Error that aborts a status readout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadoutError {
    /// Chip-level query failed
    System(SystemError),
    /// Temperature sensor failed
    Sensor(SensorError),
    /// Filesystem query failed
    Filesystem(FilesystemError),
    /// Printing a line failed
    Console(ConsoleError),
    /// A formatted line did not fit the line buffer
    LineTooLong,
}

impl fmt::Display for ReadoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadoutError::System(e) => write!(f, "system: {}", e),
            ReadoutError::Sensor(e) => write!(f, "sensor: {}", e),
            ReadoutError::Filesystem(e) => write!(f, "filesystem: {}", e),
            ReadoutError::Console(e) => write!(f, "console: {}", e),
            ReadoutError::LineTooLong => f.write_str("report line too long"),
        }
    }
}

impl From<SystemError> for ReadoutError {
    fn from(e: SystemError) -> Self {
        ReadoutError::System(e)
    }
}

impl From<SensorError> for ReadoutError {
    fn from(e: SensorError) -> Self {
        ReadoutError::Sensor(e)
    }
}

impl From<FilesystemError> for ReadoutError {
    fn from(e: FilesystemError) -> Self {
        ReadoutError::Filesystem(e)
    }
}

impl From<ConsoleError> for ReadoutError {
    fn from(e: ConsoleError) -> Self {
        ReadoutError::Console(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_failing_port() {
        let e: ReadoutError = FilesystemError::MountFailed.into();
        assert_eq!(e.to_string(), "filesystem: filesystem mount failed");

        let e: ReadoutError = SensorError::ReadFailed.into();
        assert_eq!(e.to_string(), "sensor: sensor read failed");
    }
}
