//! GPIO ports - input probing and the status LED

use crate::domain::PinLevel;
use core::fmt;

/// Why a pin could not be probed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// No such GPIO on this chip
    OutOfRange,
    /// Pin exists but is reserved or already claimed by the board
    Unavailable,
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::OutOfRange => f.write_str("pin out of range"),
            PinError::Unavailable => f.write_str("pin unavailable"),
        }
    }
}

/// Port for probing GPIO input levels
pub trait GpioPort {
    /// Configure `pin` as a floating digital input and read its level
    ///
    /// Failing here is an expected outcome for reserved pins.
    fn probe(&mut self, pin: u8) -> Result<PinLevel, PinError>;
}

/// Port for the board's status LED
pub trait StatusLed {
    /// Invert the LED
    fn toggle(&mut self);
}
