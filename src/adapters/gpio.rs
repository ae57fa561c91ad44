//! GPIO adapters - input probing and the status LED

use crate::config::GPIO_COUNT;
use crate::domain::PinLevel;
use crate::ports::gpio::{GpioPort, PinError, StatusLed};
use embassy_rp::gpio::{AnyPin, Input, Output, Pull};
use embassy_rp::Peri;

/// Pins the readout may reconfigure as inputs
///
/// Slots left `None` are reserved by the board (SMPS mode, VBUS sense, the
/// LED, VSYS sense) or claimed by another driver, and report
/// [`PinError::Unavailable`].
pub struct PinBank<'d> {
    pins: [Option<Peri<'d, AnyPin>>; GPIO_COUNT as usize],
}

impl<'d> PinBank<'d> {
    pub fn new(pins: [Option<Peri<'d, AnyPin>>; GPIO_COUNT as usize]) -> Self {
        Self { pins }
    }

    /// Number of pins that can be probed
    pub fn available(&self) -> usize {
        self.pins.iter().filter(|p| p.is_some()).count()
    }
}

impl GpioPort for PinBank<'_> {
    fn probe(&mut self, pin: u8) -> Result<PinLevel, PinError> {
        let slot = self
            .pins
            .get_mut(pin as usize)
            .ok_or(PinError::OutOfRange)?;
        let pin = slot.as_mut().ok_or(PinError::Unavailable)?;

        // Floating input; the pad is released again when `input` drops
        let input = Input::new(pin.reborrow(), Pull::None);
        Ok(PinLevel::from(input.is_high()))
    }
}

/// Status LED on a push-pull output
pub struct LedPin<'d> {
    pin: Output<'d>,
}

impl<'d> LedPin<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl StatusLed for LedPin<'_> {
    fn toggle(&mut self) {
        self.pin.toggle();
    }
}
