//! RP2040 onboard temperature sensor adapter
//!
//! This adapter implements the SensorPort trait for the RP2040's
//! built-in temperature sensor, accessed via ADC channel 4.

use crate::domain::{TemperatureCalibration, TemperatureReading};
use crate::ports::sensor::{SensorError, SensorPort};
use embassy_rp::adc::{Adc, Blocking, Channel as AdcChannel};

/// RP2040 onboard temperature sensor adapter
///
/// Takes one 12-bit conversion, scales it to a 16-bit reading and converts
/// that with the datasheet calibration.
pub struct Rp2040TempSensor<'a> {
    /// ADC peripheral (blocking mode, one-shot conversions)
    adc: Adc<'a, Blocking>,
    /// Temperature sensor channel
    channel: AdcChannel<'a>,
    calibration: TemperatureCalibration,
}

impl<'a> Rp2040TempSensor<'a> {
    /// Create a new RP2040 temperature sensor adapter
    ///
    /// # Arguments
    ///
    /// * `adc` - ADC peripheral in blocking mode
    /// * `channel` - Temperature sensor ADC channel
    pub fn new(adc: Adc<'a, Blocking>, channel: AdcChannel<'a>) -> Self {
        Self {
            adc,
            channel,
            calibration: TemperatureCalibration::RP2040_DEFAULT,
        }
    }
}

impl SensorPort for Rp2040TempSensor<'_> {
    async fn read(&mut self) -> Result<TemperatureReading, SensorError> {
        let code = self
            .adc
            .blocking_read(&mut self.channel)
            .map_err(|_| SensorError::ReadFailed)?;

        // Anything wider than 12 bits is a driver fault
        self.calibration
            .convert_adc12(code)
            .ok_or(SensorError::InvalidData)
    }
}
