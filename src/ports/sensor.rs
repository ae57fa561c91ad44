//! Sensor port - abstraction for reading the temperature sensor
//!
//! This trait allows the readout to sample temperature without knowing
//! the specific hardware implementation (ADC channel, mock, etc.)

use crate::domain::TemperatureReading;
use core::fmt;

/// Error type for sensor operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Failed to read from sensor
    ReadFailed,
    /// Sensor returned invalid data
    InvalidData,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::ReadFailed => f.write_str("sensor read failed"),
            SensorError::InvalidData => f.write_str("sensor returned invalid data"),
        }
    }
}

/// Port for reading the temperature sensor
///
/// # Example Implementation
///
/// ```ignore
/// struct Rp2040TempSensor {
///     adc: Adc<'static, Blocking>,
///     channel: AdcChannel<'static>,
///     calibration: TemperatureCalibration,
/// }
///
/// impl SensorPort for Rp2040TempSensor {
///     async fn read(&mut self) -> Result<TemperatureReading, SensorError> {
///         let code = self.adc.blocking_read(&mut self.channel)?;
///         self.calibration.convert_adc12(code).ok_or(SensorError::InvalidData)
///     }
/// }
/// ```
pub trait SensorPort {
    /// Take a single sample and convert it
    fn read(
        &mut self,
    ) -> impl core::future::Future<Output = Result<TemperatureReading, SensorError>>;
}
