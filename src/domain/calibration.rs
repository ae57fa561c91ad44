//! Temperature calibration domain service
//!
//! Converts raw ADC readings from the RP2040's internal temperature sensor
//! into a voltage and then into degrees Celsius.

use crate::domain::TemperatureReading;

/// Resolution of the RP2040 ADC
pub const ADC_RESOLUTION_BITS: u32 = 12;

/// Scale a 12-bit conversion result to a 16-bit reading
///
/// The low bits are filled from the top of the code, so `0xfff` maps to
/// `0xffff`.
pub const fn widen_adc12(code: u16) -> u16 {
    (code << 4) | (code >> 8)
}

/// Temperature calibration parameters
///
/// The sensor's output voltage falls linearly with temperature:
/// `temperature = 27 - (voltage - v27) / slope`
/// where `voltage = reading * vref / full_scale`. The reading is the 16-bit
/// ADC value; `full_scale` stays at the 12-bit range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureCalibration {
    /// ADC reference voltage (volts)
    pub vref: f32,
    /// Divisor of the reference scale (4096, the 12-bit range)
    pub full_scale: u16,
    /// Sensor voltage at 27C (volts)
    pub v27: f32,
    /// Voltage drop per degree Celsius (volts)
    pub slope: f32,
}

impl TemperatureCalibration {
    /// RP2040 datasheet calibration
    ///
    /// 3.3V reference, 12-bit ADC, 0.706V at 27C and -1.721mV/C.
    pub const RP2040_DEFAULT: Self = Self {
        vref: 3.3,
        full_scale: 1 << 12,
        v27: 0.706,
        slope: 0.001721,
    };

    /// Convert an ADC code to the voltage it represents
    #[inline]
    pub fn adc_to_voltage(&self, adc_value: u16) -> f32 {
        adc_value as f32 * (self.vref / self.full_scale as f32)
    }

    /// Convert a sensor voltage to temperature in Celsius
    #[inline]
    pub fn voltage_to_celsius(&self, voltage: f32) -> f32 {
        27.0 - (voltage - self.v27) / self.slope
    }

    /// Convert an ADC reading to temperature in Celsius
    #[inline]
    pub fn adc_to_celsius(&self, adc_value: u16) -> f32 {
        self.voltage_to_celsius(self.adc_to_voltage(adc_value))
    }

    /// Convert a 16-bit ADC reading into a temperature reading
    pub fn convert(&self, raw: u16) -> TemperatureReading {
        let voltage = self.adc_to_voltage(raw);
        TemperatureReading::new(raw, voltage, self.voltage_to_celsius(voltage))
    }

    /// Convert a 12-bit conversion result
    ///
    /// Returns `None` for a code wider than the ADC resolution.
    pub fn convert_adc12(&self, code: u16) -> Option<TemperatureReading> {
        if code >= 1 << ADC_RESOLUTION_BITS {
            return None;
        }
        Some(self.convert(widen_adc12(code)))
    }

    /// Create calibration from two known points (for per-board trimming)
    ///
    /// Given two (adc_value, temperature) pairs, keeps the ADC scale of the
    /// RP2040 default and solves for `v27` and `slope`.
    pub fn from_two_points(adc1: u16, temp1: f32, adc2: u16, temp2: f32) -> Self {
        let base = Self::RP2040_DEFAULT;
        let v1 = base.adc_to_voltage(adc1);
        let v2 = base.adc_to_voltage(adc2);

        // v = v27 - slope * (t - 27)
        let slope = (v1 - v2) / (temp2 - temp1);
        let v27 = v1 + slope * (temp1 - 27.0);

        Self {
            v27,
            slope,
            ..base
        }
    }
}

impl Default for TemperatureCalibration {
    fn default() -> Self {
        Self::RP2040_DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_voltage_is_27c() {
        let cal = TemperatureCalibration::RP2040_DEFAULT;
        assert_eq!(cal.voltage_to_celsius(0.706), 27.0);
    }

    #[test]
    fn test_adc_scale() {
        let cal = TemperatureCalibration::RP2040_DEFAULT;
        assert_eq!(cal.adc_to_voltage(0), 0.0);
        assert!((cal.adc_to_voltage(4096) - 3.3).abs() < 1e-6);
        assert!((cal.adc_to_voltage(2048) - 1.65).abs() < 1e-6);
    }

    #[test]
    fn test_room_temperature_reading() {
        let cal = TemperatureCalibration::RP2040_DEFAULT;
        // 876 * 3.3 / 4096 = 0.7058V, just under the 27C point
        let temp = cal.adc_to_celsius(876);
        assert!(temp > 27.0 && temp < 27.5);
    }

    #[test]
    fn test_monotonically_decreasing() {
        let cal = TemperatureCalibration::RP2040_DEFAULT;
        let mut previous = cal.adc_to_celsius(0);
        for raw in 1..4096u16 {
            let temp = cal.adc_to_celsius(raw);
            assert!(temp < previous, "raw {} gave {} >= {}", raw, temp, previous);
            previous = temp;
        }
    }

    #[test]
    fn test_widen_adc12() {
        assert_eq!(widen_adc12(0), 0);
        assert_eq!(widen_adc12(0xfff), 0xffff);
        assert_eq!(widen_adc12(876), 14019);
    }

    #[test]
    fn test_sixteen_bit_reading_uses_12_bit_scale() {
        let cal = TemperatureCalibration::RP2040_DEFAULT;
        let reading = cal.convert_adc12(876).unwrap();
        assert_eq!(reading.raw, 14019);

        let voltage = 14019.0f32 * 3.3 / 4096.0;
        assert!((reading.voltage - voltage).abs() < 1e-4);
        let expected = 27.0 - (voltage - 0.706) / 0.001721;
        assert!((reading.temperature_c - expected).abs() < 0.05);
    }

    #[test]
    fn test_convert_adc12_rejects_wide_codes() {
        let cal = TemperatureCalibration::RP2040_DEFAULT;
        assert!(cal.convert_adc12(0xfff).is_some());
        assert_eq!(cal.convert_adc12(0x1000), None);
    }

    #[test]
    fn test_adc12_conversion_monotonically_decreasing() {
        let cal = TemperatureCalibration::RP2040_DEFAULT;
        let mut previous = cal.convert_adc12(0).unwrap().temperature_c;
        for code in 1..4096u16 {
            let temp = cal.convert_adc12(code).unwrap().temperature_c;
            assert!(temp < previous, "code {} gave {} >= {}", code, temp, previous);
            previous = temp;
        }
    }

    #[test]
    fn test_from_two_points() {
        let cal = TemperatureCalibration::from_two_points(900, 20.0, 860, 32.0);
        assert!((cal.adc_to_celsius(900) - 20.0).abs() < 0.01);
        assert!((cal.adc_to_celsius(860) - 32.0).abs() < 0.01);
        // Should interpolate between the points
        let mid = cal.adc_to_celsius(880);
        assert!((mid - 26.0).abs() < 0.1);
    }

    #[test]
    fn test_from_two_points_recovers_default() {
        let base = TemperatureCalibration::RP2040_DEFAULT;
        let t1 = base.adc_to_celsius(800);
        let t2 = base.adc_to_celsius(950);
        let cal = TemperatureCalibration::from_two_points(800, t1, 950, t2);
        assert!((cal.v27 - base.v27).abs() < 1e-3);
        assert!((cal.slope - base.slope).abs() < 1e-5);
    }
}
