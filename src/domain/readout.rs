//! Readout value types
//!
//! Each type is one transient measurement taken by the status readout.
//! None of them know where the value came from or how it is printed.

use core::fmt;

/// System clock frequency
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CpuFrequency {
    /// Frequency in hertz
    pub hz: u32,
}

impl CpuFrequency {
    pub const fn from_hz(hz: u32) -> Self {
        Self { hz }
    }

    /// Frequency in megahertz
    pub fn mhz(&self) -> f64 {
        self.hz as f64 / 1_000_000.0
    }
}

impl fmt::Display for CpuFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} MHz", self.mhz())
    }
}

/// Length of the flash chip's unique ID in bytes
pub const UNIQUE_ID_LEN: usize = 8;

/// Factory-programmed unique identifier of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UniqueId(pub [u8; UNIQUE_ID_LEN]);

impl UniqueId {
    pub const fn new(bytes: [u8; UNIQUE_ID_LEN]) -> Self {
        Self(bytes)
    }
}

/// Lowercase hex, no separators
impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// A temperature measurement from the internal sensor
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureReading {
    /// Raw ADC reading, scaled to 16 bits
    pub raw: u16,
    /// Sensor voltage derived from the raw code (volts)
    pub voltage: f32,
    /// Temperature in Celsius
    pub temperature_c: f32,
}

impl TemperatureReading {
    pub const fn new(raw: u16, voltage: f32, temperature_c: f32) -> Self {
        Self {
            raw,
            voltage,
            temperature_c,
        }
    }
}

impl fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} °C", self.temperature_c)
    }
}

/// Logic level of an input pin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    Low,
    High,
}

impl From<bool> for PinLevel {
    fn from(high: bool) -> Self {
        if high {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

impl fmt::Display for PinLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinLevel::Low => f.write_str("Low"),
            PinLevel::High => f.write_str("High"),
        }
    }
}

/// Level read from one GPIO
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinReading {
    pub pin: u8,
    pub level: PinLevel,
}

impl fmt::Display for PinReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO {}: {}", self.pin, self.level)
    }
}

/// Time since boot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Uptime {
    /// Milliseconds since boot
    pub ms: u64,
}

impl Uptime {
    pub const fn from_millis(ms: u64) -> Self {
        Self { ms }
    }

    /// Uptime in seconds
    pub fn seconds(&self) -> f64 {
        self.ms as f64 / 1000.0
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} seconds", self.seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mhz_is_hz_over_one_million() {
        for hz in [1u32, 999_999, 1_000_000, 48_000_000, 125_000_000, 133_000_000, u32::MAX] {
            assert_eq!(CpuFrequency::from_hz(hz).mhz(), hz as f64 / 1_000_000.0);
        }
        assert_eq!(CpuFrequency::from_hz(125_000_000).mhz(), 125.0);
    }

    #[test]
    fn test_cpu_frequency_display() {
        assert_eq!(CpuFrequency::from_hz(125_000_000).to_string(), "125 MHz");
        assert_eq!(CpuFrequency::from_hz(133_500_000).to_string(), "133.5 MHz");
    }

    #[test]
    fn test_unique_id_hex() {
        let id = UniqueId::new([0xe6, 0x61, 0x4c, 0x31, 0x1b, 0x0a, 0x00, 0xff]);
        assert_eq!(id.to_string(), "e6614c311b0a00ff");
    }

    #[test]
    fn test_temperature_display() {
        let reading = TemperatureReading::new(876, 0.7058, 27.14);
        assert_eq!(reading.to_string(), "27.14 °C");
    }

    #[test]
    fn test_pin_reading_display() {
        let high = PinReading { pin: 3, level: PinLevel::from(true) };
        let low = PinReading { pin: 22, level: PinLevel::from(false) };
        assert_eq!(high.to_string(), "GPIO 3: High");
        assert_eq!(low.to_string(), "GPIO 22: Low");
    }

    #[test]
    fn test_uptime_seconds() {
        for ms in [0u64, 1, 999, 1000, 12_345, 86_400_000] {
            assert_eq!(Uptime::from_millis(ms).seconds(), ms as f64 / 1000.0);
        }
        assert_eq!(Uptime::from_millis(12_345).to_string(), "12.345 seconds");
    }
}
