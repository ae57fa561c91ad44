//! Readout configuration
//!
//! Compile-time settings only; nothing is persisted on the device.

use core::ops::Range;

/// Number of user GPIOs on the RP2040 (GPIO0..=GPIO29)
pub const GPIO_COUNT: u8 = 30;

/// Configuration for one status readout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadoutConfig {
    /// GPIO indices to probe as inputs
    pub gpio_scan: Range<u8>,
    /// Pause after toggling the status LED (milliseconds)
    pub led_pause_ms: u32,
    /// Reboot into the ROM USB bootloader once the report is printed
    pub reboot_to_bootloader: bool,
}

impl Default for ReadoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ReadoutConfig {
    pub const DEFAULT: Self = Self {
        gpio_scan: 0..GPIO_COUNT,
        led_pause_ms: 2000,
        reboot_to_bootloader: false,
    };

    /// Same readout, then hand the board to the UF2 bootloader for reflashing
    pub const fn flash_after_report() -> Self {
        Self {
            reboot_to_bootloader: true,
            ..Self::DEFAULT
        }
    }

    /// Skip the LED pause (bench runs, tests)
    pub const fn without_pause() -> Self {
        Self {
            led_pause_ms: 0,
            ..Self::DEFAULT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scans_all_gpios() {
        let config = ReadoutConfig::default();
        assert_eq!(config.gpio_scan, 0..30);
        assert_eq!(config.led_pause_ms, 2000);
        assert!(!config.reboot_to_bootloader);
    }

    #[test]
    fn test_presets() {
        assert!(ReadoutConfig::flash_after_report().reboot_to_bootloader);
        assert_eq!(ReadoutConfig::without_pause().led_pause_ms, 0);
        assert_eq!(ReadoutConfig::without_pause().gpio_scan, 0..GPIO_COUNT);
    }
}
