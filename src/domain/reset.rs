//! Reset cause derivation
//!
//! The RP2040 records why it last came out of reset in two places: the
//! watchdog's REASON register and the chip-level CHIP_RESET register. The
//! adapter copies both into [`ResetFlags`]; the cause is decided here.

use core::fmt;

/// Why the watchdog last reset the chip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchdogReason {
    /// Software forced a reset through the watchdog
    Forced,
    /// The watchdog counter expired
    TimedOut,
}

/// Raw reset flags read from the chip
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetFlags {
    /// Watchdog REASON, `None` if the watchdog did not cause the reset
    pub watchdog: Option<WatchdogReason>,
    /// CHIP_RESET.HAD_POR: power-on or brown-out reset
    pub power_on: bool,
    /// CHIP_RESET.HAD_RUN: RUN pin was pulled low
    pub run_pin: bool,
    /// CHIP_RESET.HAD_PSM_RESTART: debugger requested a restart
    pub debug_restart: bool,
}

/// Cause of the most recent reset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetCause {
    PowerOn,
    /// RUN pin (reset button)
    Hard,
    Watchdog,
    /// Software reboot through the watchdog
    Soft,
    /// Restart requested over SWD
    Debug,
}

impl ResetCause {
    /// Decide the cause from the raw flags
    ///
    /// The watchdog reason takes precedence because CHIP_RESET keeps its
    /// power-on bit across watchdog resets.
    pub const fn from_flags(flags: ResetFlags) -> Self {
        match flags.watchdog {
            Some(WatchdogReason::Forced) => ResetCause::Soft,
            Some(WatchdogReason::TimedOut) => ResetCause::Watchdog,
            None if flags.run_pin => ResetCause::Hard,
            None if flags.debug_restart => ResetCause::Debug,
            None => ResetCause::PowerOn,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ResetCause::PowerOn => "power-on",
            ResetCause::Hard => "hard reset (RUN pin)",
            ResetCause::Watchdog => "watchdog timeout",
            ResetCause::Soft => "soft reset",
            ResetCause::Debug => "debugger restart",
        }
    }
}

impl From<ResetFlags> for ResetCause {
    fn from(flags: ResetFlags) -> Self {
        Self::from_flags(flags)
    }
}

impl fmt::Display for ResetCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cold_boot_is_power_on() {
        let flags = ResetFlags {
            power_on: true,
            ..Default::default()
        };
        assert_eq!(ResetCause::from_flags(flags), ResetCause::PowerOn);
        assert_eq!(ResetCause::from_flags(ResetFlags::default()), ResetCause::PowerOn);
    }

    #[test]
    fn test_watchdog_takes_precedence() {
        let flags = ResetFlags {
            watchdog: Some(WatchdogReason::TimedOut),
            power_on: true,
            run_pin: true,
            debug_restart: true,
        };
        assert_eq!(ResetCause::from_flags(flags), ResetCause::Watchdog);

        let forced = ResetFlags {
            watchdog: Some(WatchdogReason::Forced),
            ..flags
        };
        assert_eq!(ResetCause::from(forced), ResetCause::Soft);
    }

    #[test]
    fn test_run_pin_before_debug() {
        let flags = ResetFlags {
            run_pin: true,
            debug_restart: true,
            ..Default::default()
        };
        assert_eq!(ResetCause::from_flags(flags), ResetCause::Hard);

        let debug = ResetFlags {
            debug_restart: true,
            ..Default::default()
        };
        assert_eq!(ResetCause::from_flags(debug), ResetCause::Debug);
    }

    #[test]
    fn test_display() {
        assert_eq!(ResetCause::Watchdog.to_string(), "watchdog timeout");
        assert_eq!(ResetCause::PowerOn.to_string(), "power-on");
    }
}
