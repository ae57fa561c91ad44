//! RP2040 system adapter
//!
//! Clock frequency, flash unique ID, uptime and reset flags.

use crate::adapters::SharedFlash;
use crate::domain::{CpuFrequency, ResetFlags, UniqueId, Uptime, WatchdogReason, UNIQUE_ID_LEN};
use crate::ports::system::{SystemError, SystemPort};
use embassy_rp::pac;
use embassy_rp::watchdog::{ResetReason, Watchdog};

/// Chip-level queries for the RP2040
///
/// The unique ID lives in the external flash chip, so this adapter shares
/// the flash driver with the filesystem.
pub struct Rp2040System<'a, const FLASH_SIZE: usize> {
    flash: &'a SharedFlash<FLASH_SIZE>,
    watchdog: Watchdog,
}

impl<'a, const FLASH_SIZE: usize> Rp2040System<'a, FLASH_SIZE> {
    pub fn new(flash: &'a SharedFlash<FLASH_SIZE>, watchdog: Watchdog) -> Self {
        Self { flash, watchdog }
    }
}

impl<const FLASH_SIZE: usize> SystemPort for Rp2040System<'_, FLASH_SIZE> {
    fn cpu_frequency(&self) -> CpuFrequency {
        CpuFrequency::from_hz(embassy_rp::clocks::clk_sys_freq())
    }

    fn unique_id(&mut self) -> Result<UniqueId, SystemError> {
        let mut id = [0u8; UNIQUE_ID_LEN];
        self.flash
            .lock(|flash| flash.borrow_mut().blocking_unique_id(&mut id))
            .map_err(|_| SystemError::UniqueIdUnavailable)?;
        Ok(UniqueId::new(id))
    }

    fn uptime(&self) -> Uptime {
        Uptime::from_millis(embassy_time::Instant::now().as_millis())
    }

    fn reset_flags(&self) -> ResetFlags {
        let chip_reset = pac::VREG_AND_CHIP_RESET.chip_reset().read();
        let watchdog = match self.watchdog.reset_reason() {
            Some(ResetReason::Forced) => Some(WatchdogReason::Forced),
            Some(ResetReason::TimedOut) => Some(WatchdogReason::TimedOut),
            None => None,
        };

        ResetFlags {
            watchdog,
            power_on: chip_reset.had_por(),
            run_pin: chip_reset.had_run(),
            debug_restart: chip_reset.had_psm_restart(),
        }
    }
}
