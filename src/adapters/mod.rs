//! Adapters - concrete implementations of ports
//!
//! Adapters connect the readout to the RP2040 by implementing the port
//! traits. Each adapter knows how to work with a specific peripheral or
//! library.
//!
//! # Available Adapters
//!
//! - **rp2040_system**: clocks, flash unique ID, uptime, reset flags
//! - **heap**: embedded-alloc heap and main stack accounting
//! - **rp2040_temp**: RP2040 onboard temperature sensor via ADC
//! - **gpio**: pin probing and the status LED
//! - **flash_volume**: littlefs volume on the on-board flash
//! - **usb_cdc** / **defmt_console**: report output

pub mod defmt_console;
pub mod flash_volume;
pub mod gpio;
pub mod heap;
pub mod rp2040_system;
pub mod rp2040_temp;
pub mod usb_cdc;

use core::cell::RefCell;
use embassy_rp::flash::{Blocking, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::blocking_mutex::Mutex;

pub use defmt_console::DefmtConsole;
pub use flash_volume::FlashVolume;
pub use gpio::{LedPin, PinBank};
pub use heap::HeapMonitor;
pub use rp2040_system::Rp2040System;
pub use rp2040_temp::Rp2040TempSensor;
pub use usb_cdc::UsbCdcConsole;

/// Blocking flash driver shared by the unique-ID and filesystem adapters
///
/// Both run on the main task, so a no-op mutex is enough.
pub type SharedFlash<const FLASH_SIZE: usize> =
    Mutex<NoopRawMutex, RefCell<Flash<'static, FLASH, Blocking, FLASH_SIZE>>>;
