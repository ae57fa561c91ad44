//! RP2040 Status Readout Firmware
//!
//! Runs the status readout once and prints the report to the defmt log and
//! to the USB serial port.
//!
//! # Hardware
//!
//! - Raspberry Pi Pico (RP2040, 2 MiB flash)
//! - USB connection for the report
//!
//! # Usage
//!
//! 1. Flash this firmware:
//!    ```bash
//!    cargo run --release --features firmware --target thumbv6m-none-eabi --bin pico_status
//!    ```
//!
//! 2. Open the serial port; the readout starts once the host asserts DTR:
//!    ```bash
//!    cargo run --features std --bin status_host
//!    ```

#![no_std]
#![no_main]

use core::cell::RefCell;
use core::ptr::addr_of_mut;
use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel as AdcChannel};
use embassy_rp::flash::{Blocking, Flash};
use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};
use embassy_rp::watchdog::Watchdog;
use embassy_rp::{bind_interrupts, peripherals, Peri};
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Delay, Duration, Timer};
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
use embassy_usb::{Builder, Config};
use embedded_alloc::Heap;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pico_status::adapters::{
    DefmtConsole, FlashVolume, HeapMonitor, LedPin, PinBank, Rp2040System, Rp2040TempSensor,
    SharedFlash, UsbCdcConsole,
};
use pico_status::config::GPIO_COUNT;
use pico_status::ports::Tee;
use pico_status::{Board, ReadoutConfig, StatusReadout};

// ============================================================================
// Memory Configuration
// ============================================================================

#[global_allocator]
static HEAP: Heap = Heap::empty();

const HEAP_SIZE: usize = 32 * 1024; // 32KB heap

// ============================================================================
// Board Configuration
// ============================================================================

/// Pico flash chip size (W25Q16JV)
const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Raspberry Pi vendor ID / Pico CDC product ID
const USB_VID: u16 = 0x2e8a;
const USB_PID: u16 = 0x000a;

/// What the readout does on this build
const READOUT: ReadoutConfig = ReadoutConfig::DEFAULT;

// ============================================================================
// Interrupt Bindings
// ============================================================================

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => UsbInterruptHandler<peripherals::USB>;
});

static SHARED_FLASH: StaticCell<SharedFlash<FLASH_SIZE>> = StaticCell::new();

// ============================================================================
// Main Entry Point
// ============================================================================

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // Initialize heap
    {
        use core::mem::MaybeUninit;
        static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
        unsafe { HEAP.init(addr_of_mut!(HEAP_MEM) as usize, HEAP_SIZE) }
    }

    info!("=== Pico Status Readout ===");

    let p = embassy_rp::init(Default::default());

    // ========================================================================
    // Create Adapters
    // ========================================================================

    let flash = Flash::<_, Blocking, FLASH_SIZE>::new_blocking(p.FLASH);
    let flash: &SharedFlash<FLASH_SIZE> = SHARED_FLASH.init(Mutex::new(RefCell::new(flash)));

    // Mount failures surface from the flash readout step
    let volume = FlashVolume::new(flash);
    info!("Filesystem adapter created (littlefs, read-only)");

    let system = Rp2040System::new(flash, Watchdog::new(p.WATCHDOG));

    let adc = Adc::new_blocking(p.ADC, embassy_rp::adc::Config::default());
    let temp_channel = AdcChannel::new_temp_sensor(p.ADC_TEMP_SENSOR);
    let sensor = Rp2040TempSensor::new(adc, temp_channel);

    let led = LedPin::new(Output::new(p.PIN_25, Level::Low));

    // GPIO23 drives the SMPS power-save input and GPIO25 is the LED above;
    // everything else may be turned into an input.
    let pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize] = [
        Some(p.PIN_0.into()),
        Some(p.PIN_1.into()),
        Some(p.PIN_2.into()),
        Some(p.PIN_3.into()),
        Some(p.PIN_4.into()),
        Some(p.PIN_5.into()),
        Some(p.PIN_6.into()),
        Some(p.PIN_7.into()),
        Some(p.PIN_8.into()),
        Some(p.PIN_9.into()),
        Some(p.PIN_10.into()),
        Some(p.PIN_11.into()),
        Some(p.PIN_12.into()),
        Some(p.PIN_13.into()),
        Some(p.PIN_14.into()),
        Some(p.PIN_15.into()),
        Some(p.PIN_16.into()),
        Some(p.PIN_17.into()),
        Some(p.PIN_18.into()),
        Some(p.PIN_19.into()),
        Some(p.PIN_20.into()),
        Some(p.PIN_21.into()),
        Some(p.PIN_22.into()),
        None,
        Some(p.PIN_24.into()),
        None,
        Some(p.PIN_26.into()),
        Some(p.PIN_27.into()),
        Some(p.PIN_28.into()),
        Some(p.PIN_29.into()),
    ];
    let gpio = PinBank::new(pins);
    info!("GPIO adapter created ({} probeable pins)", gpio.available());

    let board = Board {
        system,
        memory: HeapMonitor::new(&HEAP),
        sensor,
        gpio,
        led,
        filesystem: volume,
        delay: Delay,
    };

    // Console Adapter: defmt + USB CDC
    let mut usb = UsbCdcConsole::new(setup_usb(&spawner, p.USB));
    info!("Waiting for USB host to open the serial port...");
    usb.wait_connection().await;
    info!("USB connected");

    let mut console = Tee::new(DefmtConsole, usb);

    // ========================================================================
    // Run Readout
    // ========================================================================

    let mut readout = StatusReadout::new(board, READOUT);
    match readout.run(&mut console).await {
        Ok(summary) => info!("Readout complete: {}", summary),
        Err(e) => panic!("status readout failed: {}", e),
    }

    if readout.config().reboot_to_bootloader {
        info!("Rebooting into USB bootloader");
        // Let the last USB packets drain
        Timer::after(Duration::from_millis(100)).await;
        unsafe { embassy_rp::rom_data::reset_to_usb_boot(0, 0) };
    }

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}

// ============================================================================
// USB Setup
// ============================================================================

fn setup_usb(
    spawner: &Spawner,
    usb: Peri<'static, peripherals::USB>,
) -> CdcAcmClass<'static, Driver<'static, peripherals::USB>> {
    let driver = Driver::new(usb, Irqs);

    let mut config = Config::new(USB_VID, USB_PID);
    config.manufacturer = Some("Raspberry Pi");
    config.product = Some("Pico Status Readout");
    config.serial_number = Some("PICO-STATUS");
    config.max_power = 100;
    config.max_packet_size_0 = 64;

    static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
    static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
    static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
    static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
    static STATE: StaticCell<State> = StaticCell::new();

    let mut builder = Builder::new(
        driver,
        config,
        CONFIG_DESCRIPTOR.init([0; 256]),
        BOS_DESCRIPTOR.init([0; 256]),
        MSOS_DESCRIPTOR.init([0; 256]),
        CONTROL_BUF.init([0; 64]),
    );

    let class = CdcAcmClass::new(&mut builder, STATE.init(State::new()), 64);
    let usb = builder.build();

    // Spawn USB device task (separate for reliable enumeration)
    spawner.spawn(usb_device_task(usb).expect("usb device task"));

    class
}

// ============================================================================
// USB Device Task
// ============================================================================

#[embassy_executor::task]
async fn usb_device_task(
    mut usb: embassy_usb::UsbDevice<'static, Driver<'static, peripherals::USB>>,
) -> ! {
    info!("USB device task started");
    usb.run().await
}
