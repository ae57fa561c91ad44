//! The status readout
//!
//! A fixed sequence of read-only queries, each printed as soon as it is
//! taken:
//!
//! 1. memory manager diagnostics
//! 2. CPU frequency
//! 3. unique ID
//! 4. internal temperature
//! 5. free / allocated / total heap
//! 6. status LED toggle and pause
//! 7. GPIO input levels (unavailable pins skipped)
//! 8. flash filesystem size and free space
//! 9. uptime
//! 10. reset cause
//! 11. root file listing
//!
//! Step 7 is the only one allowed to fail; any other error ends the run.

use core::fmt::{self, Write};

use embedded_hal_async::delay::DelayNs;
use heapless::String;

use crate::config::ReadoutConfig;
use crate::domain::{PinReading, ResetCause};
use crate::error::ReadoutError;
use crate::ports::{ConsolePort, FilesystemPort, GpioPort, MemoryPort, SensorPort, StatusLed, SystemPort};

/// First line of every report
pub const BANNER: &str = "=== Pico status ===";

/// Last line of every complete report
pub const END_MARKER: &str = "=== end of status ===";

/// Longest line the readout formats
pub const LINE_CAPACITY: usize = 160;

type Line = String<LINE_CAPACITY>;

/// The hardware a readout queries, one adapter per port
pub struct Board<Sys, Mem, Temp, Gpio, Led, Fs, D> {
    pub system: Sys,
    pub memory: Mem,
    pub sensor: Temp,
    pub gpio: Gpio,
    pub led: Led,
    pub filesystem: Fs,
    pub delay: D,
}

/// Counts from the GPIO scan
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadoutSummary {
    /// Pins that were read
    pub pins_read: u8,
    /// Pins skipped as unavailable or out of range
    pub pins_skipped: u8,
}

/// Runs the readout sequence against a [`Board`]
pub struct StatusReadout<Sys, Mem, Temp, Gpio, Led, Fs, D> {
    board: Board<Sys, Mem, Temp, Gpio, Led, Fs, D>,
    config: ReadoutConfig,
}

impl<Sys, Mem, Temp, Gpio, Led, Fs, D> StatusReadout<Sys, Mem, Temp, Gpio, Led, Fs, D>
where
    Sys: SystemPort,
    Mem: MemoryPort,
    Temp: SensorPort,
    Gpio: GpioPort,
    Led: StatusLed,
    Fs: FilesystemPort,
    D: DelayNs,
{
    pub fn new(board: Board<Sys, Mem, Temp, Gpio, Led, Fs, D>, config: ReadoutConfig) -> Self {
        Self { board, config }
    }

    pub fn config(&self) -> &ReadoutConfig {
        &self.config
    }

    pub fn board(&self) -> &Board<Sys, Mem, Temp, Gpio, Led, Fs, D> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<Sys, Mem, Temp, Gpio, Led, Fs, D> {
        &mut self.board
    }

    pub fn into_board(self) -> Board<Sys, Mem, Temp, Gpio, Led, Fs, D> {
        self.board
    }

    /// Run every step once, printing to `console`
    pub async fn run<C: ConsolePort>(
        &mut self,
        console: &mut C,
    ) -> Result<ReadoutSummary, ReadoutError> {
        info!("status readout started");
        console.write_line(BANNER).await?;

        self.report_memory_info(console).await?;
        self.report_cpu_frequency(console).await?;
        self.report_unique_id(console).await?;
        self.report_temperature(console).await?;
        self.report_heap(console).await?;
        self.blink_status_led().await;
        let summary = self.report_gpio(console).await?;
        self.report_flash(console).await?;
        self.report_uptime(console).await?;
        self.report_reset_cause(console).await?;
        self.report_files(console).await?;

        console.write_line(END_MARKER).await?;
        info!(
            "status readout finished: {} pins read, {} skipped",
            summary.pins_read,
            summary.pins_skipped
        );
        Ok(summary)
    }

    async fn report_memory_info<C: ConsolePort>(&mut self, console: &mut C) -> Result<(), ReadoutError> {
        let info = self.board.memory.info();
        emit(console, format_args!("{}", info.stack)).await?;
        emit(console, format_args!("{}", info.heap)).await
    }

    async fn report_cpu_frequency<C: ConsolePort>(&mut self, console: &mut C) -> Result<(), ReadoutError> {
        let freq = self.board.system.cpu_frequency();
        emit(console, format_args!("CPU Frequency: {}", freq)).await
    }

    async fn report_unique_id<C: ConsolePort>(&mut self, console: &mut C) -> Result<(), ReadoutError> {
        let id = self.board.system.unique_id()?;
        emit(console, format_args!("Unique ID: {}", id)).await
    }

    async fn report_temperature<C: ConsolePort>(&mut self, console: &mut C) -> Result<(), ReadoutError> {
        let reading = self.board.sensor.read().await?;
        debug!("temperature sensor raw={} voltage={}", reading.raw, reading.voltage);
        emit(console, format_args!("Temperature: {}", reading)).await
    }

    async fn report_heap<C: ConsolePort>(&mut self, console: &mut C) -> Result<(), ReadoutError> {
        self.board.memory.reclaim();
        let heap = self.board.memory.heap();
        emit(console, format_args!("Free Memory: {} bytes", heap.free)).await?;
        emit(console, format_args!("Allocated Memory: {} bytes", heap.used)).await?;
        emit(console, format_args!("Total RAM: {} bytes", heap.total())).await
    }

    async fn blink_status_led(&mut self) {
        self.board.led.toggle();
        self.board.delay.delay_ms(self.config.led_pause_ms).await;
    }

    async fn report_gpio<C: ConsolePort>(&mut self, console: &mut C) -> Result<ReadoutSummary, ReadoutError> {
        let mut summary = ReadoutSummary::default();
        for pin in self.config.gpio_scan.clone() {
            match self.board.gpio.probe(pin) {
                Ok(level) => {
                    summary.pins_read += 1;
                    emit(console, format_args!("{}", PinReading { pin, level })).await?;
                }
                Err(e) => {
                    summary.pins_skipped += 1;
                    debug!("GPIO {} skipped: {}", pin, e);
                }
            }
        }
        Ok(summary)
    }

    async fn report_flash<C: ConsolePort>(&mut self, console: &mut C) -> Result<(), ReadoutError> {
        let stats = self.board.filesystem.stat()?;
        emit(console, format_args!("Total Flash Storage: {} bytes", stats.total_bytes())).await?;
        emit(console, format_args!("Free Flash Storage: {} bytes", stats.free_bytes())).await
    }

    async fn report_uptime<C: ConsolePort>(&mut self, console: &mut C) -> Result<(), ReadoutError> {
        let uptime = self.board.system.uptime();
        emit(console, format_args!("System Uptime: {}", uptime)).await
    }

    async fn report_reset_cause<C: ConsolePort>(&mut self, console: &mut C) -> Result<(), ReadoutError> {
        let flags = self.board.system.reset_flags();
        debug!("reset flags: {}", flags);
        let cause = ResetCause::from_flags(flags);
        emit(console, format_args!("Reset Cause: {}", cause)).await
    }

    async fn report_files<C: ConsolePort>(&mut self, console: &mut C) -> Result<(), ReadoutError> {
        let listing = self.board.filesystem.list_root()?;
        emit(console, format_args!("Files on flash: {}", listing.len())).await?;
        for name in listing.iter() {
            emit(console, format_args!("  {}", name)).await?;
        }
        if listing.truncated {
            console.write_line("  ...").await?;
        }
        Ok(())
    }
}

/// Format one line and print it
async fn emit<C: ConsolePort>(console: &mut C, args: fmt::Arguments<'_>) -> Result<(), ReadoutError> {
    let mut line = Line::new();
    line.write_fmt(args).map_err(|_| ReadoutError::LineTooLong)?;
    console.write_line(&line).await?;
    Ok(())
}
