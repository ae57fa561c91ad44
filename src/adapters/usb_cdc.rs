//! USB CDC console adapter
//!
//! This adapter implements the ConsolePort trait for USB CDC ACM
//! (serial over USB), so a host terminal sees the report as text.

use crate::ports::console::{ConsoleError, ConsolePort};
use embassy_usb::class::cdc_acm::CdcAcmClass;
use embassy_usb::driver::EndpointError;

/// USB packet size (CDC ACM max)
const USB_PACKET_SIZE: usize = 64;

/// USB CDC console adapter
///
/// Writes each line followed by CRLF. The terminator goes out as its own
/// short packet, which also ends the USB transfer.
pub struct UsbCdcConsole<'a, D: embassy_usb::driver::Driver<'a>> {
    /// USB CDC ACM class instance
    class: CdcAcmClass<'a, D>,
}

impl<'a, D: embassy_usb::driver::Driver<'a>> UsbCdcConsole<'a, D> {
    /// Create a new USB CDC console
    pub fn new(class: CdcAcmClass<'a, D>) -> Self {
        Self { class }
    }

    /// Wait for a host to open the port (DTR asserted)
    pub async fn wait_connection(&mut self) {
        self.class.wait_connection().await;
    }

    /// Check if a host has the port open
    pub fn is_connected(&self) -> bool {
        self.class.dtr()
    }

    /// Send bytes over USB CDC (in 64-byte packets)
    async fn send(&mut self, data: &[u8]) -> Result<(), ConsoleError> {
        for chunk in data.chunks(USB_PACKET_SIZE) {
            self.class.write_packet(chunk).await.map_err(|e| match e {
                EndpointError::Disabled => ConsoleError::Disconnected,
                EndpointError::BufferOverflow => ConsoleError::SendFailed,
            })?;
        }
        Ok(())
    }
}

impl<'a, D: embassy_usb::driver::Driver<'a>> ConsolePort for UsbCdcConsole<'a, D> {
    async fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        if !self.is_connected() {
            return Err(ConsoleError::Disconnected);
        }
        self.send(line.as_bytes()).await?;
        self.send(b"\r\n").await
    }
}
