//! Pico Status Host Console
//!
//! This binary runs on your PC, opens the Pico's USB serial port and prints
//! the status report the firmware sends once the port is opened.
//!
//! ## Usage
//!
//! ```bash
//! # List available serial ports
//! cargo run --features std --bin status_host -- --list-ports
//!
//! # Connect to device (auto-detects the Pico)
//! cargo run --features std --bin status_host
//!
//! # Connect to specific port, wait up to 60 seconds for the report
//! cargo run --features std --bin status_host -- --port /dev/ttyACM0 --timeout-secs 60
//! ```

use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

use pico_status::{BANNER, END_MARKER};

/// Raspberry Pi vendor ID
const RPI_VID: u16 = 0x2e8a;

/// Default time allowed for a complete report
const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    // Parse arguments
    if args.contains(&"--list-ports".to_string()) {
        list_ports();
        return Ok(());
    }

    let timeout_secs = match args.iter().position(|a| a == "--timeout-secs") {
        Some(idx) => args
            .get(idx + 1)
            .ok_or("--timeout-secs needs a value")?
            .parse::<u64>()
            .map_err(|_| "Invalid timeout (must be a positive number of seconds)")?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    let port_name = if let Some(idx) = args.iter().position(|a| a == "--port") {
        args.get(idx + 1).cloned()
    } else {
        find_pico_port()
    };

    let port_name = match port_name {
        Some(name) => name,
        None => {
            eprintln!("Error: No Pico found");
            eprintln!("Use --list-ports to see available ports");
            eprintln!("Or specify port with --port <PORT>");
            return Err("No device found".into());
        }
    };

    // On Windows, COM ports >= 10 need the \\.\COMxx format
    #[cfg(target_os = "windows")]
    let port_name = if port_name.starts_with("COM") && !port_name.starts_with(r"\\") {
        format!(r"\\.\{}", port_name)
    } else {
        port_name
    };

    eprint!("Connecting to {}...", port_name);
    io::stderr().flush()?;

    let mut port = serialport::new(&port_name, 115200)
        .timeout(Duration::from_millis(500))
        .flow_control(serialport::FlowControl::None)
        .open()?;

    // The firmware starts the readout when DTR goes high
    port.write_data_terminal_ready(true)?;
    eprintln!(" connected, waiting for report");

    let timeout = Duration::from_secs(timeout_secs);
    let complete = read_report(&mut port, &mut io::stdout().lock(), timeout)?;
    if !complete {
        return Err(format!("report incomplete after {}s", timeout_secs).into());
    }

    Ok(())
}

/// Print report lines until the end marker arrives or `timeout` passes
///
/// Lines before the banner are left over from an earlier session and are
/// dropped. Returns whether the end marker was seen.
fn read_report<R: Read, W: Write>(port: &mut R, out: &mut W, timeout: Duration) -> io::Result<bool> {
    let deadline = Instant::now().checked_add(timeout).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "timeout too large")
    })?;
    let mut pending: Vec<u8> = Vec::new();
    let mut buf = [0u8; 256];
    let mut started = false;

    while Instant::now() < deadline {
        let n = match port.read(&mut buf) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::TimedOut => continue,
            Err(e) => return Err(e),
        };
        pending.extend_from_slice(&buf[..n]);

        while let Some(pos) = pending.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = pending.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches(['\r', '\n']);

            if !started {
                started = line == BANNER;
                if !started {
                    continue;
                }
            }

            writeln!(out, "{}", line)?;
            if line == END_MARKER {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

fn list_ports() {
    println!("Available serial ports:");
    match serialport::available_ports() {
        Ok(ports) => {
            if ports.is_empty() {
                println!("  (none)");
            }
            for port in ports {
                print!("  {}", port.port_name);
                match &port.port_type {
                    serialport::SerialPortType::UsbPort(info) => {
                        println!(" - USB (VID: 0x{:04x}, PID: 0x{:04x})", info.vid, info.pid);
                        if let Some(ref product) = info.product {
                            println!("      Product: {}", product);
                        }
                        if let Some(ref serial) = info.serial_number {
                            println!("      Serial: {}", serial);
                        }
                    }
                    serialport::SerialPortType::BluetoothPort => println!(" - Bluetooth"),
                    serialport::SerialPortType::PciPort => println!(" - PCI"),
                    serialport::SerialPortType::Unknown => println!(" - Unknown"),
                }
            }
        }
        Err(e) => {
            eprintln!("Error listing ports: {}", e);
        }
    }
}

fn find_pico_port() -> Option<String> {
    let ports = serialport::available_ports().ok()?;

    ports.into_iter().find_map(|port| match &port.port_type {
        serialport::SerialPortType::UsbPort(info) if info.vid == RPI_VID => Some(port.port_name),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Hands out one chunk per read, then times out like an idle port
    struct ScriptedPort {
        chunks: VecDeque<&'static [u8]>,
    }

    impl ScriptedPort {
        fn new(chunks: &[&'static [u8]]) -> Self {
            Self {
                chunks: chunks.iter().copied().collect(),
            }
        }
    }

    impl Read for ScriptedPort {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.chunks.pop_front() {
                Some(chunk) => {
                    buf[..chunk.len()].copy_from_slice(chunk);
                    Ok(chunk.len())
                }
                None => Err(io::ErrorKind::TimedOut.into()),
            }
        }
    }

    fn run(chunks: &[&'static [u8]], timeout: Duration) -> (io::Result<bool>, String) {
        let mut port = ScriptedPort::new(chunks);
        let mut out = Vec::new();
        let result = read_report(&mut port, &mut out, timeout);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_report_between_banner_and_end_marker() {
        let (result, out) = run(
            &[
                b"System Uptime: 1.5 seconds\r\n=== end of status ===\r\n",
                b"=== Pico ",
                b"status ===\r\nCPU Frequency: 125 MHz\r",
                b"\nReset Cause: power-on\r\n",
                b"=== end of status ===\r\nleftover\r\n",
            ],
            Duration::from_secs(5),
        );

        assert!(result.unwrap());
        assert_eq!(
            out,
            "=== Pico status ===\nCPU Frequency: 125 MHz\nReset Cause: power-on\n=== end of status ===\n"
        );
    }

    #[test]
    fn test_missing_end_marker_times_out() {
        let (result, out) = run(
            &[b"=== Pico status ===\r\n", b"CPU Frequency: 125 MHz\r\n"],
            Duration::from_millis(50),
        );

        assert!(!result.unwrap());
        assert_eq!(out, "=== Pico status ===\nCPU Frequency: 125 MHz\n");
    }

    #[test]
    fn test_huge_timeout_is_rejected() {
        let (result, out) = run(&[], Duration::MAX);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }

    #[test]
    fn test_port_error_is_returned() {
        struct Unplugged;

        impl Read for Unplugged {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::ErrorKind::BrokenPipe.into())
            }
        }

        let result = read_report(&mut Unplugged, &mut Vec::new(), Duration::from_secs(5));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
