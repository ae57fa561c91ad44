//! Ports (interfaces) defining the boundaries of the readout
//!
//! Ports are traits that define how the readout reaches the hardware.
//! They keep the readout sequence independent of the RP2040 drivers:
//!
//! - **SystemPort**: clock, unique ID, uptime, reset flags
//! - **MemoryPort**: heap and stack accounting
//! - **SensorPort**: internal temperature sensor
//! - **GpioPort** / **StatusLed**: pin probing and the LED
//! - **FilesystemPort**: flash volume statistics and listing
//! - **ConsolePort**: where the report is printed

pub mod console;
pub mod filesystem;
pub mod gpio;
pub mod memory;
pub mod sensor;
pub mod system;

pub use console::{ConsoleError, ConsolePort, Tee};
pub use filesystem::{FilesystemError, FilesystemPort};
pub use gpio::{GpioPort, PinError, StatusLed};
pub use memory::MemoryPort;
pub use sensor::{SensorError, SensorPort};
pub use system::{SystemError, SystemPort};
