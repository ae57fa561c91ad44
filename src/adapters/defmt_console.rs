//! defmt console adapter - report lines to the RTT log

use crate::ports::console::{ConsoleError, ConsolePort};

/// Prints each report line as a defmt `info` record
#[derive(Clone, Copy, Debug, Default)]
pub struct DefmtConsole;

impl ConsolePort for DefmtConsole {
    async fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        defmt::info!("{=str}", line);
        Ok(())
    }
}
