//! Console port - where report lines are printed
//!
//! This trait lets the readout print without knowing the transport
//! (defmt/RTT, USB CDC, a test buffer).

use core::fmt;

/// Error type for console output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleError {
    /// Connection lost
    Disconnected,
    /// Failed to send the line
    SendFailed,
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Disconnected => f.write_str("console disconnected"),
            ConsoleError::SendFailed => f.write_str("console write failed"),
        }
    }
}

/// Port for the text console
pub trait ConsolePort {
    /// Print one line; the implementation adds the line terminator
    fn write_line(
        &mut self,
        line: &str,
    ) -> impl core::future::Future<Output = Result<(), ConsoleError>>;
}

/// Forwards every line to two consoles
///
/// The first error wins; the second console is not written after a failure
/// on the first.
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Tee<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: ConsolePort, B: ConsolePort> ConsolePort for Tee<A, B> {
    async fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.first.write_line(line).await?;
        self.second.write_line(line).await
    }
}
