//! UART-backed console channels for the RP2040.
//!
//! Wraps the two blocking hardware UARTs as [`Channel`] implementations so
//! the host-testable console core can drive them. Writes go through
//! `embedded_io::Write` and are best-effort per the console contract.

use embassy_rp::uart::{Blocking, Uart};
use embedded_io::Write;

use dosimeter_console::console::{Channel, DualConsole};

/// The firmware console: primary debug UART plus auxiliary UART.
pub type Console = DualConsole<UartChannel<'static>, UartChannel<'static>>;

/// Console channel over a blocking UART.
pub struct UartChannel<'d> {
    uart: Uart<'d, Blocking>,
    enabled: bool,
}

impl<'d> UartChannel<'d> {
    /// Wrap a configured UART.
    ///
    /// A channel created with `enabled = false` behaves as permanently
    /// absent: it reports itself not ready and the console skips it.
    pub fn new(uart: Uart<'d, Blocking>, enabled: bool) -> Self {
        Self { uart, enabled }
    }
}

impl Channel for UartChannel<'_> {
    fn is_ready(&self) -> bool {
        self.enabled
    }

    fn write_str(&mut self, text: &str) {
        // A failed write drops the message on this channel only
        let _ = self.uart.write_all(text.as_bytes());
    }
}
