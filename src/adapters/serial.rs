//! Serial sink adapter — implements [`TextSink`] on the data link.
//!
//! On ESP-IDF: writes the dedicated data UART (installed at boot by
//! `drivers::uart`), keeping the plotting stream free of log output.
//! On host/test: writes stdout so piped tools see the same line stream.

use crate::app::ports::TextSink;
#[cfg(target_os = "espidf")]
use crate::drivers::uart;

/// Adapter that emits every wire line on the data link.
pub struct SerialSink;

impl SerialSink {
    pub fn new() -> Self {
        Self
    }
}

impl TextSink for SerialSink {
    #[cfg(target_os = "espidf")]
    fn write_line(&mut self, line: &str) {
        uart::write_bytes(line.as_bytes());
        uart::write_bytes(b"\n");
    }

    #[cfg(not(target_os = "espidf"))]
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}
