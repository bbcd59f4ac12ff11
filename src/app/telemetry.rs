//! Per-cycle vitals snapshot and its wire rendering.
//!
//! The [`AcquisitionService`](super::service::AcquisitionService) turns each
//! snapshot into exactly one text line on the data link:
//!
//! ```text
//! <temperature_c> <pulse_avg>\n
//! ```
//!
//! Two fixed two-decimal floats, exactly one space, no labels, no units.
//! Downstream plotting tools parse this format byte-for-byte, so the
//! separator and field count are binding.

use core::fmt::Write;

use heapless::String;

/// Upper bound for one rendered line; two fixed-precision fields stay
/// well inside this.
pub const LINE_CAP: usize = 48;

/// A point-in-time snapshot of one full sampling pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct VitalsSnapshot {
    /// Raw ADC value from the thermistor channel (0 – 1023).
    pub thermistor_raw: u16,
    /// Converted temperature (°C).  Unsmoothed; degenerate rail readings
    /// propagate here unchanged.
    pub temperature_c: f32,

    /// Sum of the raw pulse burst samples.
    pub pulse_sum: u32,
    /// Arithmetic mean of the pulse burst (raw ADC units).
    pub pulse_avg: f32,
}

/// Render one snapshot into the wire format (no line terminator).
pub fn render_line(snapshot: &VitalsSnapshot) -> String<LINE_CAP> {
    let mut line = String::new();
    // Two f32 fields at two decimals cannot exceed LINE_CAP.
    let _ = write!(
        line,
        "{:.2} {:.2}",
        snapshot.temperature_c, snapshot.pulse_avg
    );
    line
}
