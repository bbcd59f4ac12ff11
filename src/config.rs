//! System configuration parameters
//!
//! All tunable parameters for the VitalMon sampling loop.  Values are
//! compiled-in defaults; the serde derives keep the struct transportable
//! so a provisioning channel can override it in a later product phase.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Data link ---
    /// Data-link UART baud rate (bits/s) for the plotting stream
    pub data_baud_bps: u32,

    // --- Timing ---
    /// Pause between reporting cycles (milliseconds)
    pub sample_interval_ms: u32,

    // --- Smoothing ---
    /// Consecutive pulse samples averaged per reading.
    /// The temperature channel is intentionally unsmoothed.
    pub pulse_samples_per_reading: u16,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Data link
            data_baud_bps: 9_600,

            // Timing
            sample_interval_ms: 100, // ~10 lines/sec

            // Smoothing
            pulse_samples_per_reading: 20,
        }
    }
}
