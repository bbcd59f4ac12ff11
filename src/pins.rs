//! GPIO / peripheral pin assignments for the VitalMon sensor board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// NTC thermistor — 10 kΩ @ 25 °C, voltage-divider to ADC.
/// ADC1 channel 3 (GPIO 4 on ESP32-S3).
pub const THERM_ADC_GPIO: i32 = 4;

/// Optical pulse (heartbeat) sensor — analog envelope output.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const PULSE_ADC_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Data-link UART (plotting stream, separate from the console/log UART)
// ---------------------------------------------------------------------------

pub const DATA_UART_TX_GPIO: i32 = 17;
pub const DATA_UART_RX_GPIO: i32 = 18;
