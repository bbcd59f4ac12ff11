//! Unified error types for the VitalMon firmware.
//!
//! A single `Error` enum that every fallible subsystem converts into,
//! keeping the top-level bring-up error handling uniform.  All variants are
//! `Copy` so they can be passed around without allocation.
//!
//! Note the steady-state sampling path is deliberately infallible: a railed
//! or disconnected sensor produces a degenerate reading that flows to the
//! output line unchanged.  Only peripheral bring-up is typed-fallible.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor subsystem could not be brought up or read.
    Sensor(SensorError),
    /// The serial data link could not be brought up or written.
    Serial(SerialError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Serial(e) => write!(f, "serial: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// ADC one-shot unit or channel configuration failed (IDF return code).
    AdcInitFailed(i32),
    /// ADC read returned an error; the caller substitutes a zero sample.
    AdcReadFailed,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC init failed (rc={rc})"),
            Self::AdcReadFailed => write!(f, "ADC read failed"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Serial data-link errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// UART parameter or pin configuration failed (IDF return code).
    ConfigFailed(i32),
    /// UART driver install failed (IDF return code).
    InstallFailed(i32),
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigFailed(rc) => write!(f, "UART config failed (rc={rc})"),
            Self::InstallFailed(rc) => write!(f, "UART driver install failed (rc={rc})"),
        }
    }
}

impl From<SerialError> for Error {
    fn from(e: SerialError) -> Self {
        Self::Serial(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
