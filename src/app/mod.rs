//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the VitalMon system:
//! thermistor conversion, pulse smoothing, and wire-line emission, all
//! orchestrated by [`service::AcquisitionService`].  All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod ports;
pub mod service;
pub mod telemetry;
