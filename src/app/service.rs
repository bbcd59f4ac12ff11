//! Acquisition service — the hexagonal core.
//!
//! [`AcquisitionService`] owns the sensor hub and drives one full
//! sampling pass per tick.  All I/O flows through port traits injected
//! at call sites, making the service testable with mock adapters.
//!
//! ```text
//!  AnalogSource ──▶ ┌───────────────────────┐ ──▶ TextSink
//!                   │  AcquisitionService   │
//!                   │  convert · average    │
//!                   └───────────────────────┘
//! ```

use log::{debug, info};

use crate::config::SystemConfig;
use crate::sensors::pulse::PulseSensor;
use crate::sensors::thermistor::ThermistorSensor;
use crate::sensors::SensorHub;

use super::ports::{AnalogSource, TextSink};
use super::telemetry::{self, VitalsSnapshot};

/// One console heartbeat every this many ticks (~30 s at the default
/// interval).
const HEARTBEAT_EVERY_TICKS: u64 = 300;

/// Orchestrates sampling, conversion, and line emission.
pub struct AcquisitionService {
    hub: SensorHub,
    tick_count: u64,
}

impl AcquisitionService {
    pub fn new(config: &SystemConfig) -> Self {
        let hub = SensorHub::new(
            ThermistorSensor::new(),
            PulseSensor::new(config.pulse_samples_per_reading),
        );
        Self { hub, tick_count: 0 }
    }

    /// Run one sampling pass: read both channels, render the wire line,
    /// emit it.  Each call is independent — no state carries over beyond
    /// the tick counter.
    pub fn tick(
        &mut self,
        adc: &mut impl AnalogSource,
        sink: &mut impl TextSink,
    ) -> VitalsSnapshot {
        self.tick_count += 1;

        let snapshot = self.hub.read_all(adc);
        let line = telemetry::render_line(&snapshot);
        sink.write_line(&line);

        debug!(
            "tick {}: raw={} T={:.2}°C pulse={:.2}",
            self.tick_count, snapshot.thermistor_raw, snapshot.temperature_c, snapshot.pulse_avg
        );
        if self.tick_count % HEARTBEAT_EVERY_TICKS == 0 {
            info!(
                "{} lines streamed (last: T={:.2}°C pulse={:.2})",
                self.tick_count, snapshot.temperature_c, snapshot.pulse_avg
            );
        }

        snapshot
    }
}
