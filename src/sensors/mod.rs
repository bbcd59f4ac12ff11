//! Sensor subsystem — individual sensors and the aggregating [`SensorHub`].
//!
//! The hub owns both sensors and produces a [`VitalsSnapshot`] each cycle
//! for the telemetry formatter.

pub mod pulse;
pub mod thermistor;

use crate::app::ports::AnalogSource;
use crate::app::telemetry::VitalsSnapshot;
use pulse::PulseSensor;
use thermistor::ThermistorSensor;

/// Aggregates both sensors and produces a unified snapshot.
pub struct SensorHub {
    pub thermistor: ThermistorSensor,
    pub pulse: PulseSensor,
}

impl SensorHub {
    pub fn new(thermistor: ThermistorSensor, pulse: PulseSensor) -> Self {
        Self { thermistor, pulse }
    }

    /// Run one full sampling pass: one thermistor sample, one pulse burst.
    ///
    /// The thermistor reading is converted but never smoothed; the pulse
    /// burst is smoothed only by its own mean.
    pub fn read_all(&mut self, adc: &mut impl AnalogSource) -> VitalsSnapshot {
        let temp = self.thermistor.read(adc);
        let pulse = self.pulse.read(adc);

        VitalsSnapshot {
            thermistor_raw: temp.raw,
            temperature_c: temp.celsius,
            pulse_sum: pulse.sum,
            pulse_avg: pulse.average,
        }
    }
}
