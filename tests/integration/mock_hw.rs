//! Mock port implementations for integration tests.
//!
//! `ScriptedAdc` replays canned per-channel sample sequences so tests can
//! drive the full pipeline deterministically; `RecordingSink` captures
//! every emitted line for byte-level assertions.

use vitalmon::app::ports::{AnalogSource, Channel, TextSink};

// ── ScriptedAdc ───────────────────────────────────────────────

/// Replays scripted samples per channel.  When a script runs out, the
/// last value repeats — a stuck sensor keeps reading the same rail.
pub struct ScriptedAdc {
    thermistor: Vec<u16>,
    thermistor_idx: usize,
    pulse: Vec<u16>,
    pulse_idx: usize,
}

#[allow(dead_code)]
impl ScriptedAdc {
    pub fn new(thermistor: Vec<u16>, pulse: Vec<u16>) -> Self {
        assert!(!thermistor.is_empty() && !pulse.is_empty());
        Self {
            thermistor,
            thermistor_idx: 0,
            pulse,
            pulse_idx: 0,
        }
    }

    /// Samples consumed from the pulse channel so far.
    pub fn pulse_samples_taken(&self) -> usize {
        self.pulse_idx
    }
}

fn next(script: &[u16], idx: &mut usize) -> u16 {
    let value = script[(*idx).min(script.len() - 1)];
    *idx += 1;
    value
}

impl AnalogSource for ScriptedAdc {
    fn sample(&mut self, channel: Channel) -> u16 {
        match channel {
            Channel::Thermistor => next(&self.thermistor, &mut self.thermistor_idx),
            Channel::Pulse => next(&self.pulse, &mut self.pulse_idx),
        }
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub lines: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSink for RecordingSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
