//! Integration tests: AcquisitionService → ports → wire format.
//!
//! These drive full sampling passes through scripted adapters and assert
//! on the emitted lines, including the documented degenerate rails.

use crate::mock_hw::{RecordingSink, ScriptedAdc};

use vitalmon::app::service::AcquisitionService;
use vitalmon::app::telemetry::{self, VitalsSnapshot};
use vitalmon::config::SystemConfig;

fn make_service() -> AcquisitionService {
    AcquisitionService::new(&SystemConfig::default())
}

// ── Calibration reference point ───────────────────────────────

#[test]
fn midscale_thermistor_reads_the_reference_temperature() {
    let mut service = make_service();
    let mut adc = ScriptedAdc::new(vec![511], vec![512]);
    let mut sink = RecordingSink::new();

    let snapshot = service.tick(&mut adc, &mut sink);

    // Mid-scale puts the divider at the 10 kΩ calibration anchor.
    assert!(
        (snapshot.temperature_c - 25.0).abs() < 0.1,
        "expected ~25°C at mid-scale, got {}",
        snapshot.temperature_c
    );
}

// ── Pulse burst averaging ─────────────────────────────────────

#[test]
fn constant_pulse_burst_averages_to_the_constant() {
    let mut service = make_service();
    let mut adc = ScriptedAdc::new(vec![512], vec![600]);
    let mut sink = RecordingSink::new();

    let snapshot = service.tick(&mut adc, &mut sink);

    // 20 identical integral samples must average with no drift at all.
    assert_eq!(snapshot.pulse_avg, 600.0);
    assert_eq!(snapshot.pulse_sum, 600 * 20);
}

#[test]
fn pulse_average_is_sum_over_burst_size() {
    let pulse: Vec<u16> = (0..20u16).map(|i| 400 + i * 13).collect();
    let sum: u32 = pulse.iter().map(|&s| u32::from(s)).sum();

    let mut service = make_service();
    let mut adc = ScriptedAdc::new(vec![512], pulse);
    let mut sink = RecordingSink::new();

    let snapshot = service.tick(&mut adc, &mut sink);

    assert_eq!(snapshot.pulse_sum, sum);
    assert_eq!(snapshot.pulse_avg, sum as f32 / 20.0);
}

#[test]
fn one_burst_consumes_exactly_the_configured_samples() {
    let config = SystemConfig::default();
    let mut service = AcquisitionService::new(&config);
    let mut adc = ScriptedAdc::new(vec![512], vec![500]);
    let mut sink = RecordingSink::new();

    service.tick(&mut adc, &mut sink);

    assert_eq!(
        adc.pulse_samples_taken(),
        usize::from(config.pulse_samples_per_reading)
    );
}

// ── Idempotence ───────────────────────────────────────────────

#[test]
fn identical_sample_sequences_produce_identical_lines() {
    let thermistor = vec![480, 500, 520, 511, 3];
    let pulse: Vec<u16> = (0..100u16).map(|i| (i * 37) % 1024).collect();

    let mut first_lines = Vec::new();
    for _ in 0..2 {
        let mut service = make_service();
        let mut adc = ScriptedAdc::new(thermistor.clone(), pulse.clone());
        let mut sink = RecordingSink::new();
        for _ in 0..5 {
            service.tick(&mut adc, &mut sink);
        }
        if first_lines.is_empty() {
            first_lines = sink.lines;
        } else {
            assert_eq!(sink.lines, first_lines, "runs must be byte-identical");
        }
    }
}

// ── Degenerate rails ──────────────────────────────────────────

#[test]
fn railed_low_thermistor_emits_the_degenerate_line() {
    // raw = 0 is the documented division-by-zero case: the divider
    // voltage is zero and the IEEE infinity chain collapses the
    // temperature to absolute zero.  It must not be mistaken for a
    // valid cold reading.
    let mut service = make_service();
    let mut adc = ScriptedAdc::new(vec![0], vec![512]);
    let mut sink = RecordingSink::new();

    let snapshot = service.tick(&mut adc, &mut sink);

    assert_eq!(snapshot.temperature_c, -273.15);
    assert_eq!(sink.lines[0], "-273.15 512.00");
}

#[test]
fn railed_high_thermistor_emits_the_degenerate_line() {
    // raw = 1023 drives the thermistor resistance to 0 and the log
    // domain collapses; same absolute-zero degenerate as the low rail.
    let mut service = make_service();
    let mut adc = ScriptedAdc::new(vec![1023], vec![512]);
    let mut sink = RecordingSink::new();

    let snapshot = service.tick(&mut adc, &mut sink);

    assert_eq!(snapshot.temperature_c, -273.15);
}

// ── Wire format ───────────────────────────────────────────────

#[test]
fn rendered_line_matches_the_fixed_format() {
    let snapshot = VitalsSnapshot {
        thermistor_raw: 0,
        temperature_c: 36.5,
        pulse_sum: 10_240,
        pulse_avg: 512.0,
    };
    assert_eq!(telemetry::render_line(&snapshot).as_str(), "36.50 512.00");
}

#[test]
fn every_emitted_line_has_two_float_fields_one_space() {
    let mut service = make_service();
    let mut adc = ScriptedAdc::new(vec![3, 511, 1020], vec![0, 77, 1023]);
    let mut sink = RecordingSink::new();

    for _ in 0..3 {
        service.tick(&mut adc, &mut sink);
    }

    assert_eq!(sink.lines.len(), 3, "one line per sampling pass");
    for line in &sink.lines {
        assert_eq!(line.matches(' ').count(), 1, "exactly one separator: {line:?}");
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 2);
        for field in fields {
            field
                .parse::<f32>()
                .unwrap_or_else(|_| panic!("unparseable field in {line:?}"));
        }
    }
}
