//! VitalMon Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single polling loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                Adapters (outer ring)                 │
//! │                                                      │
//! │  HardwareAdapter            SerialSink               │
//! │  (AnalogSource: ADC1)       (TextSink: data UART)    │
//! │                                                      │
//! │  ────────────── Port Trait Boundary ──────────────   │
//! │                                                      │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │        AcquisitionService (pure logic)         │  │
//! │  │  Beta conversion · burst averaging · wire line │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod error;
mod pins;

pub mod app;
mod adapters;
mod drivers;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{error, info};

use adapters::hardware::HardwareAdapter;
use adapters::serial::SerialSink;
use app::service::AcquisitionService;
use config::SystemConfig;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("VitalMon v{}", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();

    // ── 2. Peripheral bring-up ────────────────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals(&config) {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Construct adapters + service ───────────────────────
    let mut adc = HardwareAdapter::new();
    let mut sink = SerialSink::new();
    let mut service = AcquisitionService::new(&config);

    info!(
        "System ready. Streaming vitals every {} ms at {} baud.",
        config.sample_interval_ms, config.data_baud_bps
    );

    // ── 4. Sampling loop ──────────────────────────────────────
    //
    // One tick = one output line.  The pause is a fixed interval on top
    // of the sampling and conversion cost; cadence is approximate and
    // uncompensated.
    loop {
        service.tick(&mut adc, &mut sink);
        thread::sleep(Duration::from_millis(u64::from(config.sample_interval_ms)));
    }
}
