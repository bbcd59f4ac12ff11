//! Hardware adapter — bridges the real ADC front end to [`AnalogSource`].
//!
//! This is the only read-side module that touches actual hardware.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from static `AtomicU16`s for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

use crate::app::ports::{AnalogSource, Channel};
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

static SIM_THERM_ADC: AtomicU16 = AtomicU16::new(512);
static SIM_PULSE_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_thermistor_adc(raw: u16) {
    SIM_THERM_ADC.store(raw, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_pulse_adc(raw: u16) {
    SIM_PULSE_ADC.store(raw, Ordering::Relaxed);
}

/// Concrete adapter over the ADC channels.
pub struct HardwareAdapter;

impl HardwareAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl AnalogSource for HardwareAdapter {
    #[cfg(target_os = "espidf")]
    fn sample(&mut self, channel: Channel) -> u16 {
        match channel {
            Channel::Thermistor => hw_init::adc1_read(hw_init::ADC1_CH_THERM),
            Channel::Pulse => hw_init::adc1_read(hw_init::ADC1_CH_PULSE),
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn sample(&mut self, channel: Channel) -> u16 {
        match channel {
            Channel::Thermistor => SIM_THERM_ADC.load(Ordering::Relaxed),
            Channel::Pulse => SIM_PULSE_ADC.load(Ordering::Relaxed),
        }
    }
}
