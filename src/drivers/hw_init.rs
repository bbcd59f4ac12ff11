//! One-shot hardware peripheral initialization.
//!
//! Configures the ADC channels and the data UART using raw ESP-IDF sys
//! calls.  Called once from `main()` before the sampling loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::config::SystemConfig;
use crate::error::Result;
#[cfg(target_os = "espidf")]
use crate::error::SensorError;
use crate::pins;

/// ADC1 channel of the thermistor divider tap.
/// On the ESP32-S3, ADC1 channel N maps to GPIO N+1.
pub const ADC1_CH_THERM: u32 = (pins::THERM_ADC_GPIO - 1) as u32;
/// ADC1 channel of the pulse sensor envelope output.
pub const ADC1_CH_PULSE: u32 = (pins::PULSE_ADC_GPIO - 1) as u32;

#[cfg(target_os = "espidf")]
pub fn init_peripherals(config: &SystemConfig) -> Result<()> {
    // SAFETY: Called once from main() before the sampling loop; single-threaded.
    unsafe {
        init_adc()?;
    }
    super::uart::install(config.data_baud_bps)?;
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals(_config: &SystemConfig) -> Result<()> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// sampling-loop read path.  No concurrent access is possible because
/// `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<()> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(SensorError::AdcInitFailed(ret).into());
    }

    // 10-bit width: raw samples span 0 – 1023, matching the conversion
    // constants in the sensor modules.
    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_10,
    };

    let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), ADC1_CH_THERM, &chan_cfg) };
    if ret != ESP_OK as i32 {
        return Err(SensorError::AdcInitFailed(ret).into());
    }

    let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), ADC1_CH_PULSE, &chan_cfg) };
    if ret != ESP_OK as i32 {
        return Err(SensorError::AdcInitFailed(ret).into());
    }

    info!(
        "hw_init: ADC1 configured (CH{}=thermistor, CH{}=pulse)",
        ADC1_CH_THERM, ADC1_CH_PULSE
    );
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: ADC1_HANDLE is written once during init_adc() before this
    // function is called; single-threaded sampling-loop access guaranteed.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        // A failed read degrades to a railed-low sample, which flows
        // through the unguarded conversion like any other rail.
        return 0;
    }
    raw.max(0) as u16
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(_channel: u32) -> u16 {
    0
}
