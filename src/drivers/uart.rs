//! Data-link UART driver.
//!
//! A dedicated UART carries the plotting stream so the console/log UART
//! never pollutes it.  Installed once at boot at the configured baud rate
//! (8 data bits, no parity, 1 stop bit) and held for the process lifetime;
//! it is never closed.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::error::{Result, SerialError};
#[cfg(target_os = "espidf")]
use crate::pins;

/// UART1 — UART0 is the console.
#[cfg(target_os = "espidf")]
const DATA_UART: uart_port_t = 1;

/// Driver ring sizes; the IDF requires rings larger than the hardware FIFO.
#[cfg(target_os = "espidf")]
const RX_BUF_BYTES: i32 = 256;
#[cfg(target_os = "espidf")]
const TX_BUF_BYTES: i32 = 256;

#[cfg(target_os = "espidf")]
pub fn install(baud_bps: u32) -> Result<()> {
    let cfg = uart_config_t {
        baud_rate: baud_bps as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        ..Default::default()
    };

    // SAFETY: Called once from main() before the sampling loop; single-threaded.
    let ret = unsafe { uart_param_config(DATA_UART, &cfg) };
    if ret != ESP_OK as i32 {
        return Err(SerialError::ConfigFailed(ret).into());
    }

    let ret = unsafe {
        uart_set_pin(
            DATA_UART,
            pins::DATA_UART_TX_GPIO,
            pins::DATA_UART_RX_GPIO,
            -1,
            -1,
        )
    };
    if ret != ESP_OK as i32 {
        return Err(SerialError::ConfigFailed(ret).into());
    }

    let ret = unsafe {
        uart_driver_install(
            DATA_UART,
            RX_BUF_BYTES,
            TX_BUF_BYTES,
            0,
            core::ptr::null_mut(),
            0,
        )
    };
    if ret != ESP_OK as i32 {
        return Err(SerialError::InstallFailed(ret).into());
    }

    info!("uart: data link up ({} baud 8N1)", baud_bps);
    Ok(())
}

/// Queue bytes on the data link.  Blocks only if the TX ring is full.
#[cfg(target_os = "espidf")]
pub fn write_bytes(data: &[u8]) {
    // SAFETY: The driver is installed at boot; uart_write_bytes copies the
    // slice into the TX ring before returning.
    unsafe {
        uart_write_bytes(DATA_UART, data.as_ptr().cast(), data.len());
    }
}
