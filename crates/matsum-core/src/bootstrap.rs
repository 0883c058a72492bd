//! Plattform-/Kontext-Bootstrap: erste Plattform, GPU-Geräte, sonst nichts.

use opencl3::{
    context::Context,
    device::{CL_DEVICE_TYPE_GPU, Device},
    platform::{Platform, get_platforms},
};

use std::ptr;

use crate::ClError;

/// Kontext samt Geräteliste der ersten gefundenen Plattform.
///
/// Keine Fallback-Strategie: ohne Plattform `NoPlatform`, ohne GPU-Gerät
/// schlägt bereits die Kontext-Erzeugung fehl und der CL-Fehler wandert
/// unverändert nach oben.
pub struct Gpu {
    pub platform: Platform,
    pub context: Context,
    pub devices: Vec<Device>,
}

impl Gpu {
    pub fn first_platform() -> Result<Self, ClError> {
        let mut platforms = get_platforms()?;
        if platforms.is_empty() {
            return Err(ClError::NoPlatform);
        }
        let platform = platforms.remove(0);

        let device_ids = platform.get_devices(CL_DEVICE_TYPE_GPU)?;
        let context = Context::from_devices(&device_ids, &[], None, ptr::null_mut())?;

        // Geräteliste vom erzeugten Kontext zurücklesen, nicht von der Plattform
        let devices = context.devices().iter().map(|&id| Device::new(id)).collect();

        Ok(Self {
            platform,
            context,
            devices,
        })
    }
}
