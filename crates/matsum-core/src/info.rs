//! Fähigkeitsdump für alle Plattformen und Geräte.
//!
//! Reines Abfragen und Formatieren — keine Entscheidung im Programm hängt
//! an diesen Werten, der 8x8-Dispatch bleibt unabhängig davon fest.

use opencl3::device::{
    CL_DEVICE_TYPE_ACCELERATOR, CL_DEVICE_TYPE_ALL, CL_DEVICE_TYPE_CPU, CL_DEVICE_TYPE_CUSTOM,
    CL_DEVICE_TYPE_GPU, CL_FP_DENORM, CL_FP_FMA, CL_FP_INF_NAN, CL_FP_ROUND_TO_INF,
    CL_FP_ROUND_TO_NEAREST, CL_FP_ROUND_TO_ZERO, CL_FP_SOFT_FLOAT, Device,
};
use opencl3::platform::{Platform, get_platforms};
use opencl3::types::cl_bool;

use crate::ClError;

/// Label im CL-Symbolnamen plus formatierter Wert, eine Zeile pro Attribut
pub type Capability = (&'static str, String);

pub fn platform_capabilities(platform: &Platform) -> Result<Vec<Capability>, ClError> {
    Ok(vec![
        ("CL_PLATFORM_NAME", platform.name()?),
        ("CL_PLATFORM_VENDOR", platform.vendor()?),
        ("CL_PLATFORM_VERSION", platform.version()?),
        ("CL_PLATFORM_PROFILE", platform.profile()?),
        ("CL_PLATFORM_EXTENSIONS", platform.extensions()?),
    ])
}

/// Der feste CL-1.1-Attributsatz der Buchvorlage, ein Block pro Gerät.
pub fn device_capabilities(device: &Device) -> Result<Vec<Capability>, ClError> {
    let mut caps: Vec<Capability> = Vec::new();

    caps.push(("CL_DEVICE_NAME", device.name()?));
    caps.push(("CL_DEVICE_VENDOR", device.vendor()?));
    caps.push(("CL_DEVICE_VENDOR_ID", device.vendor_id()?.to_string()));
    caps.push(("CL_DEVICE_VERSION", device.version()?));
    caps.push(("CL_DRIVER_VERSION", device.driver_version()?));
    caps.push(("CL_DEVICE_OPENCL_C_VERSION", device.opencl_c_version()?));
    caps.push(("CL_DEVICE_PROFILE", device.profile()?));
    caps.push((
        "CL_DEVICE_TYPE",
        device_type_name(device.dev_type()?).to_string(),
    ));

    caps.push((
        "CL_DEVICE_MAX_COMPUTE_UNITS",
        device.max_compute_units()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_MAX_WORK_ITEM_DIMENSIONS",
        device.max_work_item_dimensions()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_MAX_WORK_ITEM_SIZES",
        format!("{:?}", device.max_work_item_sizes()?),
    ));
    caps.push((
        "CL_DEVICE_MAX_WORK_GROUP_SIZE",
        device.max_work_group_size()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_MAX_CLOCK_FREQUENCY",
        device.max_clock_frequency()?.to_string(),
    ));
    caps.push(("CL_DEVICE_ADDRESS_BITS", device.address_bits()?.to_string()));

    caps.push((
        "CL_DEVICE_MAX_MEM_ALLOC_SIZE",
        device.max_mem_alloc_size()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_GLOBAL_MEM_SIZE",
        device.global_mem_size()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_GLOBAL_MEM_CACHE_TYPE",
        cache_type_name(device.global_mem_cache_type()?).to_string(),
    ));
    caps.push((
        "CL_DEVICE_GLOBAL_MEM_CACHELINE_SIZE",
        device.global_mem_cacheline_size()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_GLOBAL_MEM_CACHE_SIZE",
        device.global_mem_cache_size()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_LOCAL_MEM_TYPE",
        local_mem_type_name(device.local_mem_type()?).to_string(),
    ));
    caps.push((
        "CL_DEVICE_LOCAL_MEM_SIZE",
        device.local_mem_size()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_MAX_CONSTANT_BUFFER_SIZE",
        device.max_constant_buffer_size()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_MAX_CONSTANT_ARGS",
        device.max_constant_args()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_MAX_PARAMETER_SIZE",
        device.max_parameter_size()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_MEM_BASE_ADDR_ALIGN",
        device.mem_base_addr_align()?.to_string(),
    ));

    caps.push((
        "CL_DEVICE_SINGLE_FP_CONFIG",
        fp_config_names(device.single_fp_config()?),
    ));

    caps.push((
        "CL_DEVICE_IMAGE_SUPPORT",
        yes_no(device.image_support()? as cl_bool).to_string(),
    ));
    caps.push((
        "CL_DEVICE_MAX_READ_IMAGE_ARGS",
        device.max_read_image_args()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_MAX_WRITE_IMAGE_ARGS",
        device.max_write_image_args()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_IMAGE2D_MAX_WIDTH",
        device.image2d_max_width()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_IMAGE2D_MAX_HEIGHT",
        device.image2d_max_height()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_IMAGE3D_MAX_WIDTH",
        device.image3d_max_width()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_IMAGE3D_MAX_HEIGHT",
        device.image3d_max_height()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_IMAGE3D_MAX_DEPTH",
        device.image3d_max_depth()?.to_string(),
    ));
    caps.push(("CL_DEVICE_MAX_SAMPLERS", device.max_device_samples()?.to_string()));

    caps.push((
        "CL_DEVICE_PREFERRED_VECTOR_WIDTH_CHAR",
        device.max_preferred_vector_width_char()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_PREFERRED_VECTOR_WIDTH_SHORT",
        device.max_preferred_vector_width_short()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_PREFERRED_VECTOR_WIDTH_INT",
        device.max_preferred_vector_width_int()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_PREFERRED_VECTOR_WIDTH_LONG",
        device.max_preferred_vector_width_long()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_PREFERRED_VECTOR_WIDTH_FLOAT",
        device.max_preferred_vector_width_float()?.to_string(),
    ));
    caps.push((
        "CL_DEVICE_PREFERRED_VECTOR_WIDTH_DOUBLE",
        device.max_preferred_vector_width_double()?.to_string(),
    ));

    caps.push((
        "CL_DEVICE_ERROR_CORRECTION_SUPPORT",
        yes_no(device.error_correction_support()? as cl_bool).to_string(),
    ));
    caps.push((
        "CL_DEVICE_HOST_UNIFIED_MEMORY",
        yes_no(device.host_unified_memory()? as cl_bool).to_string(),
    ));
    caps.push((
        "CL_DEVICE_ENDIAN_LITTLE",
        yes_no(device.endian_little()? as cl_bool).to_string(),
    ));
    caps.push((
        "CL_DEVICE_AVAILABLE",
        yes_no(device.available()? as cl_bool).to_string(),
    ));
    caps.push((
        "CL_DEVICE_COMPILER_AVAILABLE",
        yes_no(device.compiler_available()? as cl_bool).to_string(),
    ));
    caps.push((
        "CL_DEVICE_PROFILING_TIMER_RESOLUTION",
        device.profiling_timer_resolution()?.to_string(),
    ));
    caps.push(("CL_DEVICE_EXTENSIONS", device.extensions()?));

    Ok(caps)
}

/// Kopfzeile plus eine eingerückte `label: value`-Zeile je Attribut
pub fn render_block(header: &str, caps: &[Capability]) -> String {
    let mut out = format!("{header}\n");
    for (label, value) in caps {
        out.push_str(&format!("  {label}: {value}\n"));
    }
    out
}

/// ein Plattformblock plus ein Block je Gerät, über alle Plattformen
pub fn print_capabilities() -> Result<(), ClError> {
    let platforms = get_platforms()?;
    if platforms.is_empty() {
        return Err(ClError::NoPlatform);
    }

    for (p, platform) in platforms.iter().enumerate() {
        let caps = platform_capabilities(platform)?;
        print!("{}", render_block(&format!("Platform #{p}"), &caps));

        for (d, id) in platform.get_devices(CL_DEVICE_TYPE_ALL)?.iter().enumerate() {
            let device = Device::new(*id);
            let caps = device_capabilities(&device)?;
            print!("{}", render_block(&format!("Device #{d}"), &caps));
        }
    }
    Ok(())
}

/// dekodiert das FP-Config-Bitfeld in die CL_FP_*-Namen
pub fn fp_config_names(bits: u64) -> String {
    const FLAGS: &[(u64, &str)] = &[
        (CL_FP_DENORM, "DENORM"),
        (CL_FP_INF_NAN, "INF_NAN"),
        (CL_FP_ROUND_TO_NEAREST, "ROUND_TO_NEAREST"),
        (CL_FP_ROUND_TO_ZERO, "ROUND_TO_ZERO"),
        (CL_FP_ROUND_TO_INF, "ROUND_TO_INF"),
        (CL_FP_FMA, "FMA"),
        (CL_FP_SOFT_FLOAT, "SOFT_FLOAT"),
    ];

    let names: Vec<&str> = FLAGS
        .iter()
        .filter(|(bit, _)| bits & bit != 0)
        .map(|&(_, name)| name)
        .collect();

    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(" | ")
    }
}

pub fn device_type_name(bits: u64) -> &'static str {
    if bits & CL_DEVICE_TYPE_GPU != 0 {
        "GPU"
    } else if bits & CL_DEVICE_TYPE_CPU != 0 {
        "CPU"
    } else if bits & CL_DEVICE_TYPE_ACCELERATOR != 0 {
        "ACCELERATOR"
    } else if bits & CL_DEVICE_TYPE_CUSTOM != 0 {
        "CUSTOM"
    } else {
        "DEFAULT"
    }
}

// cl.h: CL_NONE=0, CL_READ_ONLY_CACHE=1, CL_READ_WRITE_CACHE=2
pub fn cache_type_name(value: u32) -> &'static str {
    match value {
        1 => "READ_ONLY_CACHE",
        2 => "READ_WRITE_CACHE",
        _ => "NONE",
    }
}

// cl.h: CL_LOCAL=1, CL_GLOBAL=2
pub fn local_mem_type_name(value: u32) -> &'static str {
    match value {
        1 => "LOCAL",
        2 => "GLOBAL",
        _ => "NONE",
    }
}

fn yes_no(value: cl_bool) -> &'static str {
    if value == 0 { "no" } else { "yes" }
}
