// End-to-End gegen echte Hardware. Per --ignored starten, braucht eine
// installierte OpenCL-Runtime mit mindestens einem GPU-Gerät.

use std::path::Path;

use opencl3::device::{CL_DEVICE_TYPE_ALL, Device};
use opencl3::platform::get_platforms;

use matsum_core::bootstrap::Gpu;
use matsum_core::info::device_capabilities;
use matsum_core::{HOST_MATRIX, KERNEL_FILE, reference_sum, runner};

#[test]
#[ignore = "requires an OpenCL runtime with a GPU device"]
fn column_sums_match_host_reference() {
    let src = runner::load_kernel_source(Path::new(KERNEL_FILE)).unwrap();
    let gpu = Gpu::first_platform().unwrap();

    let sums = runner::run(&gpu, &src).unwrap();
    let total: i32 = sums.iter().sum();
    assert_eq!(total, reference_sum(HOST_MATRIX.as_slice()));

    // zweiter Lauf mit unveränderter Eingabe: deterministisch
    let again = runner::run(&gpu, &src).unwrap();
    assert_eq!(sums, again);
}

#[test]
#[ignore = "requires an OpenCL runtime with a GPU device"]
fn one_capability_block_per_device() {
    for platform in get_platforms().unwrap() {
        for id in platform.get_devices(CL_DEVICE_TYPE_ALL).unwrap() {
            let caps = device_capabilities(&Device::new(id)).unwrap();
            assert!(caps.len() >= 40);
            for (label, value) in &caps {
                assert!(label.starts_with("CL_"));
                assert!(!value.is_empty(), "{label} printed empty");
            }
        }
    }
}
