// Host-seitige Eigenschaften: Matrix-Seeding, Referenzsumme, Fehlerpfade,
// Formatierung des Fähigkeitsdumps. Läuft ohne OpenCL-Runtime.

use std::path::Path;

use opencl3::device::{CL_DEVICE_TYPE_CPU, CL_DEVICE_TYPE_GPU, CL_FP_INF_NAN, CL_FP_ROUND_TO_NEAREST};

use matsum_core::info::{device_type_name, fp_config_names, render_block};
use matsum_core::{
    ClError, HOST_MATRIX, KERNEL_FILE, MATRIX_DIM, SUM_DIM, WORK_GROUP, reference_sum, runner,
};

#[test]
fn matrix_rows_carry_their_row_index() {
    assert_eq!(HOST_MATRIX.len(), MATRIX_DIM * MATRIX_DIM);
    for i in 0..MATRIX_DIM {
        for j in 0..MATRIX_DIM {
            assert_eq!(HOST_MATRIX[i * MATRIX_DIM + j], i as i32);
        }
    }
}

#[test]
fn reference_sum_matches_closed_form() {
    // 512 * Sum(0..511) = 512 * 130816
    let expected = (MATRIX_DIM * (0..MATRIX_DIM).sum::<usize>()) as i32;
    assert_eq!(expected, 66_977_792);
    assert_eq!(reference_sum(HOST_MATRIX.as_slice()), expected);
}

#[test]
fn band_partition_totals_match_reference() {
    // Host-Modell des Kernels: Slot s summiert die Zeilen [8s, 8s+8)
    let rows_per_slot = MATRIX_DIM / (WORK_GROUP * WORK_GROUP);
    let mut total = 0i32;
    for slot in 0..SUM_DIM {
        let mut acc = 0i32;
        for r in slot * rows_per_slot..(slot + 1) * rows_per_slot {
            acc += HOST_MATRIX[r * MATRIX_DIM..(r + 1) * MATRIX_DIM]
                .iter()
                .sum::<i32>();
        }
        assert_eq!(acc, slot_band_sum(slot));
        total += acc;
    }
    assert_eq!(total, reference_sum(HOST_MATRIX.as_slice()));
}

// geschlossene Form je Band: Sum_{r in [8s, 8s+8)} 512 * r
fn slot_band_sum(slot: usize) -> i32 {
    let rows_per_slot = MATRIX_DIM / (WORK_GROUP * WORK_GROUP);
    (slot * rows_per_slot..(slot + 1) * rows_per_slot)
        .map(|r| (MATRIX_DIM * r) as i32)
        .sum()
}

#[test]
fn missing_kernel_file_reports_io() {
    let err = runner::load_kernel_source(Path::new("cl/no_such_kernel.cl")).unwrap_err();
    assert!(matches!(err, ClError::Io { .. }));
    assert_eq!(err.code(), -2);
    assert!(err.to_string().starts_with("Cannot open input file"));
}

#[test]
fn shipped_kernel_source_loads() {
    let src = runner::load_kernel_source(Path::new(KERNEL_FILE)).unwrap();
    assert!(src.contains("__kernel"));
    assert!(src.contains("sum_matrix"));
}

#[test]
fn error_codes_follow_the_wrapper_convention() {
    assert_eq!(ClError::Api(-30).code(), -30);
    assert_eq!(ClError::NoPlatform.code(), -1001);
    assert_eq!(ClError::Build("log".into()).code(), -3);
    assert_eq!(ClError::InvalidSize(0).code(), -61);
}

#[test]
fn capability_lines_render_label_and_value() {
    let caps = vec![
        ("CL_DEVICE_NAME", "Test GPU".to_string()),
        ("CL_DEVICE_MAX_COMPUTE_UNITS", "32".to_string()),
    ];
    let block = render_block("Device #0", &caps);

    let mut lines = block.lines();
    assert_eq!(lines.next(), Some("Device #0"));
    for line in lines {
        let (label, value) = line.trim_start().split_once(": ").unwrap();
        assert!(label.starts_with("CL_"));
        assert!(!value.is_empty());
    }
}

#[test]
fn fp_config_decodes_rounding_modes() {
    let decoded = fp_config_names(CL_FP_ROUND_TO_NEAREST | CL_FP_INF_NAN);
    assert!(decoded.contains("ROUND_TO_NEAREST"));
    assert!(decoded.contains("INF_NAN"));
    assert_eq!(fp_config_names(0), "none");
}

#[test]
fn device_type_bits_map_to_names() {
    assert_eq!(device_type_name(CL_DEVICE_TYPE_GPU), "GPU");
    assert_eq!(device_type_name(CL_DEVICE_TYPE_CPU), "CPU");
    assert_eq!(device_type_name(0), "DEFAULT");
}
