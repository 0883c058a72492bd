pub mod bootstrap;
pub mod buffer;
pub mod info;
pub mod runner;

use once_cell::sync::Lazy;
use std::path::PathBuf;

pub use buffer::{GpuBuffer, GpuEventGuard, InFlight, Queued, Ready};

/// Feste Problemgrößen aus der Buchvorlage
pub const MATRIX_DIM: usize = 512;
pub const SUM_DIM: usize = 64;
pub const WORK_GROUP: usize = 8;

/// Kernelquelle liegt als Textdatei neben dem Binary, fester relativer Pfad
pub const KERNEL_FILE: &str = "cl/summatrix.cl";
pub const KERNEL_NAME: &str = "sum_matrix";

#[derive(thiserror::Error, Debug)]
pub enum ClError {
    /// Kernelquelle nicht lesbar — läuft nicht über den CL-Fehlerpfad
    #[error("Cannot open input file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no OpenCL platform available")]
    NoPlatform,
    /// Build-Log des Compilers, unverändert durchgereicht
    #[error("program build failed: {0}")]
    Build(String),
    #[error("Invalid buffer size: {0}")]
    InvalidSize(usize),
    #[error("OpenCL error code {0}")]
    Api(i32),
}

impl ClError {
    /// Numerischer Code für die Fehlerzeile auf stderr
    pub fn code(&self) -> i32 {
        match self {
            ClError::Io { .. } => -2,
            ClError::Build(_) => -3,
            ClError::InvalidSize(_) => -61,
            ClError::NoPlatform => -1001,
            ClError::Api(code) => *code,
        }
    }
}

impl From<opencl3::error_codes::ClError> for ClError {
    fn from(err: opencl3::error_codes::ClError) -> Self {
        ClError::Api(err.0)
    }
}

impl From<i32> for ClError {
    fn from(code: i32) -> Self {
        ClError::Api(code)
    }
}

/// 512x512, Element (i,j) = i — einmal angelegt, danach nur gelesen
pub static HOST_MATRIX: Lazy<Vec<i32>> = Lazy::new(|| {
    let mut matrix = vec![0i32; MATRIX_DIM * MATRIX_DIM];
    for i in 0..MATRIX_DIM {
        for j in 0..MATRIX_DIM {
            matrix[i * MATRIX_DIM + j] = i as i32;
        }
    }
    matrix
});

/// Host-seitige Referenzsumme, Gegenprobe zum Kernel-Ergebnis
pub fn reference_sum(matrix: &[i32]) -> i32 {
    matrix.iter().sum()
}
