// Variante A: Bootstrap, ein Reduktionslauf, Summen + Referenz ausgeben.

use std::path::Path;
use std::process::ExitCode;

use matsum_core::bootstrap::Gpu;
use matsum_core::{ClError, HOST_MATRIX, KERNEL_FILE, reference_sum, runner};

fn main() -> ExitCode {
    // Lesefehler der Kernelquelle läuft nicht über den CL-Fehlerpfad:
    // Meldung auf stdout, sofortiges Ende
    let src = match runner::load_kernel_source(Path::new(KERNEL_FILE)) {
        Ok(src) => src,
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&src) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e} ({})", e.code());
            ExitCode::FAILURE
        }
    }
}

fn run(src: &str) -> Result<(), ClError> {
    let gpu = Gpu::first_platform()?;
    let sums = runner::run(&gpu, src)?;

    // 64 Slots, dann Host-Referenz, dann Slot-Summe — Vergleich per Augenschein
    let mut total = 0i32;
    for s in sums {
        print!("{s} ");
        total += s;
    }
    println!();
    println!("{}", reference_sum(HOST_MATRIX.as_slice()));
    println!("{total}");

    Ok(())
}
