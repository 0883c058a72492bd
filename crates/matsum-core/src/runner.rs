//! Reduktionslauf: Programm bauen, Buffers binden, ein 8x8-Dispatch,
//! blockierend zurücklesen.

use bytemuck::{cast_slice, cast_slice_mut};
use opencl3::{
    command_queue::CommandQueue,
    kernel::Kernel,
    memory::{CL_MEM_READ_ONLY, CL_MEM_WRITE_ONLY},
    program::Program,
};

use std::{fs, path::Path};

use crate::bootstrap::Gpu;
use crate::buffer::{GpuBuffer, Queued, Ready};
use crate::{ClError, HOST_MATRIX, KERNEL_NAME, SUM_DIM, WORK_GROUP};

/// Kernelquelle von fester Pfadangabe lesen.
///
/// Wird vor jedem CL-Aufruf erledigt; ein Lesefehler erreicht die
/// Geräte-Enumeration damit nie.
pub fn load_kernel_source(path: &Path) -> Result<String, ClError> {
    fs::read_to_string(path).map_err(|source| ClError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Ein Lauf über die feste Matrix, liefert die 64 Teilsummen.
pub fn run(gpu: &Gpu, src: &str) -> Result<[i32; SUM_DIM], ClError> {
    // 1) Programm gegen die Geräteliste des Kontexts bauen
    let program =
        Program::create_and_build_from_source(&gpu.context, src, "").map_err(ClError::Build)?;
    let kernel = Kernel::create(&program, KERNEL_NAME)?;

    // 2) Eingabe read-only, direkt aus dem Host-Speicher kopiert;
    //    Ausgabe write-only aus Gerätesicht, 64 Slots
    let input =
        GpuBuffer::<Ready>::from_host(&gpu.context, CL_MEM_READ_ONLY, cast_slice(HOST_MATRIX.as_slice()))?;
    let out = GpuBuffer::<Queued>::new(
        &gpu.context,
        CL_MEM_WRITE_ONLY,
        SUM_DIM * std::mem::size_of::<i32>(),
    )?;

    // 3) beide Buffers positional binden
    kernel.set_arg(0, input.raw())?;
    kernel.set_arg(1, out.raw())?;

    let queue = CommandQueue::create(&gpu.context, gpu.devices[0].id(), 0)?;

    // 4) genau ein 2D-Dispatch, 8x8, kein Offset, lokale Größe der Runtime überlassen
    let global = [WORK_GROUP, WORK_GROUP];
    let out_if = out.launch();
    let evt = queue.enqueue_nd_range_kernel(
        kernel.get(),
        2,
        std::ptr::null(),
        global.as_ptr(),
        std::ptr::null(),
        &[],
    )?;
    let out_ready = out_if.complete(evt);

    // 5) blockierendes Zurücklesen — der einzige Wartepunkt des Programms
    let mut sums = [0i32; SUM_DIM];
    out_ready.read_blocking(&queue, cast_slice_mut(&mut sums))?;

    Ok(sums)
}
