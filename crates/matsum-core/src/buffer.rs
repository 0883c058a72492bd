//! Typ-State-Wrapper um OpenCL-Buffers: Queued → InFlight → Ready.

use opencl3::{
    command_queue::CommandQueue,
    context::Context,
    event::Event,
    memory::{Buffer, CL_MEM_COPY_HOST_PTR},
    types::{CL_BLOCKING, cl_mem_flags},
};

use std::{ffi::c_void, marker::PhantomData, ptr};

use crate::ClError;

/// angelegt, noch keinem Dispatch übergeben
pub struct Queued;
/// an einen laufenden Dispatch gebunden
pub struct InFlight;
/// Geräteinhalt gültig, darf gelesen werden
pub struct Ready;

pub struct GpuBuffer<S> {
    buf: Buffer<u8>,
    len: usize,
    _state: PhantomData<S>,
}

impl GpuBuffer<Queued> {
    /// legt ein leeres GPU-Buffer mit den gegebenen Flags an
    pub fn new(context: &Context, flags: cl_mem_flags, len: usize) -> Result<Self, ClError> {
        if len == 0 {
            return Err(ClError::InvalidSize(len));
        }
        let buf = Buffer::<u8>::create(context, flags, len, ptr::null_mut())?;
        Ok(Self {
            buf,
            len,
            _state: PhantomData,
        })
    }

    /// Übergabe an einen Dispatch, Queued → InFlight
    pub fn launch(self) -> GpuBuffer<InFlight> {
        GpuBuffer {
            buf: self.buf,
            len: self.len,
            _state: PhantomData,
        }
    }
}

impl GpuBuffer<Ready> {
    /// Buffer direkt aus Host-Daten (CL_MEM_COPY_HOST_PTR),
    /// geräteseitig sofort gültig — der Pfad für die Eingabematrix
    pub fn from_host(context: &Context, flags: cl_mem_flags, host: &[u8]) -> Result<Self, ClError> {
        if host.is_empty() {
            return Err(ClError::InvalidSize(0));
        }
        let buf = Buffer::<u8>::create(
            context,
            flags | CL_MEM_COPY_HOST_PTR,
            host.len(),
            host.as_ptr() as *mut c_void,
        )?;
        Ok(Self {
            buf,
            len: host.len(),
            _state: PhantomData,
        })
    }

    /// blockierendes Zurücklesen in den Host-Speicher
    pub fn read_blocking(&self, queue: &CommandQueue, host_out: &mut [u8]) -> Result<(), ClError> {
        debug_assert_eq!(host_out.len(), self.len);
        queue.enqueue_read_buffer(&self.buf, CL_BLOCKING, 0, host_out, &[])?;
        Ok(())
    }
}

impl GpuBuffer<InFlight> {
    /// wartet auf das Dispatch-Event, InFlight → Ready
    pub fn complete(self, evt: Event) -> GpuBuffer<Ready> {
        let _g = GpuEventGuard { evt };
        GpuBuffer {
            buf: self.buf,
            len: self.len,
            _state: PhantomData,
        }
    }

    /// Variante mit bereits gehaltenem Guard
    pub fn into_ready(self, _g: GpuEventGuard) -> GpuBuffer<Ready> {
        GpuBuffer {
            buf: self.buf,
            len: self.len,
            _state: PhantomData,
        }
    }
}

impl<S> GpuBuffer<S> {
    /// Zugriff auf die interne OpenCL-Buffer-Referenz
    pub fn raw(&self) -> &Buffer<u8> {
        &self.buf
    }

    pub fn raw_mut(&mut self) -> &mut Buffer<u8> {
        &mut self.buf
    }

    /// Länge des Buffers in Bytes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// wartet bei Drop auf das gehaltene Event
pub struct GpuEventGuard {
    evt: Event,
}

impl GpuEventGuard {
    pub fn hold(evt: Event) -> Self {
        Self { evt }
    }

    /// explizites Wait ohne Drop
    pub fn wait(self) -> Result<(), ClError> {
        let result = self.evt.wait().map_err(ClError::from);
        std::mem::forget(self); // kein doppeltes Wait im Drop
        result
    }
}

impl Drop for GpuEventGuard {
    fn drop(&mut self) {
        let _ = self.evt.wait();
    }
}
