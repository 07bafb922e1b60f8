//! Native device backend A: the vendor CUDA Sobel kernel.
//!
//! Binds the `sobel_filter_cuda` symbol from the vendor shared library.
//! The kernel is opaque: whatever device parallelism it uses internally is
//! invisible to the caller, which simply blocks on the call. Builds without
//! the library must leave the `cuda` feature off, in which case this
//! backend is absent from the registry and mode 3 fails as unavailable.

use crate::backend::{check_ffi_contract, ComputeBackend};
use crate::trace::trace_event;
use crate::util::EdgeBenchResult;

#[link(name = "sobel_filter_cuda")]
extern "C" {
    fn sobel_filter_cuda(input: *const u8, output: *mut u8, width: i32, height: i32);
}

/// CUDA device backend.
pub struct CudaBackend;

impl ComputeBackend for CudaBackend {
    fn name(&self) -> &'static str {
        "cuda"
    }

    fn apply(
        &self,
        input: &[u8],
        output: &mut [u8],
        width: u32,
        height: u32,
    ) -> EdgeBenchResult<()> {
        let (w, h) = check_ffi_contract(input, output, width, height)?;
        trace_event!("backend_dispatch", backend = "cuda");
        // Lengths are pinned to `width * height * 4` by the contract check;
        // the kernel stays inside both buffers.
        unsafe { sobel_filter_cuda(input.as_ptr(), output.as_mut_ptr(), w, h) };
        Ok(())
    }
}
