//! Native device backend B: the vendor OpenCL Sobel kernel.
//!
//! Binds the `sobel_filter_opencl` symbol from the vendor shared library.
//! Same contract and same opacity as the CUDA backend; only the symbol and
//! the device runtime behind it differ.

use crate::backend::{check_ffi_contract, ComputeBackend};
use crate::trace::trace_event;
use crate::util::EdgeBenchResult;

#[link(name = "sobel_filter_opencl")]
extern "C" {
    fn sobel_filter_opencl(input: *const u8, output: *mut u8, width: i32, height: i32);
}

/// OpenCL device backend.
pub struct OpenClBackend;

impl ComputeBackend for OpenClBackend {
    fn name(&self) -> &'static str {
        "opencl"
    }

    fn apply(
        &self,
        input: &[u8],
        output: &mut [u8],
        width: u32,
        height: u32,
    ) -> EdgeBenchResult<()> {
        let (w, h) = check_ffi_contract(input, output, width, height)?;
        trace_event!("backend_dispatch", backend = "opencl");
        // Lengths are pinned to `width * height * 4` by the contract check;
        // the kernel stays inside both buffers.
        unsafe { sobel_filter_opencl(input.as_ptr(), output.as_mut_ptr(), w, h) };
        Ok(())
    }
}
