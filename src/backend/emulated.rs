//! Software test double for the device backends.
//!
//! Produces the same gradient image as the flat-buffer strategy, entirely
//! on the CPU. It stands in for the native kernels in tests and on
//! machines built without a device toolchain, and it is always registered.

use crate::backend::ComputeBackend;
use crate::kernel::buffer::sobel_buffer;
use crate::trace::trace_event;
use crate::util::EdgeBenchResult;

/// CPU-emulated compute backend.
pub struct EmulatedBackend;

impl ComputeBackend for EmulatedBackend {
    fn name(&self) -> &'static str {
        "emulated"
    }

    fn apply(
        &self,
        input: &[u8],
        output: &mut [u8],
        width: u32,
        height: u32,
    ) -> EdgeBenchResult<()> {
        trace_event!("backend_dispatch", backend = "emulated");
        sobel_buffer(input, output, width as usize, height as usize)
    }
}
