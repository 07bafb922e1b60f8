//! Boundary to opaque device compute kernels.
//!
//! The adapter forwards a full-image convolution request to an external
//! backend honoring a fixed four-argument contract; it never reimplements
//! or verifies the convolution itself. Backends register in a
//! [`BackendRegistry`] at startup and are looked up by name; a name with no
//! registered backend is fatal to the run, with no retry and no fallback to
//! a CPU strategy.

use crate::util::{EdgeBenchError, EdgeBenchResult};

#[cfg(any(feature = "cuda", feature = "opencl"))]
use crate::image::byte_len;

pub mod emulated;

#[cfg(feature = "cuda")]
pub mod cuda;

#[cfg(feature = "opencl")]
pub mod opencl;

/// Contract for an opaque device compute backend.
///
/// `apply` receives a read-only input buffer and a pre-allocated,
/// caller-owned output buffer, both exactly `width * height * 4` bytes, and
/// is expected to produce a gradient image of the same shape including
/// alpha. The core cannot verify that expectation; it only guarantees the
/// buffer contract on the way in.
pub trait ComputeBackend: Send + Sync {
    /// Stable identifier used for registry lookup and logging.
    fn name(&self) -> &'static str;

    /// Forwards one full-image convolution to the backend kernel.
    ///
    /// The backend must not resize or reinterpret either buffer.
    fn apply(
        &self,
        input: &[u8],
        output: &mut [u8],
        width: u32,
        height: u32,
    ) -> EdgeBenchResult<()>;
}

/// The compute backends known to this process, looked up by name.
pub struct BackendRegistry {
    backends: Vec<Box<dyn ComputeBackend>>,
}

impl BackendRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            backends: Vec::new(),
        }
    }

    /// Creates a registry holding every backend compiled into this build:
    /// the emulated software double plus any native device backend enabled
    /// by a cargo feature.
    pub fn with_native() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(emulated::EmulatedBackend));
        #[cfg(feature = "cuda")]
        registry.register(Box::new(cuda::CudaBackend));
        #[cfg(feature = "opencl")]
        registry.register(Box::new(opencl::OpenClBackend));
        registry
    }

    /// Adds a backend to the registry.
    pub fn register(&mut self, backend: Box<dyn ComputeBackend>) {
        self.backends.push(backend);
    }

    /// Looks up a backend by name.
    pub fn get(&self, name: &'static str) -> EdgeBenchResult<&dyn ComputeBackend> {
        self.backends
            .iter()
            .find(|backend| backend.name() == name)
            .map(|backend| &**backend)
            .ok_or(EdgeBenchError::BackendUnavailable { name })
    }

    /// Names of the registered backends, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|backend| backend.name()).collect()
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_native()
    }
}

/// Validates the buffer contract for an FFI dispatch and converts the
/// extent into the ABI's `i32` pair.
///
/// The native kernels trust the caller on buffer lengths; this check is
/// what makes the subsequent unsafe call sound.
#[cfg(any(feature = "cuda", feature = "opencl"))]
pub(crate) fn check_ffi_contract(
    input: &[u8],
    output: &[u8],
    width: u32,
    height: u32,
) -> EdgeBenchResult<(i32, i32)> {
    let w = i32::try_from(width).map_err(|_| EdgeBenchError::InvalidDimensions {
        width: width as usize,
        height: height as usize,
    })?;
    let h = i32::try_from(height).map_err(|_| EdgeBenchError::InvalidDimensions {
        width: width as usize,
        height: height as usize,
    })?;
    let needed = byte_len(width as usize, height as usize)?;
    if input.len() != needed {
        return Err(EdgeBenchError::DimensionMismatch {
            needed,
            got: input.len(),
        });
    }
    if output.len() != needed {
        return Err(EdgeBenchError::DimensionMismatch {
            needed,
            got: output.len(),
        });
    }
    Ok((w, h))
}
