//! Strategy selection and timed execution.
//!
//! The harness is a single-shot dispatcher: parse a mode identifier, run
//! the selected strategy over one input/output buffer pair, and report the
//! elapsed wall-clock time of the call. No state survives between runs.

use crate::backend::BackendRegistry;
use crate::image::{byte_len, PixelBuffer};
use crate::kernel;
use crate::trace::{trace_event, trace_span};
use crate::util::{EdgeBenchError, EdgeBenchResult};
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Execution strategy selector, parsed from the numeric mode identifier of
/// the command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Mode 0: coordinate-addressed reference strategy.
    Scalar,
    /// Mode 1: flat-buffer sequential strategy.
    Buffer,
    /// Mode 2: row-partitioned parallel strategy.
    Parallel,
    /// Mode 3: native device backend A (CUDA).
    DeviceA,
    /// Mode 4: native device backend B (OpenCL).
    DeviceB,
}

impl Mode {
    /// Human-readable strategy label used in logs and messages.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Scalar => "scalar",
            Mode::Buffer => "buffer",
            Mode::Parallel => "parallel",
            Mode::DeviceA => "cuda",
            Mode::DeviceB => "opencl",
        }
    }
}

impl FromStr for Mode {
    type Err = EdgeBenchError;

    fn from_str(code: &str) -> EdgeBenchResult<Self> {
        match code {
            "0" => Ok(Mode::Scalar),
            "1" => Ok(Mode::Buffer),
            "2" => Ok(Mode::Parallel),
            "3" => Ok(Mode::DeviceA),
            "4" => Ok(Mode::DeviceB),
            _ => Err(EdgeBenchError::UnsupportedMode {
                given: code.to_string(),
            }),
        }
    }
}

/// Configuration for one harness run.
pub struct RunConfig {
    /// Worker count for the parallel strategy.
    pub workers: usize,
    /// Backends available to the device modes.
    pub registry: BackendRegistry,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            registry: BackendRegistry::with_native(),
        }
    }
}

/// Default parallel worker count: the available hardware parallelism minus
/// one, leaving a core for the coordinating thread, and never below 1.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get().saturating_sub(1).max(1))
        .unwrap_or(1)
}

/// Executes `mode` over `input` into `output` and returns the elapsed time
/// of the strategy call.
///
/// `output` must have the same dimensions as `input`; only its interior
/// pixels are written. With no interior (width or height below 3) the call
/// is a timed no-op. Device modes fail with
/// [`EdgeBenchError::BackendUnavailable`] when the backend is not in the
/// registry; no CPU fallback is attempted.
pub fn run(
    mode: Mode,
    input: &PixelBuffer,
    output: &mut PixelBuffer,
    config: &RunConfig,
) -> EdgeBenchResult<Duration> {
    let width = input.width();
    let height = input.height();
    if output.width() != width || output.height() != height {
        return Err(EdgeBenchError::DimensionMismatch {
            needed: byte_len(width, height)?,
            got: output.as_bytes().len(),
        });
    }

    let _span = trace_span!("run", mode = mode.label()).entered();
    let started = Instant::now();

    match mode {
        Mode::Scalar => kernel::scalar::sobel_scalar(input, output),
        Mode::Buffer => {
            kernel::buffer::sobel_buffer(input.as_bytes(), output.as_bytes_mut(), width, height)?;
        }
        Mode::Parallel => {
            #[cfg(feature = "rayon")]
            kernel::parallel::sobel_parallel(
                input.as_bytes(),
                output.as_bytes_mut(),
                width,
                height,
                config.workers,
            )?;
            #[cfg(not(feature = "rayon"))]
            return Err(EdgeBenchError::WorkerPool {
                reason: "built without the `rayon` feature".to_string(),
            });
        }
        Mode::DeviceA => dispatch_device(config, "cuda", input, output)?,
        Mode::DeviceB => dispatch_device(config, "opencl", input, output)?,
    }

    let elapsed = started.elapsed();
    trace_event!(
        "run_complete",
        mode = mode.label(),
        elapsed_ms = elapsed.as_millis() as u64
    );
    Ok(elapsed)
}

/// Looks up `name` in the registry and forwards the convolution to it.
fn dispatch_device(
    config: &RunConfig,
    name: &'static str,
    input: &PixelBuffer,
    output: &mut PixelBuffer,
) -> EdgeBenchResult<()> {
    let backend = config.registry.get(name)?;
    let (w, h) = extent_u32(input.width(), input.height())?;
    backend.apply(input.as_bytes(), output.as_bytes_mut(), w, h)
}

/// Converts buffer dimensions to the `u32` extent of the backend contract.
fn extent_u32(width: usize, height: usize) -> EdgeBenchResult<(u32, u32)> {
    let err = EdgeBenchError::InvalidDimensions { width, height };
    let w = u32::try_from(width).map_err(|_| err.clone())?;
    let h = u32::try_from(height).map_err(|_| err)?;
    Ok((w, h))
}
