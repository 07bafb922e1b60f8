//! Edgebench computes a Sobel edge-detection filter over RGBA rasters and
//! measures the wall-clock cost of interchangeable execution strategies for
//! the same convolution.
//!
//! Four strategies exist: a coordinate-addressed reference implementation, a
//! flat-buffer sequential implementation, a row-partitioned parallel
//! implementation (behind the `rayon` feature), and dispatch to opaque
//! device compute backends. The [`harness`] module selects a strategy by
//! mode identifier and reports the elapsed wall-clock time of the call.

pub mod backend;
pub mod harness;
pub mod image;
pub mod kernel;
mod trace;
pub mod util;

pub use backend::{BackendRegistry, ComputeBackend};
pub use harness::{default_workers, run, Mode, RunConfig};
pub use image::{PixelBuffer, PixelRead, PixelWrite, Rgb};
pub use kernel::{GX, GY};
pub use util::{EdgeBenchError, EdgeBenchResult};
