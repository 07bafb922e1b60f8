//! Row-partitioned parallel strategy (feature-gated).
//!
//! The interior row range is split into contiguous, disjoint bands, one per
//! worker. Each band borrows its own `&mut` slice of the output rows while
//! the input is shared read-only, so no locking or atomics are needed; the
//! pool join is the only synchronization point. Because every output pixel
//! is a pure function of the input window, the result is byte-identical to
//! the sequential flat-buffer strategy for any worker count.

use crate::image::BYTES_PER_PIXEL;
use crate::kernel::buffer::{check_lengths, gradient_at};
use crate::util::{EdgeBenchError, EdgeBenchResult};
use rayon::prelude::*;

/// Runs the Sobel filter with interior rows partitioned across `workers`
/// threads.
///
/// The workers run on a dedicated pool sized to `workers` (clamped to at
/// least 1); the calling thread blocks until every band is complete. Same
/// buffer contract and output as [`sobel_buffer`](crate::kernel::buffer::sobel_buffer).
pub fn sobel_parallel(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
    workers: usize,
) -> EdgeBenchResult<()> {
    check_lengths(input, output, width, height)?;
    if width < 3 || height < 3 {
        return Ok(());
    }

    let workers = workers.max(1);
    let interior_rows = height - 2;
    let rows_per_band = interior_rows.div_ceil(workers);
    let stride = width * BYTES_PER_PIXEL;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|err| EdgeBenchError::WorkerPool {
            reason: err.to_string(),
        })?;

    // Rows 0 and height-1 are border; only the slice between them is
    // handed to the workers.
    let interior = &mut output[stride..stride * (height - 1)];
    pool.install(|| {
        interior
            .par_chunks_mut(rows_per_band * stride)
            .enumerate()
            .for_each(|(band_idx, band)| {
                let band_start = 1 + band_idx * rows_per_band;
                for (row_idx, row) in band.chunks_mut(stride).enumerate() {
                    let y = band_start + row_idx;
                    for x in 1..width - 1 {
                        let px = gradient_at(input, width, x, y);
                        let at = x * BYTES_PER_PIXEL;
                        row[at..at + BYTES_PER_PIXEL].copy_from_slice(&px);
                    }
                }
            })
    });

    Ok(())
}
