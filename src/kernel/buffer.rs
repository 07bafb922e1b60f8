//! Flat-buffer sequential strategy.
//!
//! Same arithmetic as the reference strategy, but every access is computed
//! directly as `(row * width + col) * 4` into the flat byte buffers instead
//! of going through coordinate addressing. Rows are scanned in memory
//! order.

use crate::image::{byte_len, BYTES_PER_PIXEL};
use crate::kernel::{clip_magnitude, GX, GY};
use crate::util::{EdgeBenchError, EdgeBenchResult};

/// Computes the four output bytes for the interior pixel at `(x, y)` from
/// its 3x3 input window.
#[inline]
pub(crate) fn gradient_at(input: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
    let mut mag_x = [0i32; 3];
    let mut mag_y = [0i32; 3];

    for h in 0..3 {
        for v in 0..3 {
            let at = ((y + v - 1) * width + (x + h - 1)) * BYTES_PER_PIXEL;
            let weight_x = GX[h][v];
            let weight_y = GY[h][v];
            for c in 0..3 {
                let channel = i32::from(input[at + c]);
                mag_x[c] += channel * weight_x;
                mag_y[c] += channel * weight_y;
            }
        }
    }

    [
        clip_magnitude(mag_x[0], mag_y[0]),
        clip_magnitude(mag_x[1], mag_y[1]),
        clip_magnitude(mag_x[2], mag_y[2]),
        255,
    ]
}

/// Validates that both buffers hold exactly `width * height * 4` bytes.
pub(crate) fn check_lengths(
    input: &[u8],
    output: &[u8],
    width: usize,
    height: usize,
) -> EdgeBenchResult<()> {
    let needed = byte_len(width, height)?;
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
    Ok(())
}

/// Runs the Sobel filter directly over flat RGBA byte buffers.
///
/// `input` and `output` must both be `width * height * 4` bytes; anything
/// else is rejected before the first access. Every interior pixel receives
/// its computed channels plus an alpha of 255; border bytes of `output` are
/// left untouched. Channel values are bit-identical to the reference
/// strategy for the same input.
pub fn sobel_buffer(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
) -> EdgeBenchResult<()> {
    check_lengths(input, output, width, height)?;
    if width < 3 || height < 3 {
        return Ok(());
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let px = gradient_at(input, width, x, y);
            let at = (y * width + x) * BYTES_PER_PIXEL;
            output[at..at + BYTES_PER_PIXEL].copy_from_slice(&px);
        }
    }
    Ok(())
}
