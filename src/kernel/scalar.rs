//! Coordinate-addressed reference strategy.
//!
//! Every sample goes through `PixelRead::get`, making this the least
//! cache-friendly strategy. It exists as the correctness baseline the
//! flat-buffer and parallel strategies are tested against, and it runs
//! against any backing store that implements the pixel-access traits.

use crate::image::{PixelRead, PixelWrite, Rgb};
use crate::kernel::{clip_magnitude, GX, GY};

/// Runs the Sobel filter through coordinate-addressed pixel access.
///
/// Writes only interior pixels of `output`; border pixels keep whatever
/// value they held before the call. `output` must have the same dimensions
/// as `input`. With no interior (width or height below 3) the call is a
/// no-op, not an error.
pub fn sobel_scalar<I, O>(input: &I, output: &mut O)
where
    I: PixelRead,
    O: PixelWrite,
{
    let width = input.width();
    let height = input.height();
    if width < 3 || height < 3 {
        return;
    }

    for x in 1..width - 1 {
        for y in 1..height - 1 {
            let mut mag_x = [0i32; 3];
            let mut mag_y = [0i32; 3];

            for h in 0..3 {
                for v in 0..3 {
                    let sample = input
                        .get(x + h - 1, y + v - 1)
                        .expect("3x3 window stays inside the image");
                    let weight_x = GX[h][v];
                    let weight_y = GY[h][v];
                    for (c, channel) in [sample.r, sample.g, sample.b].into_iter().enumerate() {
                        mag_x[c] += i32::from(channel) * weight_x;
                        mag_y[c] += i32::from(channel) * weight_y;
                    }
                }
            }

            output.set(
                x,
                y,
                Rgb {
                    r: clip_magnitude(mag_x[0], mag_y[0]),
                    g: clip_magnitude(mag_x[1], mag_y[1]),
                    b: clip_magnitude(mag_x[2], mag_y[2]),
                },
            );
        }
    }
}
