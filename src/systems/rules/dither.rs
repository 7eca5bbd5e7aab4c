//! DitherRule - ordered dithering of a slowly breathing tone field
//!
//! The threshold matrix is indexed in grid space so neighbouring rectangles
//! running the same rule line up at their borders.

use super::{FillContext, FillRule};
use crate::core::loop_time::{loop_sin, looping_noise_2d};

/// 8x8 Bayer matrix, values 0..64
const BAYER_8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

pub struct DitherRule;

impl DitherRule {
    pub fn new() -> Self {
        Self
    }

    /// Threshold in (0, 1) for a grid cell, with matrix cells `cell` wide.
    #[inline]
    pub fn threshold(gx: usize, gy: usize, cell: usize) -> f64 {
        let cell = cell.max(1);
        let v = BAYER_8[(gy / cell) % 8][(gx / cell) % 8];
        (v as f64 + 0.5) / 64.0
    }
}

impl FillRule for DitherRule {
    fn fill(&self, ctx: &mut FillContext) {
        let offset_x = ctx.rng.random() * 100.0;
        let offset_y = ctx.rng.random() * 100.0;
        let freq = (0.04 + ctx.rng.random() * 0.06) / ctx.params.scale.max(0.1);
        let phase = ctx.rng.random();

        let cell = (ctx.params.scale.round() as i64).max(1) as usize;
        let bias = (ctx.params.density - 0.5) * 0.6;
        let breathe = loop_sin(ctx.t + phase) * 0.1 * ctx.params.noise_amount;

        let (rx, ry) = (ctx.rect.x as usize, ctx.rect.y as usize);
        let w = ctx.width;
        for y in 0..ctx.height {
            let gy = ry + y;
            for x in 0..w {
                let gx = rx + x;
                let n = looping_noise_2d(
                    (gx as f64 + offset_x) * freq,
                    (gy as f64 + offset_y) * freq,
                    ctx.t,
                    1,
                    1.0,
                );
                let tone = (n + bias + breathe).clamp(0.0, 1.0);
                fast!(ctx.bitmap, [y * w + x] = (tone > Self::threshold(gx, gy, cell)) as u8);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_cover_the_unit_interval_evenly() {
        let mut seen = [false; 64];
        for y in 0..8 {
            for x in 0..8 {
                let th = DitherRule::threshold(x, y, 1);
                assert!(th > 0.0 && th < 1.0);
                seen[(th * 64.0) as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn cell_size_repeats_thresholds() {
        assert_eq!(DitherRule::threshold(0, 0, 3), DitherRule::threshold(2, 2, 3));
        assert_eq!(DitherRule::threshold(5, 0, 0), DitherRule::threshold(5, 0, 1));
    }
}
