//! NoiseRule - thresholded loop-periodic value noise
//!
//! Scale remaps spatial frequency exponentially, density biases the threshold
//! and the threshold breathes with the loop phase.

use super::{FillContext, FillRule};
use crate::core::loop_time::{loop_sin, looping_noise_2d};

pub struct NoiseRule;

impl NoiseRule {
    pub fn new() -> Self {
        Self
    }

    /// scale=0.1 → ~30x finer, scale=6 → ~0.07x (huge blobs)
    #[inline]
    pub fn frequency(base: f64, scale: f64) -> f64 {
        base * scale.max(0.05).powf(-1.5)
    }
}

impl FillRule for NoiseRule {
    fn fill(&self, ctx: &mut FillContext) {
        let offset_x = ctx.rng.random() * 100.0;
        let offset_y = ctx.rng.random() * 100.0;
        let base_scale = 0.08 + ctx.rng.random() * 0.12;
        let freq = Self::frequency(base_scale, ctx.params.scale);

        let base_threshold = 0.2 + ctx.params.density * 0.6;
        let threshold = base_threshold + loop_sin(ctx.t) * 0.12 * ctx.params.noise_amount;

        let (rx, ry) = (ctx.rect.x as f64, ctx.rect.y as f64);
        let w = ctx.width;
        for y in 0..ctx.height {
            let ny = (ry + y as f64 + offset_y) * freq;
            for x in 0..w {
                let nx = (rx + x as f64 + offset_x) * freq;
                let n = looping_noise_2d(nx, ny, ctx.t, 1, 1.5);
                fast!(ctx.bitmap, [y * w + x] = (n < threshold) as u8);
            }
        }
    }
}
